//! # Record sources and load state
//!
//! [`UserSource`] is the seam between the page and wherever the initial list
//! comes from. The web build plugs in the HTTP implementation from the `api`
//! crate; the tests in this crate use an in-memory source.
//!
//! A source is asked exactly once per page lifetime. Its result is folded into
//! the [`crate::Directory`] by [`crate::Directory::finish_load`], which yields
//! the [`LoadState`] the page renders from.

use std::fmt::Display;

use crate::models::UserRecord;

/// Async trait for producing the initial record list.
pub trait UserSource {
    /// Failure text is all the page ever shows, so only `Display` is required.
    type Error: Display;

    fn fetch_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, Self::Error>>;
}

/// Tri-state flag driving the loading / error / grid views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    /// Carries the display text of the underlying failure.
    Failed(String),
    Ready,
}
