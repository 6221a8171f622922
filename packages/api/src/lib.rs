//! # API crate — outbound HTTP for the user directory
//!
//! The page makes exactly one network call: a `GET` for the initial list of
//! users. This crate owns that call so the `ui` crate only ever sees the
//! [`store::UserSource`] trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`FetchError`], the single failure kind the page can show |
//! | [`http`] | [`HttpSource`], a `reqwest`-backed [`store::UserSource`] |
//!
//! `reqwest` compiles to the browser's `fetch` on `wasm32` and to a hyper
//! client on native targets, so the same source serves the web build and the
//! host-side tests.

pub mod error;
pub mod http;

pub use error::FetchError;
pub use http::HttpSource;
