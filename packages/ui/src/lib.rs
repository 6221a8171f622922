//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod source;
pub use source::make_source;

pub const DIRECTORY_CSS: Asset = asset!("/assets/styling/directory.css");

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::Sidebar;

mod status;
pub use status::{ErrorView, LoadingView};

mod user_form;
pub use user_form::{FormField, UserForm};

mod user_card;
pub use user_card::UserCard;

mod directory;
pub use directory::UserDirectory;
