pub mod config;
pub mod directory;
pub mod list;
pub mod models;
pub mod source;

#[cfg(test)]
mod memory;

pub use config::DirectoryConfig;
pub use directory::{Directory, FormMode, FormState, SubmitOutcome};
pub use list::UserList;
pub use models::{Draft, Field, UserRecord};
pub use source::{LoadState, UserSource};
