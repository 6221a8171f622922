//! # Application configuration: `directory.toml`
//!
//! Defines the TOML file the web entry point embeds at build time
//! (filename: [`DirectoryConfig::filename`] = `"directory.toml"`). It names the
//! endpoint the initial record list is fetched from and the titles the page
//! renders.
//!
//! ## Structure
//!
//! ```toml
//! [source]
//! endpoint = "https://jsonplaceholder.typicode.com/users"
//!
//! [display]
//! title = "User Directory"
//! heading = "User Data Grid"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DirectoryConfig`] | Top-level config. Provides TOML (de)serialisation and the canonical filename. |
//! | [`SourceConfig`] | Source section: the `endpoint` URL for the single GET. |
//! | [`DisplayConfig`] | Display section: navbar `title` and page `heading`. |
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Public placeholder API serving ten sample users.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Top-level configuration stored in `directory.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the initial record list comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Text rendered around the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_heading")]
    pub heading: String,
}

fn default_title() -> String {
    "User Directory".to_string()
}

fn default_heading() -> String {
    "User Data Grid".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            heading: default_heading(),
        }
    }
}

impl DirectoryConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "directory.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
