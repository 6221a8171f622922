//! Shared source constructor for the directory page.
//!
//! Returns the [`store::UserSource`] the page loads its initial list from. On
//! every platform this is the HTTP source from the `api` crate pointed at the
//! configured endpoint.

use store::config::SourceConfig;

/// Create the source for the configured endpoint.
pub fn make_source(config: &SourceConfig) -> impl store::UserSource {
    api::HttpSource::from_config(config)
}
