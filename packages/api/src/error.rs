use thiserror::Error;

/// Anything that stops the initial list from loading.
///
/// The page shows only the display text, so transport failures, non-2xx
/// statuses and malformed bodies all end up in [`FetchError::Request`].
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
