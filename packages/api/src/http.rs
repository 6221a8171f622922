//! `reqwest`-backed user source.
//!
//! One `GET` to the configured endpoint, no query parameters, headers, or
//! auth. Single attempt: no retry, no timeout beyond the platform default.

use reqwest::{Client, Url};
use store::config::SourceConfig;
use store::{UserRecord, UserSource};

use crate::error::FetchError;

/// Fetches the initial record list over HTTP.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    /// Parse the endpoint, accepting only absolute http(s) URLs.
    fn url(&self) -> Result<Url, FetchError> {
        let invalid = |reason: String| FetchError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };
        let url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme `{other}`"))),
        }
    }
}

impl UserSource for HttpSource {
    type Error = FetchError;

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let url = self.url()?;
        tracing::debug!("GET {}", url);

        let users = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<UserRecord>>()
            .await?;

        tracing::debug!("Fetched {} users", users.len());
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use store::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_from_config_uses_endpoint() {
        let source = HttpSource::from_config(&SourceConfig::default());
        assert_eq!(source.url().unwrap().as_str(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_relative_endpoint_fails_before_request() {
        let source = HttpSource::new("users");

        let err = source.fetch_users().await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidEndpoint { .. }));
        assert!(err.to_string().starts_with("invalid endpoint `users`"));
    }

    #[tokio::test]
    async fn test_non_http_scheme_is_rejected() {
        let source = HttpSource::new("file:///etc/passwd");

        let err = source.fetch_users().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid endpoint `file:///etc/passwd`: unsupported scheme `file`"
        );
    }

    /// Two elements in the shape the default endpoint returns.
    const PLACEHOLDER_BODY: &str = r#"[
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net"
        }
    ]"#;

    #[tokio::test]
    async fn test_fetch_users_decodes_array() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(PLACEHOLDER_BODY);
            })
            .await;

        let source = HttpSource::new(server.url("/users"));
        let users = source.fetch_users().await.unwrap();

        mock.assert_async().await;
        assert_eq!(users.len(), 2);
        assert_eq!(
            users[0],
            UserRecord {
                id: 1,
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                phone: "1-770-736-8031 x56442".to_string(),
                website: "hildegard.org".to_string(),
            }
        );
        assert_eq!(users[1].name, "Ervin Howell");
    }

    #[tokio::test]
    async fn test_server_error_status_is_request_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(500).body(PLACEHOLDER_BODY);
            })
            .await;

        let source = HttpSource::new(server.url("/users"));
        let err = source.fetch_users().await.unwrap_err();

        mock.assert_async().await;
        match err {
            FetchError::Request(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(500)),
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_array_body_is_request_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(200)
                    .header("content-type", "application/json")
                    .body("{}");
            })
            .await;

        let source = HttpSource::new(server.url("/users"));
        let err = source.fetch_users().await.unwrap_err();

        mock.assert_async().await;
        match err {
            FetchError::Request(e) => assert!(e.is_decode()),
            other => panic!("expected request error, got {other:?}"),
        }
    }
}
