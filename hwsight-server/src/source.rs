//! Fetching the raw sensor tree.

use std::future::Future;
use std::time::Duration;

use hwsight_core::{SensorTree, SourceError, parse_tree};
use tracing::debug;

/// Something that can produce a fresh sensor tree on demand.
pub trait SensorSource: Send + Sync + 'static {
    /// Fetch and decode one sensor tree.
    fn fetch(&self) -> impl Future<Output = Result<SensorTree, SourceError>> + Send;

    /// Where the tree comes from, for logs.
    fn describe(&self) -> String;
}

/// Libre Hardware Monitor remote web server (`/data.json`).
///
/// One GET per fetch, bounded by the client timeout. No retries.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpSource {
    /// Create a source with the given request timeout.
    pub fn new(url: reqwest::Url, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

impl SensorSource for HttpSource {
    async fn fetch(&self) -> Result<SensorTree, SourceError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| SourceError::unavailable(error_chain(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::malformed(format!(
                "{} answered with HTTP {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::unavailable(error_chain(e)))?;

        debug!(url = %self.url, bytes = body.len(), "Fetched sensor tree");

        parse_tree(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Render an error with its source chain, e.g.
/// `error sending request for url (...): connection refused`.
fn error_chain<E>(error: E) -> String
where
    E: std::error::Error + Send + Sync + 'static,
{
    format!("{:#}", anyhow::Error::new(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_error_chain_includes_causes() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        let message = error_chain(err);
        assert_eq!(message, "error sending request: connection refused");
    }

    #[test]
    fn test_error_chain_without_source() {
        let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        assert_eq!(error_chain(err), "timed out");
    }

    #[test]
    fn test_describe_is_url() {
        let url = reqwest::Url::parse("http://192.168.2.60:8085/data.json").unwrap();
        let source = HttpSource::new(url, Duration::from_secs(5)).unwrap();
        assert_eq!(source.describe(), "http://192.168.2.60:8085/data.json");
        assert_eq!(source.url().port(), Some(8085));
    }
}
