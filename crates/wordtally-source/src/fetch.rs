//! Page retrieval.
//!
//! `HttpSource` downloads a live page; `FileSource` reads a saved copy
//! so the tool also works offline.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{SourceError, SourceResult};

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` header sent with requests.
pub const DEFAULT_USER_AGENT: &str = concat!("wordtally/", env!("CARGO_PKG_VERSION"));

/// Something that can produce the raw body of a page.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `location` as text.
    async fn fetch(&self, location: &str) -> SourceResult<String>;
}

/// Fetches pages over HTTP(S).
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with the given timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, location: &str) -> SourceResult<String> {
        let fetch_error = |source| SourceError::Fetch {
            url: location.to_string(),
            source,
        };

        debug!(url = location, "Requesting page");
        let response = self.client.get(location).send().await.map_err(fetch_error)?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: location.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(fetch_error)?;
        info!(url = location, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

/// Reads a saved page from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

#[async_trait]
impl PageSource for FileSource {
    async fn fetch(&self, location: &str) -> SourceResult<String> {
        let body = tokio::fs::read_to_string(location)
            .await
            .map_err(|source| SourceError::Io {
                path: location.to_string(),
                source,
            })?;
        info!(path = location, bytes = body.len(), "Read page from file");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_page() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>saved</html>").unwrap();

        let body = FileSource
            .fetch(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(body, "<html>saved</html>");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.html");

        let err = FileSource
            .fetch(missing.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[tokio::test]
    async fn test_http_source_unreachable_host() {
        let source = HttpSource::new(Duration::from_secs(2), DEFAULT_USER_AGENT).unwrap();
        let err = source.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, SourceError::Fetch { .. }));
    }

    /// Serve a single HTTP response on a local port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{addr}/wiki/Page")
    }

    #[tokio::test]
    async fn test_http_source_error_status() {
        let url = serve_once("404 Not Found", "missing").await;
        let source = HttpSource::new(Duration::from_secs(5), DEFAULT_USER_AGENT).unwrap();

        let err = source.fetch(&url).await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 404, .. }));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_http_source_returns_body() {
        let url = serve_once("200 OK", "<html><h2>History</h2></html>").await;
        let source = HttpSource::new(Duration::from_secs(5), DEFAULT_USER_AGENT).unwrap();

        let body = source.fetch(&url).await.unwrap();
        assert_eq!(body, "<html><h2>History</h2></html>");
    }

    #[test]
    fn test_default_user_agent() {
        assert!(DEFAULT_USER_AGENT.starts_with("wordtally/"));
    }
}
