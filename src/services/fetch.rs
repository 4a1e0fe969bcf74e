//! Outbound HTTP GET used by the github route.

use anyhow::{Context, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

const USER_AGENT: &str = concat!("funserver/", env!("CARGO_PKG_VERSION"));

pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the body text.
    ///
    /// Any failure, including running past `deadline`, yields an empty string.
    fn get(&self, url: &str, deadline: Duration) -> impl Future<Output = String> + Send;
}

/// Fetches over HTTP(S) with a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// One deadline covers connecting, the response head and the body.
    async fn fetch(&self, url: &str, deadline: Duration) -> Result<String> {
        let request = async {
            self.client
                .get(url)
                .send()
                .await
                .context("Request failed")?
                .error_for_status()
                .context("Upstream returned an error status")?
                .text()
                .await
                .context("Failed to read body")
        };

        timeout(deadline, request).await.context("Request timeout")?
    }
}

impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str, deadline: Duration) -> String {
        match self.fetch(url, deadline).await {
            Ok(body) => {
                tracing::debug!(url = %url, bytes = body.len(), "Fetched URL");
                body
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %format!("{e:#}"), "Exception in url request");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one response with the head and the body sent after separate delays.
    async fn slow_upstream(head_delay: Duration, body_delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;

            tokio::time::sleep(head_delay).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\n")
                .await;
            let _ = socket.flush().await;

            tokio::time::sleep(body_delay).await;
            let _ = socket.write_all(b"[]").await;
            let _ = socket.flush().await;
        });

        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn deadline_covers_head_and_body_together() {
        let url = slow_upstream(Duration::from_millis(300), Duration::from_millis(300)).await;
        let fetcher = HttpFetcher::new().unwrap();

        let started = Instant::now();
        let body = fetcher.get(&url, Duration::from_millis(450)).await;

        assert_eq!(body, "");
        assert!(started.elapsed() < Duration::from_millis(590));
    }

    #[tokio::test]
    async fn fast_upstream_returns_body() {
        let url = slow_upstream(Duration::ZERO, Duration::ZERO).await;
        let fetcher = HttpFetcher::new().unwrap();

        assert_eq!(fetcher.get(&url, Duration::from_secs(5)).await, "[]");
    }
}
