//! HTTP page fetcher.
//!
//! Primary path is a plain GET with a browser-like header set; merchant
//! sites answer 403 to obvious bots. When a render service URL is
//! configured, a failed primary fetch escalates to it (the pages that
//! need JavaScript go through there). The pipeline never sees which
//! path produced the document.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

use rates_types::{FetchError, PageFetcher};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
/// Polite delay before each request; these are small merchant sites.
const FETCH_DELAY: Duration = Duration::from_secs(2);

const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct ReqwestFetcher {
    client: reqwest::Client,
    render_url: Option<String>,
}

impl ReqwestFetcher {
    /// Builds the fetcher; `render_url` is the optional escalation
    /// endpoint, called as `{render_url}?url={target}`.
    pub fn new(render_url: Option<String>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_UA));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(Self { client, render_url })
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(FetchError::Blocked);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| FetchError::Http(e.to_string()))
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tokio::time::sleep(FETCH_DELAY).await;

        match self.get(url).await {
            Ok(body) => Ok(body),
            Err(e) => {
                let Some(render_url) = &self.render_url else {
                    return Err(e);
                };
                tracing::warn!(url, error = %e, "plain fetch failed, trying render service");
                self.get(&format!("{render_url}?url={url}")).await
            }
        }
    }
}
