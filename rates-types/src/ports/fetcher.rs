//! Document fetch port.

use crate::error::FetchError;

/// Port trait for obtaining a source's raw document.
///
/// Implementations may escalate internally (plain HTTP first, a heavier
/// rendering service on failure); the pipeline only sees a text/markup
/// blob or a failure.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
