//! Notification channel port.

use crate::error::NotifyError;

/// Port trait for publishing the formatted summary.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, text: &str) -> Result<(), NotifyError>;
}
