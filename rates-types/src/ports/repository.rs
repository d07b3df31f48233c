//! Repository port trait.
//!
//! Adapters (MySQL, SQLite) implement this trait. The history store is
//! append-only: one row per (source, currency, run).

use chrono::{DateTime, Local};

use crate::domain::{RateQuote, SourceId, StoredQuote};
use crate::error::RepoError;

/// The repository port for rate history.
#[async_trait::async_trait]
pub trait RateRepository: Send + Sync {
    /// Appends one run's quote set for a source. `observed_at` is the
    /// best-known timestamp: source-reported when a parser extracted
    /// one, else the run time.
    async fn save_quotes(
        &self,
        source: &SourceId,
        quotes: &[RateQuote],
        observed_at: DateTime<Local>,
    ) -> Result<(), RepoError>;

    /// Returns the newest row per (source, currency).
    async fn latest_quotes(&self) -> Result<Vec<StoredQuote>, RepoError>;
}
