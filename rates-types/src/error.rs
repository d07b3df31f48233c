//! Error taxonomy for the exchange rate pipeline.
//!
//! Per-source failures (fetch, parse, persistence) are recovered inside
//! the run; only configuration problems and a run that obtains zero
//! rates surface as `AppError`.

/// Document fetch failures. Recovered per source: the source simply
/// contributes no document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Request blocked by the source (403)")]
    Blocked,

    #[error("Request timed out")]
    Timeout,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Notification channel failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Notification API rejected the message: {0}")]
    Api(String),
}

/// Application-level errors: the only failures that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No rates were obtained from any source")]
    NoRatesObtained,

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}
