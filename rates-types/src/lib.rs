//! # Rates Types
//!
//! Domain types and port traits for the exchange rate pipeline.
//! This crate has ZERO external IO dependencies - only data structures,
//! recognition rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, RateQuote, SourceSpec, RateSnapshot)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Error taxonomy shared across layers

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Currency, ParserKind, RateQuote, RateSnapshot, RawQuote, SourceDocument, SourceId, SourceSpec,
    StoredQuote,
};
pub use error::{AppError, FetchError, NotifyError, RepoError};
pub use ports::{Notifier, PageFetcher, RateRepository};
