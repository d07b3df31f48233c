//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The pipeline depends on these traits, not concrete implementations.

mod fetcher;
mod notifier;
mod repository;

pub use fetcher::PageFetcher;
pub use notifier::Notifier;
pub use repository::RateRepository;
