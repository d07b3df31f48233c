//! # Rates Pipeline
//!
//! Application service layer for the exchange rate bot.
//!
//! ## Architecture
//!
//! - `service/` - the per-run aggregator (fetch → parse → normalize → record)
//! - `format/` - pure snapshot-to-text presentation
//! - `outbound/` - HTTP adapters (page fetcher, Telegram notifier)
//!
//! The service is generic over the three ports (`PageFetcher`,
//! `RateRepository`, `Notifier`), allowing different adapters to be
//! injected.

pub mod format;
pub mod outbound;
pub mod service;


pub use service::RateService;
