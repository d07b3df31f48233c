//! # Rates Scrape
//!
//! The extraction core: given an arbitrary, inconsistently structured
//! HTML/text document from a provider, pull out a small set of currency
//! rates and rescale them into canonical units.
//!
//! ## Architecture
//!
//! - `number` - the single point of numeric-parsing policy
//! - `html` - tolerant, scanning HTML helpers (no DOM, no tree crate)
//! - `strategies/` - one extraction strategy per page shape
//! - `strategy` - the `ExtractStrategy` trait and per-source chains
//! - `normalize` - canonical-unit scaling at the parser boundary
//!
//! Strategies never return errors: malformed markup degrades to an
//! empty result set, and a document yielding zero quotes is reported,
//! not raised.

pub mod html;
pub mod normalize;
pub mod number;
pub mod strategies;
pub mod strategy;

pub use strategy::{ExtractStrategy, Extraction, Parsed, SourceParser};
