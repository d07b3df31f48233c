//! Rate quote records, raw and normalized.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{Currency, SourceId};

/// A quote as a strategy extracted it, before canonical-unit scaling.
///
/// One-sided sources (card networks, quote pages) duplicate the single
/// published value into both sides; that is a deliberate simplification,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawQuote {
    pub currency: Currency,
    pub sell: f64,
    pub buy: f64,
}

impl RawQuote {
    pub fn new(currency: Currency, sell: f64, buy: f64) -> Self {
        Self {
            currency,
            sell,
            buy,
        }
    }

    /// A quote where the source publishes one rate for both directions.
    pub fn single(currency: Currency, rate: f64) -> Self {
        Self::new(currency, rate, rate)
    }
}

/// A normalized quote: both sides expressed in the canonical unit for
/// the currency, with provenance and an observation timestamp.
///
/// Created by a source parser from one document, consumed immediately by
/// persistence and formatting, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub currency: Currency,
    pub sell_rate: f64,
    pub buy_rate: f64,
    pub source: SourceId,
    pub observed_at: DateTime<Local>,
}

/// A persisted quote row as read back from the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredQuote {
    pub source: SourceId,
    pub currency: Currency,
    pub sell_rate: f64,
    pub buy_rate: f64,
    pub observed_at: NaiveDateTime,
    pub recorded_at: NaiveDateTime,
}
