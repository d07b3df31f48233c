//! Source identity and per-source parser configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Currency;

/// Stable identifier for a rate provider (a named money changer, card
/// network, or quote service). Used as the persistence key and the
/// notification heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which extraction strategy chain applies to a source's documents.
///
/// Strategy parameters that vary per provider (marker tokens, column
/// offsets, reciprocal convention) live here so they are declared
/// configuration, not inferred logic.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserKind {
    /// Money-changer table layout: marker-tagged sell/buy cells with a
    /// column-offset fallback, then keyed elements, then full-text search.
    MoneyChanger,
    /// Rate board with explicit "We Buy"/"We Sell" headers and a per-row
    /// timestamp column.
    RateBoard,
    /// Finance quote page carrying exactly one rate next to a fixed
    /// marker token in the raw markup.
    QuotePage { marker: String, currency: Currency },
    /// Card-network table: one published rate per row, read from a fixed
    /// column and used for both directions. `invert` is a documented
    /// per-source constant for providers that publish the reciprocal
    /// convention; it is never inferred from the values.
    CardNetwork { rate_column: usize, invert: bool },
}

/// A configured rate provider: identity, where to fetch, how to parse,
/// and whether it renders ahead of the merchant sources.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub id: SourceId,
    pub url: String,
    pub kind: ParserKind,
    pub priority: bool,
}

impl SourceSpec {
    pub fn new(name: &str, url: &str, kind: ParserKind) -> Self {
        Self {
            id: SourceId::new(name),
            url: url.to_string(),
            kind,
            priority: false,
        }
    }

    pub fn priority(name: &str, url: &str, kind: ParserKind) -> Self {
        Self {
            priority: true,
            ..Self::new(name, url, kind)
        }
    }
}

/// Fetched content plus where it came from. Owned transiently by one
/// pipeline run, never persisted.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub source: SourceId,
    pub body: String,
}

impl SourceDocument {
    pub fn new(source: SourceId, body: impl Into<String>) -> Self {
        Self {
            source,
            body: body.into(),
        }
    }
}
