//! The extraction strategy capability and per-source chains.
//!
//! Each source family gets an explicit ordered list of strategies,
//! evaluated until one yields a non-empty result. Strategies are pure
//! over the document text and never error: malformed markup degrades to
//! an empty extraction.

use chrono::{DateTime, Local};

use rates_types::{ParserKind, RateQuote, RawQuote, SourceDocument};

use crate::normalize::normalize;
use crate::strategies::{
    CardColumns, FullTextPattern, KeyedElements, LabeledColumns, QuoteMarker, TableRows,
};

/// What one strategy pulled out of a document.
#[derive(Debug, Default)]
pub struct Extraction {
    pub quotes: Vec<RawQuote>,
    /// Source-reported observation time, when the page carries one.
    pub document_time: Option<DateTime<Local>>,
}

impl Extraction {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One way of locating currency rows/values in a document.
pub trait ExtractStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, doc: &SourceDocument, now: DateTime<Local>) -> Extraction;
}

/// The normalized outcome of parsing one document.
#[derive(Debug)]
pub struct Parsed {
    pub quotes: Vec<RateQuote>,
    /// Best-known observation time: source-reported when extracted,
    /// else the run time.
    pub observed_at: DateTime<Local>,
}

/// Ordered strategy chain for one source family.
///
/// Fallback policy: strategies run in declared order; the first
/// non-empty extraction wins and later strategies are not consulted.
pub struct SourceParser {
    strategies: Vec<Box<dyn ExtractStrategy>>,
}

impl SourceParser {
    /// Builds the chain declared for a source family.
    pub fn for_kind(kind: &ParserKind) -> Self {
        let strategies: Vec<Box<dyn ExtractStrategy>> = match kind {
            ParserKind::MoneyChanger => vec![
                Box::new(TableRows),
                Box::new(KeyedElements),
                Box::new(FullTextPattern::new()),
            ],
            ParserKind::RateBoard => vec![
                Box::new(LabeledColumns),
                Box::new(KeyedElements),
                Box::new(FullTextPattern::new()),
            ],
            ParserKind::QuotePage { marker, currency } => {
                vec![Box::new(QuoteMarker::new(marker.clone(), *currency))]
            }
            ParserKind::CardNetwork {
                rate_column,
                invert,
            } => vec![Box::new(CardColumns::new(*rate_column, *invert))],
        };
        Self { strategies }
    }

    /// Runs the chain and normalizes the winning extraction.
    ///
    /// Duplicate currencies within one extraction collapse first-wins.
    /// Zero quotes is not an error; callers report it and keep going.
    pub fn parse(&self, doc: &SourceDocument, now: DateTime<Local>) -> Parsed {
        for strategy in &self.strategies {
            let extraction = strategy.extract(doc, now);
            if extraction.quotes.is_empty() {
                tracing::debug!(
                    source = %doc.source,
                    strategy = strategy.name(),
                    "strategy yielded nothing, trying next"
                );
                continue;
            }

            let observed_at = extraction.document_time.unwrap_or(now);
            let mut quotes: Vec<RateQuote> = Vec::new();
            for raw in extraction.quotes {
                if quotes.iter().any(|q| q.currency == raw.currency) {
                    continue;
                }
                if let Some(quote) = normalize(raw, &doc.source, observed_at) {
                    quotes.push(quote);
                }
            }

            tracing::info!(
                source = %doc.source,
                strategy = strategy.name(),
                count = quotes.len(),
                "extracted rates"
            );
            return Parsed {
                quotes,
                observed_at,
            };
        }

        Parsed {
            quotes: Vec::new(),
            observed_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_types::{Currency, SourceId};

    fn doc(body: &str) -> SourceDocument {
        SourceDocument::new(SourceId::new("Test"), body)
    }

    #[test]
    fn money_changer_falls_back_through_the_chain() {
        // No tables, no keyed elements, but the full text carries a rate.
        let parser = SourceParser::for_kind(&ParserKind::MoneyChanger);
        let parsed = parser.parse(&doc("<body>Today GBP: 5.84 only</body>"), Local::now());

        assert_eq!(parsed.quotes.len(), 1);
        assert_eq!(parsed.quotes[0].currency, Currency::GBP);
        assert_eq!(parsed.quotes[0].sell_rate, 5.84);
    }

    #[test]
    fn unrecognizable_document_yields_empty_without_error() {
        for kind in [
            ParserKind::MoneyChanger,
            ParserKind::RateBoard,
            ParserKind::QuotePage {
                marker: "data-last-price".into(),
                currency: Currency::GBP,
            },
            ParserKind::CardNetwork {
                rate_column: 2,
                invert: false,
            },
        ] {
            let parser = SourceParser::for_kind(&kind);
            let parsed = parser.parse(&doc("<html><body>maintenance page</body></html>"), Local::now());
            assert!(parsed.quotes.is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn first_non_empty_strategy_wins() {
        // A valid marker-tagged table row; the full-text fallback would
        // also match but must not be consulted.
        let body = r#"
            <table><tr>
                <td>1</td><td>GBP</td><td>British Pound</td><td>1</td>
                <td class="table-green-color">5.8000</td>
                <td class="table-red-color">5.6000</td>
            </tr></table>
            <p>GBP 9.99</p>"#;
        let parser = SourceParser::for_kind(&ParserKind::MoneyChanger);
        let parsed = parser.parse(&doc(body), Local::now());

        assert_eq!(parsed.quotes.len(), 1);
        assert_eq!(parsed.quotes[0].sell_rate, 5.8);
        assert_eq!(parsed.quotes[0].buy_rate, 5.6);
    }
}
