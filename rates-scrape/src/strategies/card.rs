//! Card-network rate tables.
//!
//! One published rate per row, read from a fixed column and emitted as
//! both buy and sell. Some networks publish the rate in the opposite
//! direction from the canonical convention; for those sources `invert`
//! is set in the declared source table and the reciprocal is taken.

use chrono::{DateTime, Local};

use rates_types::{Currency, RawQuote, SourceDocument};

use crate::html;
use crate::number::{above, first_number};
use crate::strategy::{ExtractStrategy, Extraction};

pub struct CardColumns {
    rate_column: usize,
    invert: bool,
}

impl CardColumns {
    pub fn new(rate_column: usize, invert: bool) -> Self {
        Self {
            rate_column,
            invert,
        }
    }
}

impl ExtractStrategy for CardColumns {
    fn name(&self) -> &'static str {
        "card-columns"
    }

    fn extract(&self, doc: &SourceDocument, _now: DateTime<Local>) -> Extraction {
        let mut extraction = Extraction::empty();
        for table in html::tables(&doc.body) {
            for row in html::rows(table) {
                let cells = html::cells(row);
                let Some(currency) =
                    cells.iter().take(2).find_map(|c| Currency::identify(&c.text))
                else {
                    continue;
                };
                let Some(raw) = cells
                    .get(self.rate_column)
                    .and_then(|c| first_number(&c.text, above(0.0)))
                else {
                    continue;
                };
                let rate = if self.invert { 1.0 / raw } else { raw };
                extraction.quotes.push(RawQuote::single(currency, rate));
            }
        }
        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_types::SourceId;

    fn extract(body: &str, invert: bool) -> Vec<RawQuote> {
        let doc = SourceDocument::new(SourceId::new("Visa"), body);
        CardColumns::new(2, invert).extract(&doc, Local::now()).quotes
    }

    #[test]
    fn one_rate_per_row_used_for_both_sides() {
        let body = r#"<table>
            <tr><td>GBP</td><td>British Pound</td><td>5.7834</td></tr>
            <tr><td>EUR</td><td>Euro</td><td>4.9123</td></tr>
        </table>"#;
        assert_eq!(
            extract(body, false),
            vec![
                RawQuote::single(Currency::GBP, 5.7834),
                RawQuote::single(Currency::EUR, 4.9123),
            ]
        );
    }

    #[test]
    fn reciprocal_applied_when_declared() {
        let body = r#"<table><tr><td>GBP</td><td>x</td><td>0.25</td></tr></table>"#;
        let quotes = extract(body, true);
        assert_eq!(quotes, vec![RawQuote::single(Currency::GBP, 4.0)]);
    }

    #[test]
    fn rows_without_the_rate_column_are_skipped() {
        let body = r#"<table><tr><td>GBP</td><td>only two cells</td></tr></table>"#;
        assert!(extract(body, false).is_empty());
    }
}
