//! Money-changer table layout.
//!
//! Typical row shape: [flag, code, name, unit, We Sell, We Buy] where
//! the sell cell is class-tagged `table-green-color` and the buy cell
//! `table-red-color`. When the style markers are absent the columns are
//! read by fixed offset, guarded by the plausibility window.

use chrono::{DateTime, Local};

use rates_types::{Currency, RawQuote, SourceDocument};

use crate::html;
use crate::number::{above, first_number, within, PLAUSIBLE_HIGH, PLAUSIBLE_LOW};
use crate::strategy::{ExtractStrategy, Extraction};

const SELL_MARKER: &str = "table-green-color";
const BUY_MARKER: &str = "table-red-color";
const SELL_OFFSET: usize = 4;
const BUY_OFFSET: usize = 5;

pub struct TableRows;

impl TableRows {
    fn parse_row(cells: &[html::Cell]) -> Option<RawQuote> {
        if cells.len() < 4 {
            return None;
        }
        // Currency identifier sits in the first or second column.
        let currency = cells.iter().take(2).find_map(|c| Currency::identify(&c.text))?;

        // Marker-based: both sell and buy cells must resolve.
        let mut sell = None;
        let mut buy = None;
        for cell in cells {
            if cell.class.contains(SELL_MARKER) {
                sell = sell.or_else(|| first_number(&cell.text, above(1.0)));
            } else if cell.class.contains(BUY_MARKER) {
                buy = buy.or_else(|| first_number(&cell.text, above(1.0)));
            }
        }
        if let (Some(sell), Some(buy)) = (sell, buy) {
            return Some(RawQuote::new(currency, sell, buy));
        }

        // Offset fallback, valid only inside the plausibility window.
        if cells.len() > BUY_OFFSET {
            let sell = first_number(&cells[SELL_OFFSET].text, within(PLAUSIBLE_LOW, PLAUSIBLE_HIGH));
            let buy = first_number(&cells[BUY_OFFSET].text, within(PLAUSIBLE_LOW, PLAUSIBLE_HIGH));
            if let (Some(sell), Some(buy)) = (sell, buy) {
                return Some(RawQuote::new(currency, sell, buy));
            }
        }
        None
    }
}

impl ExtractStrategy for TableRows {
    fn name(&self) -> &'static str {
        "table-rows"
    }

    fn extract(&self, doc: &SourceDocument, _now: DateTime<Local>) -> Extraction {
        let mut extraction = Extraction::empty();
        for table in html::tables(&doc.body) {
            for row in html::rows(table) {
                if let Some(quote) = Self::parse_row(&html::cells(row)) {
                    extraction.quotes.push(quote);
                }
            }
        }
        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_types::SourceId;

    fn doc(body: &str) -> SourceDocument {
        SourceDocument::new(SourceId::new("Bukit Bintang"), body)
    }

    fn extract(body: &str) -> Vec<RawQuote> {
        TableRows.extract(&doc(body), Local::now()).quotes
    }

    #[test]
    fn marker_tagged_row_yields_exactly_one_quote() {
        let body = r#"<table>
            <tr><th>Flag</th><th>Code</th><th>Name</th><th>Unit</th><th>We Sell</th><th>We Buy</th></tr>
            <tr>
                <td><img src="gb.png"></td><td>GBP</td><td>British Pound</td><td>1</td>
                <td class="table-green-color">5.8000</td>
                <td class="table-red-color">5.6000</td>
            </tr>
        </table>"#;
        let quotes = extract(body);
        assert_eq!(
            quotes,
            vec![RawQuote::new(Currency::GBP, 5.8, 5.6)]
        );
    }

    #[test]
    fn both_markers_required() {
        // Sell marker present, buy marker missing, row too short for the
        // offset fallback: rejected.
        let body = r#"<table><tr>
            <td>x</td><td>EURO</td><td>Euro</td><td>1</td>
            <td class="table-green-color">4.9</td>
        </tr></table>"#;
        assert!(extract(body).is_empty());
    }

    #[test]
    fn offset_fallback_with_plausibility_check() {
        let body = r#"<table><tr>
            <td>x</td><td>EUR</td><td>Euro</td><td>1</td><td>4.9500</td><td>4.7500</td>
        </tr></table>"#;
        assert_eq!(extract(body), vec![RawQuote::new(Currency::EUR, 4.95, 4.75)]);
    }

    #[test]
    fn offset_fallback_rejects_implausible_values() {
        // 150.0 falls outside (2.0, 10.0): stray index digits, not rates.
        let body = r#"<table><tr>
            <td>x</td><td>GBP</td><td>Pound</td><td>1</td><td>150.0</td><td>140.0</td>
        </tr></table>"#;
        assert!(extract(body).is_empty());
    }

    #[test]
    fn short_rows_and_unknown_currencies_are_skipped() {
        let body = r#"<table>
            <tr><td>GBP</td><td>5.8</td></tr>
            <tr><td>x</td><td>JPY</td><td>Yen</td><td>100</td><td>3.1</td><td>3.0</td></tr>
        </table>"#;
        assert!(extract(body).is_empty());
    }

    #[test]
    fn currency_may_sit_in_first_column() {
        let body = r#"<table><tr>
            <td>STERLING</td><td>note</td><td>n</td><td>1</td>
            <td class="table-green-color">5.81</td>
            <td class="table-red-color">5.61</td>
        </tr></table>"#;
        assert_eq!(extract(body), vec![RawQuote::new(Currency::GBP, 5.81, 5.61)]);
    }
}
