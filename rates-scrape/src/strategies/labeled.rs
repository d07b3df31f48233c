//! Rate board with explicit "We Buy"/"We Sell" column headers and a
//! trailing per-row timestamp column ("at 03:07 PM").
//!
//! The sell column is located by header text; when the header is
//! missing the strategy falls back to scanning every column for a
//! plausible rate. The first parseable row timestamp becomes the
//! document's observation time, anchored to the run's current date.

use chrono::{DateTime, Local, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

use rates_types::{Currency, RawQuote, SourceDocument};

use crate::html;
use crate::number::{above, first_number, within, PLAUSIBLE_HIGH, PLAUSIBLE_LOW};
use crate::strategy::{ExtractStrategy, Extraction};

const SELL_HEADER: &str = "WE SELL";
const BUY_HEADER: &str = "WE BUY";

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)at\s+(\d{1,2}:\d{2})\s*([AP]M)").expect("time pattern is valid")
    })
}

/// Parses "at 03:07 PM" against the run's current date.
fn row_time(text: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let caps = time_re().captures(text)?;
    let stamp = format!("{} {}", &caps[1], caps[2].to_uppercase());
    let time = NaiveTime::parse_from_str(&stamp, "%I:%M %p").ok()?;
    now.with_time(time).single()
}

pub struct LabeledColumns;

impl ExtractStrategy for LabeledColumns {
    fn name(&self) -> &'static str {
        "labeled-columns"
    }

    fn extract(&self, doc: &SourceDocument, now: DateTime<Local>) -> Extraction {
        let mut extraction = Extraction::empty();

        for table in html::tables(&doc.body) {
            let rows = html::rows(table);
            let header = rows.iter().map(|r| html::cells(r)).find(|cells| {
                cells.iter().any(|c| c.text.to_uppercase().contains(SELL_HEADER))
            });
            let sell_col = header.as_ref().and_then(|cells| {
                cells.iter().position(|c| c.text.to_uppercase().contains(SELL_HEADER))
            });
            let buy_col = header.as_ref().and_then(|cells| {
                cells.iter().position(|c| c.text.to_uppercase().contains(BUY_HEADER))
            });

            for row in &rows {
                let cells = html::cells(row);
                let Some(currency) = cells.iter().take(2).find_map(|c| Currency::identify(&c.text))
                else {
                    continue;
                };

                // First parseable row timestamp wins for the document.
                if extraction.document_time.is_none() {
                    let row_text = cells.iter().map(|c| c.text.as_str()).collect::<Vec<_>>().join(" ");
                    extraction.document_time = row_time(&row_text, now);
                }

                let sell = match sell_col {
                    Some(col) => cells.get(col).and_then(|c| first_number(&c.text, above(1.0))),
                    None => cells
                        .iter()
                        .skip(1)
                        .find_map(|c| first_number(&c.text, within(PLAUSIBLE_LOW, PLAUSIBLE_HIGH))),
                };
                let Some(sell) = sell else { continue };

                let buy = buy_col
                    .and_then(|col| cells.get(col))
                    .and_then(|c| first_number(&c.text, above(1.0)))
                    .unwrap_or(sell);

                extraction.quotes.push(RawQuote::new(currency, sell, buy));
            }
        }

        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rates_types::SourceId;

    fn doc(body: &str) -> SourceDocument {
        SourceDocument::new(SourceId::new("MV Forex"), body)
    }

    #[test]
    fn reads_sell_and_buy_columns_by_header() {
        let body = r#"<table>
            <tr><th>Currency</th><th>Unit</th><th>We Buy</th><th>We Sell</th><th>Updated</th></tr>
            <tr><td>GBP</td><td>1</td><td>5.6000</td><td>5.8000</td><td>at 03:07 PM</td></tr>
            <tr><td>EURO</td><td>1</td><td>4.7500</td><td>4.9500</td><td>at 03:07 PM</td></tr>
        </table>"#;
        let extraction = LabeledColumns.extract(&doc(body), Local::now());

        assert_eq!(
            extraction.quotes,
            vec![
                RawQuote::new(Currency::GBP, 5.8, 5.6),
                RawQuote::new(Currency::EUR, 4.95, 4.75),
            ]
        );
    }

    #[test]
    fn row_timestamp_becomes_document_time() {
        let body = r#"<table>
            <tr><th>Currency</th><th>We Sell</th><th>Updated</th></tr>
            <tr><td>GBP</td><td>5.8</td><td>at 03:07 PM</td></tr>
            <tr><td>EUR</td><td>4.9</td><td>at 04:30 PM</td></tr>
        </table>"#;
        let now = Local::now();
        let extraction = LabeledColumns.extract(&doc(body), now);

        let ts = extraction.document_time.expect("timestamp extracted");
        assert_eq!(ts.hour(), 15);
        assert_eq!(ts.minute(), 7);
        assert_eq!(ts.date_naive(), now.date_naive());
    }

    #[test]
    fn missing_header_falls_back_to_column_scan() {
        let body = r#"<table>
            <tr><td>POUND</td><td>unit 1</td><td>5.842</td></tr>
        </table>"#;
        let extraction = LabeledColumns.extract(&doc(body), Local::now());

        assert_eq!(extraction.quotes, vec![RawQuote::new(Currency::GBP, 5.842, 5.842)]);
        assert!(extraction.document_time.is_none());
    }

    #[test]
    fn morning_times_parse_as_am() {
        let ts = row_time("at 9:05 am", Local::now()).expect("parses");
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.minute(), 5);
    }
}
