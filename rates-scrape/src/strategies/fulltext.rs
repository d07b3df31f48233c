//! Last-resort full-text search.
//!
//! Scans the document's visible text for "<synonym><separator><number>"
//! and accepts only values inside the plausibility window.

use chrono::{DateTime, Local};
use regex::Regex;

use rates_types::{Currency, RawQuote, SourceDocument};

use crate::html;
use crate::number::{PLAUSIBLE_HIGH, PLAUSIBLE_LOW};
use crate::strategy::{ExtractStrategy, Extraction};

pub struct FullTextPattern {
    patterns: Vec<(Currency, Regex)>,
}

impl FullTextPattern {
    pub fn new() -> Self {
        let patterns = Currency::ALL
            .into_iter()
            .map(|currency| {
                let synonyms = currency.synonyms().join("|");
                let re = Regex::new(&format!(r"(?i)(?:{synonyms})[\s:]*(\d+\.?\d*)"))
                    .expect("synonym pattern is valid");
                (currency, re)
            })
            .collect();
        Self { patterns }
    }
}

impl Default for FullTextPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractStrategy for FullTextPattern {
    fn name(&self) -> &'static str {
        "full-text-pattern"
    }

    fn extract(&self, doc: &SourceDocument, _now: DateTime<Local>) -> Extraction {
        let text = html::visible_text(&doc.body);
        let mut extraction = Extraction::empty();
        for (currency, re) in &self.patterns {
            let rate = re
                .captures_iter(&text)
                .filter_map(|caps| caps[1].parse::<f64>().ok())
                .find(|&n| n > PLAUSIBLE_LOW && n < PLAUSIBLE_HIGH);
            if let Some(rate) = rate {
                extraction.quotes.push(RawQuote::single(*currency, rate));
            }
        }
        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_types::SourceId;

    fn extract(body: &str) -> Vec<RawQuote> {
        let doc = SourceDocument::new(SourceId::new("Test"), body);
        FullTextPattern::new().extract(&doc, Local::now()).quotes
    }

    #[test]
    fn matches_synonym_and_separator_variants() {
        let body = "<p>GBP 5.85 today</p><p>EURO: 4.91</p>";
        assert_eq!(
            extract(body),
            vec![
                RawQuote::single(Currency::GBP, 5.85),
                RawQuote::single(Currency::EUR, 4.91),
            ]
        );
    }

    #[test]
    fn rejects_values_outside_the_window() {
        // Year-like and index-like digits after a synonym are noise.
        let body = "<p>POUND 2024 report</p><p>EUR 1</p>";
        assert!(extract(body).is_empty());
    }

    #[test]
    fn keeps_scanning_past_implausible_matches() {
        let body = "<p>GBP 2024 said the pound: 5.85</p>";
        assert_eq!(extract(body), vec![RawQuote::single(Currency::GBP, 5.85)]);
    }
}
