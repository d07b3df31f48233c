//! Keyed-element fallback for WordPress/custom layouts.
//!
//! When no table matches, elements whose class names look rate-related
//! are scanned for currency synonyms; one number per currency, first
//! match wins.

use chrono::{DateTime, Local};

use rates_types::{Currency, RawQuote, SourceDocument};

use crate::html;
use crate::number::{above, first_number};
use crate::strategy::{ExtractStrategy, Extraction};

const CLASS_KEYWORDS: [&str; 6] = ["rate", "price", "currency", "exchange", "forex", "money"];

pub struct KeyedElements;

impl ExtractStrategy for KeyedElements {
    fn name(&self) -> &'static str {
        "keyed-elements"
    }

    fn extract(&self, doc: &SourceDocument, _now: DateTime<Local>) -> Extraction {
        let mut extraction = Extraction::empty();
        for text in html::elements_with_class(&doc.body, &CLASS_KEYWORDS) {
            let upper = text.to_uppercase();
            for currency in Currency::ALL {
                if extraction.quotes.iter().any(|q| q.currency == currency) {
                    continue;
                }
                if currency.matches(&upper) {
                    if let Some(rate) = first_number(&text, above(1.0)) {
                        extraction.quotes.push(RawQuote::single(currency, rate));
                    }
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

    fn extract(body: &str) -> Vec<RawQuote> {
        let doc = SourceDocument::new(SourceId::new("Test"), body);
        KeyedElements.extract(&doc, Local::now()).quotes
    }

    #[test]
    fn finds_rates_in_class_keyed_elements() {
        let body = r#"
            <div class="header">GBP news</div>
            <div class="exchange-rate">British Pound 5.84</div>
            <span class="forex-price">Euro: 4.92</span>"#;
        assert_eq!(
            extract(body),
            vec![
                RawQuote::single(Currency::GBP, 5.84),
                RawQuote::single(Currency::EUR, 4.92),
            ]
        );
    }

    #[test]
    fn first_match_per_currency_wins() {
        let body = r#"
            <div class="rate">GBP 5.84</div>
            <div class="rate">GBP 9.99</div>"#;
        assert_eq!(extract(body), vec![RawQuote::single(Currency::GBP, 5.84)]);
    }

    #[test]
    fn ignores_elements_without_rate_like_classes() {
        let body = r#"<div class="nav">GBP 5.84</div>"#;
        assert!(extract(body).is_empty());
    }
}
