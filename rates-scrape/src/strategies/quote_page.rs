//! Finance quote page carrying a single value.
//!
//! The page publishes exactly one rate for one currency, next to a
//! fixed marker token in the raw markup (typically a class name). The
//! value is used for both directions.

use chrono::{DateTime, Local};

use rates_types::{Currency, RawQuote, SourceDocument};

use crate::html;
use crate::number::{above, first_number};
use crate::strategy::{ExtractStrategy, Extraction};

/// How much raw markup after the marker is searched for the value.
const WINDOW: usize = 300;

pub struct QuoteMarker {
    marker: String,
    currency: Currency,
}

impl QuoteMarker {
    pub fn new(marker: String, currency: Currency) -> Self {
        Self { marker, currency }
    }
}

impl ExtractStrategy for QuoteMarker {
    fn name(&self) -> &'static str {
        "quote-marker"
    }

    fn extract(&self, doc: &SourceDocument, _now: DateTime<Local>) -> Extraction {
        let mut extraction = Extraction::empty();
        let Some(at) = doc.body.find(&self.marker) else {
            return extraction;
        };
        let after = &doc.body[at + self.marker.len()..];
        let mut end = after.len().min(WINDOW);
        while !after.is_char_boundary(end) {
            end -= 1;
        }
        let window = html::text_of(&after[..end]);

        if let Some(rate) = first_number(&window, above(0.0)) {
            extraction.quotes.push(RawQuote::single(self.currency, rate));
        }
        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_types::SourceId;

    fn extract(body: &str) -> Vec<RawQuote> {
        let doc = SourceDocument::new(SourceId::new("Google Finance"), body);
        QuoteMarker::new("YMlKec fxKbKc".to_string(), Currency::GBP)
            .extract(&doc, Local::now())
            .quotes
    }

    #[test]
    fn reads_the_value_following_the_marker() {
        let body = r#"<div class="YMlKec fxKbKc">5.7321</div>"#;
        assert_eq!(extract(body), vec![RawQuote::single(Currency::GBP, 5.7321)]);
    }

    #[test]
    fn empty_when_marker_is_absent() {
        assert!(extract("<div class='other'>5.7321</div>").is_empty());
    }

    #[test]
    fn empty_when_no_number_follows() {
        assert!(extract(r#"<div class="YMlKec fxKbKc">n/a</div>"#).is_empty());
    }
}
