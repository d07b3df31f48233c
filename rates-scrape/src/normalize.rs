//! Canonical-unit scaling.
//!
//! Sources publish at different denominations (per 1 unit, per 100, per
//! 1,000,000). Every raw quote is rescaled exactly once, at the parser
//! boundary, so quotes leaving [`crate::SourceParser`] are always
//! comparable across sources.

use chrono::{DateTime, Local};
use rates_types::{RateQuote, RawQuote, SourceId};

/// Rescales a raw quote into the canonical unit for its currency.
///
/// Returns `None` when the scaled values are not positive finite
/// numbers; a normalization failure drops that currency only.
pub fn normalize(
    raw: RawQuote,
    source: &SourceId,
    observed_at: DateTime<Local>,
) -> Option<RateQuote> {
    let scale = raw.currency.canonical_scale();
    let sell_rate = raw.sell * scale;
    let buy_rate = raw.buy * scale;

    if !sell_rate.is_finite() || !buy_rate.is_finite() || sell_rate <= 0.0 || buy_rate <= 0.0 {
        tracing::warn!(
            currency = %raw.currency,
            source = %source,
            sell = raw.sell,
            buy = raw.buy,
            "dropping quote with implausible value shape"
        );
        return None;
    }

    Some(RateQuote {
        currency: raw.currency,
        sell_rate,
        buy_rate,
        source: source.clone(),
        observed_at,
    })
}
