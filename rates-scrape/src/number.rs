//! Numeric extraction from free text.
//!
//! Every strategy funnels through [`first_number`], so numeric-parsing
//! policy (what counts as a plausible rate) lives in one place.

use regex::Regex;
use std::sync::OnceLock;

/// Plausibility window for MYR cross rates, used to reject false
/// positives when extraction has no structural anchor.
pub const PLAUSIBLE_LOW: f64 = 2.0;
pub const PLAUSIBLE_HIGH: f64 = 10.0;

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.?\d*").expect("number pattern is valid"))
}

/// Returns the first decimal number in `text` satisfying `plausible`,
/// scanning left to right. Currency symbols, whitespace and surrounding
/// markup-stripped noise are tolerated; a stray index digit is rejected
/// by the predicate, not by the scan.
pub fn first_number(text: &str, plausible: impl Fn(f64) -> bool) -> Option<f64> {
    number_re()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .find(|&n| plausible(n))
}

/// Predicate: strictly greater than `floor`.
pub fn above(floor: f64) -> impl Fn(f64) -> bool {
    move |n| n > floor
}

/// Predicate: strictly inside `(low, high)`.
pub fn within(low: f64, high: f64) -> impl Fn(f64) -> bool {
    move |n| n > low && n < high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_plausible_match() {
        assert_eq!(first_number("RM 5.8350", above(1.0)), Some(5.835));
        // The leading "1" fails the predicate, the rate does not.
        assert_eq!(first_number("1 GBP = 5.84", within(2.0, 10.0)), Some(5.84));
    }

    #[test]
    fn tolerates_symbols_and_whitespace() {
        assert_eq!(first_number("  £ : 5.62  ", above(1.0)), Some(5.62));
        assert_eq!(first_number("5", above(1.0)), Some(5.0));
    }

    #[test]
    fn none_when_nothing_plausible() {
        assert_eq!(first_number("no digits here", above(0.0)), None);
        assert_eq!(first_number("0.0042", above(1.0)), None);
        assert_eq!(first_number("150.00", within(2.0, 10.0)), None);
    }
}
