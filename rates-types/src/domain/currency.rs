//! Currency recognition rules and canonical-unit conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies tracked by the pipeline, quoted against MYR.
///
/// Adding a currency means adding a variant here plus its entries in
/// [`Currency::synonyms`], [`Currency::canonical_scale`] and
/// [`Currency::unit_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    GBP,
    EUR,
    IDR,
    TRY,
}

impl Currency {
    /// Fixed display order, used by the formatter regardless of
    /// extraction order.
    pub const ALL: [Currency; 4] = [Currency::GBP, Currency::EUR, Currency::IDR, Currency::TRY];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::IDR => "IDR",
            Currency::TRY => "TRY",
        }
    }

    /// Uppercase tokens that identify this currency in source text.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Currency::GBP => &["GBP", "POUND", "STERLING", "BRITAIN"],
            Currency::EUR => &["EUR", "EURO"],
            Currency::IDR => &["IDR", "RUPIAH", "INDONESIA"],
            Currency::TRY => &["TRY", "LIRA", "TURKIYE", "TURKEY"],
        }
    }

    /// Multiplier that rescales a raw per-1-unit rate into the canonical
    /// display unit for this currency. Sources quote tiny-denomination
    /// currencies per large blocks, so the canonical unit keeps the
    /// printed numbers comparable across sources.
    pub fn canonical_scale(&self) -> f64 {
        match self {
            Currency::GBP | Currency::EUR => 1.0,
            Currency::IDR => 1_000_000.0,
            Currency::TRY => 100.0,
        }
    }

    /// Human-readable label for the canonical unit, shown when the scale
    /// is not per-1.
    pub fn unit_label(&self) -> Option<&'static str> {
        match self {
            Currency::GBP | Currency::EUR => None,
            Currency::IDR => Some("per 1,000,000 IDR"),
            Currency::TRY => Some("per 100 TRY"),
        }
    }

    /// Tests whether uppercased text mentions this currency.
    pub fn matches(&self, upper_text: &str) -> bool {
        self.synonyms().iter().any(|syn| upper_text.contains(syn))
    }

    /// Identifies the first currency mentioned in a fragment of text.
    pub fn identify(text: &str) -> Option<Currency> {
        let upper = text.to_uppercase();
        Currency::ALL.into_iter().find(|c| c.matches(&upper))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GBP" => Ok(Currency::GBP),
            "EUR" => Ok(Currency::EUR),
            "IDR" => Ok(Currency::IDR),
            "TRY" => Ok(Currency::TRY),
            other => Err(format!("Unknown currency: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identify_by_synonym() {
        assert_eq!(Currency::identify("British Pound Sterling"), Some(Currency::GBP));
        assert_eq!(Currency::identify("euro"), Some(Currency::EUR));
        assert_eq!(Currency::identify("Indonesian Rupiah"), Some(Currency::IDR));
        assert_eq!(Currency::identify("Turkish Lira"), Some(Currency::TRY));
        assert_eq!(Currency::identify("Japanese Yen"), None);
    }

    #[test]
    fn parse_code() {
        assert_eq!("gbp".parse::<Currency>().unwrap(), Currency::GBP);
        assert!("XXX".parse::<Currency>().is_err());
    }

    #[test]
    fn scale_table() {
        assert_eq!(Currency::GBP.canonical_scale(), 1.0);
        assert_eq!(Currency::IDR.canonical_scale(), 1_000_000.0);
        assert_eq!(Currency::TRY.canonical_scale(), 100.0);
        assert_eq!(Currency::TRY.unit_label(), Some("per 100 TRY"));
        assert_eq!(Currency::EUR.unit_label(), None);
    }
}
