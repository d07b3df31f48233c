//! Configuration loading from environment.
//!
//! Required credentials are validated once here, before any fetch is
//! attempted; a missing secret aborts the process.

use std::env;
use std::path::PathBuf;

use rates_types::{Currency, ParserKind, SourceSpec};

/// Application configuration.
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub database_url: String,
    /// Optional render-service endpoint for pages that need JavaScript.
    pub render_url: Option<String>,
    /// Where to preserve raw documents that yielded no rates.
    pub debug_dir: Option<PathBuf>,
    pub sources: Vec<SourceSpec>,
}

fn required(name: &str) -> anyhow::Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow::anyhow!("{name} environment variable is required")),
    }
}

impl Config {
    /// Loads and validates configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            telegram_bot_token: required("TELEGRAM_BOT_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            database_url: database_url()?,
            render_url: env::var("RENDER_SERVICE_URL").ok(),
            debug_dir: env::var("DEBUG_DUMP_DIR").ok().map(PathBuf::from),
            sources: default_sources(),
        })
    }
}

/// Only the store location, for the db-only subcommands.
pub fn database_url() -> anyhow::Result<String> {
    required("DATABASE_URL")
}

/// The declared source table. Priority sources (the reference quote
/// service and the card networks) come first so presentation order is
/// stable without re-sorting.
fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::priority(
            "Google Finance",
            "https://www.google.com/finance/quote/GBP-MYR",
            ParserKind::QuotePage {
                marker: "YMlKec fxKbKc".to_string(),
                currency: Currency::GBP,
            },
        ),
        SourceSpec::priority(
            "Visa",
            "https://www.visa.com.my/travel-with-visa/exchange-rate-calculator.html",
            ParserKind::CardNetwork {
                rate_column: 2,
                invert: false,
            },
        ),
        // Mastercard publishes foreign-per-MYR; re-verify against the
        // live page if the table layout changes.
        SourceSpec::priority(
            "Mastercard",
            "https://www.mastercard.us/en-us/personal/get-support/convert-currency.html",
            ParserKind::CardNetwork {
                rate_column: 2,
                invert: true,
            },
        ),
        SourceSpec::new("MV Forex", "https://www.mvforex.com/", ParserKind::RateBoard),
        SourceSpec::new(
            "Jalin & Duta Bukit Bintang",
            "https://www.jalinanduta.com/bukit-bintang/",
            ParserKind::MoneyChanger,
        ),
        SourceSpec::new(
            "Jalin & Duta Masjid India",
            "https://www.jalinanduta.com/masjid-india/",
            ParserKind::MoneyChanger,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_variable_is_an_error() {
        assert!(required("RATES_TEST_UNSET_VARIABLE").is_err());
    }

    #[test]
    fn priority_sources_are_declared_first() {
        let sources = default_sources();
        let first_merchant = sources.iter().position(|s| !s.priority).unwrap();
        assert!(sources[..first_merchant].iter().all(|s| s.priority));
        assert!(sources[first_merchant..].iter().all(|s| !s.priority));
    }
}
