//! Database row representations and conversions to domain types.

use chrono::NaiveDateTime;
use sqlx::FromRow;

use rates_types::{Currency, RepoError, SourceId, StoredQuote};

/// One `exchange_rates` row as the driver returns it.
#[derive(Debug, FromRow)]
pub struct DbQuote {
    pub source: String,
    pub currency: String,
    pub sell_rate: f64,
    pub buy_rate: f64,
    pub observed_at: NaiveDateTime,
    pub recorded_at: NaiveDateTime,
}

impl DbQuote {
    pub fn into_domain(self) -> Result<StoredQuote, RepoError> {
        let currency: Currency = self
            .currency
            .parse()
            .map_err(|e: String| RepoError::Database(e))?;
        Ok(StoredQuote {
            source: SourceId::new(self.source),
            currency,
            sell_rate: self.sell_rate,
            buy_rate: self.buy_rate,
            observed_at: self.observed_at,
            recorded_at: self.recorded_at,
        })
    }
}

/// Rounds a rate to the 4-fractional-digit precision of the store.
pub fn round4(rate: f64) -> f64 {
    (rate * 10_000.0).round() / 10_000.0
}
