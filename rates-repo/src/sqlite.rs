//! SQLite repository adapter.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use sqlx::SqlitePool;

use rates_types::{RateQuote, RateRepository, RepoError, SourceId, StoredQuote};

use crate::types::{round4, DbQuote};

/// SQLite-backed rate history, used for development and tests.
pub struct SqliteRepo {
    pool: SqlitePool,
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), anyhow::Error> {
    let sql = include_str!("../migrations/0001_create_exchange_rates_sqlite.sql");
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration 0001 failed: {}", e))?;
        }
    }
    Ok(())
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RateRepository for SqliteRepo {
    async fn save_quotes(
        &self,
        source: &SourceId,
        quotes: &[RateQuote],
        observed_at: DateTime<Local>,
    ) -> Result<(), RepoError> {
        let observed = observed_at.naive_local();
        for quote in quotes {
            sqlx::query(
                r#"INSERT INTO exchange_rates
                   (source, currency, sell_rate, buy_rate, observed_at, recorded_at)
                   VALUES (?, ?, ?, ?, ?, datetime('now'))"#,
            )
            .bind(source.as_str())
            .bind(quote.currency.code())
            .bind(round4(quote.sell_rate))
            .bind(round4(quote.buy_rate))
            .bind(observed)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        }
        tracing::info!(source = %source, count = quotes.len(), "saved rates to database");
        Ok(())
    }

    async fn latest_quotes(&self) -> Result<Vec<StoredQuote>, RepoError> {
        let rows: Vec<DbQuote> = sqlx::query_as(
            r#"SELECT source, currency, sell_rate, buy_rate, observed_at, recorded_at
               FROM exchange_rates e1
               WHERE observed_at = (
                   SELECT MAX(observed_at) FROM exchange_rates e2
                   WHERE e2.source = e1.source AND e2.currency = e1.currency
               )
               ORDER BY source, currency"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbQuote::into_domain).collect()
    }
}
