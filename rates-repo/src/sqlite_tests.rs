//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};

    use rates_types::{Currency, RateQuote, RateRepository, SourceId};

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn quote(source: &SourceId, currency: Currency, sell: f64, buy: f64) -> RateQuote {
        RateQuote {
            currency,
            sell_rate: sell,
            buy_rate: buy,
            source: source.clone(),
            observed_at: Local::now(),
        }
    }

    #[tokio::test]
    async fn save_and_read_back() {
        let repo = setup_repo().await;
        let source = SourceId::new("Bukit Bintang");
        let now = Local::now();

        repo.save_quotes(
            &source,
            &[
                quote(&source, Currency::GBP, 5.8, 5.6),
                quote(&source, Currency::EUR, 4.95, 4.75),
            ],
            now,
        )
        .await
        .unwrap();

        let rows = repo.latest_quotes().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].source, source);
        assert_eq!(rows[0].currency, Currency::EUR);
        assert_eq!(rows[1].currency, Currency::GBP);
        assert_eq!(rows[1].sell_rate, 5.8);
        assert_eq!(rows[1].buy_rate, 5.6);
    }

    #[tokio::test]
    async fn latest_returns_newest_row_per_source_currency() {
        let repo = setup_repo().await;
        let source = SourceId::new("Masjid India");
        let earlier = Local::now() - Duration::hours(3);
        let later = Local::now();

        repo.save_quotes(&source, &[quote(&source, Currency::GBP, 5.7, 5.5)], earlier)
            .await
            .unwrap();
        repo.save_quotes(&source, &[quote(&source, Currency::GBP, 5.9, 5.7)], later)
            .await
            .unwrap();

        let rows = repo.latest_quotes().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sell_rate, 5.9);
        assert_eq!(rows[0].observed_at, later.naive_local());
    }

    #[tokio::test]
    async fn rates_are_stored_at_four_decimal_precision() {
        let repo = setup_repo().await;
        let source = SourceId::new("Visa");

        repo.save_quotes(
            &source,
            &[quote(&source, Currency::GBP, 5.78341999, 5.78341999)],
            Local::now(),
        )
        .await
        .unwrap();

        let rows = repo.latest_quotes().await.unwrap();
        assert_eq!(rows[0].sell_rate, 5.7834);
    }

    #[tokio::test]
    async fn empty_quote_set_saves_nothing() {
        let repo = setup_repo().await;
        let source = SourceId::new("MV Forex");

        repo.save_quotes(&source, &[], Local::now()).await.unwrap();

        assert!(repo.latest_quotes().await.unwrap().is_empty());
    }
}
