//! The per-run rate aggregation service.
//!
//! For each configured source, in declared order:
//! fetch → parse → normalize → persist → record into the snapshot.
//! A source failing at any stage is isolated: it is logged, contributes
//! an empty quote set, and the run proceeds. The run itself fails only
//! when no source produced any rate.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use rates_scrape::SourceParser;
use rates_types::{
    AppError, Notifier, PageFetcher, RateQuote, RateRepository, RateSnapshot, SourceDocument,
    SourceSpec,
};

use crate::format;

/// Aggregation service generic over the three ports.
///
/// The adapters are injected at compile time, which enables testing the
/// whole run against in-memory mocks.
pub struct RateService<F, R, N> {
    fetcher: F,
    repo: R,
    notifier: N,
    sources: Vec<SourceSpec>,
    debug_dir: Option<PathBuf>,
}

impl<F: PageFetcher, R: RateRepository, N: Notifier> RateService<F, R, N> {
    pub fn new(fetcher: F, repo: R, notifier: N, sources: Vec<SourceSpec>) -> Self {
        Self {
            fetcher,
            repo,
            notifier,
            sources,
            debug_dir: None,
        }
    }

    /// Preserve raw documents that yielded no rates under this directory
    /// for offline inspection.
    pub fn with_debug_dir(mut self, dir: PathBuf) -> Self {
        self.debug_dir = Some(dir);
        self
    }

    /// Executes one full pipeline run.
    ///
    /// Returns the snapshot on success. `AppError::NoRatesObtained` is
    /// returned only when every source came back empty; the distinct
    /// failure notification has already been published by then.
    pub async fn run(&self) -> Result<RateSnapshot, AppError> {
        let now = Local::now();
        let mut snapshot = RateSnapshot::new();

        for (rank, spec) in self.sources.iter().enumerate() {
            let quotes = self.process_source(spec, now).await;
            snapshot.record(spec.id.clone(), rank, quotes);
        }

        if snapshot.is_empty() {
            tracing::error!("no rates were obtained from any source");
            if let Err(e) = self.notifier.publish(format::FAILURE_MESSAGE).await {
                tracing::error!(error = %e, "failed to publish the failure notification");
            }
            return Err(AppError::NoRatesObtained);
        }

        let message = format::format_snapshot(&snapshot, now);
        match self.notifier.publish(&message).await {
            Ok(()) => tracing::info!("summary published"),
            // Rates were fetched and persisted; a lost notification is
            // not worth failing the run over.
            Err(e) => tracing::warn!(error = %e, "failed to publish the summary"),
        }

        Ok(snapshot)
    }

    async fn process_source(&self, spec: &SourceSpec, now: DateTime<Local>) -> Vec<RateQuote> {
        tracing::info!(source = %spec.id, url = %spec.url, "fetching rates");

        let body = match self.fetcher.fetch(&spec.url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(source = %spec.id, error = %e, "fetch failed");
                return Vec::new();
            }
        };

        let doc = SourceDocument::new(spec.id.clone(), body);
        let parsed = SourceParser::for_kind(&spec.kind).parse(&doc, now);

        if parsed.quotes.is_empty() {
            tracing::warn!(source = %spec.id, "no rates found for this source");
            self.dump_document(&doc);
        }

        if let Err(e) = self
            .repo
            .save_quotes(&spec.id, &parsed.quotes, parsed.observed_at)
            .await
        {
            tracing::warn!(
                source = %spec.id,
                error = %e,
                "failed to persist rates, keeping them for the notification"
            );
        }

        parsed.quotes
    }

    fn dump_document(&self, doc: &SourceDocument) {
        let Some(dir) = &self.debug_dir else {
            return;
        };
        let name = format!("debug_{}.html", doc.source.as_str().replace(' ', "_"));
        let path = dir.join(name);
        match std::fs::write(&path, &doc.body) {
            Ok(()) => tracing::info!(path = %path.display(), "saved raw document for inspection"),
            Err(e) => tracing::warn!(error = %e, "could not save raw document"),
        }
    }
}
