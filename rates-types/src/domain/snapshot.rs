//! The per-run aggregated snapshot.

use std::collections::HashMap;

use super::{Currency, RateQuote, SourceId};

struct SnapshotEntry {
    source: SourceId,
    rank: usize,
    quotes: HashMap<Currency, RateQuote>,
}

/// Mapping from source to its quote set, built fresh each run.
///
/// Every processed source is recorded, including ones that yielded
/// nothing, so the presentation layer can show which sources failed.
/// `rank` is the source's position in the declared order; iteration is
/// re-sorted by rank so rendering stays stable even if entries were
/// recorded in completion order.
#[derive(Default)]
pub struct RateSnapshot {
    entries: Vec<SnapshotEntry>,
}

impl RateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a source's quote set. Later quotes for a currency already
    /// present in the set are ignored (first extraction wins).
    pub fn record(&mut self, source: SourceId, rank: usize, quotes: Vec<RateQuote>) {
        let mut map = HashMap::new();
        for quote in quotes {
            map.entry(quote.currency).or_insert(quote);
        }
        self.entries.push(SnapshotEntry {
            source,
            rank,
            quotes: map,
        });
    }

    /// Sources in declared order with their quote sets.
    pub fn ordered(&self) -> impl Iterator<Item = (&SourceId, &HashMap<Currency, RateQuote>)> {
        let mut refs: Vec<&SnapshotEntry> = self.entries.iter().collect();
        refs.sort_by_key(|e| e.rank);
        refs.into_iter().map(|e| (&e.source, &e.quotes))
    }

    pub fn quotes_for(&self, source: &SourceId) -> Option<&HashMap<Currency, RateQuote>> {
        self.entries
            .iter()
            .find(|e| &e.source == source)
            .map(|e| &e.quotes)
    }

    pub fn source_count(&self) -> usize {
        self.entries.len()
    }

    pub fn quote_count(&self) -> usize {
        self.entries.iter().map(|e| e.quotes.len()).sum()
    }

    /// True when no source produced any quote (the total-failure case).
    pub fn is_empty(&self) -> bool {
        self.quote_count() == 0
    }
}
