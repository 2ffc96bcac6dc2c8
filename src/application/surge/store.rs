//! In-memory store of the most recent surge per symbol.

use dashmap::DashMap;

use crate::domain::{Symbol, SurgeRecord};

/// Concurrent map of symbol to its last detected surge.
///
/// Written from every connection worker at once. `DashMap` shards its locks,
/// so writers for different symbols do not contend and no lock is held
/// across the call site.
#[derive(Debug, Default)]
pub struct SurgeStore {
    records: DashMap<Symbol, SurgeRecord>,
}

impl SurgeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record for `symbol`, returning the previous one.
    pub fn upsert(&self, symbol: Symbol, record: SurgeRecord) -> Option<SurgeRecord> {
        self.records.insert(symbol, record)
    }

    /// Clone of the current record for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<SurgeRecord> {
        self.records.get(symbol).map(|entry| entry.value().clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, sorted by symbol.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(Symbol, SurgeRecord)> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        records.sort_by(|a, b| a.0.cmp(&b.0));
        records
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;

    fn record(open: f64, close: f64) -> SurgeRecord {
        SurgeRecord {
            open,
            close,
            change_percent: (close - open) / open * 100.0,
            detected_at: Utc::now(),
        }
    }

    #[test]
    fn newest_record_overwrites_previous() {
        let store = SurgeStore::new();
        let symbol = Symbol::from("BTCUSDT");

        assert!(store.upsert(symbol.clone(), record(100.0, 111.0)).is_none());
        let previous = store.upsert(symbol.clone(), record(200.0, 230.0)).unwrap();

        assert_eq!(previous.open, 100.0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&symbol).unwrap().close, 230.0);
    }

    #[test]
    fn snapshot_is_sorted_by_symbol() {
        let store = SurgeStore::new();
        store.upsert(Symbol::from("ETHUSDT"), record(1.0, 2.0));
        store.upsert(Symbol::from("BTCUSDT"), record(1.0, 2.0));

        let symbols: Vec<_> = store
            .snapshot()
            .into_iter()
            .map(|(s, _)| s.to_string())
            .collect();
        assert_eq!(symbols, vec!["BTCUSDT", "ETHUSDT"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_keep_one_entry_per_symbol() {
        let store = Arc::new(SurgeStore::new());

        let tasks: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    for i in 0..50 {
                        let symbol = Symbol::new(format!("SYM{i}USDT"));
                        store.upsert(symbol, record(100.0, 110.0 + f64::from(worker)));
                    }
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.len(), 50);
    }
}
