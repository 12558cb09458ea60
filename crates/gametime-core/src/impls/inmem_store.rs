//! InMemoryHistoryStore - テスト・開発用の履歴

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::DecisionRecord;
use crate::history::HistoryError;
use crate::ports::HistoryStore;

/// History held in memory. `None` until the first save (or seed).
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    records: Mutex<Option<Vec<DecisionRecord>>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<DecisionRecord>) -> Self {
        Self {
            records: Mutex::new(Some(records)),
        }
    }

    pub fn snapshot(&self) -> Result<Vec<DecisionRecord>, HistoryError> {
        Ok(self.lock()?.clone().unwrap_or_default())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<Vec<DecisionRecord>>>, HistoryError> {
        self.records
            .lock()
            .map_err(|e| HistoryError::Stream(std::io::Error::other(e.to_string())))
    }

    /// Poison the lock by panicking while holding it.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = self.records.lock().unwrap();
                panic!("poisoning history lock");
            })
            .join()
        });
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn load(&self) -> Result<Vec<DecisionRecord>, HistoryError> {
        self.snapshot()
    }

    async fn save(&self, records: &[DecisionRecord]) -> Result<(), HistoryError> {
        *self.lock()? = Some(records.to_vec());
        Ok(())
    }

    async fn exists(&self) -> Result<bool, HistoryError> {
        Ok(self.lock()?.is_some())
    }
}
