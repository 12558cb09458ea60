//! CsvHistoryStore - CSV ファイルへの履歴保存

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::DecisionRecord;
use crate::history::{self, HistoryError};
use crate::ports::HistoryStore;

/// History kept in a single CSV file.
#[derive(Debug, Clone)]
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStore for CsvHistoryStore {
    async fn load(&self) -> Result<Vec<DecisionRecord>, HistoryError> {
        history::import_csv(&self.path).await
    }

    async fn save(&self, records: &[DecisionRecord]) -> Result<(), HistoryError> {
        history::export_csv(&self.path, records).await
    }

    async fn exists(&self) -> Result<bool, HistoryError> {
        tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| HistoryError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::test_support::TempCsv;

    #[tokio::test]
    async fn save_then_load() {
        let file = TempCsv::new("store");
        let store = CsvHistoryStore::new(&file.0);
        assert!(!store.exists().await.unwrap());

        let records = vec![DecisionRecord::new(
            "taskEffort",
            "week",
            "minimax",
            "High Effort",
            6.0,
            "2024-05-01T09:00:00.000Z",
        )];
        store.save(&records).await.unwrap();

        assert!(store.exists().await.unwrap());
        assert_eq!(store.load().await.unwrap(), records);
    }

    #[tokio::test]
    async fn load_of_missing_file_fails() {
        let store = CsvHistoryStore::new(TempCsv::new("missing").0.clone());
        assert!(store.load().await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exists_reports_lookup_failures() {
        let file = TempCsv::new("not-a-dir");
        std::fs::write(&file.0, "").unwrap();
        let store = CsvHistoryStore::new(file.0.join("history.csv"));

        let err = store.exists().await.unwrap_err();
        assert!(matches!(err, HistoryError::Io { .. }));
    }
}
