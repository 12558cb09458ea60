//! HistoryStore port - 履歴の永続化
//!
//! The engine and the session never touch files. Loading and saving go
//! through this trait; `impls::CsvHistoryStore` is the flat-file version.

use async_trait::async_trait;

use crate::domain::DecisionRecord;
use crate::history::HistoryError;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load every record, in stored order. Partial results are never returned.
    async fn load(&self) -> Result<Vec<DecisionRecord>, HistoryError>;

    /// Replace the stored history with `records`.
    async fn save(&self, records: &[DecisionRecord]) -> Result<(), HistoryError>;

    /// Whether there is anything to load yet. Failing to find out is an error,
    /// not a "no".
    async fn exists(&self) -> Result<bool, HistoryError>;
}
