//! History serializer: decision records to and from flat CSV.
//!
//! ```text
//! Game,Timeframe,Strategy,Action,Outcome,Timestamp
//! foodDelivery,day,minimax,Cook Meal,5,2024-03-20T10:00:00.000Z
//! ```
//!
//! The whole file is read (or built) in memory before parsing (or writing),
//! so a failure never leaves the caller with partial data.

pub mod codec;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, instrument};

use crate::domain::DecisionRecord;

pub use codec::{read_records, write_records};

/// Fixed column order of the history file.
pub const HEADER: [&str; 6] = ["Game", "Timeframe", "Strategy", "Action", "Outcome", "Timestamp"];

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected header '{0}'")]
    UnexpectedHeader(String),

    #[error("line {line}: outcome '{value}' is not a number")]
    InvalidOutcome { line: u64, value: String },

    #[error("IO error: {0}")]
    Stream(#[from] std::io::Error),
}

/// Write `records` to `path`, replacing any existing file.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub async fn export_csv(path: impl AsRef<Path>, records: &[DecisionRecord]) -> Result<(), HistoryError> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    tokio::fs::write(path, buf).await.map_err(|source| HistoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), records = records.len(), "Exported history");
    Ok(())
}

/// Read every record from `path`. A missing or unreadable file is an error.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub async fn import_csv(path: impl AsRef<Path>) -> Result<Vec<DecisionRecord>, HistoryError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| HistoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(bytes.as_slice())?;
    info!(path = %path.display(), records = records.len(), "Imported history");
    Ok(records)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    /// Unique path under the system temp dir; removed on drop.
    pub struct TempCsv(pub PathBuf);

    impl TempCsv {
        pub fn new(name: &str) -> Self {
            let file = format!("gametime-{}-{}.csv", std::process::id(), name);
            Self(std::env::temp_dir().join(file))
        }
    }

    impl Drop for TempCsv {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }
}
