use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::{CatalogError, DecisionError};
use crate::history::HistoryError;

/// Everything a front end may need to report, in one type.
#[derive(Debug, Error)]
pub enum GametimeError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
