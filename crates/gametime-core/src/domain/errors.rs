//! Errors - ドメインエラーの分類
//!
//! - `CatalogError`: ゲーム定義の構築時エラー（起動時に fail-fast）
//! - `DecisionError`: decide の入力検証エラー（想定内、リトライ可能）

use thiserror::Error;

/// A game or timeframe definition that breaks the catalog invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("payoff matrix has no rows")]
    EmptyMatrix,

    #[error("payoff row {row} has no outcomes")]
    EmptyRow { row: usize },

    #[error("payoff row {row} contains a non-finite value ({value})")]
    NonFinite { row: usize, value: f64 },

    #[error("timeframe '{timeframe}' has no actions")]
    EmptyActions { timeframe: String },

    #[error("timeframe '{timeframe}' has {actions} actions but {rows} payoff rows")]
    ShapeMismatch {
        timeframe: String,
        actions: usize,
        rows: usize,
    },

    #[error("game '{0}' is defined more than once")]
    DuplicateGame(String),

    #[error("game '{game}' defines timeframe '{timeframe}' more than once")]
    DuplicateTimeframe { game: String, timeframe: String },

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
}

/// Why a decision request was rejected.
///
/// These are expected client mistakes, not faults: the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("unknown game '{0}'")]
    UnknownGame(String),

    #[error("game '{game}' has no timeframe '{timeframe}'")]
    UnknownTimeframe { game: String, timeframe: String },

    #[error("game '{game}' has no strategy '{strategy}'")]
    UnknownStrategy { game: String, strategy: String },

    #[error("timeframe '{timeframe}' has no actions or payoffs")]
    MissingPayoffs { timeframe: String },

    #[error("strategy '{strategy}' chose action {index} but only {actions} exist")]
    ActionOutOfRange {
        strategy: String,
        index: usize,
        actions: usize,
    },
}
