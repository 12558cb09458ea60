//! gametime-core
//!
//! Recurring real-life decisions modelled as repeated two-action games.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（payoff, game/timeframe, decision, record, errors）
//! - **strategy**: minimax / titForTat / nashEquilibrium
//! - **catalog**: ゲーム定義（built-in + config）
//! - **ports**: 抽象化レイヤー（Clock, OutcomeSampler, HistoryStore）
//! - **impls**: ports の実装（CSV ファイル、インメモリ）
//! - **history**: CSV 形式の履歴 serializer
//! - **app**: DecisionEngine と SessionState
//! - **config**: YAML 設定

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod history;
pub mod impls;
pub mod ports;
pub mod strategy;

pub use app::{DecisionEngine, GameSummary, SessionState};
pub use catalog::GameCatalog;
pub use config::AppConfig;
pub use domain::{Decision, DecisionRecord};
pub use error::GametimeError;
