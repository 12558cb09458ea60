//! App - アプリケーション層
//!
//! ports と domain を組み合わせて、front end が使う操作を提供します。
//!
//! # 主要コンポーネント
//! - **DecisionEngine**: クエリ面（list_*）と decide
//! - **SessionState**: 履歴・スコア・パターン・連続回数の集計
//! - **GameSummary**: 集計のビュー
//! - **restore / persist**: HistoryStore と SessionState の接着剤

pub mod engine;
pub mod session;
pub mod status;

pub use self::engine::DecisionEngine;
pub use self::session::{SessionState, chronological_streaks, sort_chronologically};
pub use self::status::{GameSummary, PatternCount};

use tracing::info;

use crate::catalog::GameCatalog;
use crate::error::GametimeError;
use crate::ports::HistoryStore;

/// Load the stored history and rebuild a session from it.
///
/// A store with nothing in it yet yields an empty session.
pub async fn restore<H: HistoryStore + ?Sized>(
    store: &H,
    catalog: &GameCatalog,
) -> Result<SessionState, GametimeError> {
    if !store.exists().await? {
        info!("No stored history yet, starting fresh");
        return Ok(SessionState::new());
    }
    let records = store.load().await?;
    Ok(SessionState::rebuild(records, catalog))
}

/// Write the session's records back to the store, in session order.
pub async fn persist<H: HistoryStore + ?Sized>(
    store: &H,
    session: &SessionState,
) -> Result<(), GametimeError> {
    store.save(session.records()).await?;
    Ok(())
}
