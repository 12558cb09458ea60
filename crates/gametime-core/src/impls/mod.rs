//! Impls - ports の実装
//!
//! - **CsvHistoryStore**: CSV ファイルへの履歴保存（本番用）
//! - **InMemoryHistoryStore**: メモリ上の履歴（テスト・開発用）

pub mod csv_store;
pub mod inmem_store;

pub use self::csv_store::CsvHistoryStore;
pub use self::inmem_store::InMemoryHistoryStore;
