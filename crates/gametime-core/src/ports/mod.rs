//! Ports - 抽象化レイヤー
//!
//! 時刻・乱数・ファイル I/O を trait の裏に隠し、
//! engine と session を純粋なロジックのまま保ちます。

pub mod clock;
pub mod history_store;
pub mod sampler;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::history_store::HistoryStore;
pub use self::sampler::{FixedSampler, OutcomeSampler, UniformSampler};
