//! DecisionRecord: the persisted trace of one decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What was decided, under which strategy, and what came of it.
///
/// Records are values: the engine creates them, the session appends them,
/// nothing mutates them afterwards. The timestamp is kept as the exact
/// string that was written or imported so a CSV round-trip is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub game: String,
    pub timeframe: String,
    pub strategy: String,

    /// Human-readable action label (not the index).
    pub action: String,

    pub outcome: f64,

    /// ISO-8601 UTC instant, e.g. `2024-03-20T10:00:00.000Z`.
    pub timestamp: String,
}

impl DecisionRecord {
    pub fn new(
        game: impl Into<String>,
        timeframe: impl Into<String>,
        strategy: impl Into<String>,
        action: impl Into<String>,
        outcome: f64,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            game: game.into(),
            timeframe: timeframe.into(),
            strategy: strategy.into(),
            action: action.into(),
            outcome,
            timestamp: timestamp.into(),
        }
    }

    /// `timeframe:action`, the key used for patterns and streaks.
    pub fn pattern_key(&self) -> String {
        format!("{}:{}", self.timeframe, self.action)
    }

    /// Parsed instant, if the stored timestamp is valid RFC 3339.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    fn same_key(&self, other: &DecisionRecord) -> bool {
        self.timeframe == other.timeframe && self.action == other.action
    }

    /// Does `prev` continue a streak ending at `self`?
    pub fn continues(&self, prev: Option<&DecisionRecord>) -> bool {
        prev.is_some_and(|p| p.same_key(self))
    }
}
