//! Status - セッション集計のビュー
//!
//! Serializable snapshots of a [`SessionState`] for display or JSON output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::session::SessionState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCount {
    pub key: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game: String,
    pub decisions: usize,
    pub cumulative_score: f64,

    /// Most frequent first; equal counts in key order.
    pub patterns: Vec<PatternCount>,

    pub streaks: BTreeMap<String, u64>,
}

impl GameSummary {
    /// The most frequent `timeframe:action`, if any.
    pub fn favorite(&self) -> Option<&PatternCount> {
        self.patterns.first()
    }
}

impl SessionState {
    pub fn summary(&self, game: &str) -> GameSummary {
        let mut patterns: Vec<PatternCount> = self
            .patterns()
            .get(game)
            .map(|keys| {
                keys.iter()
                    .map(|(key, &count)| PatternCount {
                        key: key.clone(),
                        count,
                    })
                    .collect()
            })
            .unwrap_or_default();
        // stable: BTreeMap order breaks ties
        patterns.sort_by(|a, b| b.count.cmp(&a.count));

        GameSummary {
            game: game.to_string(),
            decisions: self.records().iter().filter(|r| r.game == game).count(),
            cumulative_score: self.cumulative_score(game),
            patterns,
            streaks: self.streaks().get(game).cloned().unwrap_or_default(),
        }
    }

    /// One summary per game present in the history.
    pub fn summaries(&self) -> Vec<GameSummary> {
        self.games().map(|g| self.summary(g)).collect()
    }
}
