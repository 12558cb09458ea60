//! SessionState - 履歴と集計（スコア・パターン・連続回数）
//!
//! Two ways in:
//! - [`SessionState::record`]: live play, one decision at a time.
//! - [`SessionState::rebuild`]: wholesale replay of an imported history.
//!
//! Scores and patterns agree between the two paths. Streaks do not: live
//! play counts every repeat of a key monotonically, while rebuild computes a
//! true run length that resets when the key changes. Both behaviours are
//! kept as-is; unifying them would change what users already see.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::catalog::GameCatalog;
use crate::domain::{Decision, DecisionRecord};

/// `game → (timeframe:action → count)`
pub type KeyCounts = BTreeMap<String, BTreeMap<String, u64>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    history: Vec<usize>,
    indices: Vec<Option<usize>>,
    records: Vec<DecisionRecord>,
    scores: BTreeMap<String, f64>,
    patterns: KeyCounts,
    streaks: KeyCounts,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a freshly made decision.
    pub fn record(&mut self, decision: &Decision) {
        let record = &decision.record;
        self.push(Some(decision.action_index), record.clone());

        let streak = self
            .streaks
            .entry(record.game.clone())
            .or_default()
            .entry(record.pattern_key())
            .or_insert(0);
        *streak += 1;
    }

    /// Replay `records` in timestamp order into a fresh state.
    ///
    /// Scores, patterns and streaks count every record. A record whose
    /// game, timeframe or action is not in `catalog` has no action index:
    /// it is listed by [`unresolved`](Self::unresolved) and left out of
    /// [`history`](Self::history).
    pub fn rebuild(mut records: Vec<DecisionRecord>, catalog: &GameCatalog) -> Self {
        sort_chronologically(&mut records);
        let run_lengths = chronological_streaks(&records);

        let mut state = Self::new();
        for (position, (record, run)) in records.into_iter().zip(run_lengths).enumerate() {
            let index = catalog.action_index(&record.game, &record.timeframe, &record.action);
            if index.is_none() {
                warn!(
                    position,
                    game = %record.game,
                    timeframe = %record.timeframe,
                    action = %record.action,
                    "Record does not match the catalog, keeping it without an action index"
                );
            }

            state
                .streaks
                .entry(record.game.clone())
                .or_default()
                .insert(record.pattern_key(), run);
            state.push(index, record);
        }

        debug!(
            records = state.records.len(),
            unresolved = state.unresolved().count(),
            games = state.scores.len(),
            "Session rebuilt"
        );
        state
    }

    fn push(&mut self, index: Option<usize>, record: DecisionRecord) {
        *self.scores.entry(record.game.clone()).or_insert(0.0) += record.outcome;
        *self
            .patterns
            .entry(record.game.clone())
            .or_default()
            .entry(record.pattern_key())
            .or_insert(0) += 1;
        self.history.extend(index);
        self.indices.push(index);
        self.records.push(record);
    }

    /// Chosen action indices in order, as fed to strategies.
    ///
    /// Records without a catalog match are skipped, so this is parallel to
    /// [`records`](Self::records) only when nothing is
    /// [`unresolved`](Self::unresolved).
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Action index of each record, parallel to [`records`](Self::records).
    pub fn action_indices(&self) -> &[Option<usize>] {
        &self.indices
    }

    /// Positions in [`records`](Self::records) that have no action index.
    pub fn unresolved(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices
            .iter()
            .enumerate()
            .filter_map(|(position, index)| index.is_none().then_some(position))
    }

    pub fn records(&self) -> &[DecisionRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cumulative_score(&self, game: &str) -> f64 {
        self.scores.get(game).copied().unwrap_or(0.0)
    }

    pub fn cumulative_scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }

    pub fn patterns(&self) -> &KeyCounts {
        &self.patterns
    }

    pub fn pattern_count(&self, game: &str, key: &str) -> u64 {
        lookup(&self.patterns, game, key)
    }

    pub fn streaks(&self) -> &KeyCounts {
        &self.streaks
    }

    pub fn streak(&self, game: &str, key: &str) -> u64 {
        lookup(&self.streaks, game, key)
    }

    /// Games that appear in the history, in name order.
    pub fn games(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }
}

fn lookup(counts: &KeyCounts, game: &str, key: &str) -> u64 {
    counts
        .get(game)
        .and_then(|keys| keys.get(key))
        .copied()
        .unwrap_or(0)
}

/// Stable sort by timestamp.
///
/// Valid RFC 3339 timestamps compare as instants. Anything unparseable sorts
/// first, by raw string.
pub fn sort_chronologically(records: &mut [DecisionRecord]) {
    records.sort_by(|a, b| match (a.instant(), b.instant()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => a.timestamp.cmp(&b.timestamp),
    });
}

/// Run length of the `timeframe:action` key ending at each record.
///
/// `records` must already be in chronological order. The comparison is with
/// the immediately preceding record, whatever game it belongs to.
pub fn chronological_streaks(records: &[DecisionRecord]) -> Vec<u64> {
    let mut runs: Vec<u64> = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| &records[p]);
        let run = match runs.last() {
            Some(&last) if record.continues(prev) => last + 1,
            _ => 1,
        };
        runs.push(run);
    }
    runs
}
