//! Decision: the result of asking the engine what to do next.

use serde::Serialize;

use super::record::DecisionRecord;

/// A recommended action together with its sampled consequence.
///
/// `history` is the caller's input history with `action_index` appended. It
/// is a new vector; the input slice is never touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub action_index: usize,
    pub action: String,
    pub outcome: f64,
    pub history: Vec<usize>,
    pub record: DecisionRecord,
}
