//! Tit-for-Tat: cooperate first, then alternate.

use super::Strategy;
use crate::domain::PayoffMatrix;

/// Strict binary alternation between actions 0 and 1.
///
/// Empty history starts on action 1 (the cooperative default). After that,
/// a previous 0 maps to 1 and anything else maps to 0, even when the
/// timeframe has more than two actions. A single-action timeframe always
/// gets 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn name(&self) -> &'static str {
        "titForTat"
    }

    fn choose(&self, payoffs: &PayoffMatrix, history: &[usize]) -> usize {
        let next = match history.last() {
            None | Some(0) => 1,
            Some(_) => 0,
        };
        if next < payoffs.len() { next } else { 0 }
    }
}
