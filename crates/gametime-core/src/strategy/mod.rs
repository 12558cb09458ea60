//! Strategies: payoff matrix (+ history) → action index.
//!
//! Every strategy is shape-generic, so any of them can be registered against
//! any game. `StrategyKind` is the closed set the catalog knows by name; the
//! `Strategy` trait is the seam a custom strategy would plug into.

mod minimax;
mod nash;
mod tit_for_tat;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{CatalogError, PayoffMatrix};

pub use minimax::{Minimax, maximin};
pub use nash::{NashEquilibrium, pure_equilibria};
pub use tit_for_tat::TitForTat;

/// Chooses an action for a payoff matrix.
///
/// Strategies are pure functions: no state, no side effects. History-blind
/// strategies ignore `history`.
///
/// The returned index should be `< payoffs.len()`; the engine rejects
/// anything else instead of indexing out of bounds.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn choose(&self, payoffs: &PayoffMatrix, history: &[usize]) -> usize;
}

/// The built-in strategies, addressed by their persisted names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyKind {
    Minimax,
    TitForTat,
    NashEquilibrium,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Minimax,
        StrategyKind::TitForTat,
        StrategyKind::NashEquilibrium,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Minimax => Minimax.name(),
            StrategyKind::TitForTat => TitForTat.name(),
            StrategyKind::NashEquilibrium => NashEquilibrium.name(),
        }
    }
}

impl Strategy for StrategyKind {
    fn name(&self) -> &'static str {
        StrategyKind::name(*self)
    }

    fn choose(&self, payoffs: &PayoffMatrix, history: &[usize]) -> usize {
        match self {
            StrategyKind::Minimax => Minimax.choose(payoffs, history),
            StrategyKind::TitForTat => TitForTat.choose(payoffs, history),
            StrategyKind::NashEquilibrium => NashEquilibrium.choose(payoffs, history),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| CatalogError::UnknownStrategy(s.to_string()))
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.name().to_string()
    }
}
