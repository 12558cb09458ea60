//! Game and timeframe definitions.

use super::errors::CatalogError;
use super::payoff::PayoffMatrix;
use crate::strategy::StrategyKind;

/// A decision context within a game: labelled actions plus their payoffs.
///
/// Invariant: `actions.len() == payoffs.len()`, checked in [`Timeframe::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Timeframe {
    name: String,
    actions: Vec<String>,
    payoffs: PayoffMatrix,
}

impl Timeframe {
    pub fn new(
        name: impl Into<String>,
        actions: Vec<String>,
        payoffs: PayoffMatrix,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if actions.is_empty() {
            return Err(CatalogError::EmptyActions { timeframe: name });
        }
        if actions.len() != payoffs.len() {
            return Err(CatalogError::ShapeMismatch {
                timeframe: name,
                actions: actions.len(),
                rows: payoffs.len(),
            });
        }
        Ok(Self {
            name,
            actions,
            payoffs,
        })
    }

    /// Shorthand for static tables.
    pub fn from_table(
        name: &str,
        actions: &[&str],
        rows: &[&[f64]],
    ) -> Result<Self, CatalogError> {
        let payoffs = PayoffMatrix::new(rows.iter().map(|r| r.to_vec()).collect())?;
        Self::new(
            name,
            actions.iter().map(|a| a.to_string()).collect(),
            payoffs,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn payoffs(&self) -> &PayoffMatrix {
        &self.payoffs
    }

    pub fn action(&self, index: usize) -> Option<&str> {
        self.actions.get(index).map(String::as_str)
    }

    pub fn action_index(&self, label: &str) -> Option<usize> {
        self.actions.iter().position(|a| a == label)
    }
}

/// A game: ordered timeframes plus the strategies usable against them.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    id: String,
    timeframes: Vec<Timeframe>,
    strategies: Vec<StrategyKind>,
}

impl Game {
    /// Create a game with every known strategy registered.
    pub fn new(id: impl Into<String>, timeframes: Vec<Timeframe>) -> Result<Self, CatalogError> {
        Self::with_strategies(id, timeframes, StrategyKind::ALL.to_vec())
    }

    pub fn with_strategies(
        id: impl Into<String>,
        timeframes: Vec<Timeframe>,
        strategies: Vec<StrategyKind>,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        for (i, tf) in timeframes.iter().enumerate() {
            if timeframes[..i].iter().any(|prev| prev.name == tf.name) {
                return Err(CatalogError::DuplicateTimeframe {
                    game: id,
                    timeframe: tf.name.clone(),
                });
            }
        }
        Ok(Self {
            id,
            timeframes,
            strategies,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timeframes(&self) -> &[Timeframe] {
        &self.timeframes
    }

    pub fn timeframe(&self, name: &str) -> Option<&Timeframe> {
        self.timeframes.iter().find(|tf| tf.name == name)
    }

    pub fn strategies(&self) -> &[StrategyKind] {
        &self.strategies
    }

    pub fn strategy(&self, name: &str) -> Option<StrategyKind> {
        self.strategies.iter().copied().find(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeframe_requires_one_row_per_action() {
        let err = Timeframe::from_table("day", &["A", "B"], &[&[1.0, 2.0]]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::ShapeMismatch {
                timeframe: "day".to_string(),
                actions: 2,
                rows: 1,
            }
        );
    }

    #[test]
    fn timeframe_requires_actions() {
        let payoffs = PayoffMatrix::new(vec![vec![1.0]]).unwrap();
        let err = Timeframe::new("day", vec![], payoffs).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyActions { .. }));
    }

    #[test]
    fn game_rejects_duplicate_timeframes() {
        let tf = Timeframe::from_table("day", &["A"], &[&[1.0]]).unwrap();
        let err = Game::new("g", vec![tf.clone(), tf]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTimeframe { .. }));
    }

    #[test]
    fn action_lookup_both_ways() {
        let tf = Timeframe::from_table("day", &["Order Takeout", "Cook Meal"], &[
            &[-5.0, -2.0],
            &[3.0, 5.0],
        ])
        .unwrap();
        assert_eq!(tf.action(1), Some("Cook Meal"));
        assert_eq!(tf.action_index("Order Takeout"), Some(0));
        assert_eq!(tf.action_index("Skip"), None);
    }
}
