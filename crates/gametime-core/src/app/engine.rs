//! DecisionEngine - catalog + strategy + sampler → Decision
//!
//! The engine is the query surface a front end talks to. It owns the
//! catalog, a clock for timestamps and a sampler for outcomes; it holds no
//! session state and performs no I/O.

use tracing::debug;

use crate::catalog::GameCatalog;
use crate::domain::{Decision, DecisionError, DecisionRecord};
use crate::ports::{Clock, OutcomeSampler, SystemClock, UniformSampler};
use crate::strategy::Strategy;

pub struct DecisionEngine<C = SystemClock, S = UniformSampler> {
    catalog: GameCatalog,
    clock: C,
    sampler: S,
}

impl DecisionEngine {
    /// Wall-clock timestamps, entropy-seeded outcomes.
    pub fn new(catalog: GameCatalog) -> Self {
        Self::with_parts(catalog, SystemClock, UniformSampler::new())
    }
}

impl<C: Clock, S: OutcomeSampler> DecisionEngine<C, S> {
    pub fn with_parts(catalog: GameCatalog, clock: C, sampler: S) -> Self {
        Self {
            catalog,
            clock,
            sampler,
        }
    }

    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    pub fn list_games(&self) -> Vec<&str> {
        self.catalog.list_games()
    }

    pub fn list_timeframes(&self, game: &str) -> Vec<&str> {
        self.catalog.list_timeframes(game)
    }

    pub fn list_actions(&self, game: &str, timeframe: &str) -> Vec<&str> {
        self.catalog.list_actions(game, timeframe)
    }

    pub fn list_strategies(&self, game: &str) -> Vec<&str> {
        self.catalog.list_strategies(game)
    }

    /// Recommend an action, or `None` if the request does not name a valid
    /// game, timeframe and strategy. Use [`try_decide`](Self::try_decide)
    /// to learn why.
    pub fn decide(
        &mut self,
        game: &str,
        timeframe: &str,
        strategy: &str,
        history: &[usize],
    ) -> Option<Decision> {
        self.try_decide(game, timeframe, strategy, history)
            .map_err(|reason| debug!(%reason, "Decision rejected"))
            .ok()
    }

    pub fn try_decide(
        &mut self,
        game: &str,
        timeframe: &str,
        strategy: &str,
        history: &[usize],
    ) -> Result<Decision, DecisionError> {
        let g = self
            .catalog
            .game(game)
            .ok_or_else(|| DecisionError::UnknownGame(game.to_string()))?;
        let tf = g
            .timeframe(timeframe)
            .ok_or_else(|| DecisionError::UnknownTimeframe {
                game: game.to_string(),
                timeframe: timeframe.to_string(),
            })?;
        let chosen = g
            .strategy(strategy)
            .ok_or_else(|| DecisionError::UnknownStrategy {
                game: game.to_string(),
                strategy: strategy.to_string(),
            })?;

        let payoffs = tf.payoffs();
        if tf.actions().is_empty() || payoffs.is_empty() {
            return Err(DecisionError::MissingPayoffs {
                timeframe: timeframe.to_string(),
            });
        }

        let index = chosen.choose(payoffs, history);
        let (Some(action), Some(row)) = (tf.action(index), payoffs.row(index)) else {
            return Err(DecisionError::ActionOutOfRange {
                strategy: strategy.to_string(),
                index,
                actions: tf.actions().len(),
            });
        };

        let outcome = row[self.sampler.sample(row.len())];
        let record = DecisionRecord::new(
            game,
            timeframe,
            chosen.name(),
            action,
            outcome,
            self.clock.timestamp(),
        );

        let mut updated = Vec::with_capacity(history.len() + 1);
        updated.extend_from_slice(history);
        updated.push(index);

        debug!(game, timeframe, strategy, index, action, outcome, "Decision made");

        Ok(Decision {
            action_index: index,
            action: action.to_string(),
            outcome,
            history: updated,
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, FixedSampler};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn engine(column: usize) -> DecisionEngine<FixedClock, FixedSampler> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 20, 10, 0, 0).unwrap());
        DecisionEngine::with_parts(
            GameCatalog::builtin().unwrap(),
            clock,
            FixedSampler::new(column),
        )
    }

    #[test]
    fn decides_with_minimax() {
        let d = engine(1).decide("foodDelivery", "day", "minimax", &[]).unwrap();
        assert_eq!(d.action_index, 1);
        assert_eq!(d.action, "Cook Meal");
        assert_eq!(d.outcome, 5.0);
        assert_eq!(d.history, vec![1]);
        assert_eq!(
            d.record,
            DecisionRecord::new(
                "foodDelivery",
                "day",
                "minimax",
                "Cook Meal",
                5.0,
                "2024-03-20T10:00:00.000Z",
            )
        );
    }

    #[test]
    fn outcome_comes_from_the_chosen_row() {
        let mut e = DecisionEngine::with_parts(
            GameCatalog::builtin().unwrap(),
            SystemClock,
            UniformSampler::seeded(3),
        );
        for _ in 0..50 {
            let d = e.decide("foodDelivery", "month", "nashEquilibrium", &[]).unwrap();
            assert_eq!(d.action, "Cancel Subscriptions");
            assert!(d.outcome == 50.0 || d.outcome == 100.0);
        }
    }

    #[test]
    fn tit_for_tat_reads_history() {
        let mut e = engine(0);
        let first = e.decide("foodDelivery", "minute", "titForTat", &[]).unwrap();
        assert_eq!(first.action, "Delay 10min");
        let second = e
            .decide("foodDelivery", "minute", "titForTat", &first.history)
            .unwrap();
        assert_eq!(second.action, "Order Now");
        assert_eq!(second.history, vec![1, 0]);
    }

    #[rstest]
    #[case::unknown_game("invalidGame", "day", "minimax")]
    #[case::unknown_timeframe("foodDelivery", "invalidTimeframe", "minimax")]
    #[case::unknown_strategy("foodDelivery", "day", "invalidStrategy")]
    fn invalid_requests_yield_none(
        #[case] game: &str,
        #[case] timeframe: &str,
        #[case] strategy: &str,
    ) {
        assert!(engine(0).decide(game, timeframe, strategy, &[]).is_none());
    }

    #[test]
    fn try_decide_explains_rejections() {
        let mut e = engine(0);
        assert_eq!(
            e.try_decide("invalidGame", "day", "minimax", &[]),
            Err(DecisionError::UnknownGame("invalidGame".to_string()))
        );
        assert!(matches!(
            e.try_decide("foodDelivery", "week", "minimax", &[]),
            Err(DecisionError::UnknownTimeframe { .. })
        ));
        assert!(matches!(
            e.try_decide("foodDelivery", "day", "random", &[]),
            Err(DecisionError::UnknownStrategy { .. })
        ));
    }

    #[test]
    fn history_is_appended_without_touching_input() {
        let history = vec![0, 1];
        let d = engine(0)
            .decide("foodDelivery", "day", "minimax", &history)
            .unwrap();
        assert_eq!(d.history.len(), history.len() + 1);
        assert_eq!(&d.history[..2], history.as_slice());
        assert_eq!(*d.history.last().unwrap(), d.action_index);
        assert_eq!(history, vec![0, 1]);
    }

    #[test]
    fn query_surface_matches_catalog() {
        let e = engine(0);
        assert_eq!(e.list_games(), e.catalog().list_games());
        assert_eq!(e.list_timeframes("taskEffort"), vec!["minute", "day", "week", "month"]);
        assert_eq!(e.list_actions("taskEffort", "day"), vec!["Low Effort", "High Effort"]);
        assert_eq!(e.list_strategies("productivity").len(), 3);
    }
}
