//! Domain model (games, payoffs, decisions, records, errors).

pub mod decision;
pub mod errors;
pub mod game;
pub mod payoff;
pub mod record;

pub use decision::Decision;
pub use errors::{CatalogError, DecisionError};
pub use game::{Game, Timeframe};
pub use payoff::PayoffMatrix;
pub use record::DecisionRecord;
