//! GameCatalog - ゲーム定義の登録と参照
//!
//! Built once at startup and read-only afterwards. All `list_*` lookups are
//! total: an unknown key yields an empty list rather than an error.

pub mod builtin;

use crate::domain::{CatalogError, Game, Timeframe};

#[derive(Debug, Clone, PartialEq)]
pub struct GameCatalog {
    games: Vec<Game>,
}

impl GameCatalog {
    /// Build a catalog, rejecting duplicate game ids.
    pub fn new(games: Vec<Game>) -> Result<Self, CatalogError> {
        let mut catalog = Self { games: Vec::new() };
        for game in games {
            catalog.insert(game)?;
        }
        Ok(catalog)
    }

    /// `foodDelivery`, `productivity` and `taskEffort`.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::all()?)
    }

    /// Append extra games (e.g. from config) after the existing ones.
    pub fn with_games(mut self, games: Vec<Game>) -> Result<Self, CatalogError> {
        for game in games {
            self.insert(game)?;
        }
        Ok(self)
    }

    fn insert(&mut self, game: Game) -> Result<(), CatalogError> {
        if self.game(game.id()).is_some() {
            return Err(CatalogError::DuplicateGame(game.id().to_string()));
        }
        self.games.push(game);
        Ok(())
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id() == id)
    }

    pub fn timeframe(&self, game: &str, timeframe: &str) -> Option<&Timeframe> {
        self.game(game)?.timeframe(timeframe)
    }

    pub fn list_games(&self) -> Vec<&str> {
        self.games.iter().map(Game::id).collect()
    }

    pub fn list_timeframes(&self, game: &str) -> Vec<&str> {
        self.game(game)
            .map(|g| g.timeframes().iter().map(Timeframe::name).collect())
            .unwrap_or_default()
    }

    pub fn list_actions(&self, game: &str, timeframe: &str) -> Vec<&str> {
        self.timeframe(game, timeframe)
            .map(|tf| tf.actions().iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn list_strategies(&self, game: &str) -> Vec<&str> {
        self.game(game)
            .map(|g| g.strategies().iter().map(|s| s.name()).collect())
            .unwrap_or_default()
    }

    /// Resolve an action label back to its index.
    pub fn action_index(&self, game: &str, timeframe: &str, action: &str) -> Option<usize> {
        self.timeframe(game, timeframe)?.action_index(action)
    }
}
