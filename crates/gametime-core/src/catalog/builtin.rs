//! Built-in games.
//!
//! Each action has two outcomes, `[worse, better]`. Negative values are
//! costs or regret, positive values are benefit or satisfaction.

use crate::domain::{CatalogError, Game, Timeframe};

pub fn food_delivery() -> Result<Game, CatalogError> {
    Game::new(
        "foodDelivery",
        vec![
            // impulse control
            Timeframe::from_table("minute", &["Order Now", "Delay 10min"], &[
                &[-3.0, -1.0],
                &[1.0, 2.0],
            ])?,
            // meal planning
            Timeframe::from_table("day", &["Order Takeout", "Cook Meal"], &[
                &[-5.0, -2.0],
                &[3.0, 5.0],
            ])?,
            // subscription management
            Timeframe::from_table(
                "month",
                &["Subscribe to Service", "Cancel Subscriptions"],
                &[&[-30.0, -10.0], &[50.0, 100.0]],
            )?,
        ],
    )
}

pub fn productivity() -> Result<Game, CatalogError> {
    Game::new(
        "productivity",
        vec![
            Timeframe::from_table("minute", &["Check Notifications", "Stay Focused"], &[
                &[-2.0, 1.0],
                &[1.0, 3.0],
            ])?,
            Timeframe::from_table("day", &["Shallow Work", "Deep Work"], &[
                &[-1.0, 1.0],
                &[2.0, 4.0],
            ])?,
            Timeframe::from_table("week", &["Overcommit", "Plan Priorities"], &[
                &[-8.0, -2.0],
                &[4.0, 10.0],
            ])?,
        ],
    )
}

/// Effort versus outcome quality across planning horizons.
pub fn task_effort() -> Result<Game, CatalogError> {
    const ACTIONS: &[&str] = &["Low Effort", "High Effort"];
    Game::new(
        "taskEffort",
        vec![
            Timeframe::from_table("minute", ACTIONS, &[&[1.0, 0.0], &[3.0, 2.0]])?,
            Timeframe::from_table("day", ACTIONS, &[&[2.0, 1.0], &[4.0, 3.0]])?,
            Timeframe::from_table("week", ACTIONS, &[&[3.0, 2.0], &[6.0, 5.0]])?,
            Timeframe::from_table("month", ACTIONS, &[&[5.0, 3.0], &[10.0, 8.0]])?,
        ],
    )
}

pub fn all() -> Result<Vec<Game>, CatalogError> {
    Ok(vec![food_delivery()?, productivity()?, task_effort()?])
}
