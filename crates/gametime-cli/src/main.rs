mod args;
mod logging;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use gametime_core::app::{self, GameSummary};
use gametime_core::impls::CsvHistoryStore;
use gametime_core::{AppConfig, DecisionEngine, GameCatalog, SessionState};
use tracing::{error, info};

use crate::args::{Args, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::setup_tracing() {
        eprintln!("failed to initialise logging: {e}");
    }
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::read_config(args.config.as_deref())?;
    let catalog = config.catalog()?;
    let store = CsvHistoryStore::new(args.history.unwrap_or(config.history_file));

    match args.command {
        Command::Games => print_list(catalog.list_games()),
        Command::Timeframes { game } => print_list(catalog.list_timeframes(&game)),
        Command::Actions { game, timeframe } => print_list(catalog.list_actions(&game, &timeframe)),
        Command::Strategies { game } => print_list(catalog.list_strategies(&game)),
        Command::Decide {
            game,
            timeframe,
            strategy,
            dry_run,
        } => {
            let mut session = app::restore(&store, &catalog).await?;
            let mut engine = DecisionEngine::new(catalog);
            let decision = engine.try_decide(&game, &timeframe, &strategy, session.history())?;

            println!("Decision: {}", decision.action);
            println!("Outcome:  {}", decision.outcome);
            session.record(&decision);

            print_summary(&session.summary(&game));
            if dry_run {
                info!("Dry run, history not written");
            } else {
                app::persist(&store, &session).await?;
            }
        }
        Command::Stats { game, json } => {
            let session = app::restore(&store, &catalog).await?;
            let summaries = match game {
                Some(g) => vec![session.summary(&g)],
                None => session.summaries(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else if summaries.is_empty() {
                println!("No decisions recorded yet.");
            } else {
                summaries.iter().for_each(print_summary);
            }
        }
        Command::History => {
            let session = app::restore(&store, &catalog).await?;
            print_history(&session, &catalog);
        }
    }
    Ok(())
}

fn print_list(items: Vec<&str>) {
    for item in items {
        println!("{item}");
    }
}

fn print_summary(summary: &GameSummary) {
    println!();
    println!("== {} ==", summary.game);
    println!("Decisions:        {}", summary.decisions);
    println!("Cumulative score: {}", summary.cumulative_score);
    for p in &summary.patterns {
        let streak = summary.streaks.get(&p.key).copied().unwrap_or(0);
        println!("  {:<40} x{:<4} streak {}", p.key, p.count, streak);
    }
}

fn print_history(session: &SessionState, catalog: &GameCatalog) {
    if session.is_empty() {
        println!("No decisions recorded yet.");
        return;
    }
    for (record, index) in session.records().iter().zip(session.action_indices()) {
        let of = catalog
            .list_actions(&record.game, &record.timeframe)
            .len();
        let position = match index {
            Some(i) => format!("{}/{}", i + 1, of),
            None => "?".to_string(),
        };
        println!(
            "{}  {:<14} {:<8} {:<16} {} ({}) -> {}",
            record.timestamp,
            record.game,
            record.timeframe,
            record.strategy,
            record.action,
            position,
            record.outcome
        );
    }
}
