use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Recommend actions for recurring decisions with game-theory strategies.
#[derive(Parser, Debug)]
#[command(name = "gametime", version)]
pub struct Args {
    /// YAML config file (defaults to ./gametime.yml if present)
    #[arg(short, long, env = "GAMETIME_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// History CSV file (overrides the config's history-file)
    #[arg(long, env = "GAMETIME_HISTORY", global = true)]
    pub history: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available games
    Games,
    /// List the timeframes of a game
    Timeframes { game: String },
    /// List the actions of a game's timeframe
    Actions { game: String, timeframe: String },
    /// List the strategies usable in a game
    Strategies { game: String },
    /// Make a decision and append it to the history
    Decide {
        game: String,
        timeframe: String,
        strategy: String,
        /// Do not write the updated history back
        #[arg(long)]
        dry_run: bool,
    },
    /// Show cumulative scores, patterns and streaks
    Stats {
        /// Only this game
        #[arg(short, long)]
        game: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the stored history in chronological order
    History,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_decide_with_global_flags() {
        let args = Args::try_parse_from([
            "gametime",
            "decide",
            "foodDelivery",
            "day",
            "minimax",
            "--dry-run",
            "--history",
            "h.csv",
        ])
        .unwrap();
        assert_eq!(args.history, Some(PathBuf::from("h.csv")));
        match args.command {
            Command::Decide {
                game,
                timeframe,
                strategy,
                dry_run,
            } => {
                assert_eq!(game, "foodDelivery");
                assert_eq!(timeframe, "day");
                assert_eq!(strategy, "minimax");
                assert!(dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn decide_requires_three_positionals() {
        assert!(Args::try_parse_from(["gametime", "decide", "foodDelivery"]).is_err());
    }
}
