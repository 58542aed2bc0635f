use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "liftclock")]
#[command(about = "Workout countdown timer and lifting log for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive timer (default)
    Run {
        /// Starting view: "/", "/workouts" or "/track"
        #[arg(long, default_value = "/")]
        view: String,
    },

    /// Print saved workouts
    History {
        /// Only the N most recent workouts
        #[arg(long)]
        last: Option<usize>,

        /// Only workouts on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,
    },

    /// Export saved workouts as markdown
    Export {
        /// Output file (default: exports/workouts_<date>.md in the data directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Show where config, data and logs live
    Paths,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["liftclock"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_with_view() {
        let cli = Cli::try_parse_from(["liftclock", "run", "--view", "/track"]).unwrap();
        match cli.command {
            Some(Command::Run { view }) => assert_eq!(view, "/track"),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn history_filters() {
        let cli =
            Cli::try_parse_from(["liftclock", "history", "--last", "3", "--since", "2026-10-01"])
                .unwrap();
        match cli.command {
            Some(Command::History { last, since }) => {
                assert_eq!(last, Some(3));
                assert_eq!(since.as_deref(), Some("2026-10-01"));
            }
            _ => panic!("expected history"),
        }
    }
}
