mod cli;
mod config;
mod logging;
mod paths;
mod report;
mod storage;
mod timer;
mod tui;
mod util;
mod voice;
mod workouts;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use console::style;

use storage::store::LogStore;
use tui::app::{AppContext, View};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;
    logging::init(&config.log);

    match cli.command.unwrap_or(Command::Run { view: "/".into() }) {
        Command::Run { view } => {
            let store = LogStore::open()?;
            let mut ctx = AppContext::new(config, store);

            let mut terminal = tui::init()?;
            tui::app::run(&mut terminal, &mut ctx, View::from_path(&view))
        }

        Command::History { last, since } => {
            let since = since.as_deref().map(util::parse_date).transpose()?;
            let store = LogStore::open()?;
            report::print_history(&store, since, last)
        }

        Command::Export { output } => {
            let store = LogStore::open()?;
            report::export_markdown(&store, output.as_deref())?;
            Ok(())
        }

        Command::Paths => {
            println!("  {:8} {}", style("config").bold(), paths::config_file().display());
            println!("  {:8} {}", style("data").bold(), paths::db_path().display());
            println!("  {:8} {}", style("log").bold(), paths::log_file().display());
            println!("  {:8} {}", style("exports").bold(), paths::exports_dir().display());
            Ok(())
        }
    }
}
