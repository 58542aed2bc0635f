pub mod markdown;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;

use crate::paths;
use crate::storage::store::LogStore;
use crate::storage::workout_log::SavedWorkoutLog;
use crate::util::dash_if_empty;

/// Logs saved on or after `since`, keeping only the newest `last` of them.
pub fn select_logs(
    mut logs: Vec<SavedWorkoutLog>,
    since: Option<NaiveDate>,
    last: Option<usize>,
) -> Vec<SavedWorkoutLog> {
    if let Some(since) = since {
        logs.retain(|l| l.date.date_naive() >= since);
    }
    if let Some(n) = last {
        let skip = logs.len().saturating_sub(n);
        logs.drain(..skip);
    }
    logs
}

/// Print saved workouts to stdout, oldest first.
pub fn print_history(store: &LogStore, since: Option<NaiveDate>, last: Option<usize>) -> Result<()> {
    let logs = select_logs(store.load_logs()?, since, last);

    if logs.is_empty() {
        println!("No saved workouts found.");
        return Ok(());
    }

    println!();
    println!("{}", style("=== Workout History ===").bold());

    for log in &logs {
        println!();
        println!(
            "  {}  {}  {}",
            style(log.date.format("%Y-%m-%d %H:%M")).dim(),
            style(&log.name).cyan().bold(),
            style(format!(
                "{} exercises, {} sets, {:.1} kg",
                log.exercises.len(),
                log.total_sets(),
                log.total_volume()
            ))
            .dim()
        );
        for exercise in &log.exercises {
            let sets: Vec<String> = exercise
                .sets
                .iter()
                .map(|s| format!("{}×{}", dash_if_empty(&s.reps), dash_if_empty(&s.weight)))
                .collect();
            println!("    {:20} {}", style(&exercise.name).bold(), sets.join("  "));
        }
    }

    println!();
    println!("  {} workouts", style(logs.len()).green().bold());
    Ok(())
}

/// Write every saved workout as markdown. Returns the path written.
pub fn export_markdown(store: &LogStore, output: Option<&Path>) -> Result<PathBuf> {
    let logs = store.load_logs()?;
    let md = markdown::generate_report(&logs);

    let path = match output {
        Some(p) => p.to_path_buf(),
        None => paths::export_path(&chrono::Local::now().date_naive()),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(&path, md)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;

    println!(
        "Exported {} workouts to {}",
        logs.len(),
        style(path.display()).green()
    );
    Ok(path)
}
