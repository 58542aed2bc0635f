use std::fmt::Write;

use crate::storage::workout_log::SavedWorkoutLog;
use crate::util::dash_if_empty;

/// Render saved workout logs as a markdown document.
///
/// Returns the markdown content as a string. The caller decides where to save it.
pub fn generate_report(logs: &[SavedWorkoutLog]) -> String {
    let mut md = String::new();

    md.push_str("# Workout Log\n\n");
    let _ = writeln!(
        md,
        "Generated: {}  ",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(md, "Workouts: {}\n", logs.len());

    if logs.is_empty() {
        md.push_str("No workouts saved yet.\n");
        return md;
    }

    md.push_str("## Summary\n\n");
    md.push_str("| Date | Workout | Exercises | Sets | Volume (kg) |\n");
    md.push_str("|------|---------|-----------|------|-------------|\n");
    for log in logs {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {:.1} |",
            log.date.format("%Y-%m-%d"),
            escape_cell(&log.name),
            log.exercises.len(),
            log.total_sets(),
            log.total_volume(),
        );
    }
    md.push('\n');

    md.push_str("---\n\n");

    for log in logs {
        let _ = writeln!(
            md,
            "## {} — {}\n",
            log.name,
            log.date.format("%Y-%m-%d %H:%M UTC")
        );
        for exercise in &log.exercises {
            let _ = writeln!(md, "### {}\n", exercise.name);
            md.push_str("| Set | Reps | Weight (kg) |\n");
            md.push_str("|-----|------|-------------|\n");
            for (i, set) in exercise.sets.iter().enumerate() {
                let _ = writeln!(
                    md,
                    "| {} | {} | {} |",
                    i + 1,
                    dash_if_empty(&set.reps),
                    dash_if_empty(&set.weight),
                );
            }
            md.push('\n');
        }
    }

    md
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
