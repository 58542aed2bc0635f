use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use tracing::warn;

use crate::storage::store::LogStore;
use crate::storage::workout_log::SavedWorkoutLog;
use crate::tui::app::{Action, View};
use crate::tui::theme::Palette;
use crate::util::dash_if_empty;

/// Browser over saved workout logs, newest first.
#[derive(Default)]
pub struct LibraryScreen {
    logs: Vec<SavedWorkoutLog>,
    selected: usize,
}

impl LibraryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload from storage. A read failure shows an empty library.
    pub fn refresh(&mut self, store: &LogStore) {
        self.logs = match store.load_logs() {
            Ok(logs) => logs,
            Err(e) => {
                warn!(error = %e, "failed to load saved workouts");
                Vec::new()
            }
        };
        self.logs.reverse();
        self.selected = 0;
    }

    pub fn selected(&self) -> Option<&SavedWorkoutLog> {
        self.logs.get(self.selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.logs.len().saturating_sub(1));
            }
            KeyCode::Char('w') => return Action::Navigate(View::Track),
            KeyCode::Char('t') => return Action::ToggleTheme,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => {
                return Action::Navigate(View::Home)
            }
            _ => {}
        }
        Action::None
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let outer = Block::default()
            .title(" Workout Library ")
            .borders(Borders::ALL)
            .style(palette.base());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).split(inner);

        if self.logs.is_empty() {
            frame.render_widget(
                Paragraph::new("\n  No saved workouts yet. Press [w] to track one.")
                    .style(palette.muted()),
                rows[0],
            );
        } else {
            let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);
            self.render_list(frame, cols[0], palette);
            self.render_detail(frame, cols[1], palette);
        }

        let key = palette.key();
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("  [↑↓]", key),
                Span::raw(" browse  "),
                Span::styled("[w]", key),
                Span::raw(" track  "),
                Span::styled("[t]", key),
                Span::raw(" theme  "),
                Span::styled("[Esc]", Style::default().fg(palette.danger)),
                Span::raw(" back"),
            ])),
            rows[1],
        );
    }

    fn render_list(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let rows: Vec<Row> = self
            .logs
            .iter()
            .enumerate()
            .map(|(i, log)| {
                let style = if i == self.selected {
                    palette.highlight().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(palette.fg)
                };
                Row::new(vec![
                    log.date.format("%Y-%m-%d").to_string(),
                    log.name.clone(),
                    format!("{} ex", log.exercises.len()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [Constraint::Length(11), Constraint::Min(8), Constraint::Length(6)],
        )
        .header(
            Row::new(vec!["Date", "Workout", ""])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title(format!(" Saved ({}) ", self.logs.len()))
                .borders(Borders::ALL),
        );
        frame.render_widget(table, area);
    }

    fn render_detail(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let Some(log) = self.selected() else {
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(log.name.clone(), palette.highlight())),
            Line::from(Span::styled(
                log.date.format("%Y-%m-%d %H:%M UTC").to_string(),
                palette.muted(),
            )),
            Line::from(""),
        ];
        for exercise in &log.exercises {
            lines.push(Line::from(Span::styled(
                exercise.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (n, set) in exercise.sets.iter().enumerate() {
                lines.push(Line::from(format!(
                    "  Set {}: {} reps × {} kg",
                    n + 1,
                    dash_if_empty(&set.reps),
                    dash_if_empty(&set.weight)
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "{} sets, {:.1} kg volume",
                log.total_sets(),
                log.total_volume()
            ),
            palette.muted(),
        )));

        frame.render_widget(
            Paragraph::new(lines).block(Block::default().title(" Details ").borders(Borders::ALL)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    fn log(id: u64, name: &str) -> SavedWorkoutLog {
        SavedWorkoutLog {
            id,
            name: name.into(),
            exercises: Vec::new(),
            date: Utc.with_ymd_and_hms(2026, 10, id as u32, 9, 0, 0).unwrap(),
        }
    }

    fn press(s: &mut LibraryScreen, code: KeyCode) -> Action {
        s.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn newest_first() {
        let mut store = LogStore::in_memory();
        store.append_log(&log(1, "old")).unwrap();
        store.append_log(&log(2, "new")).unwrap();

        let mut screen = LibraryScreen::new();
        screen.refresh(&store);
        assert_eq!(screen.selected().unwrap().name, "new");
        press(&mut screen, KeyCode::Down);
        assert_eq!(screen.selected().unwrap().name, "old");
        press(&mut screen, KeyCode::Down);
        assert_eq!(screen.selected().unwrap().name, "old");
    }

    #[test]
    fn empty_library_has_no_selection() {
        let mut screen = LibraryScreen::new();
        screen.refresh(&LogStore::in_memory());
        press(&mut screen, KeyCode::Down);
        assert!(screen.selected().is_none());
    }

    #[test]
    fn escape_goes_home() {
        let mut screen = LibraryScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Esc), Action::Navigate(View::Home));
    }
}
