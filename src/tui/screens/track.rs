use chrono::Utc;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{error, info};

use crate::storage::store::LogStore;
use crate::tui::app::{Action, View};
use crate::tui::theme::Palette;
use crate::util::dash_if_empty;
use crate::workouts::tracker::{SetField, TrackerForm};

pub const SAVED_MESSAGE: &str = "Workout saved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    WorkoutName,
    ExerciseName,
    Set(usize, SetField),
    Exercises,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Saved,
    Hint(&'static str),
}

/// "Track Workout" form: name the session, compose exercises set by set, save.
pub struct TrackScreen {
    form: TrackerForm,
    focus: Focus,
    selected: usize,
    status: Option<Status>,
}

impl Default for TrackScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackScreen {
    pub fn new() -> Self {
        Self {
            form: TrackerForm::new(),
            focus: Focus::WorkoutName,
            selected: 0,
            status: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &mut LogStore) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.save(store),
                KeyCode::Char('n') => {
                    self.status = None;
                    self.form.add_set();
                    self.focus = Focus::Set(self.form.draft().sets.len() - 1, SetField::Reps);
                }
                KeyCode::Char('x') => {
                    if let Focus::Set(i, field) = self.focus {
                        if self.form.remove_set(i) {
                            let last = self.form.draft().sets.len() - 1;
                            self.focus = Focus::Set(i.min(last), field);
                        }
                    }
                }
                _ => {}
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => return Action::Navigate(View::Home),
            KeyCode::Tab => self.focus = self.next_focus(),
            KeyCode::BackTab => self.focus = self.prev_focus(),
            KeyCode::Up => self.move_vertical(false),
            KeyCode::Down => self.move_vertical(true),
            KeyCode::Enter if self.focus != Focus::Exercises => {
                if self.form.add_exercise().is_some() {
                    self.status = None;
                    self.selected = self.form.exercises().len() - 1;
                    self.focus = Focus::ExerciseName;
                }
            }
            KeyCode::Delete if self.focus == Focus::Exercises => {
                if let Some(ex) = self.form.exercises().get(self.selected) {
                    let id = ex.id;
                    self.form.remove_exercise(id);
                    self.selected = self
                        .selected
                        .min(self.form.exercises().len().saturating_sub(1));
                }
            }
            KeyCode::Char('t') if self.focus == Focus::Exercises => return Action::ToggleTheme,
            KeyCode::Char(c) => self.edit(|s| s.push(c)),
            KeyCode::Backspace => self.edit(|s| {
                s.pop();
            }),
            _ => {}
        }
        Action::None
    }

    /// Apply a text edit to whichever field has focus. Set fields only take numbers.
    fn edit(&mut self, op: impl FnOnce(&mut String)) {
        match self.focus {
            Focus::WorkoutName => op(&mut self.form.workout_name),
            Focus::ExerciseName => op(self.form.draft_name_mut()),
            Focus::Set(i, field) => {
                let Some(set) = self.form.draft().sets.get(i) else {
                    return;
                };
                let mut value = match field {
                    SetField::Reps => set.reps.clone(),
                    SetField::Weight => set.weight.clone(),
                };
                op(&mut value);
                if !self.form.update_set(i, field, &value) {
                    return;
                }
            }
            Focus::Exercises => return,
        }
        self.status = None;
    }

    fn save(&mut self, store: &mut LogStore) {
        match self.form.save_workout(store, Utc::now()) {
            Ok(Some(log)) => {
                info!(id = log.id, name = %log.name, exercises = log.exercises.len(), "workout saved");
                self.status = Some(Status::Saved);
                self.focus = Focus::WorkoutName;
                self.selected = 0;
            }
            Ok(None) => {
                self.status = Some(Status::Hint(
                    "Name the workout and add at least one exercise first",
                ))
            }
            Err(e) => {
                error!(error = %e, "failed to save workout");
                self.status = None;
            }
        }
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::WorkoutName, Focus::ExerciseName];
        for i in 0..self.form.draft().sets.len() {
            order.push(Focus::Set(i, SetField::Reps));
            order.push(Focus::Set(i, SetField::Weight));
        }
        order.push(Focus::Exercises);
        order
    }

    fn next_focus(&self) -> Focus {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        order[(pos + 1) % order.len()]
    }

    fn prev_focus(&self) -> Focus {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        order[(pos + order.len() - 1) % order.len()]
    }

    fn move_vertical(&mut self, down: bool) {
        match self.focus {
            Focus::Exercises => {
                let last = self.form.exercises().len().saturating_sub(1);
                self.selected = if down {
                    (self.selected + 1).min(last)
                } else {
                    self.selected.saturating_sub(1)
                };
            }
            Focus::Set(i, field) => {
                let last = self.form.draft().sets.len() - 1;
                let i = if down { (i + 1).min(last) } else { i.saturating_sub(1) };
                self.focus = Focus::Set(i, field);
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let outer = Block::default()
            .title(" Track Workout ")
            .borders(Borders::ALL)
            .style(palette.base());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(1), // status
            Constraint::Length(1), // key hint
        ])
        .split(inner);
        let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        self.render_form(frame, cols[0], palette);
        self.render_exercises(frame, cols[1], palette);

        let status = match &self.status {
            Some(Status::Saved) => Span::styled(
                format!("  {SAVED_MESSAGE}"),
                Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
            ),
            Some(Status::Hint(msg)) => Span::styled(format!("  {msg}"), palette.muted()),
            None => Span::raw(""),
        };
        frame.render_widget(Paragraph::new(Line::from(status)), rows[1]);

        let key = palette.key();
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("  [Tab]", key),
                Span::raw(" field  "),
                Span::styled("[Enter]", key),
                Span::raw(" add exercise  "),
                Span::styled("[^N]", key),
                Span::raw(" add set  "),
                Span::styled("[^X]", key),
                Span::raw(" remove set  "),
                Span::styled("[Del]", key),
                Span::raw(" remove exercise  "),
                Span::styled(
                    "[^S]",
                    if self.form.can_save() { key } else { palette.muted() },
                ),
                Span::raw(" save  "),
                Span::styled("[Esc]", Style::default().fg(palette.danger)),
                Span::raw(" back"),
            ])),
            rows[2],
        );
    }

    fn render_form(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let value = |text: &str, focused: bool| {
            if focused {
                Span::styled(format!("{text}|"), palette.highlight())
            } else {
                Span::styled(text.to_string(), Style::default().fg(palette.fg))
            }
        };

        let draft = self.form.draft();
        let mut lines = vec![
            Line::from(vec![
                Span::styled("  Workout   ", palette.muted()),
                value(&self.form.workout_name, self.focus == Focus::WorkoutName),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Exercise  ", palette.muted()),
                value(&draft.name, self.focus == Focus::ExerciseName),
            ]),
        ];
        for (i, set) in draft.sets.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("    Set {:<3}", i + 1), palette.muted()),
                Span::raw("reps "),
                value(&set.reps, self.focus == Focus::Set(i, SetField::Reps)),
                Span::raw("  kg "),
                value(&set.weight, self.focus == Focus::Set(i, SetField::Weight)),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).block(Block::default().title(" New Exercise ").borders(Borders::ALL)),
            area,
        );
    }

    fn render_exercises(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let focused = self.focus == Focus::Exercises;
        let mut lines = Vec::new();
        if self.form.exercises().is_empty() {
            lines.push(Line::from(Span::styled("  No exercises yet", palette.muted())));
        }
        for (i, ex) in self.form.exercises().iter().enumerate() {
            let mut style = Style::default().fg(palette.fg).add_modifier(Modifier::BOLD);
            if focused && i == self.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(Span::styled(format!(" {}", ex.name), style)));
            let sets: Vec<String> = ex
                .sets
                .iter()
                .map(|s| format!("{}×{}", dash_if_empty(&s.reps), dash_if_empty(&s.weight)))
                .collect();
            lines.push(Line::from(Span::styled(
                format!("   {}", sets.join("  ")),
                palette.muted(),
            )));
        }

        let title = format!(" Exercises ({}) ", self.form.exercises().len());
        let block = Block::default().title(title).borders(Borders::ALL);
        let block = if focused {
            block.border_style(palette.highlight())
        } else {
            block
        };
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
