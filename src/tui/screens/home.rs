use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::timer::session::TimerSession;
use crate::tui::app::{Action, View};
use crate::tui::theme::Palette;
use crate::tui::widgets::progress_ring::ProgressRingWidget;
use crate::tui::widgets::timer::TimerWidget;

/// What the keyboard is currently driving on the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    AddName,
    AddMinutes,
}

/// Timer view: progress ring, controls, add-workout form and workout list.
pub struct HomeScreen {
    pub session: TimerSession,
    circumference: f64,
    cursor: usize,
    mode: Mode,
    name_buf: String,
    minutes_buf: String,
}

impl HomeScreen {
    pub fn new(session: TimerSession, circumference: f64) -> Self {
        Self {
            session,
            circumference,
            cursor: 0,
            mode: Mode::Browse,
            name_buf: String::new(),
            minutes_buf: "1".into(),
        }
    }

    pub fn is_typing(&self) -> bool {
        self.mode != Mode::Browse
    }

    /// The view is going away; stop the countdown with it.
    pub fn leave(&mut self) {
        self.session.pause();
        self.mode = Mode::Browse;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match self.mode {
            Mode::Browse => return self.handle_browse(key),
            Mode::AddName => match key.code {
                KeyCode::Esc => self.mode = Mode::Browse,
                KeyCode::Tab | KeyCode::Enter => self.mode = Mode::AddMinutes,
                KeyCode::Backspace => {
                    self.name_buf.pop();
                }
                KeyCode::Char(c) => self.name_buf.push(c),
                _ => {}
            },
            Mode::AddMinutes => match key.code {
                KeyCode::Esc => self.mode = Mode::Browse,
                KeyCode::Tab | KeyCode::BackTab => self.mode = Mode::AddName,
                KeyCode::Backspace => {
                    self.minutes_buf.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() => self.minutes_buf.push(c),
                KeyCode::Enter => self.submit_workout(),
                _ => {}
            },
        }
        Action::None
    }

    fn handle_browse(&mut self, key: KeyEvent) -> Action {
        let len = self.session.catalog().len();
        match key.code {
            KeyCode::Char(' ') => self.session.toggle(),
            KeyCode::Char('r') => self.session.reset(),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(len.saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(w) = self.session.catalog().workouts().get(self.cursor) {
                    let id = w.id;
                    self.session.select_workout(id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(w) = self.session.catalog().workouts().get(self.cursor) {
                    let id = w.id;
                    self.session.remove_workout(id);
                    self.cursor = self.cursor.min(self.session.catalog().len() - 1);
                }
            }
            KeyCode::Char('a') => {
                self.name_buf.clear();
                self.minutes_buf = "1".into();
                self.mode = Mode::AddName;
            }
            KeyCode::Char('l') => return Action::Navigate(View::Library),
            KeyCode::Char('w') => return Action::Navigate(View::Track),
            KeyCode::Char('t') => return Action::ToggleTheme,
            KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }
        Action::None
    }

    fn submit_workout(&mut self) {
        let minutes = self.minutes_buf.parse::<u32>().unwrap_or(0);
        if let Some(id) = self.session.add_workout(&self.name_buf, minutes) {
            self.cursor = self.session.catalog().position(id).unwrap_or(0);
            self.name_buf.clear();
            self.minutes_buf = "1".into();
            self.mode = Mode::Browse;
        }
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let outer = Block::default()
            .title(" Workout Timer ")
            .borders(Borders::ALL)
            .style(palette.base());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // subtitle
            Constraint::Min(10),   // ring + side panel
            Constraint::Length(1), // key hint
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new("  Minimal · Focused · 1-Minute Sets").style(palette.muted()),
            rows[0],
        );

        let cols = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        let left = Layout::vertical([Constraint::Min(8), Constraint::Length(4)]).split(cols[0]);
        let engine = self.session.engine();
        let active = self.session.active();

        frame.render_widget(
            ProgressRingWidget::new(&active.name, engine.remaining(), engine.total(), *palette)
                .circumference(self.circumference),
            left[0],
        );
        frame.render_widget(
            TimerWidget::new(engine.remaining(), engine.total(), *palette)
                .running(engine.is_running()),
            left[1],
        );

        let right = Layout::vertical([Constraint::Length(5), Constraint::Min(4)]).split(cols[1]);
        self.render_add_form(frame, right[0], palette);
        self.render_list(frame, right[1], palette);

        frame.render_widget(Paragraph::new(Line::from(self.hint(palette))), rows[2]);
    }

    fn render_add_form(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let field = |label: &str, value: &str, focused: bool| {
            let style = if focused {
                palette.highlight()
            } else {
                Style::default().fg(palette.fg)
            };
            let cursor = if focused { "|" } else { "" };
            Line::from(vec![
                Span::styled(format!("  {label:9}"), palette.muted()),
                Span::styled(format!("{value}{cursor}"), style),
            ])
        };

        let lines = vec![
            field("Name", &self.name_buf, self.mode == Mode::AddName),
            field("Minutes", &self.minutes_buf, self.mode == Mode::AddMinutes),
        ];
        let title = if self.is_typing() {
            " Add Workout (editing) "
        } else {
            " Add Workout "
        };
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL)),
            area,
        );
    }

    fn render_list(&self, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
        let active_id = self.session.catalog().active_id();
        let rows: Vec<Row> = self
            .session
            .catalog()
            .workouts()
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let marker = if w.id == active_id { "▶" } else { " " };
                let mut style = Style::default().fg(palette.fg);
                if w.id == active_id {
                    style = style.fg(palette.accent).add_modifier(Modifier::BOLD);
                }
                if i == self.cursor && !self.is_typing() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Row::new(vec![
                    format!(" {marker}"),
                    w.name.clone(),
                    format!("{} min", w.minutes),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [Constraint::Length(3), Constraint::Min(10), Constraint::Length(8)],
        )
        .block(Block::default().title(" Workouts ").borders(Borders::ALL));
        frame.render_widget(table, area);
    }

    fn hint(&self, palette: &Palette) -> Vec<Span<'static>> {
        let key = palette.key();
        if self.is_typing() {
            return vec![
                Span::styled("  [Tab]", key),
                Span::raw(" switch field  "),
                Span::styled("[Enter]", key),
                Span::raw(" add  "),
                Span::styled("[Esc]", Style::default().fg(palette.danger)),
                Span::raw(" cancel"),
            ];
        }
        let start = if self.session.is_running() { " pause  " } else { " start  " };
        vec![
            Span::styled("  [Space]", key),
            Span::raw(start),
            Span::styled("[r]", key),
            Span::raw(" reset  "),
            Span::styled("[Enter]", key),
            Span::raw(" select  "),
            Span::styled("[a]", key),
            Span::raw(" add  "),
            Span::styled("[d]", key),
            Span::raw(" delete  "),
            Span::styled("[l]", key),
            Span::raw(" library  "),
            Span::styled("[w]", key),
            Span::raw(" track  "),
            Span::styled("[t]", key),
            Span::raw(" theme  "),
            Span::styled("[q]", Style::default().fg(palette.danger)),
            Span::raw(" quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;
    use crate::voice::{CountdownAnnouncer, SilentVoice};
    use crate::workouts::catalog::WorkoutCatalog;

    fn screen() -> HomeScreen {
        let session = TimerSession::new(
            WorkoutCatalog::default(),
            CountdownAnnouncer::new(Box::new(SilentVoice)),
        );
        HomeScreen::new(session, 440.0)
    }

    fn press(s: &mut HomeScreen, code: KeyCode) -> Action {
        s.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(s: &mut HomeScreen, text: &str) {
        for c in text.chars() {
            press(s, KeyCode::Char(c));
        }
    }

    #[test]
    fn space_toggles_the_timer() {
        let mut s = screen();
        press(&mut s, KeyCode::Char(' '));
        assert!(s.session.is_running());
        press(&mut s, KeyCode::Char(' '));
        assert!(!s.session.is_running());
    }

    #[test]
    fn add_workout_through_the_form() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('a'));
        assert!(s.is_typing());
        type_text(&mut s, "Legs");
        press(&mut s, KeyCode::Tab);
        press(&mut s, KeyCode::Backspace);
        type_text(&mut s, "5");
        press(&mut s, KeyCode::Enter);

        assert!(!s.is_typing());
        assert_eq!(s.session.active().name, "Legs");
        assert_eq!(s.session.engine().remaining(), 300);
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn invalid_workout_keeps_form_open() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('a'));
        press(&mut s, KeyCode::Enter); // to minutes with an empty name
        press(&mut s, KeyCode::Enter);
        assert!(s.is_typing());
        assert_eq!(s.session.catalog().len(), 1);
    }

    #[test]
    fn typing_q_in_the_form_does_not_quit() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('a'));
        assert_eq!(press(&mut s, KeyCode::Char('q')), Action::None);
        assert_eq!(s.name_buf, "q");
    }

    #[test]
    fn delete_keeps_cursor_in_bounds() {
        let mut s = screen();
        s.session.add_workout("Legs", 5);
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Char('d'));
        assert_eq!(s.session.catalog().len(), 1);
        assert_eq!(s.cursor, 0);
        // The sole workout stays
        press(&mut s, KeyCode::Char('d'));
        assert_eq!(s.session.catalog().len(), 1);
    }

    #[test]
    fn enter_selects_highlighted_workout() {
        let mut s = screen();
        s.session.add_workout("Legs", 5);
        press(&mut s, KeyCode::Up);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.session.active().id, 1);
        assert_eq!(s.session.engine().remaining(), 60);
    }

    #[test]
    fn navigation_keys() {
        let mut s = screen();
        assert_eq!(press(&mut s, KeyCode::Char('l')), Action::Navigate(View::Library));
        assert_eq!(press(&mut s, KeyCode::Char('w')), Action::Navigate(View::Track));
        assert_eq!(press(&mut s, KeyCode::Char('t')), Action::ToggleTheme);
        assert_eq!(press(&mut s, KeyCode::Char('q')), Action::Quit);
    }

    #[test]
    fn leaving_pauses() {
        let mut s = screen();
        press(&mut s, KeyCode::Char(' '));
        s.leave();
        assert!(!s.session.is_running());
    }
}
