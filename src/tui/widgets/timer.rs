use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::timer::format::{format_clock, percent_complete};
use crate::tui::theme::Palette;

/// Countdown readout: `MM:SS`, percent complete and run state.
pub struct TimerWidget {
    remaining: u32,
    total: u32,
    running: bool,
    palette: Palette,
}

impl TimerWidget {
    pub fn new(remaining: u32, total: u32, palette: Palette) -> Self {
        Self {
            remaining,
            total,
            running: false,
            palette,
        }
    }

    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }
}

impl Widget for TimerWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (state, color) = if self.remaining == 0 {
            ("done", self.palette.success)
        } else if self.running {
            ("running", self.palette.accent)
        } else {
            ("paused", self.palette.muted)
        };

        let lines = vec![
            Line::from(Span::styled(
                format_clock(self.remaining),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw(format!("{}% ", percent_complete(self.remaining, self.total))),
                Span::styled(state, self.palette.muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(self.palette.base())
            .block(Block::default().title(" Timer ").borders(Borders::ALL))
            .render(area, buf);
    }
}
