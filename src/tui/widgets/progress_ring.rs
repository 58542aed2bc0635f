use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders, Widget};

use crate::timer::format::format_clock;
use crate::timer::geometry::{arc_offset, ring_points};
use crate::tui::theme::Palette;

const RADIUS: f64 = 1.0;
const SAMPLES: usize = 180;
/// Half-extent of the canvas in ring units, leaving a margin around the ring.
const EXTENT: f64 = 1.25;

/// Circular countdown indicator with the clock in the middle.
///
/// The filled arc shrinks clockwise from twelve o'clock as time runs out.
pub struct ProgressRingWidget<'a> {
    title: &'a str,
    remaining: u32,
    total: u32,
    circumference: f64,
    palette: Palette,
}

impl<'a> ProgressRingWidget<'a> {
    pub fn new(title: &'a str, remaining: u32, total: u32, palette: Palette) -> Self {
        Self {
            title,
            remaining,
            total,
            circumference: 440.0,
            palette,
        }
    }

    pub fn circumference(mut self, circumference: f64) -> Self {
        self.circumference = circumference;
        self
    }
}

impl Widget for ProgressRingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .style(self.palette.base());
        let inner = block.inner(area);
        if inner.width == 0 || inner.height == 0 {
            block.render(area, buf);
            return;
        }

        // Terminal cells are about twice as tall as wide; stretch the
        // longer axis so the ring stays round.
        let aspect = inner.width as f64 / (2.0 * inner.height as f64);
        let (x_ext, y_ext) = if aspect >= 1.0 {
            (EXTENT * aspect, EXTENT)
        } else {
            (EXTENT, EXTENT / aspect)
        };

        let offset = arc_offset(self.remaining, self.total, self.circumference);
        let track = ring_points(0.0, self.circumference, RADIUS, SAMPLES);
        let fill = ring_points(offset, self.circumference, RADIUS, SAMPLES);

        let clock = format_clock(self.remaining);
        let cell_width = 2.0 * x_ext / inner.width as f64;
        let label_x = -(clock.len() as f64 / 2.0) * cell_width;
        let label_style = Style::default()
            .fg(self.palette.fg)
            .add_modifier(Modifier::BOLD);
        let palette = self.palette;

        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(palette.bg)
            .x_bounds([-x_ext, x_ext])
            .y_bounds([-y_ext, y_ext])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: palette.ring_track,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &fill,
                    color: palette.ring_fill,
                });
                ctx.print(label_x, 0.0, Span::styled(clock.clone(), label_style));
            })
            .render(area, buf);
    }
}
