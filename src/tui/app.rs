use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, trace};

use super::event::{AppEvent, EventHandler};
use super::screens::home::HomeScreen;
use super::screens::library::LibraryScreen;
use super::screens::track::TrackScreen;
use super::theme::Theme;
use super::Tui;
use crate::config::AppConfig;
use crate::storage::store::LogStore;
use crate::timer::schedule::TickScheduler;
use crate::timer::session::TimerSession;
use crate::voice::{self, CountdownAnnouncer};
use crate::workouts::catalog::WorkoutCatalog;

/// The three routed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Library,
    Track,
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Library => "/workouts",
            View::Track => "/track",
        }
    }

    /// Unknown paths fall back to the home view.
    pub fn from_path(path: &str) -> View {
        match path.trim_end_matches('/') {
            "/workouts" | "workouts" => View::Library,
            "/track" | "track" => View::Track,
            _ => View::Home,
        }
    }
}

/// What a screen asks the loop to do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Navigate(View),
    ToggleTheme,
    Quit,
}

/// State shared by every view.
pub struct AppContext {
    pub theme: Theme,
    pub config: AppConfig,
    pub store: LogStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: LogStore) -> Self {
        Self {
            theme: config.ui.theme,
            config,
            store,
        }
    }
}

fn is_theme_shortcut(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t')
}

/// Run the interactive app until the user quits.
pub fn run(terminal: &mut Tui, ctx: &mut AppContext, start: View) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(33));
    let mut scheduler = TickScheduler::new(events.sender(), ctx.config.timer.tick_interval());

    let timer = &ctx.config.timer;
    let catalog = WorkoutCatalog::new(&timer.default_workout, timer.default_minutes);
    let announcer = CountdownAnnouncer::new(voice::from_config(&ctx.config.voice));
    let mut home = HomeScreen::new(
        TimerSession::new(catalog, announcer),
        timer.ring_circumference,
    );
    let mut library = LibraryScreen::new();
    let mut track = TrackScreen::new();

    let mut view = start;
    if view == View::Library {
        library.refresh(&ctx.store);
    }
    info!(view = view.path(), theme = ctx.theme.label(), "app started");

    loop {
        let palette = ctx.theme.palette();
        terminal.draw(|frame| {
            let area = frame.area();
            match view {
                View::Home => home.render(frame, area, &palette),
                View::Library => library.render(frame, area, &palette),
                View::Track => track.render(frame, area, &palette),
            }
        })?;

        let action = match events.next()? {
            AppEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if is_theme_shortcut(&key) {
                    Action::ToggleTheme
                } else {
                    match view {
                        View::Home => home.handle_key(key),
                        View::Library => library.handle_key(key),
                        View::Track => track.handle_key(key, &mut ctx.store),
                    }
                }
            }
            AppEvent::Countdown(generation) => {
                if scheduler.accepts(generation) {
                    home.session.tick();
                } else {
                    trace!(generation, "stale countdown tick dropped");
                }
                Action::None
            }
            _ => Action::None,
        };

        match action {
            Action::None => {}
            Action::Quit => break,
            Action::ToggleTheme => {
                ctx.theme = ctx.theme.toggled();
                debug!(theme = ctx.theme.label(), "theme toggled");
            }
            Action::Navigate(next) => {
                if view == View::Home && next != View::Home {
                    home.leave();
                }
                if next == View::Library {
                    library.refresh(&ctx.store);
                }
                debug!(from = view.path(), to = next.path(), "navigate");
                view = next;
            }
        }

        scheduler.sync(home.session.is_running());
    }

    scheduler.cancel();
    info!("app exited");
    Ok(())
}
