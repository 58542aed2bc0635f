use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent};

/// Events consumed by the TUI main loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// Terminal was resized.
    #[allow(dead_code)]
    Resize(u16, u16),
    /// Periodic tick for driving render updates.
    Tick,
    /// One countdown second elapsed for the schedule with this generation.
    Countdown(u64),
}

/// Polls crossterm events and sends them to the main render loop.
///
/// Runs in a background thread. Sends Key and Resize events as they arrive,
/// plus a Tick at the render rate when no other events occur. Other producers
/// (the countdown scheduler) feed the same channel through [`EventHandler::sender`].
pub struct EventHandler {
    tx: mpsc::Sender<AppEvent>,
    rx: mpsc::Receiver<AppEvent>,
    _handle: std::thread::JoinHandle<()>,
}

impl EventHandler {
    /// Start the event polling thread.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let poll_tx = tx.clone();

        let handle = std::thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => poll_tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(w, h)) => poll_tx.send(AppEvent::Resize(w, h)),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    return;
                }
            } else if poll_tx.send(AppEvent::Tick).is_err() {
                return;
            }
        });

        Self {
            tx,
            rx,
            _handle: handle,
        }
    }

    /// A handle for pushing extra events into the loop.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }

    /// Receive the next event, blocking until one is available.
    pub fn next(&self) -> Result<AppEvent, mpsc::RecvError> {
        self.rx.recv()
    }
}
