use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::tui::event::AppEvent;

/// A cancellable once-per-interval callback for the countdown.
///
/// Each arming gets a fresh generation number. The worker thread stamps its
/// events with that generation and exits as soon as the shared counter moves
/// on. Events already sitting in the channel when a schedule is cancelled are
/// rejected by [`TickScheduler::accepts`], so a stale tick can never reach a
/// paused timer or a different workout.
pub struct TickScheduler {
    tx: mpsc::Sender<AppEvent>,
    interval: Duration,
    current: Arc<AtomicU64>,
    armed: bool,
}

impl TickScheduler {
    pub fn new(tx: mpsc::Sender<AppEvent>, interval: Duration) -> Self {
        Self {
            tx,
            interval,
            current: Arc::new(AtomicU64::new(0)),
            armed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn generation(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    /// Start a new schedule, replacing any live one. Returns its generation.
    pub fn arm(&mut self) -> u64 {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.armed = true;

        let tx = self.tx.clone();
        let current = Arc::clone(&self.current);
        let interval = self.interval;
        debug!(generation, interval_ms = interval.as_millis() as u64, "countdown armed");

        std::thread::spawn(move || {
            let mut next = Instant::now() + interval;
            loop {
                std::thread::sleep(next.saturating_duration_since(Instant::now()));
                if current.load(Ordering::SeqCst) != generation {
                    trace!(generation, "countdown worker retired");
                    return;
                }
                if tx.send(AppEvent::Countdown(generation)).is_err() {
                    return;
                }
                next += interval;
            }
        });

        generation
    }

    /// Stop the live schedule. Pending events from it will be refused.
    pub fn cancel(&mut self) {
        if !self.armed {
            return;
        }
        let retired = self.current.fetch_add(1, Ordering::SeqCst);
        self.armed = false;
        debug!(generation = retired, "countdown cancelled");
    }

    /// Arm while the timer runs, cancel once it stops.
    pub fn sync(&mut self, running: bool) {
        match (running, self.armed) {
            (true, false) => {
                self.arm();
            }
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    /// Whether a countdown event belongs to the live schedule.
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_armed() && generation == self.generation()
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
