use tracing::info;

use super::engine::TimerEngine;
use crate::voice::CountdownAnnouncer;
use crate::workouts::catalog::{Workout, WorkoutCatalog};

/// The home screen's model: workout catalog, countdown and voice cues.
///
/// Every change of the active workout reloads the engine, so the countdown
/// always belongs to the workout shown.
pub struct TimerSession {
    catalog: WorkoutCatalog,
    engine: TimerEngine,
    announcer: CountdownAnnouncer,
}

impl TimerSession {
    pub fn new(catalog: WorkoutCatalog, announcer: CountdownAnnouncer) -> Self {
        let engine = TimerEngine::new(catalog.active().total_secs());
        let mut session = Self {
            catalog,
            engine,
            announcer,
        };
        session.announce();
        session
    }

    pub fn catalog(&self) -> &WorkoutCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn active(&self) -> &Workout {
        self.catalog.active()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn add_workout(&mut self, name: &str, minutes: u32) -> Option<u64> {
        let id = self.catalog.add(name, minutes)?;
        self.reload();
        Some(id)
    }

    pub fn remove_workout(&mut self, id: u64) {
        if self.catalog.remove(id) {
            self.reload();
        }
    }

    pub fn select_workout(&mut self, id: u64) {
        if self.catalog.select(id) {
            self.reload();
        }
    }

    pub fn toggle(&mut self) {
        self.engine.toggle();
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.announcer.silence();
        self.announce();
    }

    /// Apply one countdown second.
    pub fn tick(&mut self) {
        if self.engine.tick() {
            self.announce();
            if self.engine.is_finished() {
                info!(workout = %self.catalog.active().name, "countdown finished");
            }
        }
    }

    fn reload(&mut self) {
        let active = self.catalog.active();
        info!(id = active.id, workout = %active.name, minutes = active.minutes, "active workout");
        self.engine.load(active.total_secs());
        self.announcer.silence();
        self.announce();
    }

    fn announce(&mut self) {
        self.announcer.observe(self.engine.remaining());
    }
}
