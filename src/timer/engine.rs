/// Countdown state for the active workout.
///
/// Invariants: `remaining <= total`, and `running` is false whenever
/// `remaining == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEngine {
    total: u32,
    remaining: u32,
    running: bool,
}

impl TimerEngine {
    pub fn new(total_secs: u32) -> Self {
        Self {
            total: total_secs,
            remaining: total_secs,
            running: false,
        }
    }

    /// Reinitialize for a newly selected workout. Any countdown in flight stops.
    pub fn load(&mut self, total_secs: u32) {
        *self = Self::new(total_secs);
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Begin counting down. No-op if already running or nothing is left.
    pub fn start(&mut self) {
        if self.running || self.remaining == 0 {
            return;
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start/pause button behaviour.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.total;
        self.running = false;
    }

    /// Advance one second. Returns true if the countdown moved.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_engine_is_idle_and_full() {
        let engine = TimerEngine::new(60);
        assert_eq!(engine.total(), 60);
        assert_eq!(engine.remaining(), 60);
        assert!(!engine.is_running());
    }

    #[test]
    fn one_minute_runs_out_after_sixty_ticks() {
        let mut engine = TimerEngine::new(60);
        engine.start();
        for _ in 0..60 {
            assert!(engine.tick());
        }
        assert_eq!(engine.remaining(), 0);
        assert!(!engine.is_running());
        // Further ticks do nothing
        assert!(!engine.tick());
        assert_eq!(engine.remaining(), 0);
    }

    #[test]
    fn start_with_nothing_left_is_ignored() {
        let mut engine = TimerEngine::new(0);
        engine.start();
        assert!(!engine.is_running());
    }

    #[test]
    fn paused_engine_does_not_tick() {
        let mut engine = TimerEngine::new(60);
        engine.start();
        engine.tick();
        engine.pause();
        assert!(!engine.tick());
        assert_eq!(engine.remaining(), 59);
    }

    #[test]
    fn toggle_alternates() {
        let mut engine = TimerEngine::new(60);
        engine.toggle();
        assert!(engine.is_running());
        engine.toggle();
        assert!(!engine.is_running());
    }

    #[test]
    fn reset_restores_total_and_stops() {
        let mut engine = TimerEngine::new(60);
        engine.start();
        engine.tick();
        engine.tick();
        engine.reset();
        assert_eq!(engine.remaining(), 60);
        assert!(!engine.is_running());
    }

    #[test]
    fn load_discards_running_countdown() {
        let mut engine = TimerEngine::new(60);
        engine.start();
        engine.tick();
        engine.load(300);
        assert_eq!(engine.total(), 300);
        assert_eq!(engine.remaining(), 300);
        assert!(!engine.is_running());
    }
}
