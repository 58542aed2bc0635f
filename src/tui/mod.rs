pub mod app;
pub mod event;
pub mod screens;
pub mod theme;
pub mod widgets;

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::Terminal;
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the lifetime of the app and puts it back on drop.
///
/// Dropping happens on every exit path, including an error bubbling out of
/// the event loop. A failed restore is logged so the loop's own error is
/// what reaches `main`.
pub struct TerminalGuard<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    restore: fn() -> io::Result<()>,
}

impl<B: Backend> TerminalGuard<B> {
    fn new(terminal: Terminal<B>, restore: fn() -> io::Result<()>) -> Self {
        Self { terminal, restore }
    }
}

impl<B: Backend> Deref for TerminalGuard<B> {
    type Target = Terminal<B>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl<B: Backend> DerefMut for TerminalGuard<B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl<B: Backend> Drop for TerminalGuard<B> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Switch to raw mode on the alternate screen.
///
/// A panic hook restores the terminal first so the panic message is readable.
pub fn init() -> io::Result<TerminalGuard> {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(TerminalGuard::new(terminal, restore))
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ratatui::backend::TestBackend;

    use super::*;

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn counting_restore() -> io::Result<()> {
        RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn failing_restore() -> io::Result<()> {
        Err(io::Error::other("no tty"))
    }

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(20, 5)).unwrap()
    }

    #[test]
    fn restores_when_an_error_unwinds_the_loop() {
        fn failing_loop(_terminal: &mut Terminal<TestBackend>) -> anyhow::Result<()> {
            anyhow::bail!("event channel closed")
        }

        let before = RESTORES.load(Ordering::SeqCst);
        let result = {
            let mut guard = TerminalGuard::new(test_terminal(), counting_restore);
            failing_loop(&mut guard)
        };
        assert_eq!(RESTORES.load(Ordering::SeqCst), before + 1);
        assert_eq!(result.unwrap_err().to_string(), "event channel closed");
    }

    #[test]
    fn failed_restore_does_not_panic() {
        let mut guard = TerminalGuard::new(test_terminal(), failing_restore);
        guard.draw(|_| {}).unwrap();
        drop(guard);
    }
}
