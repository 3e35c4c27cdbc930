use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal when dropped or when the process panics.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new(cleanup: impl FnOnce() + Send + 'static) -> Self {
        let guard = Self {
            cleanup: Arc::new(Mutex::new(Some(Box::new(cleanup)))),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_cleanup(&cleanup);
            default_hook(info);
        }));
    }
}

fn run_cleanup(slot: &Mutex<Option<Cleanup>>) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(cleanup) = slot.take() {
            cleanup();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_cleanup(&self.cleanup);
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let guard = TerminalGuard::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    Ok((terminal, guard))
}
