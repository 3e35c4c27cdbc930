use crossterm::event::{self, Event, KeyEvent};
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT, SIGHUP)
    Shutdown,
}

/// Terminal input pump.
///
/// A background thread polls crossterm and posts events; the UI thread
/// consumes them with [`EventHandler::next`]. The thread never touches
/// application state.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let signaled = Arc::new(AtomicBool::new(false));
        for signal in [SIGTERM, SIGINT, SIGHUP] {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&signaled)) {
                tracing::warn!(signal, error = %err, "failed to register signal handler");
            }
        }

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if signaled.swap(false, Ordering::Relaxed) {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll timeout so the signal flag is checked often.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let sent = match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                break;
                            }
                        };
                        if sent.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
