use crate::catalog::ProductDraft;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::{Duration, Instant};

/// Run the catalog UI until the user quits or a signal arrives.
pub fn run(config: Config, seed: Vec<ProductDraft>) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    app.seed(seed);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(products = app.store().snapshot().len(), "catalog UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Shutdown) => {
                tracing::info!("shutdown signal received");
                app.request_quit();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!(products = app.store().snapshot().len(), "catalog UI stopped");
    Ok(())
}
