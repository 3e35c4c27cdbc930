//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use product_catalog::catalog::{CatalogStore, Category, ProductDraft, SequentialGenerator};
use product_catalog::config::Config;
use product_catalog::ui::app::App;
use product_catalog::ui::input::handle_key;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Store with predictable ids: `p-1`, `p-2`, ...
pub fn sequential_store() -> CatalogStore {
    CatalogStore::with_id_generator(SequentialGenerator::new("p"))
}

pub fn test_app() -> App {
    App::with_store(Config::default(), sequential_store())
}

pub fn draft(name: &str, price: f64, category: Category, stock: u32) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price,
        description: format!("{name} description"),
        category,
        stock,
        image_url: None,
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Render the app into an in-memory terminal and return its text.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| product_catalog::ui::render::draw(frame, app))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
