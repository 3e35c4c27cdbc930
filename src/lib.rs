//! Terminal product catalog built around an in-memory, reducer-driven store.

pub mod catalog;
pub mod config;
pub mod demo;
pub mod format;
pub mod logging;
pub mod ui;
