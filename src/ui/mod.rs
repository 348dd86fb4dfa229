//! Ratatui front-end: a numbered menu for naming the store, loading the book
//! file, and viewing the summary and statistics screens.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use helpers::FAREWELL_ART;
pub use terminal::run_app;
