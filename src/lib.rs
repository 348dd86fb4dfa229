//! Core library for the book store manager: the in-memory store with its
//! aggregate queries, the CSV loader feeding it, and the session workflow
//! the terminal UI drives.
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;

pub use config::Config;
pub use error::{LoadError, SessionError, StoreError};
pub use loader::{load_books, read_books};
pub use logging::init_logging;
pub use models::Book;
pub use session::{Session, SessionState};
pub use store::{BookStats, BookStore};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
