//! Workflow gatekeeper between the UI and the store. A store must be named
//! before books can be loaded, loading happens at most once per store, and
//! the listing and statistics only make sense after a load.

use std::path::Path;

use tracing::{info, warn};

use crate::error::SessionError;
use crate::loader::load_books;
use crate::models::Book;
use crate::store::{BookStats, BookStore};

/// Where the session currently sits in the name → load workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoStore,
    StoreNamed,
    Loaded,
}

#[derive(Debug, Default)]
pub struct Session {
    store: Option<BookStore>,
    loaded: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match (&self.store, self.loaded) {
            (None, _) => SessionState::NoStore,
            (Some(_), false) => SessionState::StoreNamed,
            (Some(_), true) => SessionState::Loaded,
        }
    }

    pub fn store(&self) -> Option<&BookStore> {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> Option<&mut BookStore> {
        self.store.as_mut()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replace the current store with a fresh, empty one. Books belong to the
    /// store they were loaded into, so renaming re-opens loading.
    pub fn name_store(&mut self, name: impl Into<String>) -> &BookStore {
        let name = name.into();
        if let Some(previous) = &self.store {
            info!(from = previous.name(), to = %name, dropped = previous.len(), "renaming store");
        } else {
            info!(name = %name, "naming store");
        }
        self.loaded = false;
        self.store.insert(BookStore::new(name))
    }

    /// Parse `path` and append every book. On any failure the store is left
    /// untouched and a later retry is allowed.
    pub fn load(&mut self, path: &Path) -> Result<usize, SessionError> {
        if self.loaded {
            warn!("rejected second load");
            return Err(SessionError::AlreadyLoaded);
        }
        let store = self.store.as_mut().ok_or_else(|| {
            warn!("rejected load before naming the store");
            SessionError::NoStore
        })?;

        let books = load_books(path).map_err(|err| {
            warn!(path = %path.display(), error = %err, "load failed");
            err
        })?;
        let count = books.len();
        for book in books {
            store.append(book);
        }
        self.loaded = true;
        info!(store = store.name(), count, "books loaded");
        Ok(count)
    }

    /// The loaded books in file order.
    pub fn books(&self) -> Result<&[Book], SessionError> {
        Ok(self.loaded_store()?.books())
    }

    pub fn stats(&self) -> Result<BookStats, SessionError> {
        Ok(self.loaded_store()?.stats()?)
    }

    fn loaded_store(&self) -> Result<&BookStore, SessionError> {
        let store = self.store.as_ref().ok_or(SessionError::NoStore)?;
        if !self.loaded {
            return Err(SessionError::NotLoaded);
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::{LoadError, StoreError};

    fn csv_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{body}").unwrap();
        file
    }

    #[test]
    fn starts_without_store() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::NoStore);
        assert!(matches!(session.stats(), Err(SessionError::NoStore)));
        assert!(matches!(session.books(), Err(SessionError::NoStore)));
    }

    #[test]
    fn load_requires_named_store() {
        let file = csv_file("id,title,year,value\nA1,Dune,1965,45\n");
        let mut session = Session::new();
        assert!(matches!(
            session.load(file.path()),
            Err(SessionError::NoStore)
        ));
        assert_eq!(session.state(), SessionState::NoStore);
    }

    #[test]
    fn named_store_is_not_loaded_yet() {
        let mut session = Session::new();
        session.name_store("Corner Books");
        assert_eq!(session.state(), SessionState::StoreNamed);
        assert!(matches!(session.stats(), Err(SessionError::NotLoaded)));
    }

    #[test]
    fn second_load_is_rejected() {
        let file = csv_file("id,title,year,value\nA1,Dune,1965,45\n");
        let mut session = Session::new();
        session.name_store("Corner Books");
        assert_eq!(session.load(file.path()).unwrap(), 1);
        assert!(matches!(
            session.load(file.path()),
            Err(SessionError::AlreadyLoaded)
        ));
        assert_eq!(session.books().unwrap().len(), 1);
    }

    #[test]
    fn failed_load_leaves_store_empty_and_retryable() {
        let bad = csv_file("id,title,year,value\nA1,Dune,1965,45\nA2,Foundation,x,30\n");
        let good = csv_file("id,title,year,value\nA1,Dune,1965,45\n");
        let mut session = Session::new();
        session.name_store("Corner Books");

        let err = session.load(bad.path()).unwrap_err();
        assert!(matches!(err, SessionError::Load(LoadError::Parse { .. })));
        assert_eq!(session.state(), SessionState::StoreNamed);
        assert!(session.store().unwrap().is_empty());

        assert_eq!(session.load(good.path()).unwrap(), 1);
        assert_eq!(session.state(), SessionState::Loaded);
    }

    #[test]
    fn renaming_starts_a_fresh_store() {
        let file = csv_file("id,title,year,value\nA1,Dune,1965,45\n");
        let mut session = Session::new();
        session.name_store("Old");
        session.load(file.path()).unwrap();

        let store = session.name_store("New");
        assert_eq!(store.name(), "New");
        assert!(store.is_empty());
        assert_eq!(session.state(), SessionState::StoreNamed);
        assert_eq!(session.load(file.path()).unwrap(), 1);
    }

    #[test]
    fn header_only_file_loads_but_stats_fail_cleanly() {
        let file = csv_file("id,title,year,value\n");
        let mut session = Session::new();
        session.name_store("Empty");
        assert_eq!(session.load(file.path()).unwrap(), 0);
        assert!(matches!(
            session.stats(),
            Err(SessionError::Store(StoreError::EmptyCollection { .. }))
        ));
    }
}
