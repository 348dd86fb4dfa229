//! Typed failures for the store, the CSV loader and the session workflow. The
//! UI layer wraps these in `anyhow` and only needs the `Display` output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the aggregate queries on a [`crate::BookStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("cannot compute {query}: the store holds no books")]
    EmptyCollection { query: &'static str },
}

/// Failures while turning a CSV file into books. Any of these aborts the
/// whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected 4 fields, found {found}")]
    FieldCount { line: u64, found: usize },
    #[error("line {line}: malformed book row")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read book data")]
    Read(#[from] csv::Error),
}

/// Workflow violations detected by [`crate::Session`] before touching the
/// store, plus the store/load errors it forwards.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("You have to set the name of the book store first.")]
    NoStore,
    #[error("Information from the file has already been read in.")]
    AlreadyLoaded,
    #[error("There is no information on books yet. Read in a file first.")]
    NotLoaded,
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
