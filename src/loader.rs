//! CSV ingestion. The file carries one header line followed by
//! `id,title,yearPublished,value` rows. The header is skipped without being
//! checked, and rows are matched by position rather than by column name.
//! Quote characters carry no meaning and stay part of the field text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::Book;

/// Number of columns every data row must carry.
const FIELD_COUNT: usize = 4;

/// Positional view of one data row.
#[derive(Debug, Deserialize)]
struct BookRow {
    id: String,
    title: String,
    year_published: i32,
    #[serde(deserialize_with = "trimmed_f64")]
    value: f64,
}

/// The value column tolerates surrounding whitespace; the year column does not.
fn trimmed_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::new(row.id, row.title, row.year_published, row.value)
    }
}

/// Open `path` and parse every row into a book.
pub fn load_books(path: &Path) -> Result<Vec<Book>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let books = read_books(file)?;
    info!(path = %path.display(), count = books.len(), "parsed book file");
    Ok(books)
}

/// Parse books from any reader. Nothing is returned unless every row parses.
pub fn read_books<R: Read>(reader: R) -> Result<Vec<Book>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut books = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        if record.len() != FIELD_COUNT {
            return Err(LoadError::FieldCount {
                line,
                found: record.len(),
            });
        }

        let row: BookRow = record
            .deserialize(None)
            .map_err(|source| LoadError::Parse { line, source })?;
        debug!(line, id = %row.id, "parsed book row");
        books.push(row.into());
    }

    Ok(books)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn skips_header_and_keeps_order() {
        let data = "bookID,title,year,value\nA1,Dune,1965,45.00\nA2,Foundation,1951,30.00\n";
        let books = read_books(data.as_bytes()).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0], Book::new("A1", "Dune", 1965, 45.0));
        assert_eq!(books[1], Book::new("A2", "Foundation", 1951, 30.0));
    }

    #[test]
    fn header_is_not_validated() {
        let data = "whatever\nA1,Dune,1965,45\n";
        let books = read_books(data.as_bytes()).unwrap();
        assert_eq!(books[0].value(), 45.0);
    }

    #[test]
    fn header_only_file_yields_no_books() {
        let books = read_books("id,title,year,value\n".as_bytes()).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn wrong_field_count_is_rejected_with_line() {
        let data = "id,title,year,value\nA1,Dune,1965,45\nA2,Foundation,1951\n";
        match read_books(data.as_bytes()) {
            Err(LoadError::FieldCount { line, found }) => {
                assert_eq!(line, 3);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_year_aborts_load() {
        let data = "id,title,year,value\nA1,Dune,1965,45\nA2,Foundation,MCMLI,30\n";
        let err = read_books(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }));
    }

    #[test]
    fn non_numeric_value_aborts_load() {
        let data = "id,title,year,value\nA1,Dune,1965,cheap\n";
        assert!(matches!(
            read_books(data.as_bytes()),
            Err(LoadError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn quotes_are_kept_verbatim() {
        let data = "id,title,year,value\nB1,\"Heroes\" of Olympus,2010,9.99\n";
        let books = read_books(data.as_bytes()).unwrap();
        assert_eq!(books[0].title(), "\"Heroes\" of Olympus");
    }

    #[test]
    fn unbalanced_quote_does_not_swallow_next_row() {
        let data = "id,title,year,value\nA1,\"Dune,1965,45\nA2,Foundation,1951,30\n";
        let books = read_books(data.as_bytes()).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title(), "\"Dune");
        assert_eq!(books[1], Book::new("A2", "Foundation", 1951, 30.0));
    }

    #[test]
    fn value_tolerates_whitespace_but_year_does_not() {
        let data = "id,title,year,value\nA1,Dune,1965, 45.00 \n";
        let books = read_books(data.as_bytes()).unwrap();
        assert_eq!(books[0].value(), 45.0);

        let data = "id,title,year,value\nA1,Dune, 1965,45.00\n";
        assert!(matches!(
            read_books(data.as_bytes()),
            Err(LoadError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn duplicate_ids_and_negative_values_pass_through() {
        let data = "id,title,year,value\nA1,Dune,1965,-1\nA1,Dune,3000,0\n";
        let books = read_books(data.as_bytes()).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].value(), -1.0);
        assert_eq!(books[1].year_published(), 3000);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = load_books(&path).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,title,year,value").unwrap();
        writeln!(file, "C3,Emma,1815,12.5").unwrap();
        let books = load_books(file.path()).unwrap();
        assert_eq!(books, vec![Book::new("C3", "Emma", 1815, 12.5)]);
    }
}
