//! The named book collection and its aggregate queries. Every query scans the
//! full list on demand, so updated values are always reflected.

use std::fmt;

use tracing::debug;

use crate::error::StoreError;
use crate::models::Book;

/// A named store owning its books in insertion order. Duplicate ids are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookStore {
    name: String,
    books: Vec<Book>,
}

/// The three figures shown on the statistics screen, computed in one pass over
/// the store's queries.
#[derive(Debug, Clone, PartialEq)]
pub struct BookStats {
    pub highest_value: Book,
    pub oldest: Book,
    pub average_value: f64,
}

impl BookStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Mutable view for value updates. The slice cannot grow or shrink.
    pub fn books_mut(&mut self) -> &mut [Book] {
        &mut self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Book with the greatest value. Ties go to the earliest inserted book.
    pub fn highest_value(&self) -> Result<&Book, StoreError> {
        let mut iter = self.books.iter();
        let first = iter.next().ok_or(StoreError::EmptyCollection {
            query: "highest value",
        })?;
        let best = iter.fold(first, |best, book| {
            if book.value() > best.value() {
                book
            } else {
                best
            }
        });
        debug!(store = %self.name, id = best.id(), "highest value book");
        Ok(best)
    }

    /// Book with the smallest publication year. Ties go to the earliest
    /// inserted book.
    pub fn oldest(&self) -> Result<&Book, StoreError> {
        let mut iter = self.books.iter();
        let first = iter
            .next()
            .ok_or(StoreError::EmptyCollection { query: "oldest" })?;
        let best = iter.fold(first, |best, book| {
            if book.year_published() < best.year_published() {
                book
            } else {
                best
            }
        });
        debug!(store = %self.name, id = best.id(), "oldest book");
        Ok(best)
    }

    pub fn average_value(&self) -> Result<f64, StoreError> {
        if self.books.is_empty() {
            return Err(StoreError::EmptyCollection {
                query: "average value",
            });
        }
        let sum: f64 = self.books.iter().map(Book::value).sum();
        Ok(sum / self.books.len() as f64)
    }

    pub fn stats(&self) -> Result<BookStats, StoreError> {
        Ok(BookStats {
            highest_value: self.highest_value()?.clone(),
            oldest: self.oldest()?.clone(),
            average_value: self.average_value()?,
        })
    }
}

impl fmt::Display for BookStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book Store Name: {}, Book List: [", self.name)?;
        for (idx, book) in self.books.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{book}")?;
        }
        f.write_str("]")
    }
}
