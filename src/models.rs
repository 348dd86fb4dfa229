//! Domain model for a single book held by the store. Identity fields are fixed
//! when the book is built; only the monetary value can change afterwards.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// One book record: identifier, title, year of publication and current value.
pub struct Book {
    /// Opaque identifier taken verbatim from the input file.
    id: String,
    title: String,
    year_published: i32,
    /// Monetary value in pounds. Never validated, negative values are kept.
    value: f64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year_published: i32,
        value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year_published,
            value,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year_published(&self) -> i32 {
        self.year_published
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the current value. No bounds check is applied.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl fmt::Display for Book {
    /// `{:?}` keeps the trailing `.0` on whole values (`45.0`). Ordinary prices
    /// read the same as the old listing; from 1e7 upwards the value stays in
    /// plain decimal form instead of exponent notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {}, Title: {}, Year Published: {}, Value: £{:?}",
            self.id, self.title, self.year_published, self.value
        )
    }
}
