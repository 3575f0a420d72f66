//! Domain model shared by the catalog core, the persistence layer, and both
//! presentation surfaces. The type stays a light-weight data holder so those
//! layers can focus on lookup, serialization, and rendering logic.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single catalog entry. Every field is kept as raw text, mirroring the
/// persisted format; the catalog never interprets the year numerically.
pub struct Book {
    /// ISBN-like identifier. Unique across the catalog; edit and delete
    /// flows bubble this value back to the catalog and the store.
    pub isbn: String,
    /// Title shown in listings. Doubles as the sort key for title search.
    pub title: String,
    /// Author display text.
    pub author: String,
    /// Publication year, stored verbatim as entered.
    pub year: String,
}

impl Book {
    /// Build a book from anything string-like. Keeps call sites in the
    /// surfaces and tests from repeating `.to_string()` four times.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }
}

impl fmt::Display for Book {
    /// Render the one-line summary both surfaces print for a record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Author: {}, Year: {}",
            self.isbn, self.title, self.author, self.year
        )
    }
}
