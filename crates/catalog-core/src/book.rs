//! Catalog entries and their availability status.

use std::fmt;

use serde::Serialize;

/// Lending status of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Issued,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Issued => write!(f, "Issued"),
        }
    }
}

/// A single book in the catalog.
///
/// Books are created once (at seed time or via [`crate::Library::add_book`])
/// and never deleted; only their status changes. The id is unique by
/// convention only - the catalog accepts duplicates and lookups take the
/// first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub status: BookStatus,
}

impl Book {
    /// Create a new book, available by default.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: BookStatus::Available,
        }
    }

    /// Mark the book as issued. The caller decides whether the transition
    /// is allowed; this only flips the status.
    pub fn issue(&mut self) {
        self.status = BookStatus::Issued;
    }

    /// Mark the book as available again, regardless of prior state.
    pub fn return_book(&mut self) {
        self.status = BookStatus::Available;
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_is_available() {
        let book = Book::new(1, "Systems Programming");
        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Systems Programming");
        assert!(book.is_available());
    }

    #[test]
    fn test_issue_and_return_transitions() {
        let mut book = Book::new(1, "Systems Programming");
        book.issue();
        assert_eq!(book.status, BookStatus::Issued);
        book.return_book();
        assert_eq!(book.status, BookStatus::Available);
    }

    #[test]
    fn test_return_is_unconditional() {
        let mut book = Book::new(1, "Systems Programming");
        book.return_book();
        assert!(book.is_available());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BookStatus::Available.to_string(), "Available");
        assert_eq!(BookStatus::Issued.to_string(), "Issued");
    }
}
