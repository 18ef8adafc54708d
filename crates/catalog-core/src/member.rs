//! The member roster and per-member loans.

use serde::Serialize;

use crate::error::{CatalogError, Result};

/// Most books a member may hold at once.
pub const LOAN_LIMIT: usize = 3;

/// A registered library member.
///
/// Loans are tracked as book ids in the order they were issued. A member
/// may hold the same id more than once; every occurrence counts against
/// [`LOAN_LIMIT`].
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    issued_books: Vec<u32>,
}

impl Member {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            issued_books: Vec::new(),
        }
    }

    /// Book ids currently held, in issue order.
    pub fn issued_books(&self) -> &[u32] {
        &self.issued_books
    }

    pub fn holds(&self, book_id: u32) -> bool {
        self.issued_books.contains(&book_id)
    }

    /// Record a loan against this member.
    ///
    /// Fails with [`CatalogError::LoanLimitReached`] when the member is at
    /// the cap, leaving the loan list untouched. The book's own status is
    /// not consulted here; the library decides what may be issued.
    pub fn issue_book(&mut self, book_id: u32) -> Result<()> {
        if self.issued_books.len() >= LOAN_LIMIT {
            return Err(CatalogError::LoanLimitReached {
                member_id: self.id,
                held: self.issued_books.len(),
            });
        }
        self.issued_books.push(book_id);
        Ok(())
    }

    /// Drop every loan of the given id. Ids the member never held are
    /// ignored.
    pub fn return_book(&mut self, book_id: u32) {
        self.issued_books.retain(|id| *id != book_id);
    }
}
