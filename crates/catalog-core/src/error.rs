//! Error types for catalog operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! operator-facing messages. Every error here is recoverable - the menu
//! aborts the current action and carries on.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for catalog operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No book in the catalog carries this id
    #[error("Invalid Book ID: {0}")]
    BookNotFound(u32),

    /// No member on the roster carries this id
    #[error("Invalid Member ID: {0}")]
    MemberNotFound(u32),

    /// The member already holds the maximum number of books
    #[error("Max issue limit reached: member {member_id} already holds {held} books")]
    LoanLimitReached { member_id: u32, held: usize },
}
