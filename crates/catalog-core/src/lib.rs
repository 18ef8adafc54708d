//! # Catalog Core
//!
//! Core library for Catalog - an in-memory library catalog and lending tracker.
//!
//! This crate provides the domain model and lending logic independent of the
//! CLI interface. All state lives in memory and dies with the process.
//!
//! ## Architecture
//!
//! - **book**: catalog entries and their availability status
//! - **member**: the member roster and per-member loans
//! - **transactions**: the drain-on-read log of recent issues and returns
//! - **library**: the aggregate root owning all of the above
//! - **error**: the error hierarchy for lending operations

pub mod book;
pub mod error;
pub mod library;
pub mod member;
pub mod transactions;

pub use book::{Book, BookStatus};
pub use error::{CatalogError, Result};
pub use library::{ActivityReport, Library};
pub use member::{Member, LOAN_LIMIT};
pub use transactions::TransactionLog;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
