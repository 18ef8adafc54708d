//! The aggregate root: book catalog, member roster, and activity log.

use serde::Serialize;

use crate::book::Book;
use crate::error::{CatalogError, Result};
use crate::member::Member;
use crate::transactions::TransactionLog;

/// Books that changed hands since the log was last drained.
///
/// `issued` is newest-first, `returned` oldest-first. Each entry is a
/// snapshot of the book at drain time, so a book issued and then returned
/// shows up on the issue side with its current (available) status.
#[derive(Debug, Default, Serialize)]
pub struct ActivityReport {
    pub issued: Vec<Book>,
    pub returned: Vec<Book>,
}

impl ActivityReport {
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty() && self.returned.is_empty()
    }
}

/// The whole library: owns every book and member, plus the activity log.
///
/// Members and the log refer to books by id rather than holding them; a
/// book value lives only in the catalog. Both collections keep insertion
/// order and accept duplicate ids - lookups return the first match, which
/// makes later duplicates unreachable by id.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
    members: Vec<Member>,
    transactions: TransactionLog,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book to the catalog. Ids are not checked for uniqueness.
    pub fn add_book(&mut self, id: u32, title: impl Into<String>) {
        self.books.push(Book::new(id, title));
    }

    /// Append a member to the roster. Ids are not checked for uniqueness.
    pub fn register_member(&mut self, id: u32, name: impl Into<String>) {
        self.members.push(Member::new(id, name));
    }

    /// The full catalog in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The full roster in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// First book with the given id, if any.
    pub fn find_book(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// First member with the given id, if any.
    pub fn find_member(&self, id: u32) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Issue a book to a member and log the transaction.
    ///
    /// The member is looked up before the book (prompt order); a failed
    /// lookup aborts with no mutation. The member accepts the loan before
    /// the book is marked, so a loan-limit rejection leaves the book's
    /// status untouched. The book's current availability is deliberately
    /// not checked - see DESIGN.md.
    pub fn issue_book(&mut self, member_id: u32, book_id: u32) -> Result<()> {
        let member_idx = self
            .members
            .iter()
            .position(|member| member.id == member_id)
            .ok_or(CatalogError::MemberNotFound(member_id))?;
        let book_idx = self
            .books
            .iter()
            .position(|book| book.id == book_id)
            .ok_or(CatalogError::BookNotFound(book_id))?;

        self.members[member_idx].issue_book(book_id)?;
        self.books[book_idx].issue();
        self.transactions.record_issue(book_id);
        Ok(())
    }

    /// Return a book on behalf of a member and log the transaction.
    ///
    /// Succeeds whenever both ids exist: the member's loan is dropped if
    /// present, the book is marked available regardless of who held it,
    /// and the return is logged either way.
    pub fn return_book(&mut self, member_id: u32, book_id: u32) -> Result<()> {
        let member_idx = self
            .members
            .iter()
            .position(|member| member.id == member_id)
            .ok_or(CatalogError::MemberNotFound(member_id))?;
        let book_idx = self
            .books
            .iter()
            .position(|book| book.id == book_id)
            .ok_or(CatalogError::BookNotFound(book_id))?;

        self.members[member_idx].return_book(book_id);
        self.books[book_idx].return_book();
        self.transactions.record_return(book_id);
        Ok(())
    }

    /// A member together with the books they currently hold, resolved
    /// against the catalog in issue order.
    pub fn member_loans(&self, member_id: u32) -> Result<(&Member, Vec<&Book>)> {
        let member = self
            .find_member(member_id)
            .ok_or(CatalogError::MemberNotFound(member_id))?;
        let books = member
            .issued_books()
            .iter()
            .filter_map(|id| self.find_book(*id))
            .collect();
        Ok((member, books))
    }

    /// Drain the activity log and resolve the logged ids to book
    /// snapshots. The log is empty afterwards.
    pub fn drain_recent_activity(&mut self) -> ActivityReport {
        let issued = self.transactions.drain_issues();
        let returned = self.transactions.drain_returns();
        ActivityReport {
            issued: issued
                .into_iter()
                .filter_map(|id| self.find_book(id).cloned())
                .collect(),
            returned: returned
                .into_iter()
                .filter_map(|id| self.find_book(id).cloned())
                .collect(),
        }
    }
}
