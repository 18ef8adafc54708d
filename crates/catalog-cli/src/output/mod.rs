//! Output formatting for the catalog CLI.
//!
//! Every action result goes through one of the printers here, which
//! dispatch on the session's output format (table, plain, json). Menu
//! chrome and prompts stay in the menu module; only results are formatted.

mod json;
mod text;

use std::fmt;
use std::io::{self, Write};

use catalog_core::{ActivityReport, Book, Member};

use crate::cli::OutputFormat;

/// Presentation settings for a session.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub color: bool,
}

/// Print the full catalog listing.
pub fn print_books<W: Write>(out: &mut W, books: &[Book], opts: &OutputOptions) -> io::Result<()> {
    match opts.format {
        OutputFormat::Json => json::print_books(out, books),
        OutputFormat::Table => text::print_book_table(out, books, opts.color),
        OutputFormat::Plain => text::print_book_lines(out, books, opts.color),
    }
}

/// Print a member's current loans.
pub fn print_member_loans<W: Write>(
    out: &mut W,
    member: &Member,
    books: &[&Book],
    opts: &OutputOptions,
) -> io::Result<()> {
    match opts.format {
        OutputFormat::Json => json::print_member_loans(out, member, books),
        _ => text::print_member_loans(out, member, books, opts.color),
    }
}

/// Print (and thereby consume) a drained activity report.
pub fn print_activity<W: Write>(
    out: &mut W,
    report: &ActivityReport,
    opts: &OutputOptions,
) -> io::Result<()> {
    match opts.format {
        OutputFormat::Json => json::print_activity(out, report),
        _ => text::print_activity(out, report, opts.color),
    }
}

/// Print a success confirmation for a completed action.
pub fn print_confirmation<W: Write>(
    out: &mut W,
    message: &str,
    opts: &OutputOptions,
) -> io::Result<()> {
    match opts.format {
        OutputFormat::Json => json::print_confirmation(out, message),
        _ => text::print_confirmation(out, message, opts.color),
    }
}

/// Print a recoverable error. The action is aborted; the session goes on.
pub fn print_error<W: Write>(
    out: &mut W,
    err: &dyn fmt::Display,
    opts: &OutputOptions,
) -> io::Result<()> {
    match opts.format {
        OutputFormat::Json => json::print_error(out, err),
        _ => text::print_error(out, err, opts.color),
    }
}
