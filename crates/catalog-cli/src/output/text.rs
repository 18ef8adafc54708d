//! Text and table rendering for catalog listings.

use std::fmt;
use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;

use catalog_core::{ActivityReport, Book, BookStatus, Member};

/// The one-line book rendering used by plain listings, loan views, and the
/// activity report.
fn book_line(book: &Book, color: bool) -> String {
    let status = if color {
        match book.status {
            BookStatus::Available => book.status.green().to_string(),
            BookStatus::Issued => book.status.yellow().to_string(),
        }
    } else {
        book.status.to_string()
    };
    format!("ID: {} | Title: {} | Status: {}", book.id, book.title, status)
}

pub(super) fn print_book_lines<W: Write>(
    out: &mut W,
    books: &[Book],
    color: bool,
) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "No books in the catalog.");
    }
    for book in books {
        writeln!(out, "{}", book_line(book, color))?;
    }
    Ok(())
}

pub(super) fn print_book_table<W: Write>(
    out: &mut W,
    books: &[Book],
    color: bool,
) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "No books in the catalog.");
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Status"]);
    for book in books {
        let mut status = Cell::new(book.status);
        if color {
            status = match book.status {
                BookStatus::Available => status.fg(Color::Green),
                BookStatus::Issued => status.fg(Color::Yellow),
            };
        }
        table.add_row(vec![Cell::new(book.id), Cell::new(&book.title), status]);
    }
    writeln!(out, "{table}")
}

pub(super) fn print_member_loans<W: Write>(
    out: &mut W,
    member: &Member,
    books: &[&Book],
    color: bool,
) -> io::Result<()> {
    writeln!(out, "Issued Books for {} (ID: {})", member.name, member.id)?;
    if books.is_empty() {
        return writeln!(out, "No books issued.");
    }
    for book in books {
        writeln!(out, "{}", book_line(book, color))?;
    }
    Ok(())
}

pub(super) fn print_activity<W: Write>(
    out: &mut W,
    report: &ActivityReport,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "\nRecent Issued Books:")?;
    if report.issued.is_empty() {
        writeln!(out, "No recent issues.")?;
    } else {
        for book in &report.issued {
            writeln!(out, "{}", book_line(book, color))?;
        }
    }

    writeln!(out, "\nRecent Returned Books:")?;
    if report.returned.is_empty() {
        writeln!(out, "No recent returns.")?;
    } else {
        for book in &report.returned {
            writeln!(out, "{}", book_line(book, color))?;
        }
    }
    Ok(())
}

pub(super) fn print_confirmation<W: Write>(
    out: &mut W,
    message: &str,
    color: bool,
) -> io::Result<()> {
    if color {
        writeln!(out, "{}", message.green())
    } else {
        writeln!(out, "{message}")
    }
}

pub(super) fn print_error<W: Write>(
    out: &mut W,
    err: &dyn fmt::Display,
    color: bool,
) -> io::Result<()> {
    if color {
        writeln!(out, "{}", format!("Error: {err}").red())
    } else {
        writeln!(out, "Error: {err}")
    }
}
