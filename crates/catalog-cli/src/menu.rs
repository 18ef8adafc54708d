//! The interactive menu loop.
//!
//! One numeric choice per line, one action per choice. Errors abort the
//! current action only; the loop runs until the operator picks Exit or the
//! input ends. The loop is generic over its reader and writer so tests can
//! drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use catalog_core::Library;

use crate::cli::OutputFormat;
use crate::output::{self, OutputOptions};

const MENU: &str = "\nLibrary Menu:\n1. Display Books\n2. Issue Book\n3. Return Book\n4. View Transactions\n5. View Issued Books\n6. Exit";

/// Session settings resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct MenuOptions {
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

/// Run the menu loop to completion.
pub fn run<R: BufRead, W: Write>(
    library: &mut Library,
    input: &mut R,
    out: &mut W,
    opts: &MenuOptions,
) -> io::Result<()> {
    let output_opts = OutputOptions {
        format: opts.format,
        color: opts.color,
    };

    if !opts.quiet {
        writeln!(out, "Catalog {} - in-memory library session", catalog_core::VERSION)?;
    }

    loop {
        writeln!(out, "{MENU}")?;
        let Some(line) = read_line(input)? else {
            break;
        };
        match line.trim().parse::<u32>() {
            Ok(1) => output::print_books(out, library.books(), &output_opts)?,
            Ok(2) => handle_issue(library, input, out, &output_opts)?,
            Ok(3) => handle_return(library, input, out, &output_opts)?,
            Ok(4) => {
                let report = library.drain_recent_activity();
                output::print_activity(out, &report, &output_opts)?;
            }
            Ok(5) => handle_member_loans(library, input, out, &output_opts)?,
            Ok(6) => {
                writeln!(out, "Exiting...")?;
                break;
            }
            _ => writeln!(out, "Invalid choice!")?,
        }
    }
    Ok(())
}

fn handle_issue<R: BufRead, W: Write>(
    library: &mut Library,
    input: &mut R,
    out: &mut W,
    opts: &OutputOptions,
) -> io::Result<()> {
    let Some(member_id) = prompt_id(input, out, "Member ID", opts)? else {
        return Ok(());
    };
    let Some(book_id) = prompt_id(input, out, "Book ID", opts)? else {
        return Ok(());
    };
    match library.issue_book(member_id, book_id) {
        Ok(()) => output::print_confirmation(out, "Book issued!", opts),
        Err(err) => output::print_error(out, &err, opts),
    }
}

fn handle_return<R: BufRead, W: Write>(
    library: &mut Library,
    input: &mut R,
    out: &mut W,
    opts: &OutputOptions,
) -> io::Result<()> {
    let Some(member_id) = prompt_id(input, out, "Member ID", opts)? else {
        return Ok(());
    };
    let Some(book_id) = prompt_id(input, out, "Book ID", opts)? else {
        return Ok(());
    };
    match library.return_book(member_id, book_id) {
        Ok(()) => output::print_confirmation(out, "Book returned!", opts),
        Err(err) => output::print_error(out, &err, opts),
    }
}

fn handle_member_loans<R: BufRead, W: Write>(
    library: &Library,
    input: &mut R,
    out: &mut W,
    opts: &OutputOptions,
) -> io::Result<()> {
    let Some(member_id) = prompt_id(input, out, "Member ID", opts)? else {
        return Ok(());
    };
    match library.member_loans(member_id) {
        Ok((member, books)) => output::print_member_loans(out, member, &books, opts),
        Err(err) => output::print_error(out, &err, opts),
    }
}

/// Prompt for a single numeric id. A malformed value reports an error and
/// aborts the current action; end of input does the same silently.
fn prompt_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    opts: &OutputOptions,
) -> io::Result<Option<u32>> {
    write!(out, "{label}: ")?;
    out.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            output::print_error(out, &format!("expected a number for {label}"), opts)?;
            Ok(None)
        }
    }
}

/// Read one line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}
