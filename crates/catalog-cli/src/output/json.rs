//! JSON rendering: one compact document per action.

use std::fmt;
use std::io::{self, Write};

use serde_json::json;

use catalog_core::{ActivityReport, Book, Member};

fn write_doc<W: Write>(out: &mut W, value: &serde_json::Value) -> io::Result<()> {
    writeln!(out, "{value}")
}

pub(super) fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    write_doc(out, &json!({ "books": books }))
}

pub(super) fn print_member_loans<W: Write>(
    out: &mut W,
    member: &Member,
    books: &[&Book],
) -> io::Result<()> {
    write_doc(out, &json!({ "member": member, "books": books }))
}

pub(super) fn print_activity<W: Write>(out: &mut W, report: &ActivityReport) -> io::Result<()> {
    write_doc(
        out,
        &json!({ "issued": &report.issued, "returned": &report.returned }),
    )
}

pub(super) fn print_confirmation<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_doc(out, &json!({ "status": "ok", "message": message }))
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &dyn fmt::Display) -> io::Result<()> {
    write_doc(out, &json!({ "status": "error", "message": err.to_string() }))
}
