//! Catalog CLI - an interactive, in-memory library catalog and lending tracker.
//!
//! Seeds a small sample catalog, then drives the menu loop over stdin and
//! stdout until the operator exits. All state is lost when the process ends.

use std::io::{self, IsTerminal};

use clap::Parser;

use catalog_core::Library;

mod cli;
mod menu;
mod output;

use cli::Cli;
use menu::MenuOptions;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut library = Library::new();
    if !cli.no_seed {
        seed_sample_catalog(&mut library);
    }

    let no_color = cli.no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let stdout = io::stdout();
    let opts = MenuOptions {
        format: cli.format,
        color: !no_color && stdout.is_terminal(),
        quiet: cli.quiet,
    };

    let stdin = io::stdin();
    menu::run(
        &mut library,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &opts,
    )?;
    Ok(())
}

/// The sample data every session starts from (unless `--no-seed`).
pub(crate) fn seed_sample_catalog(library: &mut Library) {
    library.add_book(1, "C++ Programming");
    library.add_book(2, "Data Structures");
    library.register_member(101, "Alice");
    library.register_member(102, "Bob");
}
