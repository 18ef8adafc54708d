//! Command-line definition for the catalog binary.

use clap::{Parser, ValueEnum};

use catalog_core::VERSION;

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered table (default)
    Table,
    /// Pipe-friendly one-line-per-record output
    Plain,
    /// One JSON document per action
    Json,
}

/// Catalog - an interactive, in-memory library catalog and lending tracker
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Output format for listings
    #[arg(long, value_enum, default_value = "table", env = "CATALOG_FORMAT")]
    pub format: OutputFormat,

    /// Disable colored output (also honored via the NO_COLOR variable)
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (suppress the banner)
    #[arg(short, long)]
    pub quiet: bool,

    /// Start with an empty catalog instead of the sample data
    #[arg(long)]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["catalog"]);
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(!cli.no_color);
        assert!(!cli.quiet);
        assert!(!cli.no_seed);
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["catalog", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
