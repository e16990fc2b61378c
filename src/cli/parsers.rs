//! Command line argument parsing.

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "ferrum-frame")]
#[command(about = "A Rust-powered columnar data frame", long_about = None)]
pub struct CliParser {
    /// Either run the demo or describe a schema.
    #[arg(required = true)]
    pub mode: Option<CliMode>,

    /// Schema tags to describe, e.g. IBFS.
    #[arg(long, default_value = "IBFS")]
    pub schema: String,

    /// Print the described schema as JSON.
    #[arg(long)]
    pub json: bool,

    /// Number of rows the demo frame is built with.
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Number of pmap workers, overrides FERRUM_PMAP_WORKERS.
    #[arg(long)]
    pub workers: Option<usize>,
}

#[derive(Clone, ValueEnum)]
pub enum CliMode {
    // Build a sample frame and run every traversal over it.
    Demo,

    // Print the column types of a schema.
    Describe,
}
