// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "blog_stats",
    version = crate::VERSION,
    about = "Aggregate statistics over a blog post export"
)]
pub struct Args {
    /// JSON export to analyze; `-` or no path reads standard input
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}
