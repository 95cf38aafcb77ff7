use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config_file::OutputFormat;

/// Paint Shop - pick gloss or matte for every colour so each customer is happy
#[derive(Parser, Debug)]
#[command(name = "paintshop")]
#[command(about = "Assigns a finish to every paint colour so each customer gets an acceptable batch")]
#[command(version)]
pub struct Cli {
    /// Order file: colour count on the first line, one customer per line after
    pub input: PathBuf,

    /// Output format (overrides the settings file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reject colour codes above the colour count
    #[arg(long)]
    pub strict: bool,

    /// Path to a JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only parse and validate the order file, do not solve
    #[arg(long)]
    pub check: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Default log filter implied by `-v` flags, if any
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
