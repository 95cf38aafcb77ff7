//! Paint Shop Library
//!
//! This library provides the core functionality for the paint shop batch
//! resolver: order parsing, the round-based finish resolver, and batch
//! rendering.

pub mod cli;
pub mod config_file;
pub mod error;
pub mod formatter;
pub mod input_file;
pub mod logic;
pub mod preferences;
pub mod types;

use std::path::Path;

use tracing::info;

// Re-export main types for convenience
pub use config_file::{OutputFormat, RunConfig};
pub use error::{PaintShopError, Result};
pub use formatter::{map_to_string, Batch};
pub use input_file::{parse_file, parse_str, PaintOrder};
pub use logic::choice::{next_choice, Choice};
pub use logic::resolver::{resolve, resolve_with_stats, ResolveStats};
pub use logic::validity::is_valid_choice;
pub use preferences::{parse_line, CustomerId, Preferences};
pub use types::{Assignment, Colour, ColourCode, Finish};

/// Resolve an already-parsed order and render the batch.
pub fn solve(order: &PaintOrder, config: &RunConfig) -> Result<String> {
    if config.strict_codes {
        order.validate_codes()?;
    }

    let (result, stats) = resolve_with_stats(order);
    let assignment = result?;
    info!(
        "Resolved {} customers over {} colours in {} rounds",
        stats.customers, order.colour_count, stats.rounds
    );

    match config.output {
        OutputFormat::Text => Ok(map_to_string(&assignment, order.colour_codes())),
        OutputFormat::Json => Ok(Batch::new(&assignment, order.colour_codes(), stats).to_json()?),
    }
}

/// Parse the order file at `path`, resolve it and render the batch.
pub fn try_run<P: AsRef<Path>>(path: P, config: &RunConfig) -> Result<String> {
    let order = parse_file(path)?;
    solve(&order, config)
}

/// Like [`try_run`], but any failure becomes its message.
///
/// The returned string is either a full batch or a single error message,
/// never a mix of the two.
pub fn run<P: AsRef<Path>>(path: P, config: &RunConfig) -> String {
    try_run(path, config).unwrap_or_else(|e| e.to_string())
}

/// Parse and validate the order file without solving it.
pub fn check<P: AsRef<Path>>(path: P, config: &RunConfig) -> Result<String> {
    let order = parse_file(path)?;
    if config.strict_codes {
        order.validate_codes()?;
    }
    Ok(format!(
        "{} colours, {} customers",
        order.colour_count,
        order.customer_count()
    ))
}
