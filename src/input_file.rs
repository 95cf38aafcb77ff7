//! Order file loading.
//!
//! The first non-blank line holds the number of colours. Every following
//! non-blank line is one customer's preference list; customers are numbered
//! from 1 in line order.

use std::collections::BTreeMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use tracing::debug;

use crate::error::{PaintShopError, Result};
use crate::preferences::{parse_line, CustomerId, Preferences};
use crate::types::ColourCode;

/// A parsed order: how many colours exist and what each customer accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintOrder {
    pub colour_count: ColourCode,
    pub customers: BTreeMap<CustomerId, Preferences>,
}

impl PaintOrder {
    pub fn new(colour_count: ColourCode, customers: Vec<Preferences>) -> Self {
        let customers = customers
            .into_iter()
            .enumerate()
            .map(|(idx, prefs)| (CustomerId(idx + 1), prefs))
            .collect();
        Self {
            colour_count,
            customers,
        }
    }

    /// Every colour code the batch must cover, ascending
    pub fn colour_codes(&self) -> RangeInclusive<ColourCode> {
        1..=self.colour_count
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Reject any customer that names a code above the colour count
    pub fn validate_codes(&self) -> Result<()> {
        for (id, prefs) in &self.customers {
            if let Some(code) = prefs.max_code().filter(|c| *c > self.colour_count) {
                return Err(PaintShopError::format(format!(
                    "{} asks for colour {} but only {} colours exist",
                    id, code, self.colour_count
                )));
            }
        }
        Ok(())
    }
}

/// Load and parse an order file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PaintOrder> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PaintShopError::read(path, e))?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    parse_str(&content)
}

/// Parse order text already in memory
pub fn parse_str(content: &str) -> Result<PaintOrder> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| PaintShopError::format("missing colour count"))?
        .trim();
    let colour_count: ColourCode = header.parse().map_err(|_| {
        PaintShopError::format(format!("'{}' is not a valid colour count", header))
    })?;

    let customers = lines.map(parse_line).collect::<Result<Vec<_>>>()?;
    debug!(
        "Parsed {} colours and {} customers",
        colour_count,
        customers.len()
    );

    Ok(PaintOrder::new(colour_count, customers))
}
