//! Batch rendering.
//!
//! Every colour code gets a finish in the output. Codes nobody constrained
//! fall back to gloss.

use serde::Serialize;

use crate::logic::resolver::ResolveStats;
use crate::types::{Assignment, ColourCode, Finish};

/// Finish per code in `codes` order, defaulting unassigned codes to gloss
pub fn finishes<I>(assignment: &Assignment, codes: I) -> Vec<Finish>
where
    I: IntoIterator<Item = ColourCode>,
{
    codes
        .into_iter()
        .map(|code| assignment.get(&code).copied().unwrap_or_default())
        .collect()
}

/// Space-joined finish symbols, one per code in `codes`
pub fn map_to_string<I>(assignment: &Assignment, codes: I) -> String
where
    I: IntoIterator<Item = ColourCode>,
{
    finishes(assignment, codes)
        .iter()
        .map(Finish::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Machine-readable batch for `--format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    pub finishes: Vec<Finish>,
    pub stats: ResolveStats,
}

impl Batch {
    pub fn new<I>(assignment: &Assignment, codes: I, stats: ResolveStats) -> Self
    where
        I: IntoIterator<Item = ColourCode>,
    {
        Self {
            finishes: finishes(assignment, codes),
            stats,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
