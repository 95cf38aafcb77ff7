//! Logic modules — turns preference lists into a finish per colour code.
//!
//! # Modules
//!
//! - `choice` — per-round choice generation, most constrained customer first
//! - `validity` — conflict check for one choice against committed finishes
//! - `resolver` — round-based greedy commitment loop

pub mod choice;
pub mod resolver;
pub mod validity;
