//! Error handling module for the paint shop
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Every failure the orchestrator can report is one of these variants, and the
//! `Display` text is what ends up on stdout in place of a batch.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the paint shop
#[derive(Error, Debug)]
pub enum PaintShopError {
    /// Malformed header or customer line
    #[error("Format error: {0}")]
    Format(String),

    /// Input file missing or unreadable
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A customer's last remaining option conflicts with a committed finish.
    ///
    /// The message text is part of the command-line interface.
    #[error("No solution exists")]
    NoSolution,

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for paint shop operations
pub type Result<T> = std::result::Result<T, PaintShopError>;

impl PaintShopError {
    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure (sysexits-style for input problems)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoSolution => 1,
            Self::Format(_) => 65,
            Self::Read { .. } => 66,
            Self::Json(_) => 70,
        }
    }
}
