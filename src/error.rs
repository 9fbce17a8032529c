//! Error and rejection types.
//!
//! Board operations never fail fatally: rejected edits leave the model untouched
//! and the input handlers swallow the rejection. The enums exist so callers and
//! tests can tell why an edit was refused.

use std::path::PathBuf;
use thiserror::Error;

/// Why an edge was not added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeRejection {
    /// Both endpoints are the same block
    #[error("a block cannot be connected to itself")]
    SelfLoop,
    /// One of the endpoints is a text box
    #[error("text boxes cannot be connected")]
    TextBox,
    /// An edge with the same direction already exists
    #[error("edge already exists")]
    Duplicate,
    /// One of the endpoints is not on the board
    #[error("block does not exist")]
    UnknownBlock,
}

/// Why a block was not placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementRejection {
    /// The location is already inside an existing block
    #[error("location is occupied by another block")]
    Occupied,
}

/// Failure to load or validate a [`BoardConfig`](crate::BoardConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for the expected shape
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but holds unusable values
    #[error("invalid config: {0}")]
    Invalid(String),
}
