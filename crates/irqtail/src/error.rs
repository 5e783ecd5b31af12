//! Fatal-condition taxonomy for the driver.
//!
//! Enrichment misses never appear here; they degrade to absent output
//! fields at the provider boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("no irq-log records detected")]
    NoRecords,

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
