use std::io;

use thiserror::Error;

/// Why one iteration of the emit loop failed. None of these end the loop.
#[derive(Debug, Error)]
pub(crate) enum EmitError {
    #[error("failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write log line: {0}")]
    Write(#[from] io::Error),
}
