//! Common error types used across the workspace.
//!
//! Each failure class gets its own typed enum; [`FeederError`] is the
//! umbrella the ports and services speak. Adapters construct the typed
//! variants, the HTTP layer maps them onto status codes.

/// Top-level error for port and service operations.
#[derive(Debug, thiserror::Error)]
pub enum FeederError {
    /// The machine-state snapshot could not be read.
    #[error(transparent)]
    StateRead(#[from] StateReadError),

    /// The pending command could not be written.
    #[error(transparent)]
    CommandWrite(#[from] CommandWriteError),
}

/// Failures while reading the machine-state snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StateReadError {
    /// The backing file does not exist (yet).
    #[error("state file not found")]
    NotFound,

    /// The backing file exists but could not be read.
    #[error("failed to read state file: {0}")]
    Io(#[source] std::io::Error),

    /// The backing file is not valid JSON.
    #[error("failed to parse state file: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Failures while writing the pending command.
#[derive(Debug, thiserror::Error)]
pub enum CommandWriteError {
    /// The command record could not be serialized.
    #[error("failed to serialize command: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The command file could not be written.
    #[error("failed to write command file: {0}")]
    Io(#[source] std::io::Error),
}
