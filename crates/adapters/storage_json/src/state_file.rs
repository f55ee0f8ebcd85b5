//! State-file adapter — read-only access to the controller's snapshot.

use std::io::ErrorKind;
use std::path::PathBuf;

use catfeeder_app::ports::StateStore;
use catfeeder_domain::error::{FeederError, StateReadError};
use catfeeder_domain::state::StateSnapshot;

/// [`StateStore`] backed by the JSON file the external controller writes.
///
/// Every read goes to disk; nothing is cached, so each request observes
/// the latest snapshot the controller has flushed.
#[derive(Debug, Clone)]
pub struct JsonStateFile {
    path: PathBuf,
}

impl JsonStateFile {
    /// Create an adapter reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStore for JsonStateFile {
    async fn read(&self) -> Result<StateSnapshot, FeederError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StateReadError::NotFound.into());
            }
            Err(err) => return Err(StateReadError::Io(err).into()),
        };
        let raw: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(StateReadError::Parse)?;
        let snapshot = StateSnapshot::from_value(raw).map_err(StateReadError::Parse)?;
        Ok(snapshot)
    }

    async fn available(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}
