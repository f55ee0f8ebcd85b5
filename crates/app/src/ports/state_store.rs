//! State store port — read access to the controller's state snapshot.

use std::future::Future;

use catfeeder_domain::error::FeederError;
use catfeeder_domain::state::StateSnapshot;

/// Reads the machine-state snapshot the external controller maintains.
///
/// Implementations must not cache: every `read` observes the latest
/// snapshot present in the backing store, so staleness is bounded only by
/// the external writer's update cadence.
pub trait StateStore {
    /// Read and parse the current snapshot.
    fn read(&self) -> impl Future<Output = Result<StateSnapshot, FeederError>> + Send;

    /// Whether the backing store currently holds a snapshot at all.
    ///
    /// Health probe; never errors — an unreachable store reads as absent.
    fn available(&self) -> impl Future<Output = bool> + Send;
}

impl<T: StateStore + Send + Sync> StateStore for std::sync::Arc<T> {
    fn read(&self) -> impl Future<Output = Result<StateSnapshot, FeederError>> + Send {
        (**self).read()
    }

    fn available(&self) -> impl Future<Output = bool> + Send {
        (**self).available()
    }
}
