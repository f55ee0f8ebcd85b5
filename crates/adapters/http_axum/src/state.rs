//! Shared application state for axum handlers.

use std::sync::Arc;

use catfeeder_app::ports::{CommandSink, StateStore};
use catfeeder_app::services::control_service::ControlService;
use catfeeder_app::services::status_service::StatusService;

/// Application state shared across all axum handlers.
///
/// Generic over the state-store and command-sink types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<S, C> {
    /// Status and health queries.
    pub status_service: Arc<StatusService<S>>,
    /// Command issuance.
    pub control_service: Arc<ControlService<C>>,
}

impl<S, C> Clone for AppState<S, C> {
    fn clone(&self) -> Self {
        Self {
            status_service: Arc::clone(&self.status_service),
            control_service: Arc::clone(&self.control_service),
        }
    }
}

impl<S, C> AppState<S, C>
where
    S: StateStore + Send + Sync + 'static,
    C: CommandSink + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(status_service: StatusService<S>, control_service: ControlService<C>) -> Self {
        Self {
            status_service: Arc::new(status_service),
            control_service: Arc::new(control_service),
        }
    }
}
