//! Status service — read the snapshot and project the client-facing views.

use catfeeder_domain::error::FeederError;
use catfeeder_domain::status::{HealthView, StatusView, format_status};
use catfeeder_domain::time;

use crate::ports::StateStore;

/// Application service for status and health queries.
pub struct StatusService<S> {
    store: S,
}

impl<S: StateStore> StatusService<S> {
    /// Create a new service backed by the given state store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the current snapshot and format it for clients.
    ///
    /// # Errors
    ///
    /// Returns [`FeederError::StateRead`] when the snapshot is absent,
    /// unreadable, or malformed.
    #[tracing::instrument(skip(self))]
    pub async fn current_status(&self) -> Result<StatusView, FeederError> {
        let snapshot = self.store.read().await?;
        Ok(format_status(&snapshot, time::now()))
    }

    /// Probe the state store and report overall health.
    ///
    /// Never fails: an absent snapshot demotes the status to `degraded`.
    #[tracing::instrument(skip(self))]
    pub async fn health(&self) -> HealthView {
        let exists = self.store.available().await;
        HealthView::new(exists, time::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catfeeder_domain::error::StateReadError;
    use catfeeder_domain::state::StateSnapshot;
    use catfeeder_domain::status::HealthStatus;
    use serde_json::json;
    use std::future::Future;

    struct FixedStore {
        value: Option<serde_json::Value>,
    }

    impl StateStore for FixedStore {
        fn read(&self) -> impl Future<Output = Result<StateSnapshot, FeederError>> + Send {
            let result = match &self.value {
                Some(value) => {
                    StateSnapshot::from_value(value.clone()).map_err(StateReadError::Parse)
                }
                None => Err(StateReadError::NotFound),
            };
            async { result.map_err(FeederError::from) }
        }

        fn available(&self) -> impl Future<Output = bool> + Send {
            let exists = self.value.is_some();
            async move { exists }
        }
    }

    #[tokio::test]
    async fn should_format_status_when_snapshot_present() {
        let svc = StatusService::new(FixedStore {
            value: Some(json!({"machine_state": "idle", "cans_loaded": 3})),
        });

        let view = svc.current_status().await.unwrap();
        assert_eq!(view.cans_left, 3);
        assert!(!view.operation_running);
    }

    #[tokio::test]
    async fn should_propagate_not_found_when_snapshot_missing() {
        let svc = StatusService::new(FixedStore { value: None });

        let result = svc.current_status().await;
        assert!(matches!(
            result,
            Err(FeederError::StateRead(StateReadError::NotFound))
        ));
    }

    #[tokio::test]
    async fn should_report_health_from_availability_probe() {
        let svc = StatusService::new(FixedStore {
            value: Some(json!({})),
        });
        assert_eq!(svc.health().await.status, HealthStatus::Healthy);

        let svc = StatusService::new(FixedStore { value: None });
        let health = svc.health().await;
        assert_eq!(health.status, HealthStatus::Degraded);
        assert!(!health.state_file_exists);
    }
}
