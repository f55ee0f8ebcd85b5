//! JSON handler for the health endpoint.

use axum::Json;
use axum::extract::State;

use catfeeder_app::ports::{CommandSink, StateStore};
use catfeeder_domain::status::HealthView;

use crate::state::AppState;

/// `GET /api/health`
///
/// Always 200: a missing state file reports as `degraded`, not as an
/// error.
pub async fn get<S, C>(State(state): State<AppState<S, C>>) -> Json<HealthView>
where
    S: StateStore + Send + Sync + 'static,
    C: CommandSink + Send + Sync + 'static,
{
    Json(state.status_service.health().await)
}
