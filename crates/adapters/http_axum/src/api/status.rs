//! JSON handler for the status endpoint.

use axum::Json;
use axum::extract::State;

use catfeeder_app::ports::{CommandSink, StateStore};
use catfeeder_domain::status::StatusView;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/status`
///
/// Reads the snapshot on every request; staleness is bounded only by the
/// controller's write cadence.
pub async fn get<S, C>(State(state): State<AppState<S, C>>) -> Result<Json<StatusView>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CommandSink + Send + Sync + 'static,
{
    let view = state.status_service.current_status().await?;
    Ok(Json(view))
}
