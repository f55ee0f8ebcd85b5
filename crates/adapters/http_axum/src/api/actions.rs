//! JSON handlers for the action-trigger endpoints.
//!
//! Each handler is a thin call into the control service with a fixed
//! action tag. Current machine state is never inspected first — the busy
//! guard in the dashboard is cosmetic, and the controller enforces its
//! own.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use catfeeder_app::ports::{CommandSink, StateStore};
use catfeeder_domain::command::Action;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successfully submitted action.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: &'static str,
}

/// `POST /api/feed`
pub async fn feed<S, C>(
    State(state): State<AppState<S, C>>,
) -> Result<Json<ActionResponse>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CommandSink + Send + Sync + 'static,
{
    state.control_service.request(Action::ManualFeed).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Manual feed command sent",
    }))
}

/// `POST /api/eject`
pub async fn eject<S, C>(
    State(state): State<AppState<S, C>>,
) -> Result<Json<ActionResponse>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CommandSink + Send + Sync + 'static,
{
    state.control_service.request(Action::EjectOnly).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Eject command sent",
    }))
}

/// `POST /api/terminate`
pub async fn terminate<S, C>(
    State(state): State<AppState<S, C>>,
) -> Result<Json<ActionResponse>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CommandSink + Send + Sync + 'static,
{
    state.control_service.request(Action::Terminate).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Terminate command sent",
    }))
}
