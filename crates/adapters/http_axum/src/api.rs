//! JSON API handler modules.

pub mod actions;
pub mod health;
pub mod status;

use axum::Router;
use axum::routing::{get, post};

use catfeeder_app::ports::{CommandSink, StateStore};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, C>() -> Router<AppState<S, C>>
where
    S: StateStore + Send + Sync + 'static,
    C: CommandSink + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(status::get::<S, C>))
        .route("/feed", post(actions::feed::<S, C>))
        .route("/eject", post(actions::eject::<S, C>))
        .route("/terminate", post(actions::terminate::<S, C>))
        .route("/health", get(health::get::<S, C>))
}
