//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use catfeeder_app::ports::{CommandSink, StateStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the dashboard at `/` and the JSON API under `/api`. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<S, C>(state: AppState<S, C>) -> Router
where
    S: StateStore + Send + Sync + 'static,
    C: CommandSink + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(crate::dashboard::index))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
