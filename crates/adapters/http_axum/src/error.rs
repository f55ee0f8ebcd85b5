//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catfeeder_domain::error::FeederError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`FeederError`] to an HTTP response.
///
/// Both failure classes surface as 500 with the error message in the
/// body; only `/api/health` demotes file absence, and it does so before
/// an error ever reaches this type.
pub struct ApiError(FeederError);

impl From<FeederError> for ApiError {
    fn from(err: FeederError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self.0 {
            FeederError::StateRead(err) => {
                tracing::error!(error = %err, "state read failed");
                err.to_string()
            }
            FeederError::CommandWrite(err) => {
                tracing::error!(error = %err, "command write failed");
                err.to_string()
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: message }),
        )
            .into_response()
    }
}
