use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use shortforge_core::{Brief, ShortforgeError, generate_plan};

use crate::models::{ErrorResponse, GenerateResponse};
use crate::state::AppState;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Brief>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(brief) = payload.map_err(|rejection| {
        tracing::debug!("rejected request body: {rejection}");
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid JSON payload")
    })?;

    let plan = generate_plan(&state.upstream, &brief).await.map_err(|err| {
        tracing::error!("plan generation failed: {err}");
        ApiError::from(err)
    })?;

    Ok(Json(GenerateResponse { plan }))
}

/// User-facing error: a status code plus a JSON `{error}` body.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<ShortforgeError> for ApiError {
    fn from(err: ShortforgeError) -> Self {
        let status = match &err {
            ShortforgeError::MissingField { .. } | ShortforgeError::MissingApiKey { .. } => {
                StatusCode::BAD_REQUEST
            }
            ShortforgeError::Upstream { .. } | ShortforgeError::Transport(_) => {
                StatusCode::BAD_GATEWAY
            }
            // Empty, malformed, or schema-violating completions, and anything
            // else the gateway reports, surface as a server-side failure.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
