//! Errors returned by the handlers, mapped to fixed client-facing messages.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use log::error;
use serde_json::json;

use crate::utils::{error_messages::*, validation::FormErrors};

#[derive(Debug)]
pub enum ApiError {
    /// Missing, unknown, reused or expired form token
    Csrf,
    /// At least one field was rejected
    Invalid(FormErrors),
    RateLimited,
    /// Token registry unavailable
    Token(anyhow::Error),
    /// Document store failure while writing
    Store(anyhow::Error),
    /// Document store failure while reading
    Load(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Csrf => (StatusCode::FORBIDDEN, Json(json!({ "error": CSRF_ERROR }))).into_response(),
            ApiError::Invalid(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::RateLimited => {
                (StatusCode::TOO_MANY_REQUESTS, Json(json!({ "error": RATE_LIMIT_ERROR }))).into_response()
            }
            ApiError::Token(e) => {
                error!("Failed to issue form token: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": TOKEN_FAILED }))).into_response()
            }
            ApiError::Store(e) => {
                error!("Failed to store submission: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": SUBMISSION_FAILED })))
                    .into_response()
            }
            ApiError::Load(e) => {
                error!("Failed to read the document store: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": LOAD_FAILED }))).into_response()
            }
        }
    }
}
