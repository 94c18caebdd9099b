//! HTTP response handling for login results
//!
//! Renders [`AuthResult`] envelopes into JSON responses and keeps the shared
//! error body pre-serialized.

use actix_web::{http::header, http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::models::auth::AuthResult;

/// Pre-serialized body for internal errors
static SERVER_ERROR_BODY: std::sync::LazyLock<String> = std::sync::LazyLock::new(|| {
    json!({
        "error": "server_error",
        "error_description": "An internal server error occurred"
    })
    .to_string()
});

pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Render a login result
    ///
    /// `200 OK` when authenticated, `rejected_status` otherwise. Falls back to a
    /// server error if the identity cannot be serialized.
    #[must_use]
    pub fn login_result<U: Serialize>(
        result: &AuthResult<U>,
        rejected_status: StatusCode,
    ) -> HttpResponse {
        let status = if result.is_authenticated() {
            StatusCode::OK
        } else {
            rejected_status
        };

        match serde_json::to_string(result) {
            Ok(body) => HttpResponse::build(status)
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .body(body),
            Err(e) => {
                log::error!("Failed to serialize login result: {e}");
                Self::server_error()
            }
        }
    }

    /// Create server error response
    #[must_use]
    pub fn server_error() -> HttpResponse {
        HttpResponse::InternalServerError()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .body(SERVER_ERROR_BODY.as_str())
    }
}
