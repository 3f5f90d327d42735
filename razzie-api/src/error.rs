//! API error type
//!
//! Every failure is answered with the `{ "message": ..., "error": ... }`
//! envelope. Bad input maps to 400, everything else to 500.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request parameters (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Route does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure while serving a query; status depends on the cause
    #[error("{context}: {source}")]
    Query {
        context: &'static str,
        #[source]
        source: razzie_common::Error,
    },
}

impl ApiError {
    /// Wrap a library error with the message reported to the client
    ///
    /// Use as `.map_err(ApiError::query("Error getting awards ranges"))`.
    pub fn query(context: &'static str) -> impl FnOnce(razzie_common::Error) -> ApiError {
        move |source| ApiError::Query { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Query { source, .. } if source.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, detail) = match &self {
            ApiError::BadRequest(msg) => ("Invalid request".to_string(), msg.clone()),
            ApiError::NotFound(path) => ("Not found".to_string(), path.clone()),
            ApiError::Query { context, source } => (context.to_string(), source.to_string()),
        };

        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let body = Json(json!({
            "message": message,
            "error": detail,
        }));

        (status, body).into_response()
    }
}
