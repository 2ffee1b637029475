//! WebServer-specific error types and their HTTP mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fleet::FleetError;
use serde_json::{Value, json};
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest { details: details.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            WebServerError::InvalidRequest { .. } | WebServerError::SharedError(_) => StatusCode::BAD_REQUEST,
            WebServerError::Fleet(err) => fleet_status(err),
            WebServerError::Config(_) | WebServerError::ServerStartup(_) | WebServerError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable error code for the response body
    pub fn code(&self) -> &'static str {
        match self {
            WebServerError::InvalidRequest { .. } | WebServerError::SharedError(_) => "INVALID_REQUEST",
            WebServerError::Fleet(err) => fleet_code(err),
            WebServerError::Config(_) | WebServerError::ServerStartup(_) | WebServerError::IoError(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    fn body(&self) -> Value {
        let mut body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });

        match self {
            WebServerError::Fleet(FleetError::CapacityExceeded {
                weight_limit,
                remaining,
                attempted,
            }) => {
                body["weightLimit"] = json!(weight_limit);
                body["remaining"] = json!(remaining);
                body["attempted"] = json!(attempted);
            }
            WebServerError::Fleet(FleetError::Validation { field, .. }) => {
                body["field"] = json!(field);
            }
            WebServerError::Fleet(FleetError::InvalidState { state, action, .. }) => {
                body["state"] = json!(state);
                body["action"] = json!(action);
            }
            _ => {}
        }

        body
    }
}

fn fleet_status(err: &FleetError) -> StatusCode {
    match err {
        FleetError::Validation { .. }
        | FleetError::InvalidState { .. }
        | FleetError::CapacityExceeded { .. }
        | FleetError::SharedError(_) => StatusCode::BAD_REQUEST,
        FleetError::MoverNotFound { .. } | FleetError::ItemNotFound { .. } => StatusCode::NOT_FOUND,
        FleetError::ConcurrentModification { .. } => StatusCode::CONFLICT,
        FleetError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn fleet_code(err: &FleetError) -> &'static str {
    match err {
        FleetError::Validation { .. } | FleetError::SharedError(_) => "VALIDATION_ERROR",
        FleetError::MoverNotFound { .. } | FleetError::ItemNotFound { .. } => "NOT_FOUND",
        FleetError::InvalidState { .. } => "INVALID_STATE",
        FleetError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
        FleetError::ConcurrentModification { .. } => "CONCURRENT_MODIFICATION",
        FleetError::Storage { .. } => "STORAGE_ERROR",
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "❌ Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
