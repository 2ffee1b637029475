//! Route handlers grouped by resource

pub mod health;
pub mod items;
pub mod missions;
pub mod movers;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use crate::error::WebServerError;

impl From<JsonRejection> for WebServerError {
    fn from(rejection: JsonRejection) -> Self {
        WebServerError::invalid_request(rejection.body_text())
    }
}

impl From<PathRejection> for WebServerError {
    fn from(rejection: PathRejection) -> Self {
        WebServerError::invalid_request(rejection.body_text())
    }
}

impl From<QueryRejection> for WebServerError {
    fn from(rejection: QueryRejection) -> Self {
        WebServerError::invalid_request(rejection.body_text())
    }
}
