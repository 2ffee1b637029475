//! Shared error types for the fleet service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid {kind} id: {input}")]
    InvalidId { kind: &'static str, input: String },

    #[error("Unknown mover state: {input}")]
    InvalidMoverState { input: String },

    #[error("Unknown mission action: {input}")]
    InvalidMissionAction { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
