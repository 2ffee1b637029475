//! Fleet-specific error types

use shared::{ItemId, MissionAction, MoverId, MoverState, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Mover not found: {id}")]
    MoverNotFound { id: MoverId },

    #[error("Item not found: {id}")]
    ItemNotFound { id: ItemId },

    #[error("Mover {mover_id} cannot {action} while {state}")]
    InvalidState {
        mover_id: MoverId,
        state: MoverState,
        action: MissionAction,
    },

    #[error(
        "Maximum weight exceeded, total weight: {weight_limit}kg, remaining weight: {remaining}kg, attempted: {attempted}kg"
    )]
    CapacityExceeded {
        weight_limit: f64,
        remaining: f64,
        attempted: f64,
    },

    #[error("Mover {mover_id} was modified by another request")]
    ConcurrentModification { mover_id: MoverId },

    #[error("Storage operation failed: {message}")]
    Storage { message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

impl FleetError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FleetError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        FleetError::Storage { message: message.into() }
    }

    /// True for failures caused by the caller's input or the mover's state,
    /// as opposed to the storage layer
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FleetError::Storage { .. })
    }
}

pub type FleetResult<T> = Result<T, FleetError>;
