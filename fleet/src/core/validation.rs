//! Input validation for administrative operations

use crate::error::{FleetError, FleetResult};

/// Trimmed, non-empty name
pub fn validate_name(field: &str, name: &str) -> FleetResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FleetError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Positive, finite weight
pub fn validate_weight(field: &str, weight: f64) -> FleetResult<f64> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(FleetError::validation(
            field,
            format!("must be a positive number, got {weight}"),
        ));
    }
    Ok(weight)
}
