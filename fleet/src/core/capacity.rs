//! Carrying-capacity policy

use shared::Mover;

use crate::error::{FleetError, FleetResult};

/// Weight the mover can still take on
pub fn remaining_capacity(mover: &Mover) -> f64 {
    (mover.weight_limit - mover.current_weight).max(0.0)
}

/// Whether `proposed_weight` fits in the mover's remaining capacity
///
/// Compares the weight that would actually be stored, so rounding in the
/// sum can never push the load past the limit.
pub fn can_load(mover: &Mover, proposed_weight: f64) -> bool {
    mover.current_weight + proposed_weight <= mover.weight_limit
}

/// `can_load` as a classified error carrying the numbers a caller needs
pub fn check_capacity(mover: &Mover, proposed_weight: f64) -> FleetResult<()> {
    if can_load(mover, proposed_weight) {
        Ok(())
    } else {
        Err(FleetError::CapacityExceeded {
            weight_limit: mover.weight_limit,
            remaining: remaining_capacity(mover),
            attempted: proposed_weight,
        })
    }
}
