//! Mission state machine transition table
//!
//! Resting → Loading → OnMission → Resting. Loading may repeat. Every
//! (state, action) pair is listed so a new state or action fails to compile
//! until it is handled here.

use shared::{MissionAction, Mover, MoverState};

use crate::error::{FleetError, FleetResult};

/// State reached by applying `action` in `current`, if legal
pub fn next_state(current: MoverState, action: MissionAction) -> Option<MoverState> {
    use MissionAction::*;
    use MoverState::*;

    match (current, action) {
        (Resting, Load) | (Loading, Load) => Some(Loading),
        (Loading, StartMission) => Some(OnMission),
        (OnMission, EndMission) => Some(Resting),
        (Resting, StartMission)
        | (Resting, EndMission)
        | (Loading, EndMission)
        | (OnMission, Load)
        | (OnMission, StartMission) => None,
    }
}

/// `next_state` for a concrete mover, as a classified error
pub fn transition(mover: &Mover, action: MissionAction) -> FleetResult<MoverState> {
    next_state(mover.state, action).ok_or(FleetError::InvalidState {
        mover_id: mover.id,
        state: mover.state,
        action,
    })
}
