//! Fleet records: movers, items and mission log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{ItemId, LogEntryId, MoverId};
use crate::errors::SharedError;

/// Lifecycle state of a mover
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoverState {
    /// Idle, ready to be loaded
    #[default]
    Resting,
    /// Cargo has been added, mission not started yet
    Loading,
    /// Out on a mission
    OnMission,
}

impl fmt::Display for MoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoverState::Resting => write!(f, "resting"),
            MoverState::Loading => write!(f, "loading"),
            MoverState::OnMission => write!(f, "on-mission"),
        }
    }
}

impl FromStr for MoverState {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resting" => Ok(MoverState::Resting),
            "loading" => Ok(MoverState::Loading),
            "on-mission" | "on_mission" | "onmission" => Ok(MoverState::OnMission),
            _ => Err(SharedError::InvalidMoverState { input: s.to_string() }),
        }
    }
}

/// Transition recorded in the mission log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionAction {
    Load,
    StartMission,
    EndMission,
}

impl fmt::Display for MissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionAction::Load => write!(f, "LOAD"),
            MissionAction::StartMission => write!(f, "START_MISSION"),
            MissionAction::EndMission => write!(f, "END_MISSION"),
        }
    }
}

impl FromStr for MissionAction {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOAD" => Ok(MissionAction::Load),
            "START_MISSION" | "START" => Ok(MissionAction::StartMission),
            "END_MISSION" | "END" => Ok(MissionAction::EndMission),
            _ => Err(SharedError::InvalidMissionAction { input: s.to_string() }),
        }
    }
}

/// A transport unit with a carrying capacity and a mission lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mover {
    pub id: MoverId,
    pub name: String,
    pub weight_limit: f64,
    pub current_weight: f64,
    pub state: MoverState,
    /// Items currently assigned, in load order
    pub items: Vec<ItemId>,
    pub completed_missions: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Bumped by the store on every write
    pub revision: u64,
}

impl Mover {
    /// Create a resting, empty mover
    pub fn new(name: impl Into<String>, weight_limit: f64) -> Self {
        let now = Utc::now();
        Self {
            id: MoverId::new(),
            name: name.into(),
            weight_limit,
            current_weight: 0.0,
            state: MoverState::Resting,
            items: Vec::new(),
            completed_missions: 0,
            created_at: now,
            updated_at: now,
            revision: 0,
        }
    }

    pub fn carries(&self, item_id: &ItemId) -> bool {
        self.items.contains(item_id)
    }
}

/// A weighted cargo unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            name: name.into(),
            weight,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Immutable record of one completed transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionLogEntry {
    pub id: LogEntryId,
    pub mover_id: MoverId,
    pub action: MissionAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemId>>,
    /// Mover state after the action
    pub state: MoverState,
    pub timestamp: DateTime<Utc>,
    /// Position in creation order
    pub sequence: u64,
}

/// Log entry before the log assigns its id, sequence and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewMissionLogEntry {
    pub mover_id: MoverId,
    pub action: MissionAction,
    pub items: Option<Vec<ItemId>>,
    pub state: MoverState,
}

impl NewMissionLogEntry {
    pub fn load(mover: &Mover, items: Vec<ItemId>) -> Self {
        Self {
            mover_id: mover.id,
            action: MissionAction::Load,
            items: Some(items),
            state: mover.state,
        }
    }

    pub fn start_mission(mover: &Mover) -> Self {
        Self {
            mover_id: mover.id,
            action: MissionAction::StartMission,
            items: None,
            state: mover.state,
        }
    }

    pub fn end_mission(mover: &Mover) -> Self {
        Self {
            mover_id: mover.id,
            action: MissionAction::EndMission,
            items: None,
            state: mover.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mover_state_wire_names() {
        assert_eq!(serde_json::to_string(&MoverState::OnMission).unwrap(), "\"on-mission\"");
        assert_eq!("on-mission".parse::<MoverState>().unwrap(), MoverState::OnMission);
        assert!("flying".parse::<MoverState>().is_err());
    }

    #[test]
    fn test_mission_action_wire_names() {
        assert_eq!(serde_json::to_string(&MissionAction::StartMission).unwrap(), "\"START_MISSION\"");
        assert_eq!("end_mission".parse::<MissionAction>().unwrap(), MissionAction::EndMission);
    }

    #[test]
    fn test_new_mover_defaults() {
        let mover = Mover::new("Gandalf", 100.0);
        assert_eq!(mover.state, MoverState::Resting);
        assert_eq!(mover.current_weight, 0.0);
        assert!(mover.items.is_empty());
        assert_eq!(mover.completed_missions, 0);
        assert_eq!(mover.revision, 0);
    }

    #[test]
    fn test_log_entry_omits_items_when_absent() {
        let mover = Mover::new("Radagast", 50.0);
        let draft = NewMissionLogEntry::start_mission(&mover);
        let entry = MissionLogEntry {
            id: LogEntryId::new(),
            mover_id: draft.mover_id,
            action: draft.action,
            items: draft.items,
            state: MoverState::OnMission,
            timestamp: Utc::now(),
            sequence: 1,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("items").is_none());
        assert_eq!(json["action"], "START_MISSION");
        assert_eq!(json["moverId"], mover.id.to_string());
    }
}
