//! Mission transition payloads

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, MoverId};

/// Load the named items onto a mover
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadRequest {
    pub mover_id: MoverId,
    pub item_ids: Vec<ItemId>,
}

/// Start or end a mission for a mover
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissionRequest {
    pub mover_id: MoverId,
}

/// Mission log query; without a mover the whole log is returned
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    #[serde(default)]
    pub mover_id: Option<MoverId>,
}
