//! Mover and item administration payloads

use serde::{Deserialize, Serialize};

/// Registration of a new mover
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMover {
    pub name: String,
    pub weight_limit: f64,
}

/// Administrative edit of a mover; absent fields are left unchanged
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoverPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight_limit: Option<f64>,
}

impl MoverPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.weight_limit.is_none()
    }
}

/// Registration of a new item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub weight: f64,
}

/// Administrative edit of an item; absent fields are left unchanged
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.weight.is_none()
    }
}
