//! Test fixtures for webserver integration tests

use serde_json::{Value, json};

pub const UNKNOWN_ID: &str = "550e8400-e29b-41d4-a716-446655440099";

pub fn new_mover(name: &str, weight_limit: f64) -> Value {
    json!({ "name": name, "weightLimit": weight_limit })
}

pub fn new_item(name: &str, weight: f64) -> Value {
    json!({ "name": name, "weight": weight })
}

pub fn load_request(mover_id: &str, item_ids: &[&str]) -> Value {
    json!({ "moverId": mover_id, "itemIds": item_ids })
}

pub fn mission_request(mover_id: &str) -> Value {
    json!({ "moverId": mover_id })
}
