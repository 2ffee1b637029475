//! Mover registry
//!
//! Administrative access to mover records. Mission fields (state, cargo,
//! completed missions) are owned by `MissionControl` and cannot be edited
//! here.

use std::sync::Arc;

use chrono::Utc;
use shared::{Mover, MoverId, MoverPatch, NewMover, mover_info};

use crate::core::validation::{validate_name, validate_weight};
use crate::error::{FleetError, FleetResult};
use crate::traits::MoverStore;

pub struct MoverRegistry<M: MoverStore> {
    store: Arc<M>,
}

impl<M: MoverStore> MoverRegistry<M> {
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    /// Register a resting, empty mover
    pub async fn create(&self, name: &str, weight_limit: f64) -> FleetResult<Mover> {
        let name = validate_name("name", name)?;
        let weight_limit = validate_weight("weightLimit", weight_limit)?;

        let mover = self.store.insert(Mover::new(name, weight_limit)).await?;
        mover_info!(
            mover.id,
            "🧙 Registered mover '{}' (limit {}kg)",
            mover.name,
            mover.weight_limit
        );
        Ok(mover)
    }

    pub async fn register(&self, request: NewMover) -> FleetResult<Mover> {
        self.create(&request.name, request.weight_limit).await
    }

    pub async fn get(&self, id: MoverId) -> FleetResult<Mover> {
        self.store
            .get(id)
            .await?
            .ok_or(FleetError::MoverNotFound { id })
    }

    /// Apply an administrative edit
    ///
    /// The capacity may not drop below what the mover currently carries.
    pub async fn update(&self, id: MoverId, patch: MoverPatch) -> FleetResult<Mover> {
        let mut mover = self.get(id).await?;
        if patch.is_empty() {
            return Ok(mover);
        }

        if let Some(name) = patch.name.as_deref() {
            mover.name = validate_name("name", name)?;
        }

        if let Some(weight_limit) = patch.weight_limit {
            let weight_limit = validate_weight("weightLimit", weight_limit)?;
            if weight_limit < mover.current_weight {
                return Err(FleetError::validation(
                    "weightLimit",
                    format!(
                        "must be at least the current load of {}kg, got {}",
                        mover.current_weight, weight_limit
                    ),
                ));
            }
            mover.weight_limit = weight_limit;
        }

        mover.updated_at = Utc::now();
        let updated = self
            .store
            .update(mover)
            .await?
            .ok_or(FleetError::MoverNotFound { id })?;

        mover_info!(id, "✏️ Updated mover '{}'", updated.name);
        Ok(updated)
    }

    pub async fn list(&self) -> FleetResult<Vec<Mover>> {
        self.store.list().await
    }

    /// Remove a mover; no mission log entry is written
    pub async fn delete(&self, id: MoverId) -> FleetResult<Mover> {
        let removed = self
            .store
            .remove(id)
            .await?
            .ok_or(FleetError::MoverNotFound { id })?;

        mover_info!(id, "🗑️ Removed mover '{}' in state {}", removed.name, removed.state);
        Ok(removed)
    }
}
