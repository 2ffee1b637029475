//! Audit log over the mission log store

use std::sync::Arc;

use shared::{MissionLogEntry, MoverId, NewMissionLogEntry};

use crate::error::FleetResult;
use crate::traits::MissionLogStore;

/// Append-only view of fleet activity
///
/// Listing always comes back newest first, whatever order the store uses.
pub struct AuditLog<L: MissionLogStore> {
    store: Arc<L>,
}

impl<L: MissionLogStore> AuditLog<L> {
    pub fn new(store: Arc<L>) -> Self {
        Self { store }
    }

    pub async fn append(&self, entry: NewMissionLogEntry) -> FleetResult<MissionLogEntry> {
        self.store.append(entry).await
    }

    pub async fn list(&self) -> FleetResult<Vec<MissionLogEntry>> {
        let entries = self.store.list_newest_first().await?;
        Ok(newest_first(entries))
    }

    pub async fn list_for_mover(&self, mover_id: MoverId) -> FleetResult<Vec<MissionLogEntry>> {
        let entries = self.store.list_for_mover(mover_id).await?;
        Ok(newest_first(entries))
    }
}

fn newest_first(mut entries: Vec<MissionLogEntry>) -> Vec<MissionLogEntry> {
    entries.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.sequence.cmp(&a.sequence))
    });
    entries
}
