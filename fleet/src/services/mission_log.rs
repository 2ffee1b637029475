//! In-memory mission log

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use shared::{LogEntryId, MissionLogEntry, MoverId, NewMissionLogEntry};
use tokio::sync::RwLock;

use crate::error::FleetResult;
use crate::traits::MissionLogStore;

#[derive(Default)]
struct LogState {
    entries: Vec<MissionLogEntry>,
    last_timestamp: Option<DateTime<Utc>>,
}

/// Append-only log; entries are stored oldest first
#[derive(Clone, Default)]
pub struct InMemoryMissionLog {
    state: Arc<RwLock<LogState>>,
}

impl InMemoryMissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl MissionLogStore for InMemoryMissionLog {
    async fn append(&self, entry: NewMissionLogEntry) -> FleetResult<MissionLogEntry> {
        let mut state = self.state.write().await;

        // Timestamps must strictly increase with creation order even when the
        // wall clock does not advance between two appends.
        let mut timestamp = Utc::now();
        if let Some(last) = state.last_timestamp {
            if timestamp <= last {
                timestamp = last + Duration::microseconds(1);
            }
        }

        let logged = MissionLogEntry {
            id: LogEntryId::new(),
            mover_id: entry.mover_id,
            action: entry.action,
            items: entry.items,
            state: entry.state,
            timestamp,
            sequence: state.entries.len() as u64 + 1,
        };

        state.last_timestamp = Some(timestamp);
        state.entries.push(logged.clone());
        Ok(logged)
    }

    async fn list_newest_first(&self) -> FleetResult<Vec<MissionLogEntry>> {
        let state = self.state.read().await;
        Ok(state.entries.iter().rev().cloned().collect())
    }

    async fn list_for_mover(&self, mover_id: MoverId) -> FleetResult<Vec<MissionLogEntry>> {
        let state = self.state.read().await;
        Ok(state
            .entries
            .iter()
            .rev()
            .filter(|e| e.mover_id == mover_id)
            .cloned()
            .collect())
    }
}
