//! Mission state machine
//!
//! Load → StartMission → EndMission for one mover at a time. Every
//! successful transition writes the mover and then appends exactly one
//! mission log entry. A failed precondition writes nothing.
//!
//! The two writes land in separate collections. Concurrent transitions on
//! the same mover are serialized by the store's revision check: the second
//! writer gets `ConcurrentModification` and nothing of its own is persisted.
//! If the log append fails after the mover write, the previous mover record
//! is written back before the error is returned. Between the two writes a
//! reader can see the new mover state without its log entry.

use std::sync::Arc;

use chrono::Utc;
use shared::{
    Item, ItemId, MissionAction, MissionLogEntry, Mover, MoverId, MoverState, NewMissionLogEntry,
    mover_debug, mover_error, mover_info, mover_warn,
};

use crate::audit::AuditLog;
use crate::config::{FleetConfig, MissingItemPolicy};
use crate::core::{check_capacity, rank_most_active, transition};
use crate::error::{FleetError, FleetResult};
use crate::traits::{ItemStore, MissionLogStore, MoverSortField, MoverStore, SortOrder};

/// Drives movers through their mission lifecycle
pub struct MissionControl<M, I, L>
where
    M: MoverStore,
    I: ItemStore,
    L: MissionLogStore,
{
    movers: Arc<M>,
    items: Arc<I>,
    log: AuditLog<L>,
    config: FleetConfig,
}

impl<M, I, L> MissionControl<M, I, L>
where
    M: MoverStore,
    I: ItemStore,
    L: MissionLogStore,
{
    pub fn new(movers: Arc<M>, items: Arc<I>, log: Arc<L>, config: FleetConfig) -> Self {
        Self {
            movers,
            items,
            log: AuditLog::new(log),
            config,
        }
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Add items to a resting or loading mover
    ///
    /// Repeated ids in `item_ids` count once. Ids that do not resolve are
    /// handled according to `FleetConfig::missing_items`.
    pub async fn load(&self, mover_id: MoverId, item_ids: &[ItemId]) -> FleetResult<Mover> {
        let mover = self.fetch_mover(mover_id).await?;
        let next = transition(&mover, MissionAction::Load)?;

        let mut requested: Vec<ItemId> = Vec::with_capacity(item_ids.len());
        for id in item_ids {
            if !requested.contains(id) {
                requested.push(*id);
            }
        }

        if let Some(carried) = requested.iter().find(|id| mover.carries(id)) {
            return Err(FleetError::validation(
                "itemIds",
                format!("item {carried} is already loaded on this mover"),
            ));
        }

        let cargo = self.resolve_items(&mover, &requested).await?;
        if cargo.is_empty() {
            return Err(FleetError::validation("itemIds", "no known items to load"));
        }

        let total_weight: f64 = cargo.iter().map(|item| item.weight).sum();
        if let Err(err) = check_capacity(&mover, total_weight) {
            mover_warn!(mover_id, "⚖️ Load of {}kg rejected: {}", total_weight, err);
            return Err(err);
        }

        let loaded_ids: Vec<ItemId> = cargo.iter().map(|item| item.id).collect();
        let previous = mover.clone();
        let mut updated = mover;
        updated.items.extend(loaded_ids.iter().copied());
        updated.current_weight += total_weight;
        updated.state = next;
        updated.updated_at = Utc::now();

        let loaded = self
            .commit(previous, updated, |m| NewMissionLogEntry::load(m, loaded_ids))
            .await?;

        mover_info!(
            mover_id,
            "📦 Loaded {} item(s), {}kg of {}kg",
            cargo.len(),
            loaded.current_weight,
            loaded.weight_limit
        );
        Ok(loaded)
    }

    /// Send a loading mover out on its mission
    pub async fn start_mission(&self, mover_id: MoverId) -> FleetResult<Mover> {
        let mover = self.fetch_mover(mover_id).await?;
        let next = transition(&mover, MissionAction::StartMission)?;

        let previous = mover.clone();
        let mut updated = mover;
        updated.state = next;
        updated.updated_at = Utc::now();

        let started = self
            .commit(previous, updated, NewMissionLogEntry::start_mission)
            .await?;

        mover_info!(mover_id, "🚀 Mission started carrying {}kg", started.current_weight);
        Ok(started)
    }

    /// Bring a mover back: unload, rest, and count the mission
    pub async fn end_mission(&self, mover_id: MoverId) -> FleetResult<Mover> {
        let mover = self.fetch_mover(mover_id).await?;
        let next = transition(&mover, MissionAction::EndMission)?;

        let previous = mover.clone();
        let mut updated = mover;
        updated.items.clear();
        updated.current_weight = 0.0;
        updated.state = next;
        updated.completed_missions += 1;
        updated.updated_at = Utc::now();

        let ended = self
            .commit(previous, updated, NewMissionLogEntry::end_mission)
            .await?;

        mover_info!(
            mover_id,
            "🏁 Mission completed ({} in total)",
            ended.completed_missions
        );
        Ok(ended)
    }

    /// Every mover, most completed missions first
    pub async fn most_active(&self) -> FleetResult<Vec<Mover>> {
        let movers = self
            .movers
            .list_sorted(MoverSortField::CompletedMissions, SortOrder::Descending)
            .await?;
        Ok(rank_most_active(movers))
    }

    /// Whole mission log, newest first
    pub async fn logs(&self) -> FleetResult<Vec<MissionLogEntry>> {
        self.log.list().await
    }

    /// Mission history of one mover, newest first
    ///
    /// Entries of a deleted mover are still returned.
    pub async fn logs_for_mover(&self, mover_id: MoverId) -> FleetResult<Vec<MissionLogEntry>> {
        self.log.list_for_mover(mover_id).await
    }

    async fn fetch_mover(&self, mover_id: MoverId) -> FleetResult<Mover> {
        self.movers
            .get(mover_id)
            .await?
            .ok_or(FleetError::MoverNotFound { id: mover_id })
    }

    /// Resolve requested ids to items, keeping request order
    async fn resolve_items(&self, mover: &Mover, requested: &[ItemId]) -> FleetResult<Vec<Item>> {
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.items.get_many(requested.to_vec()).await?;
        let mut cargo = Vec::with_capacity(found.len());

        for id in requested {
            match found.iter().find(|item| item.id == *id) {
                Some(item) => cargo.push(item.clone()),
                None => match self.config.missing_items {
                    MissingItemPolicy::Skip => {
                        mover_debug!(mover.id, "Skipping unknown item {}", id);
                    }
                    MissingItemPolicy::Reject => {
                        return Err(FleetError::ItemNotFound { id: *id });
                    }
                },
            }
        }

        Ok(cargo)
    }

    /// Persist the mover, then log the transition
    async fn commit<F>(&self, previous: Mover, updated: Mover, entry: F) -> FleetResult<Mover>
    where
        F: FnOnce(&Mover) -> NewMissionLogEntry,
    {
        let mover_id = updated.id;
        let stored = self
            .movers
            .update(updated)
            .await?
            .ok_or(FleetError::MoverNotFound { id: mover_id })?;

        let draft = entry(&stored);
        let action = draft.action;

        match self.log.append(draft).await {
            Ok(logged) => {
                mover_debug!(mover_id, "Logged {} (sequence {})", action, logged.sequence);
                Ok(stored)
            }
            Err(err) => {
                mover_error!(mover_id, "Mission log append for {} failed: {}", action, err);
                self.restore(previous, &stored).await;
                Err(err)
            }
        }
    }

    /// Write `previous` back over `stored`
    async fn restore(&self, mut previous: Mover, stored: &Mover) {
        let previous_state: MoverState = previous.state;
        previous.revision = stored.revision;

        match self.movers.update(previous).await {
            Ok(Some(_)) => {
                mover_warn!(
                    stored.id,
                    "↩️ Restored mover to {} after failed log append",
                    previous_state
                );
            }
            Ok(None) => {
                mover_error!(stored.id, "Mover vanished before it could be restored");
            }
            Err(err) => {
                mover_error!(
                    stored.id,
                    "Mover left in state {} without a log entry: {}",
                    stored.state,
                    err
                );
            }
        }
    }
}
