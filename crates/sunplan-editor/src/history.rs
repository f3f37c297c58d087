//! Undo/redo command log.
//!
//! Actions record full snapshots for add/delete and before/after partial
//! states for updates, so replaying never depends on editor internals.

use crate::error::{HistoryError, HistoryResult};
use crate::store::BuildingStore;
use sunplan_core::constants::DEFAULT_HISTORY_DEPTH;
use sunplan_core::{Building, BuildingId, BuildingPatch};
use tracing::{debug, warn};

/// One building's half of a bulk update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEntry {
    pub id: BuildingId,
    pub previous: BuildingPatch,
    pub next: BuildingPatch,
}

/// A reversible edit.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryAction {
    Add {
        building: Building,
    },
    Delete {
        building: Building,
    },
    Update {
        id: BuildingId,
        /// Building name at the time of the edit, for the description.
        name: String,
        previous: BuildingPatch,
        next: BuildingPatch,
    },
    BulkUpdate {
        entries: Vec<UpdateEntry>,
    },
}

impl HistoryAction {
    /// Human-readable label such as "Add Building 3" or "Update 3 buildings".
    pub fn description(&self) -> String {
        match self {
            HistoryAction::Add { building } => format!("Add {}", building.name),
            HistoryAction::Delete { building } => format!("Delete {}", building.name),
            HistoryAction::Update { name, .. } => format!("Update {}", name),
            HistoryAction::BulkUpdate { entries } => match entries.len() {
                1 => "Update 1 building".to_string(),
                n => format!("Update {} buildings", n),
            },
        }
    }

    /// Ids this action touches.
    pub fn ids(&self) -> Vec<BuildingId> {
        match self {
            HistoryAction::Add { building } | HistoryAction::Delete { building } => {
                vec![building.id]
            }
            HistoryAction::Update { id, .. } => vec![*id],
            HistoryAction::BulkUpdate { entries } => entries.iter().map(|e| e.id).collect(),
        }
    }

    /// First id whose presence in `store` rules this action out, if any.
    ///
    /// `reverse` selects the undo direction.
    fn conflict<S: BuildingStore + ?Sized>(&self, store: &S, reverse: bool) -> Option<BuildingId> {
        match self {
            // Undo of ADD and redo of DELETE need the building present.
            HistoryAction::Add { building } if reverse => {
                (!store.contains(building.id)).then_some(building.id)
            }
            HistoryAction::Delete { building } if !reverse => {
                (!store.contains(building.id)).then_some(building.id)
            }
            // Recreating a snapshot needs the id free.
            HistoryAction::Add { building } | HistoryAction::Delete { building } => {
                store.contains(building.id).then_some(building.id)
            }
            HistoryAction::Update { id, .. } => (!store.contains(*id)).then_some(*id),
            HistoryAction::BulkUpdate { entries } => entries
                .iter()
                .map(|e| e.id)
                .find(|id| !store.contains(*id)),
        }
    }

    fn apply<S: BuildingStore + ?Sized>(&self, store: &mut S, reverse: bool) {
        match (self, reverse) {
            (HistoryAction::Add { building }, true)
            | (HistoryAction::Delete { building }, false) => {
                store.remove_building(building.id);
            }
            (HistoryAction::Add { building }, false)
            | (HistoryAction::Delete { building }, true) => {
                store.restore_building(building.clone());
            }
            (HistoryAction::Update { id, previous, next, .. }, _) => {
                store.update_building(*id, if reverse { previous } else { next });
            }
            (HistoryAction::BulkUpdate { entries }, _) => {
                for entry in entries {
                    let patch = if reverse { &entry.previous } else { &entry.next };
                    store.update_building(entry.id, patch);
                }
            }
        }
    }
}

/// Bounded undo and redo stacks.
#[derive(Debug, Clone)]
pub struct CommandLog {
    undo_stack: Vec<HistoryAction>,
    redo_stack: Vec<HistoryAction>,
    max_depth: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_depth(DEFAULT_HISTORY_DEPTH)
    }
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom maximum undo depth
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Changes the depth, dropping the oldest entries if needed.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        self.trim();
    }

    /// Records an already-applied action and clears the redo stack.
    pub fn record(&mut self, action: HistoryAction) {
        debug!("Recording '{}'", action.description());
        self.undo_stack.push(action);
        self.redo_stack.clear();
        self.trim();
    }

    fn trim(&mut self) {
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(HistoryAction::description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(HistoryAction::description)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Reverts the most recent action.
    ///
    /// An action that no longer fits the store is dropped from the log and
    /// reported as [`HistoryError::StaleAction`]; nothing is applied.
    pub fn undo<S: BuildingStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> HistoryResult<HistoryAction> {
        let action = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        if let Some(id) = action.conflict(store, true) {
            return Err(Self::stale(action, id));
        }
        action.apply(store, true);
        self.redo_stack.push(action.clone());
        Ok(action)
    }

    /// Re-applies the most recently undone action.
    pub fn redo<S: BuildingStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> HistoryResult<HistoryAction> {
        let action = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        if let Some(id) = action.conflict(store, false) {
            return Err(Self::stale(action, id));
        }
        action.apply(store, false);
        self.undo_stack.push(action.clone());
        Ok(action)
    }

    fn stale(action: HistoryAction, id: BuildingId) -> HistoryError {
        let description = action.description();
        warn!("Dropping history action '{}': {} is out of sync", description, id);
        HistoryError::StaleAction { description, id }
    }
}
