//! Undo/redo for the editor.

use super::EditorState;
use crate::error::HistoryError;
use crate::store::BuildingStore;
use tracing::{debug, info};

impl<S: BuildingStore> EditorState<S> {
    /// Reverts the latest action. Returns its description when something was applied.
    pub fn undo(&mut self) -> Option<String> {
        let result = self.history.undo(&mut self.store);
        self.after_replay(result, "Undo")
    }

    /// Re-applies the latest undone action.
    pub fn redo(&mut self) -> Option<String> {
        let result = self.history.redo(&mut self.store);
        self.after_replay(result, "Redo")
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    /// Clear undo/redo history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn after_replay(
        &mut self,
        result: Result<crate::history::HistoryAction, HistoryError>,
        verb: &str,
    ) -> Option<String> {
        // Replays can add or remove buildings behind the selection's back.
        self.selection.retain_live(self.store.buildings());
        self.groups.retain_live(self.store.buildings());
        self.sync_primary();

        match result {
            Ok(action) => {
                let description = action.description();
                info!("{}: {}", verb, description);
                Some(description)
            }
            Err(HistoryError::NothingToUndo | HistoryError::NothingToRedo) => {
                debug!("{}: history empty", verb);
                None
            }
            // Already logged as a warning by the command log.
            Err(HistoryError::StaleAction { .. }) => None,
        }
    }
}
