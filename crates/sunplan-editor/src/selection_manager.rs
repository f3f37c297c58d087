//! Multi-selection state with a primary building.

use crate::geometry::building_intersects_marquee;
use std::collections::BTreeSet;
use sunplan_core::{Building, BuildingId, Point};

/// Manages the set of selected buildings.
///
/// `SelectionManager` is responsible for:
/// - Tracking which buildings are selected
/// - Tracking the "primary" building, mirrored to the store's single-selection slot
/// - Toggle selection (modifier-click)
/// - Marquee selection (drag on empty space)
///
/// # Selection Model
///
/// - **Selected set**: unordered; every id must refer to a live building.
///   Call [`SelectionManager::retain_live`] after anything that can remove
///   buildings behind the manager's back (undo, redo, import).
/// - **Primary selection**: the most recently selected building, or `None`.
///   Toggling the primary off promotes the highest remaining id.
///
/// Grouping does not extend a click selection; use
/// [`SelectionManager::replace`] with a group's members to select a group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: BTreeSet<BuildingId>,
    primary: Option<BuildingId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use sunplan_editor::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// assert_eq!(manager.primary(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the primary selected building.
    pub fn primary(&self) -> Option<BuildingId> {
        self.primary
    }

    pub fn contains(&self, id: BuildingId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = BuildingId> + '_ {
        self.selected.iter().copied()
    }

    /// The only selected id, if exactly one building is selected.
    pub fn single(&self) -> Option<BuildingId> {
        if self.selected.len() == 1 {
            self.primary
        } else {
            None
        }
    }

    /// Selects a building.
    ///
    /// # Arguments
    ///
    /// * `id` - The building that was clicked
    /// * `additive` - `true` for modifier-click
    ///
    /// # Behavior
    ///
    /// - If `additive` is `false`: the selection becomes exactly `{id}`
    /// - If `additive` is `true`: `id` is toggled in or out of the selection
    pub fn select(&mut self, id: BuildingId, additive: bool) {
        if !additive {
            self.selected.clear();
            self.selected.insert(id);
            self.primary = Some(id);
            return;
        }

        if self.selected.remove(&id) {
            if self.primary == Some(id) {
                self.primary = self.selected.iter().next_back().copied();
            }
        } else {
            self.selected.insert(id);
            self.primary = Some(id);
        }
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.primary = None;
    }

    /// Replaces the selection with `ids`; the last id becomes primary.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = BuildingId>) {
        self.clear();
        for id in ids {
            self.selected.insert(id);
            self.primary = Some(id);
        }
    }

    /// Selects every building; the topmost becomes primary.
    pub fn select_all(&mut self, buildings: &[Building]) {
        self.replace(buildings.iter().map(|b| b.id));
    }

    /// Resolves a finished marquee drag.
    ///
    /// Every building with at least one vertex inside the rectangle spanned
    /// by `a` and `b` is hit. With `additive` the hits are added to the
    /// current selection, otherwise they replace it.
    ///
    /// # Returns
    ///
    /// The number of buildings hit.
    pub fn marquee_resolve(
        &mut self,
        buildings: &[Building],
        a: Point,
        b: Point,
        additive: bool,
    ) -> usize {
        let hits: Vec<BuildingId> = buildings
            .iter()
            .filter(|bld| building_intersects_marquee(&bld.footprint, a, b))
            .map(|bld| bld.id)
            .collect();

        if !additive {
            self.clear();
        }
        for id in &hits {
            self.selected.insert(*id);
            self.primary = Some(*id);
        }
        hits.len()
    }

    /// Removes a single id, e.g. after its building was deleted.
    pub fn remove(&mut self, id: BuildingId) {
        if self.selected.remove(&id) && self.primary == Some(id) {
            self.primary = self.selected.iter().next_back().copied();
        }
    }

    /// Drops ids that no longer refer to a live building.
    ///
    /// # Returns
    ///
    /// `true` if anything was removed.
    pub fn retain_live(&mut self, buildings: &[Building]) -> bool {
        let before = self.selected.len();
        self.selected
            .retain(|id| buildings.iter().any(|b| b.id == *id));
        if let Some(primary) = self.primary {
            if !self.selected.contains(&primary) {
                self.primary = self.selected.iter().next_back().copied();
            }
        }
        self.selected.len() != before
    }
}
