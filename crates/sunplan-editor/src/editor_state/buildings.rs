//! Building creation, property edits, and selection-wide operations.

use super::{EditorState, Notification, NotificationLevel};
use crate::arrays::{ArrayGenerator, GridArrayParams};
use crate::error::{EditorError, EditorResult};
use crate::geometry::{bounds, translate_footprint};
use crate::history::{HistoryAction, UpdateEntry};
use crate::store::BuildingStore;
use crate::tools::FootprintChange;
use sunplan_core::constants::DUPLICATE_OFFSET;
use sunplan_core::data::validate_footprint;
use sunplan_core::{BuildingId, BuildingPatch, GroupId, Point};
use tracing::{debug, info, warn};

impl<S: BuildingStore> EditorState<S> {
    /// Adds a building and records one ADD.
    ///
    /// Footprints with fewer than three vertices or non-finite coordinates
    /// are dropped with a debug log.
    pub fn create_building(
        &mut self,
        footprint: Vec<Point>,
        name: Option<&str>,
    ) -> Option<BuildingId> {
        self.create_with_properties(footprint, name, BuildingPatch::default())
    }

    /// Adds a building, applies `properties`, then records the final snapshot as one ADD.
    pub(super) fn create_with_properties(
        &mut self,
        footprint: Vec<Point>,
        name: Option<&str>,
        properties: BuildingPatch,
    ) -> Option<BuildingId> {
        if let Err(err) = validate_footprint(&footprint) {
            debug!("Not creating building: {}", err);
            return None;
        }

        let id = self.store.add_building(footprint, name);
        if !properties.is_empty() {
            self.store.update_building(id, &properties);
        }
        let building = self.store.building(id)?.clone();
        info!("Created {} ({})", building.name, id);
        self.history.record(HistoryAction::Add { building });
        Some(id)
    }

    /// Removes a building, recording a full-snapshot DELETE.
    pub fn delete_building(&mut self, id: BuildingId) -> bool {
        let Some(building) = self.store.remove_building(id) else {
            return false;
        };
        info!("Deleted {} ({})", building.name, id);
        self.selection.remove(id);
        self.groups.remove_building(id);
        self.history.record(HistoryAction::Delete { building });
        self.sync_primary();
        true
    }

    /// Deletes every selected building, one DELETE each.
    pub fn delete_selected(&mut self) {
        let ids: Vec<BuildingId> = self.selection.ids().collect();
        for id in ids {
            self.delete_building(id);
        }
    }

    /// Applies a property patch to one building and records one UPDATE.
    ///
    /// Invalid values are rejected with a warning notification and nothing
    /// is changed.
    pub fn update_building(&mut self, id: BuildingId, patch: BuildingPatch) -> EditorResult<()> {
        if let Err(err) = patch.validate() {
            self.notify(
                Notification::new(NotificationLevel::Warning, err.to_string())
                    .with_hint(err.hint()),
            );
            return Err(err.into());
        }

        let previous = self
            .store
            .building(id)
            .map(|b| b.snapshot_for(&patch))
            .ok_or(EditorError::StateInconsistency { id })?;
        if previous == patch {
            return Ok(());
        }

        self.store.update_building(id, &patch);
        let name = self
            .store
            .building(id)
            .map(|b| b.name.clone())
            .unwrap_or_default();
        self.history.record(HistoryAction::Update {
            id,
            name,
            previous,
            next: patch,
        });
        Ok(())
    }

    pub fn set_building_name(&mut self, id: BuildingId, name: &str) -> EditorResult<()> {
        self.update_building(id, BuildingPatch::default().with_name(name.trim()))
    }

    pub fn set_building_floors(&mut self, id: BuildingId, floors: u32) -> EditorResult<()> {
        self.update_building(id, BuildingPatch::default().with_floors(floors))
    }

    pub fn set_building_floor_height(
        &mut self,
        id: BuildingId,
        floor_height: f64,
    ) -> EditorResult<()> {
        self.update_building(id, BuildingPatch::default().with_floor_height(floor_height))
    }

    pub fn set_building_color(&mut self, id: BuildingId, color: &str) -> EditorResult<()> {
        self.update_building(id, BuildingPatch::default().with_color(color))
    }

    /// Finalises a drag: one UPDATE for a single building, otherwise one BULK_UPDATE.
    pub(super) fn commit_footprints(&mut self, changes: Vec<FootprintChange>) {
        let mut changes: Vec<FootprintChange> = changes
            .into_iter()
            .filter(|c| c.before != c.after && self.store.contains(c.id))
            .collect();

        for change in &changes {
            self.store
                .update_building(change.id, &BuildingPatch::footprint(change.after.clone()));
        }

        match changes.len() {
            0 => {}
            1 => {
                if let Some(change) = changes.pop() {
                    self.record_single(change);
                }
            }
            _ => self.record_bulk(changes),
        }
    }

    fn record_single(&mut self, change: FootprintChange) {
        let FootprintChange { id, before, after } = change;
        let name = self
            .store
            .building(id)
            .map(|b| b.name.clone())
            .unwrap_or_default();
        self.history.record(HistoryAction::Update {
            id,
            name,
            previous: BuildingPatch::footprint(before),
            next: BuildingPatch::footprint(after),
        });
    }

    fn record_bulk(&mut self, changes: Vec<FootprintChange>) {
        let entries = changes
            .into_iter()
            .map(|c| UpdateEntry {
                id: c.id,
                previous: BuildingPatch::footprint(c.before),
                next: BuildingPatch::footprint(c.after),
            })
            .collect();
        self.history.record(HistoryAction::BulkUpdate { entries });
    }

    /// Moves every selected building by `(dx, dy)` as one BULK_UPDATE.
    pub fn nudge_selected(&mut self, dx: f64, dy: f64) {
        let changes: Vec<FootprintChange> = self
            .store
            .buildings()
            .iter()
            .filter(|b| self.selection.contains(b.id))
            .map(|b| FootprintChange {
                id: b.id,
                before: b.footprint.clone(),
                after: translate_footprint(&b.footprint, dx, dy),
            })
            .collect();
        if changes.is_empty() {
            return;
        }

        for change in &changes {
            self.store
                .update_building(change.id, &BuildingPatch::footprint(change.after.clone()));
        }
        self.record_bulk(changes);
    }

    /// Copies every selected building offset by 20 units, one ADD each, and
    /// selects the copies.
    pub fn duplicate_selected(&mut self) -> Vec<BuildingId> {
        let sources: Vec<_> = self
            .store
            .buildings()
            .iter()
            .filter(|b| self.selection.contains(b.id))
            .cloned()
            .collect();

        let copies: Vec<BuildingId> = sources
            .iter()
            .filter_map(|source| {
                self.create_with_properties(
                    translate_footprint(&source.footprint, DUPLICATE_OFFSET, DUPLICATE_OFFSET),
                    Some(&format!("{} copy", source.name)),
                    BuildingPatch::default()
                        .with_floors(source.floors)
                        .with_floor_height(source.floor_height)
                        .with_color(source.color.clone()),
                )
            })
            .collect();

        if !copies.is_empty() {
            self.selection.replace(copies.iter().copied());
            self.sync_primary();
        }
        copies
    }

    /// Tiles copies of `source` in a grid, one ADD per copy.
    ///
    /// Copies inherit floors, floor height, and colour.
    pub fn create_array(
        &mut self,
        source: BuildingId,
        params: GridArrayParams,
    ) -> EditorResult<Vec<BuildingId>> {
        let building = self
            .store
            .building(source)
            .cloned()
            .ok_or(EditorError::StateInconsistency { id: source })?;
        let source_bounds = bounds(&building.footprint)
            .ok_or_else(|| EditorError::GeometryDegenerate("source has no vertices".into()))?;

        let offsets = match ArrayGenerator::generate_grid(&params, &source_bounds) {
            Ok(offsets) => offsets,
            Err(err) => {
                warn!("Rejected array request: {}", err);
                self.notify(
                    Notification::new(NotificationLevel::Warning, err.to_string())
                        .with_hint("Use at least one row and column with non-negative spacing"),
                );
                return Err(err);
            }
        };

        let properties = BuildingPatch::default()
            .with_floors(building.floors)
            .with_floor_height(building.floor_height)
            .with_color(building.color.clone());
        let created: Vec<BuildingId> = offsets
            .into_iter()
            .filter_map(|(dx, dy)| {
                self.create_with_properties(
                    translate_footprint(&building.footprint, dx, dy),
                    None,
                    properties.clone(),
                )
            })
            .collect();

        info!("Arrayed {} into {} copies", building.name, created.len());
        Ok(created)
    }

    pub fn select_building(&mut self, id: BuildingId, additive: bool) {
        if !self.store.contains(id) {
            return;
        }
        self.selection.select(id, additive);
        self.sync_primary();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.store.select_building(None);
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(self.store.buildings());
        self.sync_primary();
    }

    /// Groups the selection. Needs at least two selected buildings.
    pub fn group_selected(&mut self) -> Option<GroupId> {
        if self.selection.len() < 2 {
            warn!("Group request with {} selected building(s)", self.selection.len());
            self.notify(
                Notification::new(
                    NotificationLevel::Warning,
                    "Select at least two buildings to group",
                )
                .with_hint("Shift-click or drag a marquee to select more buildings"),
            );
            return None;
        }
        let group = self.groups.create_group(self.selection.ids())?;
        info!("Grouped {} buildings as {}", self.selection.len(), group);
        Some(group)
    }

    /// Removes the selected buildings from their groups.
    pub fn ungroup_selected(&mut self) {
        let dissolved = self.groups.ungroup(self.selection.ids().collect::<Vec<_>>());
        debug!("Ungroup dissolved {} group(s)", dissolved.len());
    }

    /// Replaces the selection with every member of `group`.
    pub fn select_group(&mut self, group: GroupId) -> bool {
        let Some(members) = self.groups.members(group) else {
            return false;
        };
        let members: Vec<BuildingId> = members.iter().copied().collect();
        self.selection.replace(members);
        self.sync_primary();
        true
    }
}
