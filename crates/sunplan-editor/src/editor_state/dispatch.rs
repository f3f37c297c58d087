//! Applies reducer output to the store, selection, and camera.

use super::EditorState;
use crate::store::BuildingStore;
use crate::tools::Edit;
use sunplan_core::BuildingPatch;
use tracing::debug;

impl<S: BuildingStore> EditorState<S> {
    pub(super) fn apply_edit(&mut self, edit: Edit) {
        match edit {
            Edit::CreateBuilding { footprint, name } => {
                if let Some(id) = self.create_building(footprint, name.as_deref()) {
                    self.select_building(id, false);
                }
            }
            Edit::PreviewFootprints(previews) => {
                for (id, footprint) in previews {
                    self.store.update_building(id, &BuildingPatch::footprint(footprint));
                }
            }
            Edit::CommitFootprints(changes) => self.commit_footprints(changes),
            Edit::DeleteBuilding(id) => {
                self.delete_building(id);
            }
            Edit::Select { id, additive } => self.select_building(id, additive),
            Edit::ClearSelection => self.clear_selection(),
            Edit::SelectAll => self.select_all(),
            Edit::ResolveMarquee { a, b, additive } => {
                let hits = self
                    .selection
                    .marquee_resolve(self.store.buildings(), a, b, additive);
                debug!("Marquee hit {} building(s)", hits);
                self.sync_primary();
            }
            Edit::PanCamera { dx, dy } => self.pan_by(dx, dy),
            Edit::ZoomWheel { delta_y, anchor } => self.wheel_zoom(delta_y, anchor),
            Edit::ZoomIn => self.zoom_in(),
            Edit::ZoomOut => self.zoom_out(),
            Edit::ZoomReset => self.reset_zoom(),
            Edit::ToolChanged(tool) => debug!("Active tool: {}", tool.as_str()),
            Edit::Undo => {
                self.undo();
            }
            Edit::Redo => {
                self.redo();
            }
            Edit::GroupSelection => {
                self.group_selected();
            }
            Edit::UngroupSelection => self.ungroup_selected(),
            Edit::DeleteSelection => self.delete_selected(),
            Edit::DuplicateSelection => {
                self.duplicate_selected();
            }
            Edit::NudgeSelection { dx, dy } => self.nudge_selected(dx, dy),
        }
    }
}
