//! The building list the editor writes through.

use sunplan_core::{Building, BuildingId, BuildingPatch, Point, DEFAULT_PALETTE};
use tracing::debug;

/// Mutation and read API of the building list.
///
/// The editor never touches buildings except through this trait, so a host
/// can back it with its own state container.
pub trait BuildingStore {
    /// Creates a building with default properties and returns its new id.
    fn add_building(&mut self, footprint: Vec<Point>, name: Option<&str>) -> BuildingId;

    /// Applies `patch` to an existing building. Returns `false` if `id` is unknown.
    fn update_building(&mut self, id: BuildingId, patch: &BuildingPatch) -> bool;

    /// Removes a building and hands back its final state.
    fn remove_building(&mut self, id: BuildingId) -> Option<Building>;

    /// Sets the single "current" building shown in property panels.
    fn select_building(&mut self, id: Option<BuildingId>);

    /// Re-inserts a snapshot with its original id. Returns `false` if the id is taken.
    fn restore_building(&mut self, building: Building) -> bool;

    /// All buildings in z-order (last is topmost).
    fn buildings(&self) -> &[Building];

    fn selected_building(&self) -> Option<BuildingId>;

    fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings().iter().find(|b| b.id == id)
    }

    fn contains(&self, id: BuildingId) -> bool {
        self.building(id).is_some()
    }
}

/// In-memory [`BuildingStore`].
///
/// Ids are allocated monotonically and never reused. Z-order follows id
/// order, so a restored snapshot returns to its original depth.
#[derive(Debug, Clone, Default)]
pub struct BuildingList {
    buildings: Vec<Building>,
    next_id: u64,
    created: u64,
    selected: Option<BuildingId>,
}

impl BuildingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    fn generate_id(&mut self) -> BuildingId {
        self.next_id += 1;
        BuildingId(self.next_id)
    }
}

impl BuildingStore for BuildingList {
    fn add_building(&mut self, footprint: Vec<Point>, name: Option<&str>) -> BuildingId {
        let id = self.generate_id();
        let color = DEFAULT_PALETTE[self.created as usize % DEFAULT_PALETTE.len()];
        self.created += 1;
        let name = match name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("Building {}", self.created),
        };
        debug!("Adding {} as {}", name, id);
        self.buildings.push(Building::new(id, name, footprint, color));
        id
    }

    fn update_building(&mut self, id: BuildingId, patch: &BuildingPatch) -> bool {
        match self.buildings.iter_mut().find(|b| b.id == id) {
            Some(building) => {
                building.apply(patch);
                true
            }
            None => false,
        }
    }

    fn remove_building(&mut self, id: BuildingId) -> Option<Building> {
        let index = self.buildings.iter().position(|b| b.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.buildings.remove(index))
    }

    fn select_building(&mut self, id: Option<BuildingId>) {
        self.selected = id;
    }

    fn restore_building(&mut self, building: Building) -> bool {
        if self.contains(building.id) {
            return false;
        }
        self.next_id = self.next_id.max(building.id.0);
        let index = self.buildings.partition_point(|b| b.id < building.id);
        self.buildings.insert(index, building);
        true
    }

    fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    fn selected_building(&self) -> Option<BuildingId> {
        self.selected
    }
}
