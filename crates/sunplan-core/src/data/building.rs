//! Building record and partial updates.

use super::{shoelace_area, BuildingId, Point};
use crate::constants::{DEFAULT_FLOORS, DEFAULT_FLOOR_HEIGHT, FLOORS_RANGE, FLOOR_HEIGHT_RANGE};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Colours handed out to new buildings in creation order.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// A building footprint traced over the site plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    /// Ordered outline, implicitly closed.
    pub footprint: Vec<Point>,
    pub floors: u32,
    /// Storey height in metres.
    pub floor_height: f64,
    pub color: String,
}

impl Building {
    /// Creates a building with default floors, floor height, and the given colour.
    pub fn new(
        id: BuildingId,
        name: impl Into<String>,
        footprint: Vec<Point>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            footprint,
            floors: DEFAULT_FLOORS,
            floor_height: DEFAULT_FLOOR_HEIGHT,
            color: color.into(),
        }
    }

    /// Height of the extruded building.
    pub fn total_height(&self) -> f64 {
        self.floors as f64 * self.floor_height
    }

    /// Ground area of the footprint in square world units.
    pub fn area(&self) -> f64 {
        shoelace_area(&self.footprint)
    }

    /// Overwrites every field present in `patch`.
    pub fn apply(&mut self, patch: &BuildingPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(footprint) = &patch.footprint {
            self.footprint = footprint.clone();
        }
        if let Some(floors) = patch.floors {
            self.floors = floors;
        }
        if let Some(floor_height) = patch.floor_height {
            self.floor_height = floor_height;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
    }

    /// Captures the current value of every field that `patch` would touch.
    ///
    /// Applying the returned patch after `patch` restores this building.
    pub fn snapshot_for(&self, patch: &BuildingPatch) -> BuildingPatch {
        BuildingPatch {
            name: patch.name.as_ref().map(|_| self.name.clone()),
            footprint: patch.footprint.as_ref().map(|_| self.footprint.clone()),
            floors: patch.floors.map(|_| self.floors),
            floor_height: patch.floor_height.map(|_| self.floor_height),
            color: patch.color.as_ref().map(|_| self.color.clone()),
        }
    }
}

/// Partial building state; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BuildingPatch {
    /// Patch replacing only the footprint.
    pub fn footprint(footprint: Vec<Point>) -> Self {
        Self {
            footprint: Some(footprint),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_floors(mut self, floors: u32) -> Self {
        self.floors = Some(floors);
        self
    }

    pub fn with_floor_height(mut self, floor_height: f64) -> Self {
        self.floor_height = Some(floor_height);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// True when the patch touches nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.footprint.is_none()
            && self.floors.is_none()
            && self.floor_height.is_none()
            && self.color.is_none()
    }

    /// Checks every present field against its allowed range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyName);
            }
        }
        if let Some(footprint) = &self.footprint {
            validate_footprint(footprint)?;
        }
        if let Some(floors) = self.floors {
            validate_floors(floors)?;
        }
        if let Some(floor_height) = self.floor_height {
            validate_floor_height(floor_height)?;
        }
        Ok(())
    }
}

/// Rejects footprints with fewer than three vertices or non-finite coordinates.
pub fn validate_footprint(footprint: &[Point]) -> Result<(), ValidationError> {
    if footprint.len() < 3 {
        return Err(ValidationError::TooFewVertices {
            count: footprint.len(),
        });
    }
    if footprint.iter().any(|p| !p.is_finite()) {
        return Err(ValidationError::NonFiniteCoordinate);
    }
    Ok(())
}

pub fn validate_floors(floors: u32) -> Result<(), ValidationError> {
    let (min, max) = FLOORS_RANGE;
    if floors < min || floors > max {
        return Err(ValidationError::FloorsOutOfRange {
            value: floors,
            min,
            max,
        });
    }
    Ok(())
}

pub fn validate_floor_height(floor_height: f64) -> Result<(), ValidationError> {
    let (min, max) = FLOOR_HEIGHT_RANGE;
    // NaN fails both comparisons, so test the accepted range instead.
    if !(min..=max).contains(&floor_height) {
        return Err(ValidationError::FloorHeightOutOfRange {
            value: floor_height,
            min,
            max,
        });
    }
    Ok(())
}
