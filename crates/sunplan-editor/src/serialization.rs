//! Import/export document formats.
//!
//! The export document is a flat snapshot of every building plus the group
//! table, with groups linked to members by building name. The import
//! document accepts the same shape with every property but the footprint
//! optional, so exports round-trip and hand-written files stay short.

use crate::error::EditorResult;
use crate::groups::GroupRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sunplan_core::constants::{DEFAULT_FLOORS, DEFAULT_FLOOR_HEIGHT, FLOORS_RANGE};
use sunplan_core::data::{validate_floor_height, validate_floors};
use sunplan_core::{Building, Point, ValidationError};

/// Current export format version.
pub const EXPORT_VERSION: &str = "1.0";

/// Building record in an export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedBuilding {
    pub name: String,
    pub footprint: Vec<Point>,
    pub floors: u32,
    pub floor_height: f64,
    pub color: String,
}

impl From<&Building> for ExportedBuilding {
    fn from(building: &Building) -> Self {
        Self {
            name: building.name.clone(),
            footprint: building.footprint.clone(),
            floors: building.floors,
            floor_height: building.floor_height,
            color: building.color.clone(),
        }
    }
}

/// Group record; members are referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedGroup {
    pub id: String,
    #[serde(default)]
    pub building_names: Vec<String>,
}

/// Export file layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub buildings: Vec<ExportedBuilding>,
    #[serde(default)]
    pub groups: Vec<ExportedGroup>,
}

impl ExportDocument {
    /// Snapshots `buildings` in z-order together with the group table.
    pub fn new(buildings: &[Building], groups: &GroupRegistry, exported_at: DateTime<Utc>) -> Self {
        let groups = groups
            .groups()
            .map(|(group, members)| ExportedGroup {
                id: group.to_string(),
                building_names: buildings
                    .iter()
                    .filter(|b| members.contains(&b.id))
                    .map(|b| b.name.clone())
                    .collect(),
            })
            .collect();

        Self {
            version: EXPORT_VERSION.to_string(),
            exported_at,
            buildings: buildings.iter().map(ExportedBuilding::from).collect(),
            groups,
        }
    }

    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Building record in an import document.
///
/// `floors` is read as a signed integer so that a negative value is
/// reported as out of range instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedBuilding {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub footprint: Vec<Point>,
    #[serde(default)]
    pub floors: Option<i64>,
    #[serde(default)]
    pub floor_height: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

/// An import entry that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImport {
    pub name: Option<String>,
    pub footprint: Vec<Point>,
    pub floors: u32,
    pub floor_height: f64,
    pub color: Option<String>,
}

impl ImportedBuilding {
    /// Applies defaults and range checks.
    ///
    /// Returns `Ok(None)` for entries with fewer than three vertices, which
    /// are skipped without a report.
    pub fn resolve(&self) -> Result<Option<ResolvedImport>, ValidationError> {
        if self.footprint.len() < 3 {
            return Ok(None);
        }
        if !self.footprint.iter().all(Point::is_finite) {
            return Err(ValidationError::NonFiniteCoordinate);
        }

        let floors = match self.floors {
            None => DEFAULT_FLOORS,
            Some(raw) => u32::try_from(raw).map_err(|_| ValidationError::FloorsOutOfRange {
                value: raw.clamp(0, u32::MAX as i64) as u32,
                min: FLOORS_RANGE.0,
                max: FLOORS_RANGE.1,
            })?,
        };
        validate_floors(floors)?;

        let floor_height = self.floor_height.unwrap_or(DEFAULT_FLOOR_HEIGHT);
        validate_floor_height(floor_height)?;

        Ok(Some(ResolvedImport {
            name: self.name.clone().filter(|n| !n.trim().is_empty()),
            footprint: self.footprint.clone(),
            floors,
            floor_height,
            color: self.color.clone().filter(|c| !c.trim().is_empty()),
        }))
    }
}

/// Import file layout. Unknown fields such as `version` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportDocument {
    #[serde(default)]
    pub buildings: Vec<ImportedBuilding>,
    #[serde(default)]
    pub groups: Vec<ExportedGroup>,
}

impl ImportDocument {
    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
