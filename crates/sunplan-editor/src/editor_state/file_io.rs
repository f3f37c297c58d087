//! Building import/export for the editor.

use super::{EditorState, Notification, NotificationLevel};
use crate::error::{EditorError, EditorResult};
use crate::serialization::{ExportDocument, ImportDocument, ResolvedImport};
use crate::store::BuildingStore;
use anyhow::Context;
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use sunplan_core::{BuildingId, BuildingPatch, GroupId};
use tracing::{info, warn};

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSummary {
    /// Buildings created, in document order.
    pub imported: Vec<BuildingId>,
    /// Entries dropped for having fewer than three vertices.
    pub skipped: usize,
    /// Entries dropped for out-of-range properties.
    pub rejected: usize,
    pub groups: Vec<GroupId>,
}

impl<S: BuildingStore> EditorState<S> {
    /// Snapshots every building and group.
    pub fn export_document(&self) -> ExportDocument {
        ExportDocument::new(self.store.buildings(), &self.groups, Utc::now())
    }

    pub fn export_json(&self) -> EditorResult<String> {
        self.export_document().to_json()
    }

    /// Imports buildings from a JSON document, one ADD per accepted entry.
    ///
    /// A malformed document is reported as an error notification and changes
    /// nothing. Out-of-range entries are skipped and reported together in a
    /// single warning.
    pub fn import_json(&mut self, json: &str) -> EditorResult<ImportSummary> {
        let document = match ImportDocument::from_json(json) {
            Ok(document) => document,
            Err(err) => {
                let err = EditorError::user_input(
                    format!("Could not read building file: {}", err),
                    "Check that the file is a SunPlan building export",
                );
                self.notify(
                    Notification::new(NotificationLevel::Error, err.to_string())
                        .with_hint(err.hint().unwrap_or_default()),
                );
                return Err(err);
            }
        };
        Ok(self.import_document(document))
    }

    /// Imports an already-parsed document.
    pub fn import_document(&mut self, document: ImportDocument) -> ImportSummary {
        let mut summary = ImportSummary::default();
        let mut first_issue = None;
        let mut by_name: HashMap<String, BuildingId> = HashMap::new();

        for entry in &document.buildings {
            match entry.resolve() {
                Ok(None) => summary.skipped += 1,
                Ok(Some(resolved)) => {
                    if let Some(id) = self.add_imported(resolved) {
                        if let Some(building) = self.store.building(id) {
                            by_name.entry(building.name.clone()).or_insert(id);
                        }
                        summary.imported.push(id);
                    }
                }
                Err(err) => {
                    summary.rejected += 1;
                    first_issue.get_or_insert(err);
                }
            }
        }

        for group in &document.groups {
            let members: Vec<BuildingId> = group
                .building_names
                .iter()
                .filter_map(|name| by_name.get(name).copied())
                .collect();
            if let Some(id) = self.groups.create_group(members) {
                summary.groups.push(id);
            }
        }

        if let Some(err) = first_issue {
            warn!("Import rejected {} building(s): {}", summary.rejected, err);
            self.notify(
                Notification::new(
                    NotificationLevel::Warning,
                    format!(
                        "Skipped {} building(s) with invalid properties: {}",
                        summary.rejected, err
                    ),
                )
                .with_hint(err.hint()),
            );
        }

        info!(
            "Imported {} building(s), {} group(s)",
            summary.imported.len(),
            summary.groups.len()
        );
        summary
    }

    fn add_imported(&mut self, resolved: ResolvedImport) -> Option<BuildingId> {
        let mut properties = BuildingPatch::default()
            .with_floors(resolved.floors)
            .with_floor_height(resolved.floor_height);
        if let Some(color) = resolved.color {
            properties = properties.with_color(color);
        }
        self.create_with_properties(resolved.footprint, resolved.name.as_deref(), properties)
    }

    /// Writes the export document to `path`.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = self.export_json().context("Failed to serialize buildings")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write export file {}", path.display()))?;
        info!("Exported {} building(s) to {}", self.store.buildings().len(), path.display());
        Ok(())
    }

    /// Reads an import document from `path`.
    pub fn import_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<ImportSummary> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file {}", path.display()))?;
        self.import_json(&json)
            .with_context(|| format!("Failed to import {}", path.display()))
    }
}
