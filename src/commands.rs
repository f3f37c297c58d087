//! Headless operations behind the `sunplan` binary.

use anyhow::Context;
use std::fmt;
use std::path::Path;
use sunplan_editor::serialization::ImportDocument;
use sunplan_editor::{BuildingList, EditorState, ImportSummary, NotificationLevel};
use sunplan_settings::{Config, SettingsPersistence};
use tracing::{info, warn};

/// Loads settings from `path`, or from the platform default location.
///
/// A missing file yields defaults. Without an explicit path, an unusable
/// default location also falls back to defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let persistence = SettingsPersistence::load_or_default(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?;
            Ok(persistence.config().clone())
        }
        None => {
            let loaded = SettingsPersistence::default_path()
                .and_then(|p| SettingsPersistence::load_or_default(&p));
            match loaded {
                Ok(persistence) => Ok(persistence.config().clone()),
                Err(err) => {
                    warn!("Using default settings: {}", err);
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Aggregate figures for an import document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub buildings: usize,
    pub skipped: usize,
    pub rejected: usize,
    /// Sum of footprint areas.
    pub footprint_area: f64,
    /// Sum of footprint area times floor count.
    pub floor_area: f64,
    pub groups: Vec<(String, usize)>,
}

impl fmt::Display for DocumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Buildings:      {}", self.buildings)?;
        if self.skipped > 0 || self.rejected > 0 {
            writeln!(
                f,
                "Dropped:        {} skipped, {} rejected",
                self.skipped, self.rejected
            )?;
        }
        writeln!(f, "Footprint area: {:.2}", self.footprint_area)?;
        writeln!(f, "Floor area:     {:.2}", self.floor_area)?;
        write!(f, "Groups:         {}", self.groups.len())?;
        for (id, members) in &self.groups {
            write!(f, "\n  group {}: {} building(s)", id, members)?;
        }
        Ok(())
    }
}

/// Imports `path` into a scratch editor and reports its totals.
pub fn summarize(path: &Path, config: &Config) -> anyhow::Result<DocumentSummary> {
    let mut editor = EditorState::from_config(BuildingList::new(), config);
    let imported = editor.import_from_file(path)?;
    report_notifications(&mut editor);

    let footprint_area = editor.buildings().iter().map(|b| b.area()).sum();
    let floor_area = editor
        .buildings()
        .iter()
        .map(|b| b.area() * f64::from(b.floors))
        .sum();
    let groups = editor
        .groups()
        .groups()
        .map(|(id, members)| (id.to_string(), members.len()))
        .collect();

    Ok(DocumentSummary {
        buildings: imported.imported.len(),
        skipped: imported.skipped,
        rejected: imported.rejected,
        footprint_area,
        floor_area,
        groups,
    })
}

/// Imports `input` and writes a fresh export document to `output`.
///
/// Fails without writing when `input` is not a readable building document.
pub fn normalize(input: &Path, output: &Path, config: &Config) -> anyhow::Result<ImportSummary> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read import file {}", input.display()))?;
    let document = ImportDocument::from_json(&json)
        .with_context(|| format!("{} is not a building document", input.display()))?;

    let mut editor = EditorState::from_config(BuildingList::new(), config);
    let summary = editor.import_document(document);
    report_notifications(&mut editor);

    editor.export_to_file(output)?;
    info!(
        "Normalized {} building(s) from {} into {}",
        summary.imported.len(),
        input.display(),
        output.display()
    );
    Ok(summary)
}

fn report_notifications(editor: &mut EditorState) {
    for note in editor.drain_notifications() {
        let hint = note.hint.as_deref().unwrap_or("");
        match note.level {
            NotificationLevel::Error => tracing::error!("{} {}", note.message, hint),
            NotificationLevel::Warning => warn!("{} {}", note.message, hint),
            NotificationLevel::Info => info!("{}", note.message),
        }
    }
}
