//! # SunPlan
//!
//! Building footprint editor for site-plan solar analysis. Footprints are
//! traced over a site-plan image, reshaped, arrayed, grouped, and exported as
//! extrudable building records.
//!
//! ## Architecture
//!
//! SunPlan is organized as a workspace with multiple crates:
//!
//! 1. **sunplan-core** - Data model, property validation, constants
//! 2. **sunplan-settings** - Editor configuration and persistence
//! 3. **sunplan-editor** - Geometry, viewport, tools, history, import/export
//! 4. **sunplan** - This facade, logging setup, and the headless binary

pub mod commands;

pub use sunplan_core::{
    constants, Building, BuildingId, BuildingPatch, GroupId, Point, ValidationError,
};
pub use sunplan_editor::{
    BuildingList, BuildingStore, EditorError, EditorResult, EditorState, ImportSummary,
    InputEvent, Notification, NotificationLevel, Tool, Viewport,
};
pub use sunplan_settings::{Config, EditorSettings, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Honours `RUST_LOG` with `info` as the baseline level. Output goes to
/// stderr so that command output on stdout stays clean; `json` selects the
/// JSON formatter instead of the human-readable one.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
