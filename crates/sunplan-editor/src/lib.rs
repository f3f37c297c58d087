//! # SunPlan Editor
//!
//! Footprint editing engine: geometry kernel, viewport, tool state machine,
//! selection and grouping, undo/redo, arrays, templates, and import/export.
//!
//! [`EditorState`] ties the pieces together and is the only writer to the
//! [`BuildingStore`]. Hosts feed it [`InputEvent`]s and read back buildings,
//! tool previews, and notifications.
//!
//! ```
//! use sunplan_editor::{EditorState, InputEvent, Tool};
//!
//! let mut editor = EditorState::new();
//! editor.set_tool(Tool::Rectangle);
//! editor.handle_input(InputEvent::press(10.0, 10.0));
//! editor.handle_input(InputEvent::motion(60.0, 40.0));
//! editor.handle_input(InputEvent::release(60.0, 40.0));
//! assert_eq!(editor.buildings().len(), 1);
//! ```

pub mod arrays;
pub mod editor_state;
pub mod error;
pub mod geometry;
pub mod groups;
pub mod history;
pub mod input;
pub mod selection_manager;
pub mod serialization;
pub mod store;
pub mod templates;
pub mod tools;
pub mod viewport;

pub use arrays::{ArrayGenerator, GridArrayParams};
pub use editor_state::{EditorState, ImportSummary, Notification, NotificationLevel};
pub use error::{EditorError, EditorResult, HistoryError, HistoryResult};
pub use geometry::Bounds;
pub use groups::GroupRegistry;
pub use history::{CommandLog, HistoryAction, UpdateEntry};
pub use input::{InputEvent, Key, Modifiers, PointerButton};
pub use selection_manager::SelectionManager;
pub use serialization::{ExportDocument, ImportDocument};
pub use store::{BuildingList, BuildingStore};
pub use templates::{create_template_shape, TemplateKind};
pub use tools::{reduce, Edit, Interaction, Tool, ToolContext, ToolState};
pub use viewport::{Camera, ImageFit, Viewport, ViewportAnimation};

pub use sunplan_core::{Building, BuildingId, BuildingPatch, GroupId, Point};
