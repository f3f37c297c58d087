//! Editor state manager for host integration.
//! Owns the tool state, selection, groups, command log, and viewport, and is
//! the only code that writes to the [`BuildingStore`].
//!
//! This module is split into submodules for better organization:
//! - `dispatch`: Applying reducer edits
//! - `buildings`: Creation, property edits, delete, duplicate, arrays, grouping
//! - `history`: Undo/redo
//! - `viewport`: Resize, zoom, pan, keep-visible animation
//! - `file_io`: Import/export

mod buildings;
mod dispatch;
mod file_io;
mod history;
mod viewport;

pub use file_io::ImportSummary;

use crate::groups::GroupRegistry;
use crate::history::CommandLog;
use crate::input::{InputEvent, Key};
use crate::selection_manager::SelectionManager;
use crate::store::{BuildingList, BuildingStore};
use crate::templates::TemplateKind;
use crate::tools::{reduce, Tool, ToolContext, ToolState};
use crate::viewport::{Viewport, ViewportAnimation};
use std::collections::VecDeque;
use sunplan_core::constants::VIEWPORT_ANIMATION_MS;
use sunplan_core::Building;
use sunplan_settings::{Config, EditorSettings};
use tracing::debug;

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Non-blocking message for the host to show as a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub hint: Option<String>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Editor state for host integration.
pub struct EditorState<S: BuildingStore = BuildingList> {
    store: S,
    viewport: Viewport,
    settings: EditorSettings,
    tool_state: ToolState,
    selection: SelectionManager,
    groups: GroupRegistry,
    history: CommandLog,
    notifications: VecDeque<Notification>,
    animation: Option<ViewportAnimation>,
    animation_ms: f64,
    pan_key_held: bool,
    text_input_focus: bool,
}

impl EditorState<BuildingList> {
    /// Creates an editor over an empty in-memory building list.
    pub fn new() -> Self {
        Self::with_store(BuildingList::new())
    }
}

impl Default for EditorState<BuildingList> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildingStore> EditorState<S> {
    /// Creates an editor with default settings over `store`.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            viewport: Viewport::default(),
            settings: EditorSettings::default(),
            tool_state: ToolState::default(),
            selection: SelectionManager::new(),
            groups: GroupRegistry::new(),
            history: CommandLog::new(),
            notifications: VecDeque::new(),
            animation: None,
            animation_ms: VIEWPORT_ANIMATION_MS,
            pan_key_held: false,
            text_input_focus: false,
        }
    }

    /// Creates an editor configured from loaded settings.
    pub fn from_config(store: S, config: &Config) -> Self {
        let mut state = Self::with_store(store);
        state.apply_config(config);
        state
    }

    /// Applies editor, viewport, and history preferences.
    pub fn apply_config(&mut self, config: &Config) {
        self.settings = config.editor.clone();
        self.viewport.apply_settings(&config.viewport);
        self.animation_ms = config.viewport.animation_ms;
        self.history.set_max_depth(config.history.max_depth);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the editor and returns the building store.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn buildings(&self) -> &[Building] {
        self.store.buildings()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    pub fn history(&self) -> &CommandLog {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool_state.tool
    }

    /// Current reducer state, for rendering previews.
    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.settings.snap_to_grid = enabled;
    }

    /// Sets the grid pitch in screen pixels; non-positive values are ignored.
    pub fn set_grid_size(&mut self, size: f64) {
        if size > 0.0 && size.is_finite() {
            self.settings.grid_size = size;
        }
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.settings.show_grid = show;
    }

    /// Switches tool, cancelling any gesture in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool_state.tool {
            return;
        }
        self.dispatch(InputEvent::key(Key::Char(tool.shortcut())));
    }

    pub fn set_template_kind(&mut self, kind: TemplateKind) {
        self.tool_state.template = kind;
    }

    /// While set, keyboard shortcuts are ignored; Shift/Space tracking continues.
    pub fn set_text_input_focus(&mut self, focused: bool) {
        self.text_input_focus = focused;
    }

    pub fn has_text_input_focus(&self) -> bool {
        self.text_input_focus
    }

    /// True while Space is held.
    pub fn pan_key_held(&self) -> bool {
        self.pan_key_held
    }

    /// Queues a notification for the host.
    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Takes every pending notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    /// Feeds one host event through the tool reducer and applies its edits.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.track_modifiers(&event);

        let keyboard = matches!(event, InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. });
        if keyboard && self.text_input_focus {
            return;
        }
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: InputEvent) {
        let state = std::mem::take(&mut self.tool_state);
        let ctx = ToolContext {
            buildings: self.store.buildings(),
            viewport: &self.viewport,
            settings: &self.settings,
            selection: &self.selection,
            pan_key_held: self.pan_key_held,
        };
        let (next, edits) = reduce(state, &ctx, event);
        self.tool_state = next;

        for edit in edits {
            self.apply_edit(edit);
        }
    }

    fn track_modifiers(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key: Key::Space, .. } => self.pan_key_held = true,
            InputEvent::KeyUp { key: Key::Space, .. } => self.pan_key_held = false,
            InputEvent::KeyDown { key: Key::Shift, .. } => {
                self.settings.orthogonal_constraint = true
            }
            InputEvent::KeyUp { key: Key::Shift, .. } => {
                self.settings.orthogonal_constraint = false
            }
            InputEvent::Blur => {
                self.pan_key_held = false;
                self.settings.orthogonal_constraint = false;
                debug!("Focus lost; modifier state reset");
            }
            _ => {}
        }
    }

    /// Pushes the primary selection to the store's single-selection slot.
    fn sync_primary(&mut self) {
        let primary = self.selection.primary();
        if self.store.selected_building() != primary {
            self.store.select_building(primary);
        }
    }
}
