//! Keyboard shortcuts.
//!
//! Command shortcuts (Ctrl or Cmd) are checked first and ignored during a
//! modal drag, then keys with a tool-specific meaning (Escape, Enter,
//! Backspace), then the global keys.

use super::{draw, transform, Edit, Interaction, Tool, ToolState};
use crate::input::{Key, Modifiers};
use sunplan_core::constants::NUDGE_STEP;
use tracing::debug;

pub(super) fn key_down(
    state: ToolState,
    key: Key,
    modifiers: Modifiers,
    edits: &mut Vec<Edit>,
) -> ToolState {
    let ToolState {
        tool,
        template,
        interaction,
    } = state;

    if modifiers.command() {
        // History and selection commands wait until the drag is released.
        if let (Key::Char(c), false) = (key, interaction.is_modal()) {
            if let Some(edit) = command_shortcut(c, modifiers) {
                edits.push(edit);
            }
        }
        return ToolState {
            tool,
            template,
            interaction,
        };
    }

    let interaction = match key {
        Key::Escape => escape(interaction, edits),
        Key::Enter => match interaction {
            Interaction::Drawing { points, .. } => draw::commit(points, edits),
            other => other,
        },
        Key::Backspace if tool == Tool::Draw => match interaction {
            Interaction::Drawing { mut points, cursor } => {
                points.pop();
                Interaction::Drawing { points, cursor }
            }
            other => other,
        },
        Key::Backspace | Key::Delete => {
            if !interaction.is_modal() {
                edits.push(Edit::DeleteSelection);
            }
            interaction
        }
        Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
            if !interaction.is_modal() {
                let step = if modifiers.shift { NUDGE_STEP * 10.0 } else { NUDGE_STEP };
                let (dx, dy) = match key {
                    Key::ArrowUp => (0.0, -step),
                    Key::ArrowDown => (0.0, step),
                    Key::ArrowLeft => (-step, 0.0),
                    _ => (step, 0.0),
                };
                edits.push(Edit::NudgeSelection { dx, dy });
            }
            interaction
        }
        Key::Char('+') | Key::Char('=') => {
            edits.push(Edit::ZoomIn);
            interaction
        }
        Key::Char('-') => {
            edits.push(Edit::ZoomOut);
            interaction
        }
        Key::Char('0') => {
            edits.push(Edit::ZoomReset);
            interaction
        }
        Key::Char(c) if !modifiers.alt => match Tool::from_shortcut(c) {
            Some(next) if next != tool => {
                let interaction = switch_away(interaction, edits);
                debug!("Tool changed: {} -> {}", tool.as_str(), next.as_str());
                edits.push(Edit::ToolChanged(next));
                return ToolState {
                    tool: next,
                    template,
                    interaction,
                };
            }
            _ => interaction,
        },
        _ => interaction,
    };

    ToolState {
        tool,
        template,
        interaction,
    }
}

fn command_shortcut(c: char, modifiers: Modifiers) -> Option<Edit> {
    match (c.to_ascii_lowercase(), modifiers.shift) {
        ('z', false) => Some(Edit::Undo),
        ('z', true) | ('y', _) => Some(Edit::Redo),
        ('g', false) => Some(Edit::GroupSelection),
        ('g', true) => Some(Edit::UngroupSelection),
        ('a', _) => Some(Edit::SelectAll),
        ('d', _) => Some(Edit::DuplicateSelection),
        _ => None,
    }
}

/// Cancels the in-progress gesture, or clears the selection when there is none.
fn escape(interaction: Interaction, edits: &mut Vec<Edit>) -> Interaction {
    match interaction {
        Interaction::Idle => {
            edits.push(Edit::ClearSelection);
            Interaction::Idle
        }
        Interaction::Drawing { ref points, .. } if points.is_empty() => {
            edits.push(Edit::ClearSelection);
            Interaction::Idle
        }
        pan @ Interaction::Panning { .. } => pan,
        other => transform::cancel(other, edits),
    }
}

fn switch_away(interaction: Interaction, edits: &mut Vec<Edit>) -> Interaction {
    match interaction {
        Interaction::Panning { last, resume } => Interaction::Panning {
            last,
            resume: Box::new(transform::cancel(*resume, edits)),
        },
        other => transform::cancel(other, edits),
    }
}
