//! Move and pan drags, and forced termination on blur.

use super::{edit, Edit, FootprintChange, Interaction, Pointer, PointerPhase, ToolContext};
use crate::geometry::{snap_value, topmost_building_at, translate_footprint};
use sunplan_core::{BuildingId, Point};
use tracing::debug;

pub(super) fn move_pointer(
    interaction: Interaction,
    ctx: &ToolContext<'_>,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    match (pointer.phase, interaction) {
        (PointerPhase::Down, _) => press(ctx, pointer, edits),
        (
            PointerPhase::Move,
            Interaction::Moving {
                origin,
                originals,
                ..
            },
        ) => {
            let offset = drag_offset(ctx, origin, pointer.world);
            edits.push(Edit::PreviewFootprints(translated(&originals, offset)));
            Interaction::Moving {
                origin,
                originals,
                offset,
            }
        }
        (
            PointerPhase::Up,
            Interaction::Moving {
                origin, originals, ..
            },
        ) => {
            let offset = drag_offset(ctx, origin, pointer.world);
            finish_move(originals, offset, edits)
        }
        (_, other) => other,
    }
}

fn press(ctx: &ToolContext<'_>, pointer: &Pointer, edits: &mut Vec<Edit>) -> Interaction {
    let Some(hit) = topmost_building_at(ctx.buildings, &pointer.world) else {
        return Interaction::Idle;
    };

    let group_drag = ctx.selection.contains(hit) && ctx.selection.len() > 1;
    if !group_drag && !ctx.selection.contains(hit) {
        edits.push(Edit::Select {
            id: hit,
            additive: false,
        });
    }

    let originals: Vec<(BuildingId, Vec<Point>)> = ctx
        .buildings
        .iter()
        .filter(|b| if group_drag { ctx.selection.contains(b.id) } else { b.id == hit })
        .map(|b| (b.id, b.footprint.clone()))
        .collect();

    debug!("Moving {} building(s)", originals.len());
    Interaction::Moving {
        origin: pointer.world,
        originals,
        offset: (0.0, 0.0),
    }
}

/// Offset from the drag origin, snapped per axis to the grid pitch when snapping is on.
fn drag_offset(ctx: &ToolContext<'_>, origin: Point, world: Point) -> (f64, f64) {
    let (dx, dy) = (world.x - origin.x, world.y - origin.y);
    if ctx.settings.snap_to_grid {
        let pitch = ctx.grid_pitch();
        (snap_value(dx, pitch), snap_value(dy, pitch))
    } else {
        (dx, dy)
    }
}

fn translated(
    originals: &[(BuildingId, Vec<Point>)],
    offset: (f64, f64),
) -> Vec<(BuildingId, Vec<Point>)> {
    originals
        .iter()
        .map(|(id, fp)| (*id, translate_footprint(fp, offset.0, offset.1)))
        .collect()
}

fn finish_move(
    originals: Vec<(BuildingId, Vec<Point>)>,
    offset: (f64, f64),
    edits: &mut Vec<Edit>,
) -> Interaction {
    if offset == (0.0, 0.0) {
        // Undo any preview sent before the pointer returned to the origin.
        edits.push(Edit::PreviewFootprints(originals));
        return Interaction::Idle;
    }

    let changes = originals
        .into_iter()
        .map(|(id, before)| {
            let after = translate_footprint(&before, offset.0, offset.1);
            FootprintChange { id, before, after }
        })
        .collect();
    edits.push(Edit::CommitFootprints(changes));
    Interaction::Idle
}

pub(super) fn pan(
    interaction: Interaction,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    let Interaction::Panning { last, resume } = interaction else {
        return interaction;
    };
    match pointer.phase {
        PointerPhase::Move => {
            let (dx, dy) = (pointer.screen.0 - last.0, pointer.screen.1 - last.1);
            if dx != 0.0 || dy != 0.0 {
                edits.push(Edit::PanCamera { dx, dy });
            }
            Interaction::Panning {
                last: pointer.screen,
                resume,
            }
        }
        PointerPhase::Up => *resume,
        _ => Interaction::Panning { last, resume },
    }
}

/// Force-terminates the current gesture after focus loss.
pub(super) fn blur(interaction: Interaction, edits: &mut Vec<Edit>) -> Interaction {
    match interaction {
        drag @ Interaction::DraggingVertex { .. } => edit::finish(drag, edits),
        Interaction::Moving {
            originals, offset, ..
        } => finish_move(originals, offset, edits),
        Interaction::Panning { resume, .. } => blur(*resume, edits),
        Interaction::Marquee { .. }
        | Interaction::PendingMarquee { .. }
        | Interaction::DrawingRectangle { .. } => Interaction::Idle,
        other @ (Interaction::Idle | Interaction::Drawing { .. }) => other,
    }
}

/// Reverts any live preview and drops the gesture; used by Escape and tool switches.
pub(super) fn cancel(interaction: Interaction, edits: &mut Vec<Edit>) -> Interaction {
    match interaction {
        Interaction::DraggingVertex { id, original, .. } => {
            edits.push(Edit::PreviewFootprints(vec![(id, original)]));
        }
        Interaction::Moving {
            originals, offset, ..
        } if offset != (0.0, 0.0) => {
            edits.push(Edit::PreviewFootprints(originals));
        }
        _ => {}
    }
    Interaction::Idle
}
