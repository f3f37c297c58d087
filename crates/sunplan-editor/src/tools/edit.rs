//! Vertex dragging.

use super::{Edit, FootprintChange, Interaction, Pointer, PointerPhase, ToolContext};
use crate::geometry::{nearest_vertex, topmost_building_at};
use sunplan_core::constants::VERTEX_HIT_RADIUS_PX;
use tracing::debug;

pub(super) fn pointer(
    interaction: Interaction,
    ctx: &ToolContext<'_>,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    match (pointer.phase, interaction) {
        (PointerPhase::Down, _) => press(ctx, pointer, edits),
        (
            PointerPhase::Move,
            Interaction::DraggingVertex {
                id,
                index,
                original,
                mut current,
            },
        ) => {
            if let Some(vertex) = current.get_mut(index) {
                *vertex = ctx.snap(pointer.world);
            }
            edits.push(Edit::PreviewFootprints(vec![(id, current.clone())]));
            Interaction::DraggingVertex {
                id,
                index,
                original,
                current,
            }
        }
        (PointerPhase::Up, drag @ Interaction::DraggingVertex { .. }) => finish(drag, edits),
        (_, other) => other,
    }
}

fn press(ctx: &ToolContext<'_>, pointer: &Pointer, edits: &mut Vec<Edit>) -> Interaction {
    let radius = ctx.viewport.screen_to_world_distance(VERTEX_HIT_RADIUS_PX);
    let grabbed = ctx
        .selection
        .single()
        .and_then(|id| ctx.building(id))
        .and_then(|b| nearest_vertex(&b.footprint, &pointer.world, radius).map(|i| (b, i)));

    if let Some((building, index)) = grabbed {
        debug!("Grabbed vertex {} of {}", index, building.id);
        return Interaction::DraggingVertex {
            id: building.id,
            index,
            original: building.footprint.clone(),
            current: building.footprint.clone(),
        };
    }

    if let Some(id) = topmost_building_at(ctx.buildings, &pointer.world) {
        edits.push(Edit::Select {
            id,
            additive: false,
        });
    }
    Interaction::Idle
}

/// Commits a vertex drag as released; used by pointer-up and blur.
pub(super) fn finish(drag: Interaction, edits: &mut Vec<Edit>) -> Interaction {
    if let Interaction::DraggingVertex {
        id,
        original,
        current,
        ..
    } = drag
    {
        if current != original {
            edits.push(Edit::CommitFootprints(vec![FootprintChange {
                id,
                before: original,
                after: current,
            }]));
        }
    }
    Interaction::Idle
}
