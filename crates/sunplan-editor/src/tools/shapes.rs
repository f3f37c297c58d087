//! Rectangle and template tools.

use super::{Edit, Interaction, Pointer, PointerPhase, ToolContext};
use crate::geometry::{bounds, create_rectangle_footprint};
use crate::templates::{create_template_shape, TemplateKind};
use sunplan_core::constants::{MIN_RECTANGLE_SIZE, TEMPLATE_SIZE_PX};
use tracing::debug;

pub(super) fn rectangle_pointer(
    interaction: Interaction,
    ctx: &ToolContext<'_>,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    let square = pointer.modifiers.shift;
    match (pointer.phase, interaction) {
        (PointerPhase::Down, _) => {
            let start = ctx.snap(pointer.world);
            Interaction::DrawingRectangle {
                start,
                current: start,
                square,
            }
        }
        (PointerPhase::Move, Interaction::DrawingRectangle { start, .. }) => {
            Interaction::DrawingRectangle {
                start,
                current: ctx.snap(pointer.world),
                square,
            }
        }
        (PointerPhase::Up, Interaction::DrawingRectangle { start, .. }) => {
            let footprint = create_rectangle_footprint(start, ctx.snap(pointer.world), square);
            let big_enough = bounds(&footprint)
                .is_some_and(|b| b.width() > MIN_RECTANGLE_SIZE && b.height() > MIN_RECTANGLE_SIZE);
            if big_enough {
                edits.push(Edit::CreateBuilding {
                    footprint,
                    name: None,
                });
            } else {
                debug!("Discarding rectangle below {} units", MIN_RECTANGLE_SIZE);
            }
            Interaction::Idle
        }
        (_, other) => other,
    }
}

pub(super) fn template_pointer(
    interaction: Interaction,
    kind: TemplateKind,
    ctx: &ToolContext<'_>,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    if pointer.is_primary_down() {
        let size = ctx.viewport.screen_to_world_distance(TEMPLATE_SIZE_PX);
        edits.push(Edit::CreateBuilding {
            footprint: create_template_shape(ctx.snap(pointer.world), kind, size),
            name: None,
        });
    }
    interaction
}
