//! Click, toggle, and marquee selection; click-to-delete.

use super::{Edit, Interaction, Pointer, PointerPhase, ToolContext};
use crate::geometry::topmost_building_at;
use sunplan_core::constants::MARQUEE_DRAG_THRESHOLD_PX;

pub(super) fn pointer(
    interaction: Interaction,
    ctx: &ToolContext<'_>,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    let additive = pointer.modifiers.additive();
    match (pointer.phase, interaction) {
        (PointerPhase::Down, _) => match topmost_building_at(ctx.buildings, &pointer.world) {
            Some(id) => {
                edits.push(Edit::Select { id, additive });
                Interaction::Idle
            }
            None => Interaction::PendingMarquee {
                start_screen: pointer.screen,
                start: pointer.world,
                additive,
            },
        },
        (
            PointerPhase::Move,
            Interaction::PendingMarquee {
                start_screen,
                start,
                additive,
            },
        ) => {
            let travel =
                (pointer.screen.0 - start_screen.0).hypot(pointer.screen.1 - start_screen.1);
            if travel > MARQUEE_DRAG_THRESHOLD_PX {
                Interaction::Marquee {
                    start,
                    current: pointer.world,
                    additive,
                }
            } else {
                Interaction::PendingMarquee {
                    start_screen,
                    start,
                    additive,
                }
            }
        }
        (PointerPhase::Move, Interaction::Marquee { start, additive, .. }) => Interaction::Marquee {
            start,
            current: pointer.world,
            additive,
        },
        (PointerPhase::Up, Interaction::PendingMarquee { additive, .. }) => {
            if !additive {
                edits.push(Edit::ClearSelection);
            }
            Interaction::Idle
        }
        (PointerPhase::Up, Interaction::Marquee { start, additive, .. }) => {
            edits.push(Edit::ResolveMarquee {
                a: start,
                b: pointer.world,
                additive,
            });
            Interaction::Idle
        }
        (_, other) => other,
    }
}

pub(super) fn delete_pointer(
    interaction: Interaction,
    ctx: &ToolContext<'_>,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    if pointer.is_primary_down() {
        if let Some(id) = topmost_building_at(ctx.buildings, &pointer.world) {
            edits.push(Edit::DeleteBuilding(id));
        }
    }
    interaction
}
