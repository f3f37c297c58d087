//! Polygon tracing.

use super::{Edit, Interaction, Pointer, PointerPhase, ToolContext};
use sunplan_core::constants::CLOSE_THRESHOLD_PX;
use sunplan_core::Point;
use tracing::debug;

pub(super) fn pointer(
    interaction: Interaction,
    ctx: &ToolContext<'_>,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    let (mut points, cursor) = match interaction {
        Interaction::Drawing { points, cursor } => (points, cursor),
        _ => (Vec::new(), None),
    };

    match pointer.phase {
        PointerPhase::Move => {
            let preview = ctx.constrain(pointer.world, points.last().copied(), pointer.modifiers);
            Interaction::Drawing {
                points,
                cursor: Some(preview),
            }
        }
        PointerPhase::Down => {
            let threshold = ctx.viewport.screen_to_world_distance(CLOSE_THRESHOLD_PX);
            let closes = points.len() >= 3
                && points
                    .first()
                    .is_some_and(|first| first.distance_to(&pointer.world) <= threshold);
            if closes {
                return commit(points, edits);
            }

            let placed = ctx.constrain(pointer.world, points.last().copied(), pointer.modifiers);
            points.push(placed);
            Interaction::Drawing {
                points,
                cursor: Some(placed),
            }
        }
        PointerPhase::DoubleClick => {
            let threshold = ctx.viewport.screen_to_world_distance(CLOSE_THRESHOLD_PX);
            dedupe_trailing(&mut points, threshold);
            commit(points, edits)
        }
        PointerPhase::Up => Interaction::Drawing { points, cursor },
    }
}

/// Drops trailing points lying within `threshold` of their predecessor.
///
/// A double-click delivers two presses before the double-click event, which
/// leaves a near-duplicate vertex at the end of the polyline.
pub(super) fn dedupe_trailing(points: &mut Vec<Point>, threshold: f64) {
    while points.len() >= 2 {
        let n = points.len();
        if points[n - 1].distance_to(&points[n - 2]) <= threshold {
            points.pop();
        } else {
            break;
        }
    }
}

/// Emits a create for `points` when they form a polygon; always returns Idle.
pub(super) fn commit(points: Vec<Point>, edits: &mut Vec<Edit>) -> Interaction {
    if points.len() >= 3 {
        edits.push(Edit::CreateBuilding {
            footprint: points,
            name: None,
        });
    } else {
        debug!("Discarding polyline with {} points", points.len());
    }
    Interaction::Idle
}
