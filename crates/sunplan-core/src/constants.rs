//! Editor-wide constants.
//!
//! Values suffixed `_PX` are screen pixels and must be divided by the
//! viewport's world scale before being compared against footprint coordinates.

/// Smallest allowed camera zoom.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest allowed camera zoom.
pub const MAX_ZOOM: f64 = 10.0;
/// Multiplicative step for keyboard zoom in/out.
pub const KEYBOARD_ZOOM_STEP: f64 = 1.2;
/// Multiplicative step for one mouse-wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Distance from the first vertex that closes a drawn polygon.
pub const CLOSE_THRESHOLD_PX: f64 = 10.0;
/// Pick radius around a vertex in the edit tool.
pub const VERTEX_HIT_RADIUS_PX: f64 = 8.0;
/// Pointer travel before a press on empty space becomes a marquee.
pub const MARQUEE_DRAG_THRESHOLD_PX: f64 = 3.0;
/// Edge length of a template preset before world conversion.
pub const TEMPLATE_SIZE_PX: f64 = 80.0;

/// Rectangles at or below this size (world units) on either axis are discarded.
pub const MIN_RECTANGLE_SIZE: f64 = 5.0;
/// Offset applied to duplicated buildings (world units).
pub const DUPLICATE_OFFSET: f64 = 20.0;
/// Largest number of copies one array request may create.
pub const MAX_ARRAY_COPIES: u32 = 10_000;
/// Arrow-key nudge distance (world units); multiplied by 10 with Shift.
pub const NUDGE_STEP: f64 = 1.0;

/// Default grid pitch in screen pixels.
pub const DEFAULT_GRID_SIZE_PX: f64 = 20.0;

/// Default floor count for new and imported buildings.
pub const DEFAULT_FLOORS: u32 = 4;
/// Default storey height in metres.
pub const DEFAULT_FLOOR_HEIGHT: f64 = 3.0;
/// Inclusive floor count range.
pub const FLOORS_RANGE: (u32, u32) = (1, 100);
/// Inclusive storey height range in metres.
pub const FLOOR_HEIGHT_RANGE: (f64, f64) = (2.0, 10.0);

/// Default number of undo steps retained.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;
/// Duration of the keep-visible viewport animation.
pub const VIEWPORT_ANIMATION_MS: f64 = 300.0;
/// Fraction of the viewport reserved as margin when framing content.
pub const VIEW_PADDING: f64 = 0.05;
