//! Tool state machine.
//!
//! Input is interpreted by a pure reducer: [`reduce`] takes the current
//! [`ToolState`], a read-only [`ToolContext`], and one [`InputEvent`], and
//! returns the next state plus a list of [`Edit`]s for the orchestrator to
//! apply. Nothing in this module mutates buildings, selection, or camera.

mod draw;
mod edit;
mod keyboard;
mod select;
mod shapes;
mod transform;

use crate::geometry::{constrain_to_orthogonal, snap_to_grid};
use crate::input::{InputEvent, Modifiers, PointerButton};
use crate::selection_manager::SelectionManager;
use crate::templates::TemplateKind;
use crate::viewport::Viewport;
use sunplan_core::{Building, BuildingId, Point};
use sunplan_settings::EditorSettings;
use tracing::debug;

/// The active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Select,
    Draw,
    Edit,
    Delete,
    Rectangle,
    Template,
    Move,
    Pan,
}

impl Tool {
    /// Single-key shortcut for the tool.
    pub fn from_shortcut(c: char) -> Option<Tool> {
        match c.to_ascii_lowercase() {
            'v' => Some(Tool::Select),
            'd' => Some(Tool::Draw),
            'e' => Some(Tool::Edit),
            'x' => Some(Tool::Delete),
            'r' => Some(Tool::Rectangle),
            't' => Some(Tool::Template),
            'm' => Some(Tool::Move),
            'h' => Some(Tool::Pan),
            _ => None,
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tool::Select => 'v',
            Tool::Draw => 'd',
            Tool::Edit => 'e',
            Tool::Delete => 'x',
            Tool::Rectangle => 'r',
            Tool::Template => 't',
            Tool::Move => 'm',
            Tool::Pan => 'h',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Draw => "draw",
            Tool::Edit => "edit",
            Tool::Delete => "delete",
            Tool::Rectangle => "rectangle",
            Tool::Template => "template",
            Tool::Move => "move",
            Tool::Pan => "pan",
        }
    }
}

/// In-progress gesture of the active tool.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Draw tool polyline; `cursor` is the constrained preview point.
    Drawing {
        points: Vec<Point>,
        cursor: Option<Point>,
    },
    /// Select tool press on empty space that has not travelled far enough yet.
    PendingMarquee {
        start_screen: (f64, f64),
        start: Point,
        additive: bool,
    },
    Marquee {
        start: Point,
        current: Point,
        additive: bool,
    },
    DraggingVertex {
        id: BuildingId,
        index: usize,
        original: Vec<Point>,
        current: Vec<Point>,
    },
    DrawingRectangle {
        start: Point,
        current: Point,
        square: bool,
    },
    Moving {
        origin: Point,
        originals: Vec<(BuildingId, Vec<Point>)>,
        offset: (f64, f64),
    },
    /// Camera drag; `resume` is restored on release.
    Panning {
        last: (f64, f64),
        resume: Box<Interaction>,
    },
}

impl Interaction {
    /// True for gestures that capture the pointer until release.
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Interaction::Marquee { .. }
                | Interaction::DraggingVertex { .. }
                | Interaction::Moving { .. }
                | Interaction::Panning { .. }
        )
    }
}

/// Everything the reducer carries between events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolState {
    pub tool: Tool,
    pub template: TemplateKind,
    pub interaction: Interaction,
}

impl ToolState {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            ..Default::default()
        }
    }

    /// Pending polyline of the draw tool.
    pub fn pending_points(&self) -> &[Point] {
        match &self.interaction {
            Interaction::Drawing { points, .. } => points,
            Interaction::Panning { resume, .. } => match resume.as_ref() {
                Interaction::Drawing { points, .. } => points,
                _ => &[],
            },
            _ => &[],
        }
    }

    /// Normalised marquee corners while a marquee drag is active.
    pub fn marquee(&self) -> Option<(Point, Point)> {
        match &self.interaction {
            Interaction::Marquee { start, current, .. } => Some((*start, *current)),
            _ => None,
        }
    }
}

/// Read-only view of the editor handed to the reducer.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    /// Buildings in z-order (last is topmost).
    pub buildings: &'a [Building],
    pub viewport: &'a Viewport,
    pub settings: &'a EditorSettings,
    pub selection: &'a SelectionManager,
    /// Space is held; every press pans.
    pub pan_key_held: bool,
}

impl ToolContext<'_> {
    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    /// Grid pitch in world units.
    pub fn grid_pitch(&self) -> f64 {
        self.viewport.screen_to_world_distance(self.settings.grid_size)
    }

    pub fn snap(&self, point: Point) -> Point {
        snap_to_grid(point, self.grid_pitch(), self.settings.snap_to_grid)
    }

    /// Snap, then the orthogonal constraint relative to `anchor` when active.
    pub fn constrain(&self, point: Point, anchor: Option<Point>, modifiers: Modifiers) -> Point {
        let snapped = self.snap(point);
        let orthogonal = modifiers.shift || self.settings.orthogonal_constraint;
        match anchor {
            Some(anchor) => constrain_to_orthogonal(snapped, anchor, orthogonal),
            None => snapped,
        }
    }
}

/// One footprint change, applied live and recorded on commit.
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintChange {
    pub id: BuildingId,
    pub before: Vec<Point>,
    pub after: Vec<Point>,
}

/// Mutation requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    CreateBuilding {
        footprint: Vec<Point>,
        name: Option<String>,
    },
    /// Live footprint overwrite during a drag; not recorded in history.
    PreviewFootprints(Vec<(BuildingId, Vec<Point>)>),
    /// Finished drag: one UPDATE, or a BULK_UPDATE for several buildings.
    CommitFootprints(Vec<FootprintChange>),
    DeleteBuilding(BuildingId),
    Select {
        id: BuildingId,
        additive: bool,
    },
    ClearSelection,
    SelectAll,
    ResolveMarquee {
        a: Point,
        b: Point,
        additive: bool,
    },
    PanCamera {
        dx: f64,
        dy: f64,
    },
    ZoomWheel {
        delta_y: f64,
        anchor: (f64, f64),
    },
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToolChanged(Tool),
    Undo,
    Redo,
    GroupSelection,
    UngroupSelection,
    DeleteSelection,
    DuplicateSelection,
    NudgeSelection {
        dx: f64,
        dy: f64,
    },
}

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerPhase {
    Down,
    Move,
    Up,
    DoubleClick,
}

/// Pointer event resolved into both coordinate spaces.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pointer {
    pub phase: PointerPhase,
    pub screen: (f64, f64),
    pub world: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl Pointer {
    fn resolve(event: &InputEvent, viewport: &Viewport) -> Option<Pointer> {
        let (phase, x, y, button, modifiers) = match *event {
            InputEvent::PointerDown {
                x,
                y,
                button,
                modifiers,
            } => (PointerPhase::Down, x, y, button, modifiers),
            InputEvent::PointerMove { x, y, modifiers } => {
                (PointerPhase::Move, x, y, PointerButton::Primary, modifiers)
            }
            InputEvent::PointerUp {
                x,
                y,
                button,
                modifiers,
            } => (PointerPhase::Up, x, y, button, modifiers),
            InputEvent::DoubleClick { x, y, modifiers } => {
                (PointerPhase::DoubleClick, x, y, PointerButton::Primary, modifiers)
            }
            _ => return None,
        };
        Some(Pointer {
            phase,
            screen: (x, y),
            world: viewport.screen_to_world(x, y),
            button,
            modifiers,
        })
    }

    pub fn is_primary_down(&self) -> bool {
        self.phase == PointerPhase::Down && self.button == PointerButton::Primary
    }
}

/// Advances the tool state machine by one event.
pub fn reduce(
    state: ToolState,
    ctx: &ToolContext<'_>,
    event: InputEvent,
) -> (ToolState, Vec<Edit>) {
    let mut edits = Vec::new();
    let ToolState {
        tool,
        template,
        interaction,
    } = state;

    let interaction = match event {
        InputEvent::Blur => transform::blur(interaction, &mut edits),
        InputEvent::KeyUp { .. } => interaction,
        InputEvent::Wheel { x, y, delta_y } => {
            edits.push(Edit::ZoomWheel {
                delta_y,
                anchor: (x, y),
            });
            interaction
        }
        InputEvent::KeyDown { key, modifiers } => {
            let next = keyboard::key_down(
                ToolState {
                    tool,
                    template,
                    interaction,
                },
                key,
                modifiers,
                &mut edits,
            );
            return (next, edits);
        }
        _ => match Pointer::resolve(&event, ctx.viewport) {
            Some(pointer) => pointer_event(tool, template, interaction, ctx, &pointer, &mut edits),
            None => interaction,
        },
    };

    (
        ToolState {
            tool,
            template,
            interaction,
        },
        edits,
    )
}

fn pointer_event(
    tool: Tool,
    template: TemplateKind,
    interaction: Interaction,
    ctx: &ToolContext<'_>,
    pointer: &Pointer,
    edits: &mut Vec<Edit>,
) -> Interaction {
    if let Interaction::Panning { .. } = interaction {
        return transform::pan(interaction, pointer, edits);
    }

    let pan_press = pointer.phase == PointerPhase::Down
        && !interaction.is_modal()
        && (pointer.button == PointerButton::Middle || ctx.pan_key_held || tool == Tool::Pan);
    if pan_press {
        debug!("Pan started");
        return Interaction::Panning {
            last: pointer.screen,
            resume: Box::new(interaction),
        };
    }

    if pointer.phase == PointerPhase::Down && pointer.button != PointerButton::Primary {
        return interaction;
    }

    match tool {
        Tool::Draw => draw::pointer(interaction, ctx, pointer, edits),
        Tool::Select => select::pointer(interaction, ctx, pointer, edits),
        Tool::Delete => select::delete_pointer(interaction, ctx, pointer, edits),
        Tool::Edit => edit::pointer(interaction, ctx, pointer, edits),
        Tool::Rectangle => shapes::rectangle_pointer(interaction, ctx, pointer, edits),
        Tool::Template => shapes::template_pointer(interaction, template, ctx, pointer, edits),
        Tool::Move => transform::move_pointer(interaction, ctx, pointer, edits),
        Tool::Pan => interaction,
    }
}
