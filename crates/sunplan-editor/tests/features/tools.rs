use sunplan_core::{Building, BuildingId, Point};
use sunplan_editor::input::{InputEvent, Key, Modifiers, PointerButton};
use sunplan_editor::selection_manager::SelectionManager;
use sunplan_editor::tools::{reduce, Edit, Interaction, Tool, ToolContext, ToolState};
use sunplan_editor::viewport::Viewport;
use sunplan_editor::{BuildingStore, EditorState, TemplateKind};
use sunplan_settings::EditorSettings;

fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ]
}

fn click(editor: &mut EditorState, x: f64, y: f64) {
    editor.handle_input(InputEvent::press(x, y));
    editor.handle_input(InputEvent::release(x, y));
}

fn drag(editor: &mut EditorState, from: (f64, f64), to: (f64, f64)) {
    editor.handle_input(InputEvent::press(from.0, from.1));
    editor.handle_input(InputEvent::motion(to.0, to.1));
    editor.handle_input(InputEvent::release(to.0, to.1));
}

fn shift_press(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown {
        x,
        y,
        button: PointerButton::Primary,
        modifiers: Modifiers::SHIFT,
    }
}

fn drawing_editor() -> EditorState {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Draw);
    editor
}

// ---- draw ----

#[test]
fn test_draw_closes_near_first_point() {
    let mut editor = drawing_editor();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 100.0, 0.0);
    click(&mut editor, 100.0, 100.0);
    assert_eq!(editor.tool_state().pending_points().len(), 3);

    click(&mut editor, 4.0, 3.0);
    assert_eq!(editor.buildings().len(), 1);
    assert_eq!(editor.buildings()[0].footprint.len(), 3);
    assert!(editor.tool_state().pending_points().is_empty());
    assert_eq!(editor.undo_description().as_deref(), Some("Add Building 1"));
}

#[test]
fn test_draw_close_threshold_scales_with_zoom() {
    let mut editor = drawing_editor();
    editor.zoom_at_point(2.0, (0.0, 0.0));
    // Screen coords at zoom 2: world = screen / 2
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 200.0, 0.0);
    click(&mut editor, 200.0, 200.0);
    // 12 px on screen from the first point, beyond the 10 px threshold
    click(&mut editor, 12.0, 0.0);
    assert!(editor.buildings().is_empty());
    assert_eq!(editor.tool_state().pending_points().len(), 4);
}

#[test]
fn test_draw_enter_completes() {
    let mut editor = drawing_editor();
    for (x, y) in [(0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (0.0, 50.0)] {
        click(&mut editor, x, y);
    }
    editor.handle_input(InputEvent::key(Key::Enter));
    assert_eq!(editor.buildings()[0].footprint.len(), 4);
}

#[test]
fn test_draw_double_click_drops_duplicate_tail() {
    let mut editor = drawing_editor();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 100.0, 0.0);
    click(&mut editor, 100.0, 100.0);
    // The two presses of a double-click, then the double-click itself
    click(&mut editor, 100.0, 101.0);
    editor.handle_input(InputEvent::DoubleClick {
        x: 100.0,
        y: 101.0,
        modifiers: Modifiers::NONE,
    });

    assert_eq!(editor.buildings().len(), 1);
    assert_eq!(editor.buildings()[0].footprint.len(), 3);
}

#[test]
fn test_draw_double_click_with_two_points_commits_nothing() {
    let mut editor = drawing_editor();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 100.0, 0.0);
    click(&mut editor, 100.0, 0.0);
    editor.handle_input(InputEvent::DoubleClick {
        x: 100.0,
        y: 0.0,
        modifiers: Modifiers::NONE,
    });
    assert!(editor.buildings().is_empty());
    assert!(editor.tool_state().pending_points().is_empty());
}

#[test]
fn test_draw_backspace_and_escape() {
    let mut editor = drawing_editor();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 10.0, 0.0);
    editor.handle_input(InputEvent::key(Key::Backspace));
    assert_eq!(editor.tool_state().pending_points(), &[Point::new(0.0, 0.0)]);

    editor.handle_input(InputEvent::key(Key::Escape));
    assert!(editor.tool_state().pending_points().is_empty());
    assert_eq!(editor.tool(), Tool::Draw);
}

#[test]
fn test_draw_escape_without_points_clears_selection() {
    let mut editor = EditorState::new();
    let id = editor.create_building(square(0.0, 0.0, 10.0), None).unwrap();
    editor.select_building(id, false);
    editor.set_tool(Tool::Draw);

    editor.handle_input(InputEvent::key(Key::Escape));
    assert!(editor.selection().is_empty());
}

#[test]
fn test_draw_snap_then_orthogonal() {
    let mut editor = drawing_editor();
    editor.set_snap_to_grid(true);
    editor.set_grid_size(20.0);

    click(&mut editor, 13.0, 27.0);
    assert_eq!(editor.tool_state().pending_points(), &[Point::new(20.0, 20.0)]);

    editor.handle_input(InputEvent::PointerMove {
        x: 95.0,
        y: 31.0,
        modifiers: Modifiers::SHIFT,
    });
    match &editor.tool_state().interaction {
        Interaction::Drawing { cursor, .. } => assert_eq!(*cursor, Some(Point::new(100.0, 20.0))),
        other => panic!("unexpected interaction {:?}", other),
    }

    editor.handle_input(shift_press(95.0, 31.0));
    assert_eq!(editor.tool_state().pending_points()[1], Point::new(100.0, 20.0));
}

#[test]
fn test_switching_tool_discards_pending_points() {
    let mut editor = drawing_editor();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 10.0, 0.0);
    editor.handle_input(InputEvent::key(Key::Char('r')));
    assert_eq!(editor.tool(), Tool::Rectangle);
    assert!(editor.tool_state().pending_points().is_empty());
}

// ---- select ----

fn two_buildings() -> (EditorState, BuildingId, BuildingId) {
    let mut editor = EditorState::new();
    let a = editor.create_building(square(0.0, 0.0, 100.0), None).unwrap();
    let b = editor.create_building(square(200.0, 0.0, 100.0), None).unwrap();
    (editor, a, b)
}

#[test]
fn test_select_click_toggle_and_clear() {
    let (mut editor, a, b) = two_buildings();

    click(&mut editor, 50.0, 50.0);
    assert_eq!(editor.selection().ids().collect::<Vec<_>>(), vec![a]);
    assert_eq!(editor.store().selected_building(), Some(a));

    editor.handle_input(shift_press(250.0, 50.0));
    editor.handle_input(InputEvent::release(250.0, 50.0));
    assert_eq!(editor.selection().len(), 2);

    editor.handle_input(shift_press(50.0, 50.0));
    editor.handle_input(InputEvent::release(50.0, 50.0));
    assert_eq!(editor.selection().ids().collect::<Vec<_>>(), vec![b]);

    click(&mut editor, 150.0, 300.0);
    assert!(editor.selection().is_empty());
    assert_eq!(editor.store().selected_building(), None);
}

#[test]
fn test_select_topmost_under_overlap() {
    let mut editor = EditorState::new();
    editor.create_building(square(0.0, 0.0, 100.0), None);
    let upper = editor.create_building(square(50.0, 50.0, 100.0), None).unwrap();
    click(&mut editor, 75.0, 75.0);
    assert_eq!(editor.selection().primary(), Some(upper));
}

#[test]
fn test_marquee_selects_intersecting_buildings() {
    let (mut editor, a, b) = two_buildings();
    editor.handle_input(InputEvent::press(-10.0, -10.0));
    editor.handle_input(InputEvent::motion(110.0, 20.0));
    assert!(editor.tool_state().marquee().is_some());
    editor.handle_input(InputEvent::release(110.0, 20.0));
    assert_eq!(editor.selection().ids().collect::<Vec<_>>(), vec![a]);

    // Additive marquee unions
    editor.handle_input(shift_press(190.0, -10.0));
    editor.handle_input(InputEvent::motion(210.0, 10.0));
    editor.handle_input(InputEvent::PointerUp {
        x: 210.0,
        y: 10.0,
        button: PointerButton::Primary,
        modifiers: Modifiers::SHIFT,
    });
    assert!(editor.selection().contains(a) && editor.selection().contains(b));
}

#[test]
fn test_short_drag_is_a_click() {
    let (mut editor, a, _) = two_buildings();
    editor.select_building(a, false);
    drag(&mut editor, (150.0, 300.0), (152.0, 301.0));
    assert!(editor.tool_state().marquee().is_none());
    assert!(editor.selection().is_empty());
}

#[test]
fn test_blur_cancels_marquee() {
    let (mut editor, a, _) = two_buildings();
    editor.select_building(a, false);
    editor.handle_input(InputEvent::press(150.0, -10.0));
    editor.handle_input(InputEvent::motion(350.0, 50.0));
    editor.handle_input(InputEvent::Blur);
    editor.handle_input(InputEvent::release(350.0, 50.0));

    assert_eq!(editor.selection().ids().collect::<Vec<_>>(), vec![a]);
    assert_eq!(editor.tool_state().interaction, Interaction::Idle);
}

// ---- edit ----

#[test]
fn test_edit_vertex_drag_commits_one_update() {
    let (mut editor, a, _) = two_buildings();
    editor.select_building(a, false);
    editor.set_tool(Tool::Edit);
    let depth = editor.history().undo_len();

    editor.handle_input(InputEvent::press(98.0, 2.0));
    editor.handle_input(InputEvent::motion(150.0, -20.0));
    // Live overwrite before release
    assert_eq!(editor.buildings()[0].footprint[1], Point::new(150.0, -20.0));
    assert_eq!(editor.history().undo_len(), depth);

    editor.handle_input(InputEvent::release(150.0, -20.0));
    assert_eq!(editor.history().undo_len(), depth + 1);
    assert_eq!(editor.undo_description().as_deref(), Some("Update Building 1"));

    editor.undo();
    assert_eq!(editor.buildings()[0].footprint[1], Point::new(100.0, 0.0));
}

#[test]
fn test_edit_press_off_vertex_selects_building() {
    let (mut editor, a, b) = two_buildings();
    editor.select_building(a, false);
    editor.set_tool(Tool::Edit);

    click(&mut editor, 250.0, 50.0);
    assert_eq!(editor.selection().single(), Some(b));
    assert_eq!(editor.tool_state().interaction, Interaction::Idle);
}

#[test]
fn test_edit_needs_single_selection() {
    let (mut editor, _, _) = two_buildings();
    editor.select_all();
    editor.set_tool(Tool::Edit);
    editor.handle_input(InputEvent::press(100.0, 0.0));
    assert!(!matches!(
        editor.tool_state().interaction,
        Interaction::DraggingVertex { .. }
    ));
}

#[test]
fn test_blur_commits_vertex_drag() {
    let (mut editor, a, _) = two_buildings();
    editor.select_building(a, false);
    editor.set_tool(Tool::Edit);
    editor.handle_input(InputEvent::press(0.0, 100.0));
    editor.handle_input(InputEvent::motion(-30.0, 130.0));
    editor.handle_input(InputEvent::Blur);

    assert_eq!(editor.tool_state().interaction, Interaction::Idle);
    assert_eq!(editor.buildings()[0].footprint[3], Point::new(-30.0, 130.0));
    assert_eq!(editor.undo_description().as_deref(), Some("Update Building 1"));
}

#[test]
fn test_escape_reverts_vertex_drag() {
    let (mut editor, a, _) = two_buildings();
    editor.select_building(a, false);
    editor.set_tool(Tool::Edit);
    let depth = editor.history().undo_len();
    editor.handle_input(InputEvent::press(0.0, 0.0));
    editor.handle_input(InputEvent::motion(-30.0, -30.0));
    editor.handle_input(InputEvent::key(Key::Escape));

    assert_eq!(editor.buildings()[0].footprint[0], Point::new(0.0, 0.0));
    assert_eq!(editor.history().undo_len(), depth);
}

// ---- delete ----

#[test]
fn test_delete_tool_removes_topmost() {
    let (mut editor, a, b) = two_buildings();
    editor.set_tool(Tool::Delete);
    click(&mut editor, 250.0, 50.0);
    assert_eq!(editor.buildings().len(), 1);
    assert_eq!(editor.buildings()[0].id, a);

    click(&mut editor, 500.0, 500.0);
    assert_eq!(editor.buildings().len(), 1);

    editor.undo();
    assert!(editor.store().building(b).is_some());
}

// ---- rectangle & template ----

#[test]
fn test_rectangle_drag_creates_building() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Rectangle);
    drag(&mut editor, (10.0, 10.0), (60.0, 40.0));
    assert_eq!(
        editor.buildings()[0].footprint,
        vec![
            Point::new(10.0, 10.0),
            Point::new(60.0, 10.0),
            Point::new(60.0, 40.0),
            Point::new(10.0, 40.0),
        ]
    );
}

#[test]
fn test_rectangle_too_small_is_discarded() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Rectangle);
    drag(&mut editor, (10.0, 10.0), (60.0, 14.0));
    drag(&mut editor, (10.0, 10.0), (15.0, 60.0));
    assert!(editor.buildings().is_empty());
}

#[test]
fn test_rectangle_shift_forces_square() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Rectangle);
    editor.handle_input(shift_press(100.0, 100.0));
    editor.handle_input(InputEvent::PointerUp {
        x: 70.0,
        y: 140.0,
        button: PointerButton::Primary,
        modifiers: Modifiers::SHIFT,
    });
    let fp = &editor.buildings()[0].footprint;
    assert_eq!(fp[2], Point::new(60.0, 140.0));
}

#[test]
fn test_blur_cancels_rectangle() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Rectangle);
    editor.handle_input(InputEvent::press(10.0, 10.0));
    editor.handle_input(InputEvent::motion(60.0, 60.0));
    editor.handle_input(InputEvent::Blur);
    editor.handle_input(InputEvent::release(60.0, 60.0));
    assert!(editor.buildings().is_empty());
}

#[test]
fn test_template_click_centres_preset() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Template);
    click(&mut editor, 300.0, 200.0);
    let fp = &editor.buildings()[0].footprint;
    assert_eq!(fp.len(), 4);
    assert_eq!(fp[0], Point::new(260.0, 160.0));

    editor.set_template_kind(TemplateKind::Tower);
    editor.zoom_at_point(2.0, (0.0, 0.0));
    click(&mut editor, 600.0, 400.0);
    let tower = &editor.buildings()[1].footprint;
    assert_eq!(tower.len(), 8);
    // 80 px at world scale 2 is 40 world units across
    for p in tower {
        assert!((p.distance_to(&Point::new(300.0, 200.0)) - 20.0).abs() < 1e-9);
    }
}

// ---- move ----

#[test]
fn test_move_single_building() {
    let (mut editor, a, b) = two_buildings();
    editor.set_tool(Tool::Move);
    drag(&mut editor, (250.0, 50.0), (280.0, 40.0));

    assert_eq!(editor.selection().single(), Some(b));
    assert_eq!(editor.store().building(b).unwrap().footprint[0], Point::new(230.0, -10.0));
    assert_eq!(editor.store().building(a).unwrap().footprint[0], Point::new(0.0, 0.0));
    assert_eq!(editor.undo_description().as_deref(), Some("Update Building 2"));
}

#[test]
fn test_move_snaps_offset() {
    let (mut editor, a, _) = two_buildings();
    editor.set_snap_to_grid(true);
    editor.set_grid_size(20.0);
    editor.set_tool(Tool::Move);
    drag(&mut editor, (5.0, 5.0), (38.0, 12.0));
    assert_eq!(editor.store().building(a).unwrap().footprint[0], Point::new(40.0, 0.0));
}

#[test]
fn test_move_selection_is_one_bulk_update() {
    let (mut editor, a, b) = two_buildings();
    editor.select_all();
    editor.set_tool(Tool::Move);
    drag(&mut editor, (50.0, 50.0), (60.0, 75.0));

    assert_eq!(editor.store().building(a).unwrap().footprint[0], Point::new(10.0, 25.0));
    assert_eq!(editor.store().building(b).unwrap().footprint[0], Point::new(210.0, 25.0));
    assert_eq!(editor.undo_description().as_deref(), Some("Update 2 buildings"));

    editor.undo();
    assert_eq!(editor.store().building(b).unwrap().footprint[0], Point::new(200.0, 0.0));
}

#[test]
fn test_move_back_to_origin_commits_nothing() {
    let (mut editor, a, _) = two_buildings();
    editor.set_tool(Tool::Move);
    let depth = editor.history().undo_len();
    editor.handle_input(InputEvent::press(50.0, 50.0));
    editor.handle_input(InputEvent::motion(90.0, 90.0));
    editor.handle_input(InputEvent::release(50.0, 50.0));

    assert_eq!(editor.history().undo_len(), depth);
    assert_eq!(editor.store().building(a).unwrap().footprint[0], Point::new(0.0, 0.0));
}

#[test]
fn test_blur_commits_move() {
    let (mut editor, a, _) = two_buildings();
    editor.set_tool(Tool::Move);
    editor.handle_input(InputEvent::press(50.0, 50.0));
    editor.handle_input(InputEvent::motion(70.0, 50.0));
    editor.handle_input(InputEvent::Blur);
    assert_eq!(editor.store().building(a).unwrap().footprint[0], Point::new(20.0, 0.0));
    assert!(editor.can_undo());
    assert_eq!(editor.tool_state().interaction, Interaction::Idle);
}

#[test]
fn test_command_shortcuts_wait_for_drag_release() {
    let mut editor = EditorState::new();
    let a = editor.create_building(square(0.0, 0.0, 100.0), None).unwrap();
    editor.set_tool(Tool::Move);
    drag(&mut editor, (50.0, 50.0), (150.0, 50.0));
    assert_eq!(editor.history().undo_len(), 2);

    editor.handle_input(InputEvent::press(150.0, 50.0));
    editor.handle_input(InputEvent::motion(200.0, 50.0));
    editor.handle_input(InputEvent::key_with(Key::Char('z'), Modifiers::CTRL));
    assert_eq!(editor.history().undo_len(), 2);
    assert_eq!(editor.history().redo_len(), 0);
    assert!(matches!(editor.tool_state().interaction, Interaction::Moving { .. }));

    editor.handle_input(InputEvent::release(200.0, 50.0));
    assert_eq!(editor.store().building(a).unwrap().footprint[0], Point::new(150.0, 0.0));
    assert_eq!(editor.history().undo_len(), 3);

    editor.undo();
    assert_eq!(editor.store().building(a).unwrap().footprint[0], Point::new(100.0, 0.0));
    editor.undo();
    assert_eq!(editor.store().building(a).unwrap().footprint[0], Point::new(0.0, 0.0));
    editor.undo();
    assert!(editor.buildings().is_empty());
}

#[test]
fn test_command_shortcuts_ignored_during_vertex_drag() {
    let (mut editor, a, _) = two_buildings();
    editor.select_building(a, false);
    editor.set_tool(Tool::Edit);
    editor.handle_input(InputEvent::press(100.0, 100.0));
    editor.handle_input(InputEvent::motion(120.0, 120.0));
    for c in ['z', 'y', 'a', 'd', 'g'] {
        editor.handle_input(InputEvent::key_with(Key::Char(c), Modifiers::CTRL));
    }
    assert_eq!(editor.buildings().len(), 2);
    assert_eq!(editor.selection().single(), Some(a));
    assert!(editor.groups().is_empty());

    editor.handle_input(InputEvent::release(120.0, 120.0));
    editor.handle_input(InputEvent::key_with(Key::Char('z'), Modifiers::CTRL));
    assert_eq!(editor.buildings()[0].footprint[2], Point::new(100.0, 100.0));
}

// ---- pan & zoom ----

#[test]
fn test_middle_button_pans_from_any_tool() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Rectangle);
    editor.handle_input(InputEvent::PointerDown {
        x: 100.0,
        y: 100.0,
        button: PointerButton::Middle,
        modifiers: Modifiers::NONE,
    });
    editor.handle_input(InputEvent::motion(130.0, 90.0));
    editor.handle_input(InputEvent::PointerUp {
        x: 130.0,
        y: 90.0,
        button: PointerButton::Middle,
        modifiers: Modifiers::NONE,
    });

    let cam = editor.viewport().camera();
    assert_eq!((cam.x, cam.y), (30.0, -10.0));
    assert!(editor.buildings().is_empty());
}

#[test]
fn test_space_pan_keeps_pending_polyline() {
    let mut editor = drawing_editor();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 100.0, 0.0);

    editor.handle_input(InputEvent::key(Key::Space));
    drag(&mut editor, (300.0, 300.0), (310.0, 300.0));
    editor.handle_input(InputEvent::KeyUp {
        key: Key::Space,
        modifiers: Modifiers::NONE,
    });

    assert_eq!(editor.viewport().camera().x, 10.0);
    assert_eq!(editor.tool_state().pending_points().len(), 2);
    assert_eq!(editor.tool(), Tool::Draw);
}

fn middle_press(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown {
        x,
        y,
        button: PointerButton::Middle,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn test_blur_while_panning_cancels_paused_rectangle() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Rectangle);
    editor.handle_input(InputEvent::press(10.0, 10.0));
    editor.handle_input(InputEvent::motion(60.0, 60.0));
    editor.handle_input(middle_press(100.0, 100.0));
    assert!(matches!(editor.tool_state().interaction, Interaction::Panning { .. }));

    editor.handle_input(InputEvent::Blur);
    assert_eq!(editor.tool_state().interaction, Interaction::Idle);

    editor.handle_input(InputEvent::PointerUp {
        x: 100.0,
        y: 100.0,
        button: PointerButton::Middle,
        modifiers: Modifiers::NONE,
    });
    editor.handle_input(InputEvent::release(60.0, 60.0));
    assert!(editor.buildings().is_empty());
}

#[test]
fn test_blur_while_panning_drops_pending_marquee() {
    let (mut editor, a, _) = two_buildings();
    editor.select_building(a, false);
    editor.handle_input(InputEvent::press(500.0, 500.0));
    editor.handle_input(middle_press(510.0, 510.0));
    editor.handle_input(InputEvent::Blur);
    assert_eq!(editor.tool_state().interaction, Interaction::Idle);

    editor.handle_input(InputEvent::release(500.0, 500.0));
    assert_eq!(editor.selection().single(), Some(a));
}

#[test]
fn test_blur_while_panning_keeps_polyline() {
    let mut editor = drawing_editor();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 100.0, 0.0);
    editor.handle_input(middle_press(300.0, 300.0));
    editor.handle_input(InputEvent::Blur);
    assert_eq!(editor.tool_state().pending_points().len(), 2);
    assert!(!editor.pan_key_held());
}

#[test]
fn test_pan_tool() {
    let mut editor = EditorState::new();
    editor.handle_input(InputEvent::key(Key::Char('h')));
    assert_eq!(editor.tool(), Tool::Pan);
    drag(&mut editor, (0.0, 0.0), (-25.0, 40.0));
    let cam = editor.viewport().camera();
    assert_eq!((cam.x, cam.y), (-25.0, 40.0));
}

#[test]
fn test_wheel_zoom_about_cursor() {
    let mut editor = EditorState::new();
    editor.resize(800.0, 600.0, 0.0);
    let before = editor.viewport().screen_to_world(120.0, 80.0);
    editor.handle_input(InputEvent::Wheel {
        x: 120.0,
        y: 80.0,
        delta_y: -3.0,
    });
    assert!((editor.viewport().zoom() - 1.1).abs() < 1e-12);
    let after = editor.viewport().screen_to_world(120.0, 80.0);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn test_keyboard_zoom_keys() {
    let mut editor = EditorState::new();
    editor.resize(800.0, 600.0, 0.0);
    editor.handle_input(InputEvent::key(Key::Char('+')));
    assert!((editor.viewport().zoom() - 1.2).abs() < 1e-12);
    editor.handle_input(InputEvent::key(Key::Char('=')));
    editor.handle_input(InputEvent::key(Key::Char('0')));
    assert_eq!(editor.viewport().zoom(), 1.0);
    editor.handle_input(InputEvent::key(Key::Char('-')));
    assert!((editor.viewport().zoom() - 1.0 / 1.2).abs() < 1e-12);
}

#[test]
fn test_tool_shortcuts() {
    let mut editor = EditorState::new();
    for (c, tool) in [
        ('d', Tool::Draw),
        ('e', Tool::Edit),
        ('x', Tool::Delete),
        ('r', Tool::Rectangle),
        ('t', Tool::Template),
        ('m', Tool::Move),
        ('h', Tool::Pan),
        ('V', Tool::Select),
    ] {
        editor.handle_input(InputEvent::key(Key::Char(c)));
        assert_eq!(editor.tool(), tool);
    }
}

// ---- reducer ----

#[test]
fn test_reduce_is_pure() {
    let buildings = vec![Building::new(
        BuildingId(9),
        "Depot",
        square(0.0, 0.0, 50.0),
        "#000000",
    )];
    let viewport = Viewport::new(800.0, 600.0);
    let settings = EditorSettings::default();
    let selection = SelectionManager::new();
    let ctx = ToolContext {
        buildings: &buildings,
        viewport: &viewport,
        settings: &settings,
        selection: &selection,
        pan_key_held: false,
    };

    let state = ToolState::new(Tool::Delete);
    let (next, edits) = reduce(state.clone(), &ctx, InputEvent::press(25.0, 25.0));
    assert_eq!(edits, vec![Edit::DeleteBuilding(BuildingId(9))]);
    assert_eq!(next, state);
    assert_eq!(buildings.len(), 1);

    let (_, edits) = reduce(
        ToolState::new(Tool::Select),
        &ctx,
        InputEvent::key_with(Key::Char('z'), Modifiers::CTRL),
    );
    assert_eq!(edits, vec![Edit::Undo]);
}
