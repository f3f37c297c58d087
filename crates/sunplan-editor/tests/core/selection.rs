use sunplan_core::{Building, BuildingId, Point};
use sunplan_editor::selection_manager::SelectionManager;

fn building(id: u64, x: f64, y: f64) -> Building {
    let fp = vec![
        Point::new(x, y),
        Point::new(x + 10.0, y),
        Point::new(x + 10.0, y + 10.0),
        Point::new(x, y + 10.0),
    ];
    Building::new(BuildingId(id), format!("B{id}"), fp, "#123456")
}

fn row() -> Vec<Building> {
    vec![
        building(1, 0.0, 0.0),
        building(2, 100.0, 0.0),
        building(3, 200.0, 0.0),
    ]
}

#[test]
fn test_select_replaces_without_modifier() {
    let mut sel = SelectionManager::new();
    sel.select(BuildingId(1), false);
    sel.select(BuildingId(2), false);
    assert_eq!(sel.ids().collect::<Vec<_>>(), vec![BuildingId(2)]);
    assert_eq!(sel.primary(), Some(BuildingId(2)));
    assert_eq!(sel.single(), Some(BuildingId(2)));
}

#[test]
fn test_additive_select_toggles() {
    let mut sel = SelectionManager::new();
    sel.select(BuildingId(1), false);
    sel.select(BuildingId(3), true);
    assert_eq!(sel.len(), 2);
    assert_eq!(sel.primary(), Some(BuildingId(3)));
    assert_eq!(sel.single(), None);

    sel.select(BuildingId(3), true);
    assert_eq!(sel.len(), 1);
    assert!(!sel.contains(BuildingId(3)));
    assert_eq!(sel.primary(), Some(BuildingId(1)));
}

#[test]
fn test_clear() {
    let mut sel = SelectionManager::new();
    sel.select(BuildingId(1), false);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.primary(), None);
}

#[test]
fn test_marquee_replace_and_union() {
    let buildings = row();
    let mut sel = SelectionManager::new();
    sel.select(BuildingId(3), false);

    let hits = sel.marquee_resolve(
        &buildings,
        Point::new(-5.0, -5.0),
        Point::new(105.0, 5.0),
        false,
    );
    assert_eq!(hits, 2);
    assert_eq!(sel.ids().collect::<Vec<_>>(), vec![BuildingId(1), BuildingId(2)]);

    sel.clear();
    sel.select(BuildingId(3), false);
    sel.marquee_resolve(&buildings, Point::new(-5.0, -5.0), Point::new(5.0, 5.0), true);
    assert_eq!(sel.ids().collect::<Vec<_>>(), vec![BuildingId(1), BuildingId(3)]);
}

#[test]
fn test_empty_marquee_without_modifier_clears() {
    let buildings = row();
    let mut sel = SelectionManager::new();
    sel.select(BuildingId(1), false);
    let hits = sel.marquee_resolve(
        &buildings,
        Point::new(500.0, 500.0),
        Point::new(600.0, 600.0),
        false,
    );
    assert_eq!(hits, 0);
    assert!(sel.is_empty());
}

#[test]
fn test_select_all_marks_topmost_primary() {
    let buildings = row();
    let mut sel = SelectionManager::new();
    sel.select_all(&buildings);
    assert_eq!(sel.len(), 3);
    assert_eq!(sel.primary(), Some(BuildingId(3)));
}

#[test]
fn test_retain_live_prunes_and_promotes() {
    let mut buildings = row();
    let mut sel = SelectionManager::new();
    sel.select_all(&buildings);

    buildings.pop();
    assert!(sel.retain_live(&buildings));
    assert_eq!(sel.len(), 2);
    assert_eq!(sel.primary(), Some(BuildingId(2)));
    assert!(!sel.retain_live(&buildings));
}
