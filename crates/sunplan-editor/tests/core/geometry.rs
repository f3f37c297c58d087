use proptest::prelude::*;
use sunplan_core::{Building, BuildingId, Point};
use sunplan_editor::geometry::*;

fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ]
}

#[test]
fn test_point_in_polygon_interior_and_far_outside() {
    let poly = square(0.0, 0.0, 100.0);
    assert!(point_in_polygon(&Point::new(50.0, 50.0), &poly));
    assert!(!point_in_polygon(&Point::new(500.0, -300.0), &poly));
}

#[test]
fn test_point_in_polygon_concave() {
    // L-shape with the notch at the top right
    let poly = vec![
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(50.0, 50.0),
        Point::new(100.0, 50.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ];
    assert!(point_in_polygon(&Point::new(25.0, 25.0), &poly));
    assert!(point_in_polygon(&Point::new(75.0, 75.0), &poly));
    assert!(!point_in_polygon(&Point::new(75.0, 25.0), &poly));
}

#[test]
fn test_point_in_polygon_needs_three_vertices() {
    let line = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    assert!(!point_in_polygon(&Point::new(5.0, 5.0), &line));
    assert!(!point_in_polygon(&Point::new(0.0, 0.0), &[]));
}

#[test]
fn test_snap_to_grid() {
    let snapped = snap_to_grid(Point::new(13.0, 27.0), 10.0, true);
    assert_eq!(snapped, Point::new(10.0, 30.0));

    let untouched = snap_to_grid(Point::new(13.0, 27.0), 10.0, false);
    assert_eq!(untouched, Point::new(13.0, 27.0));

    let zero_pitch = snap_to_grid(Point::new(13.0, 27.0), 0.0, true);
    assert_eq!(zero_pitch, Point::new(13.0, 27.0));
}

#[test]
fn test_constrain_to_orthogonal() {
    let anchor = Point::new(10.0, 10.0);
    // Mostly horizontal: y is pinned
    assert_eq!(
        constrain_to_orthogonal(Point::new(50.0, 14.0), anchor, true),
        Point::new(50.0, 10.0)
    );
    // Mostly vertical: x is pinned
    assert_eq!(
        constrain_to_orthogonal(Point::new(12.0, -40.0), anchor, true),
        Point::new(10.0, -40.0)
    );
    assert_eq!(
        constrain_to_orthogonal(Point::new(12.0, -40.0), anchor, false),
        Point::new(12.0, -40.0)
    );
}

#[test]
fn test_rectangle_footprint_winding() {
    let fp = create_rectangle_footprint(Point::new(10.0, 20.0), Point::new(40.0, 60.0), false);
    assert_eq!(
        fp,
        vec![
            Point::new(10.0, 20.0),
            Point::new(40.0, 20.0),
            Point::new(40.0, 60.0),
            Point::new(10.0, 60.0),
        ]
    );
}

#[test]
fn test_rectangle_square_mode_keeps_drag_direction() {
    let fp = create_rectangle_footprint(Point::new(100.0, 100.0), Point::new(70.0, 140.0), true);
    let b = bounds(&fp).unwrap();
    assert_eq!(b.width(), 40.0);
    assert_eq!(b.height(), 40.0);
    // Dragged left and down: the far corner is at (60, 140)
    assert_eq!(fp[2], Point::new(60.0, 140.0));
}

#[test]
fn test_centroid_and_bounds() {
    let fp = square(10.0, 20.0, 30.0);
    assert_eq!(centroid(&fp), Some(Point::new(25.0, 35.0)));

    let b = bounds(&fp).unwrap();
    assert_eq!(b, Bounds::new(10.0, 20.0, 40.0, 50.0));
    assert_eq!(b.center(), Point::new(25.0, 35.0));
    assert!(b.contains(&Point::new(40.0, 50.0)));
    assert!(!b.contains(&Point::new(40.1, 50.0)));
}

#[test]
fn test_bounds_union() {
    let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
    let b = Bounds::new(5.0, -5.0, 20.0, 8.0);
    assert_eq!(a.union(&b), Bounds::new(0.0, -5.0, 20.0, 10.0));
}

#[test]
fn test_polygon_area_is_absolute() {
    let mut fp = square(0.0, 0.0, 10.0);
    assert_eq!(polygon_area(&fp), 100.0);
    fp.reverse();
    assert_eq!(polygon_area(&fp), 100.0);
}

#[test]
fn test_marquee_counts_vertices_only() {
    let fp = square(0.0, 0.0, 100.0);
    // Marquee corners given in reverse order still normalise
    assert!(building_intersects_marquee(&fp, Point::new(110.0, 110.0), Point::new(90.0, 90.0)));
    // Edge-inclusive
    assert!(building_intersects_marquee(&fp, Point::new(100.0, 100.0), Point::new(120.0, 120.0)));
    // A marquee entirely inside the footprint touches no vertex
    assert!(!building_intersects_marquee(&fp, Point::new(40.0, 40.0), Point::new(60.0, 60.0)));
}

#[test]
fn test_topmost_building_wins() {
    let lower = Building::new(BuildingId(1), "Lower", square(0.0, 0.0, 100.0), "#000000");
    let upper = Building::new(BuildingId(2), "Upper", square(50.0, 50.0, 100.0), "#ffffff");
    let buildings = vec![lower, upper];

    assert_eq!(topmost_building_at(&buildings, &Point::new(75.0, 75.0)), Some(BuildingId(2)));
    assert_eq!(topmost_building_at(&buildings, &Point::new(25.0, 25.0)), Some(BuildingId(1)));
    assert_eq!(topmost_building_at(&buildings, &Point::new(500.0, 500.0)), None);
}

proptest! {
    #[test]
    fn prop_snap_lands_on_grid(x in -1e4f64..1e4, y in -1e4f64..1e4, pitch in 1.0f64..100.0) {
        let p = snap_to_grid(Point::new(x, y), pitch, true);
        prop_assert!((p.x - x).abs() <= pitch / 2.0 + 1e-9);
        prop_assert!((p.y - y).abs() <= pitch / 2.0 + 1e-9);
        let k = p.x / pitch;
        prop_assert!((k - k.round()).abs() < 1e-6);
    }

    #[test]
    fn prop_square_centre_is_inside(x in -1e3f64..1e3, y in -1e3f64..1e3, size in 1.0f64..500.0) {
        let fp = square(x, y, size);
        let c = centroid(&fp).unwrap();
        prop_assert!(point_in_polygon(&c, &fp));
        let outside = Point::new(x - 1.0, y - 1.0);
        prop_assert!(!point_in_polygon(&outside, &fp));
    }

    #[test]
    fn prop_translation_preserves_area(dx in -1e3f64..1e3, dy in -1e3f64..1e3) {
        let fp = square(3.0, 4.0, 25.0);
        let moved = translate_footprint(&fp, dx, dy);
        prop_assert!((polygon_area(&moved) - polygon_area(&fp)).abs() < 1e-6);
    }
}
