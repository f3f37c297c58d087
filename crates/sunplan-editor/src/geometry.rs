//! Geometry kernel for building footprints.
//!
//! Pure functions over world-space points: hit-testing, snapping, the
//! orthogonal constraint, rectangle synthesis, bounds, and the marquee
//! test. None of these touch editor state.

use sunplan_core::data::shoelace_area;
use sunplan_core::{Building, BuildingId, Point};

/// Axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Normalised rectangle spanned by two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// True when `other` lies entirely inside this box.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

/// Ray-casting parity test. Polygons with fewer than three vertices contain nothing.
pub fn point_in_polygon(point: &Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (&polygon[i], &polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Rounds a single coordinate to the nearest multiple of `pitch`.
pub fn snap_value(value: f64, pitch: f64) -> f64 {
    if pitch > 0.0 && pitch.is_finite() {
        (value / pitch).round() * pitch
    } else {
        value
    }
}

/// Rounds both axes to the nearest multiple of `pitch` when enabled.
pub fn snap_to_grid(point: Point, pitch: f64, enabled: bool) -> Point {
    if !enabled {
        return point;
    }
    Point::new(snap_value(point.x, pitch), snap_value(point.y, pitch))
}

/// Forces the segment `anchor → point` to be horizontal or vertical.
///
/// The axis with the smaller absolute delta takes the anchor's value.
pub fn constrain_to_orthogonal(point: Point, anchor: Point, enabled: bool) -> Point {
    if !enabled {
        return point;
    }
    let dx = (point.x - anchor.x).abs();
    let dy = (point.y - anchor.y).abs();
    if dx < dy {
        Point::new(anchor.x, point.y)
    } else {
        Point::new(point.x, anchor.y)
    }
}

/// Four axis-aligned corners starting at `c1`.
///
/// In square mode both sides take the larger magnitude of the drag, each
/// keeping the sign of its own axis.
pub fn create_rectangle_footprint(c1: Point, c2: Point, square: bool) -> Vec<Point> {
    let mut dx = c2.x - c1.x;
    let mut dy = c2.y - c1.y;
    if square {
        let side = dx.abs().max(dy.abs());
        dx = side.copysign(dx);
        dy = side.copysign(dy);
    }
    let far = Point::new(c1.x + dx, c1.y + dy);
    vec![
        c1,
        Point::new(far.x, c1.y),
        far,
        Point::new(c1.x, far.y),
    ]
}

/// Arithmetic mean of the vertices.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Per-axis min/max of the vertices.
pub fn bounds(points: &[Point]) -> Option<Bounds> {
    let first = points.first()?;
    let start = Bounds::new(first.x, first.y, first.x, first.y);
    Some(points.iter().skip(1).fold(start, |b, p| {
        Bounds::new(
            b.min_x.min(p.x),
            b.min_y.min(p.y),
            b.max_x.max(p.x),
            b.max_y.max(p.y),
        )
    }))
}

/// Combined bounds of several buildings.
pub fn bounds_of<'a>(buildings: impl IntoIterator<Item = &'a Building>) -> Option<Bounds> {
    buildings
        .into_iter()
        .filter_map(|b| bounds(&b.footprint))
        .reduce(|acc, b| acc.union(&b))
}

/// Absolute polygon area.
pub fn polygon_area(points: &[Point]) -> f64 {
    shoelace_area(points)
}

pub fn translate_footprint(points: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    points.iter().map(|p| p.offset(dx, dy)).collect()
}

/// Index of the vertex closest to `point`, if it lies within `radius`.
pub fn nearest_vertex(footprint: &[Point], point: &Point, radius: f64) -> Option<usize> {
    footprint
        .iter()
        .enumerate()
        .map(|(i, v)| (i, v.distance_to(point)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// True iff at least one vertex lies inside the marquee spanned by `a` and `b`.
///
/// This is a vertex-containment test: a footprint that encloses a small
/// marquee without any vertex inside it is not reported.
pub fn building_intersects_marquee(footprint: &[Point], a: Point, b: Point) -> bool {
    let rect = Bounds::from_corners(a, b);
    footprint.iter().any(|p| rect.contains(p))
}

/// Topmost building whose polygon contains `point` (last in z-order wins).
pub fn topmost_building_at(buildings: &[Building], point: &Point) -> Option<BuildingId> {
    buildings
        .iter()
        .rev()
        .find(|b| point_in_polygon(point, &b.footprint))
        .map(|b| b.id)
}
