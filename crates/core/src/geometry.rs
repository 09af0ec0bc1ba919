//! Planar geometry over integer grid coordinates.
//!
//! The fire perimeter is maintained as a convex polygon whose vertices
//! are grid cells, built with a Graham scan and queried with an even-odd
//! crossing test. All orientation and containment predicates are exact
//! `i64` arithmetic; floating point only enters the polar-angle sort
//! comparator.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Integer point in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    /// Column coordinate
    pub x: i64,
    /// Row coordinate
    pub y: i64,
}

impl GridPoint {
    /// Construct a point.
    pub fn new(x: i64, y: i64) -> Self {
        GridPoint { x, y }
    }
}

/// Cross product of `(b - a) × (c - a)`.
///
/// Positive when the triple turns counter-clockwise, negative when it
/// turns clockwise, zero when collinear.
pub fn cross(a: GridPoint, b: GridPoint, c: GridPoint) -> i64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Polar angle of `p` as seen from `anchor`, in radians.
fn polar_angle(anchor: GridPoint, p: GridPoint) -> f64 {
    let y_span = p.y - anchor.y;
    let x_span = p.x - anchor.x;
    (y_span as f64).atan2(x_span as f64)
}

/// Squared Euclidean distance from `anchor` to `p`.
fn squared_distance(anchor: GridPoint, p: GridPoint) -> i64 {
    let y_span = p.y - anchor.y;
    let x_span = p.x - anchor.x;
    x_span * x_span + y_span * y_span
}

/// Convex hull of a point set (Graham scan).
///
/// The hull is returned in counter-clockwise order starting at the
/// anchor: the point with the lowest y, ties broken by lowest x.
/// Collinear boundary points are kept. Degenerate inputs come back
/// as-is: the empty set yields an empty hull, a single distinct point
/// yields itself, two distinct points yield the segment endpoints.
pub fn convex_hull(points: &[GridPoint]) -> Vec<GridPoint> {
    let mut distinct = points.to_vec();
    distinct.sort_unstable_by_key(|p| (p.y, p.x));
    distinct.dedup();
    if distinct.len() <= 2 {
        return distinct;
    }

    let anchor = distinct[0];
    let mut sorted = distinct.split_off(1);
    sorted.sort_by(|&a, &b| {
        polar_angle(anchor, a)
            .total_cmp(&polar_angle(anchor, b))
            .then_with(|| squared_distance(anchor, a).cmp(&squared_distance(anchor, b)))
    });

    // The anchor and the point with the smallest polar angle are always
    // on the hull.
    let mut hull = vec![anchor, sorted[0]];
    for &s in &sorted[1..] {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], s) < 0 {
            hull.pop(); // backtrack over right turns
        }
        hull.push(s);
    }
    hull
}

/// Closed polygon supporting containment queries.
///
/// Built from a vertex list; the closing edge from the last vertex back
/// to the first is implicit. Points on the boundary count as contained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<GridPoint>,
}

impl Polygon {
    /// Close a vertex loop into a polygon.
    pub fn new(vertices: Vec<GridPoint>) -> Self {
        Polygon { vertices }
    }

    /// Polygon vertices in order.
    pub fn vertices(&self) -> &[GridPoint] {
        &self.vertices
    }

    /// Even-odd containment test; boundary points are inside.
    pub fn contains(&self, p: GridPoint) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        if self.on_boundary(p) {
            return true;
        }

        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y) {
                // Exact form of p.x < vj.x + (p.y - vj.y)(vi.x - vj.x)/(vi.y - vj.y),
                // cross-multiplied to avoid division.
                let dy = vi.y - vj.y;
                let lhs = (p.x - vj.x) * dy;
                let rhs = (p.y - vj.y) * (vi.x - vj.x);
                let crossed = match dy.cmp(&0) {
                    Ordering::Greater => lhs < rhs,
                    Ordering::Less => lhs > rhs,
                    Ordering::Equal => false,
                };
                if crossed {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    fn on_boundary(&self, p: GridPoint) -> bool {
        let n = self.vertices.len();
        (0..n).any(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            cross(a, b, p) == 0
                && p.x >= a.x.min(b.x)
                && p.x <= a.x.max(b.x)
                && p.y >= a.y.min(b.y)
                && p.y <= a.y.max(b.y)
        })
    }
}
