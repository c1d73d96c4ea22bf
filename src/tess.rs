//! Polygon triangulation
//!
//! Ear clipping over a (possibly non-convex) simple polygon, producing a
//! flat list of triangle vertices, three per triangle. The rasterizer
//! consumes the output as a black box; any triangulator with the same
//! contract can stand in.

use crate::transform::Vector2D;

fn cross(o: Vector2D, a: Vector2D, b: Vector2D) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Twice the signed area of the polygon; positive for counter-clockwise
fn signed_area2(points: &[Vector2D]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum
}

/// Point-in-triangle test over a counter-clockwise triangle, boundary
/// inclusive so vertices sitting exactly on a candidate ear block it
fn point_in_triangle(p: Vector2D, a: Vector2D, b: Vector2D, c: Vector2D) -> bool {
    cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
}

/// Triangulate a simple polygon into a flat triangle-vertex list
///
/// Fewer than three vertices yield an empty list. Degenerate inputs (all
/// vertices collinear, self-intersections) terminate with whatever ears
/// could be clipped rather than looping forever.
pub fn triangulate(points: &[Vector2D]) -> Vec<Vector2D> {
    let n = points.len();
    let mut out = Vec::new();
    if n < 3 {
        return out;
    }

    // walk counter-clockwise regardless of input winding
    let mut idx: Vec<usize> = (0..n).collect();
    if signed_area2(points) < 0.0 {
        idx.reverse();
    }

    while idx.len() > 3 {
        let m = idx.len();
        let mut clipped = false;
        for i in 0..m {
            let a = points[idx[(i + m - 1) % m]];
            let b = points[idx[i]];
            let c = points[idx[(i + 1) % m]];
            if cross(a, b, c) <= 0.0 {
                // reflex or collinear corner, not an ear
                continue;
            }
            let blocked = (0..m).any(|j| {
                let d = (j + m - i) % m;
                d > 1 && d < m - 1 && point_in_triangle(points[idx[j]], a, b, c)
            });
            if blocked {
                continue;
            }
            out.push(a);
            out.push(b);
            out.push(c);
            idx.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            return out;
        }
    }
    out.push(points[idx[0]]);
    out.push(points[idx[1]]);
    out.push(points[idx[2]]);
    out
}
