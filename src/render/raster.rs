//! Scanline triangle coverage.
//!
//! Converts one projected triangle into the set of integer pixels it covers,
//! each tagged with an affinity triple: barycentric-style weights toward the
//! triangle's three vertices, summing to 1.
//!
//! Both vertex coordinates and per-scanline edge intersections are rounded to
//! the nearest integer, keeping the rasterization grid-aligned. For small
//! triangles that rounding can push an emitted pixel outside the true
//! triangle, where the raw cross-product ratios leave [0, 1] by a wide
//! margin; the clamp-and-redistribute step below pulls them back so
//! interpolated attributes never extrapolate.

use std::mem;

use crate::math::{Vec2, Vec3};

/// One pixel covered by a triangle, with its per-vertex affinities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoveredPixel {
    pub x: i32,
    pub y: i32,
    /// Weights toward vertex 1/2/3, each in [0, 1], summing to 1.
    pub affinity: Vec3,
}

/// Rasterizes the triangle `(p1, p2, p3)` given in pixel-space coordinates.
///
/// Coincident vertices (exact coordinate equality) produce no coverage:
/// such triangles have no interior and would break the edge walk.
pub fn rasterize_triangle(p1: Vec2, p2: Vec2, p3: Vec2) -> Vec<CoveredPixel> {
    let mut pixels = Vec::new();

    if p1 == p2 || p2 == p3 || p1 == p3 {
        return pixels;
    }

    // Sort the vertices by y (three compare-swaps).
    let (mut s1, mut s2, mut s3) = (p1, p2, p3);
    if s1.y > s2.y {
        mem::swap(&mut s1, &mut s2);
    }
    if s2.y > s3.y {
        mem::swap(&mut s2, &mut s3);
    }
    if s1.y > s2.y {
        mem::swap(&mut s1, &mut s2);
    }

    let min_y = s1.y.round() as i32;
    let max_y = s3.y.round() as i32;

    // Per-scanline horizontal extent, indexed by y - min_y.
    let rows = (max_y - min_y + 1) as usize;
    let mut mins = vec![f32::INFINITY; rows];
    let mut maxes = vec![f32::NEG_INFINITY; rows];

    // Walk each edge, recording its rounded x at every scanline it crosses.
    for (a, b) in [(s1, s2), (s2, s3), (s1, s3)] {
        let ay = a.y.round() as i32;
        let by = b.y.round() as i32;
        // Horizontal edges contribute nothing and have no defined slope.
        if ay == by {
            continue;
        }

        let slope = (b.x.round() - a.x.round()) / (by - ay) as f32;

        for y in ay..=by {
            let x = a.x.round() + slope * (y - ay) as f32;
            let row = (y - min_y) as usize;
            if x < mins[row] {
                mins[row] = x;
            }
            if x > maxes[row] {
                maxes[row] = x;
            }
        }
    }

    // Affinity denominators use the *unsorted* vertices so the weights line
    // up with the caller's vertex order.
    let denom2 = (p2 - p1).cross(p3 - p1);
    let denom3 = (p3 - p1).cross(p2 - p1);

    for y in min_y..=max_y {
        let row = (y - min_y) as usize;
        // An untouched row leaves an inverted (empty) x range.
        let x_first = mins[row].round() as i32;
        let x_last = maxes[row].round() as i32;

        for x in x_first..=x_last {
            let p = Vec2::new(x as f32, y as f32);

            let mut a2 = (p - p1).cross(p3 - p1) / denom2;
            let mut a3 = (p - p1).cross(p2 - p1) / denom3;

            // Rounding can land the pixel outside the triangle; clamp the
            // raw ratios, derive the third weight, and redistribute any
            // deficit so the triple still sums to 1.
            a2 = a2.clamp(0.0, 1.0);
            a3 = a3.clamp(0.0, 1.0);

            let mut a1 = 1.0 - a2 - a3;
            if a1 < 0.0 {
                a2 += a1 / 2.0;
                a3 += a1 / 2.0;
                a1 = 0.0;
            }

            pixels.push(CoveredPixel {
                x,
                y,
                affinity: Vec3::new(a1, a2, a3),
            });
        }
    }

    pixels
}
