//! Image-space edge emphasis.
//!
//! Two independent post-processes darken edges after shading. Both look only
//! at the finished depth/normal/material buffers and the canvas; neither
//! touches mesh or light data. Each pixel examines its 4-connected
//! neighbors; out-of-bounds neighbors are skipped.

use crate::canvas::Canvas;
use crate::color::Color;

use super::core::FragmentBuffers;

const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Darkens pixels proportionally to unexpected depth jumps.
///
/// For each covered neighbor of a covered pixel, the pixel's own normal
/// predicts the depth one step away (`depth - dx*n.x/n.z - dy*n.y/n.z`). A
/// neighbor that is nearer than predicted contributes its surplus to a
/// darkening accumulator; an uncovered pixel next to covered geometry is
/// darkened fully. A zero normal z makes the prediction non-finite and also
/// saturates the accumulator, which is accepted rather than guarded.
pub fn outline_discontinuities(canvas: &mut Canvas, buffers: &FragmentBuffers) {
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let depth = *buffers.depth.at(x, y);

            let mut diff = 0.0f32;
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let Some(&neighbor_depth) = buffers.depth.get(x + dx, y + dy) else {
                    continue;
                };

                if depth.is_finite() && neighbor_depth.is_finite() {
                    let n = buffers.normal.at(x, y);
                    let expected = depth - dx as f32 * n.x / n.z - dy as f32 * n.y / n.z;
                    if expected > neighbor_depth {
                        diff += expected - neighbor_depth;
                    }
                } else if !depth.is_finite() && neighbor_depth.is_finite() {
                    diff = f32::INFINITY;
                }
            }

            let adjust = diff / 10.0;
            let c = *canvas.at(x, y);
            canvas.set(x, y, c - Color::new(adjust, adjust, adjust));
        }
    }
}

/// Blacks out pixels that border a *nearer* pixel of a different material.
///
/// Material comparison is by identity handle, so the uncovered sentinel also
/// differs from every real material: silhouettes get outlined against the
/// background as well. The first qualifying neighbor decides; the pass never
/// reads colors, so in-place modification is order-independent.
pub fn outline_material_bounds(canvas: &mut Canvas, buffers: &FragmentBuffers) {
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let material = buffers.material.at(x, y);
            let depth = *buffers.depth.at(x, y);

            let boundary = NEIGHBOR_OFFSETS.iter().any(|&(dx, dy)| {
                match buffers.material.get(x + dx, y + dy) {
                    Some(neighbor_material) => {
                        neighbor_material != material && depth > *buffers.depth.at(x + dx, y + dy)
                    }
                    None => false,
                }
            });

            if boundary {
                canvas.set(x, y, Color::BLACK);
            }
        }
    }
}
