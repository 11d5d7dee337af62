//! Supersampled antialiasing with majority-vote resampling.
//!
//! Instead of rendering several jittered samples, the compositor runs once at
//! `ssf` times the target resolution (the transform is pre-scaled uniformly,
//! so depth values scale along with x and y) and each output pixel is
//! resolved from its `ssf x ssf` block of sub-pixels:
//!
//! - the material with the most sub-pixels wins (first seen in scan order on
//!   a tie), keeping attribute buffers categorical instead of blending
//!   unrelated surfaces together;
//! - depth is averaged over the winning sub-pixels only, with the extra
//!   `1/ssf` factor undoing the transform pre-scale;
//! - normals of the winning sub-pixels are vector-summed and renormalized.
//!
//! Pixels whose winning material is "uncovered" stay uncovered.

use crate::math::{Mat4, Vec3};
use crate::scene::Mesh;

use super::core::{render_core, FragmentBuffers};
use super::CullMode;

/// Renders `mesh` into `buffers` with `ssf`-times supersampling.
///
/// With `ssf == 1` this reduces to a plain [`render_core`] pass (modulo a
/// renormalization of already-unit normals).
pub fn supersample(
    mesh: &Mesh,
    transform: Mat4,
    buffers: &mut FragmentBuffers,
    ssf: i32,
    eye: Vec3,
    cullmode: CullMode,
) {
    let width = buffers.width();
    let height = buffers.height();

    let mut sub = FragmentBuffers::new(width * ssf, height * ssf);
    let scaled = Mat4::scaling(Vec3::splat(ssf as f32)) * transform;
    render_core(mesh, scaled, &mut sub, eye, cullmode);

    buffers.clear();

    for y in 0..height {
        for x in 0..width {
            // Majority vote over the sub-pixel block. Strict `>` means the
            // first candidate in scan order keeps a tied count.
            let mut winner = None;
            let mut best_count = 0;
            for xo in 0..ssf {
                for yo in 0..ssf {
                    let candidate = *sub.material.at(x * ssf + xo, y * ssf + yo);
                    let mut count = 0;
                    for xo2 in 0..ssf {
                        for yo2 in 0..ssf {
                            if candidate == *sub.material.at(x * ssf + xo2, y * ssf + yo2) {
                                count += 1;
                            }
                        }
                    }
                    if count > best_count {
                        winner = candidate;
                        best_count = count;
                    }
                }
            }
            buffers.material.set(x, y, winner);

            if winner.is_none() {
                continue;
            }

            let mut depth = 0.0;
            let mut normal = Vec3::ZERO;
            for xo in 0..ssf {
                for yo in 0..ssf {
                    if *sub.material.at(x * ssf + xo, y * ssf + yo) == winner {
                        // Divide by ssf here: the pre-scaled transform grew
                        // depths by the same factor.
                        depth += *sub.depth.at(x * ssf + xo, y * ssf + yo) / ssf as f32;
                        normal = normal + *sub.normal.at(x * ssf + xo, y * ssf + yo);
                    }
                }
            }
            buffers.depth.set(x, y, depth / best_count as f32);
            buffers.normal.set(x, y, normal.normalize());
        }
    }
}
