//! The rendering pipeline: rasterization, visibility, supersampling,
//! shading, and outline post-processing.
//!
//! [`render`] wires the stages together for one view; the stages are public
//! so callers can compose variants (for example swapping the
//! material-boundary outline for the depth-discontinuity one).

pub mod core;
pub mod outline;
pub mod raster;
pub mod shade;
pub mod supersample;

pub use self::core::{render_core, FragmentBuffers};
pub use outline::{outline_discontinuities, outline_material_bounds};
pub use raster::{rasterize_triangle, CoveredPixel};
pub use shade::light_fragment;
pub use supersample::supersample;

use crate::canvas::Canvas;
use crate::light::SunLight;
use crate::math::{Mat4, Vec3};
use crate::scene::Mesh;

/// The fixed view direction in transformed space. Culling and shading both
/// happen post-transform, where the camera looks along +Z.
pub const EYE: Vec3 = Vec3::Z;

/// Supersampling factor used by the default pipeline.
pub const SUPERSAMPLE_FACTOR: i32 = 3;

/// Which triangle orientations to discard before rasterization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CullMode {
    Front,
    Back,
    #[default]
    None,
}

/// Renders one view of `mesh` into `canvas`.
///
/// The canvas is the caller's output region: fresh fragment buffers are
/// allocated at its resolution, filled by the supersampler, shaded per
/// covered pixel, and finished with the material-boundary outline pass.
/// Uncovered pixels keep whatever color the canvas already held.
///
/// Calls are independent: nothing persists between renders, so disjoint
/// regions of a larger image can be rendered separately and composed with
/// [`Canvas::blit`].
pub fn render(
    mesh: &Mesh,
    transform: Mat4,
    lights: &[SunLight],
    canvas: &mut Canvas,
    cullmode: CullMode,
) {
    let mut buffers = FragmentBuffers::new(canvas.width(), canvas.height());

    supersample(
        mesh,
        transform,
        &mut buffers,
        SUPERSAMPLE_FACTOR,
        EYE,
        cullmode,
    );

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if let Some(id) = *buffers.material.at(x, y) {
                let color = light_fragment(
                    Vec3::new(x as f32, y as f32, *buffers.depth.at(x, y)),
                    *buffers.normal.at(x, y),
                    mesh.material(id),
                    lights,
                    EYE,
                );
                canvas.set(x, y, color);
            }
        }
    }

    outline_material_bounds(canvas, &buffers);
}
