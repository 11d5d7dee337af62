//! The visibility compositor: projects, culls, rasterizes, and depth-tests
//! every face of a mesh into per-pixel attribute buffers.

use crate::grid::Grid;
use crate::math::{Mat4, Vec3};
use crate::scene::{MaterialId, Mesh};

use super::raster::rasterize_triangle;
use super::CullMode;

/// Per-pixel depth, normal, and material buffers for one render target.
///
/// A cell is *uncovered* until some face wins it: depth holds positive
/// infinity, the normal is zero, and the material is `None`. Coverage is
/// tagged by the material option; the infinite depth is kept numeric (not
/// optional) because both the depth test and the discontinuity outline do
/// arithmetic against it.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentBuffers {
    pub depth: Grid<f32>,
    pub normal: Grid<Vec3>,
    pub material: Grid<Option<MaterialId>>,
}

impl FragmentBuffers {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            depth: Grid::new(width, height, f32::INFINITY),
            normal: Grid::new(width, height, Vec3::ZERO),
            material: Grid::new(width, height, None),
        }
    }

    pub fn width(&self) -> i32 {
        self.depth.width()
    }

    pub fn height(&self) -> i32 {
        self.depth.height()
    }

    /// Resets every cell to uncovered.
    pub fn clear(&mut self) {
        self.depth.fill(f32::INFINITY);
        self.normal.fill(Vec3::ZERO);
        self.material.fill(None);
    }
}

/// Renders `mesh` through `transform` into `buffers`.
///
/// Culling and shading happen in transformed space: `eye` is the fixed view
/// axis there (conventionally +Z). Vertex normals are flipped toward the eye
/// before interpolation, so shading is consistent regardless of how the mesh
/// winds its faces or authors its normals.
///
/// The depth test passes on `depth <= current`, so when two faces produce
/// the exact same depth the one processed later wins. Face order is mesh
/// order; callers relying on tie-breaking must preserve it.
pub fn render_core(
    mesh: &Mesh,
    transform: Mat4,
    buffers: &mut FragmentBuffers,
    eye: Vec3,
    cullmode: CullMode,
) {
    buffers.clear();

    for face in mesh.faces() {
        let [v1, v2, v3] = &face.vertices;

        let p1 = transform.transform_point(v1.position);
        let p2 = transform.transform_point(v2.position);
        let p3 = transform.transform_point(v3.position);

        // Signed orientation of the projected face against the view axis.
        let orientation = (p2 - p1).cross(p3 - p1).dot(eye);
        match cullmode {
            CullMode::Front if orientation > 0.0 => continue,
            CullMode::Back if orientation < 0.0 => continue,
            _ => {}
        }

        // Flip each vertex normal to face the eye.
        let oriented = |n: Vec3| {
            if eye.dot(transform.transform_vector(n)) < 0.0 {
                -n
            } else {
                n
            }
        };
        let n1 = oriented(v1.normal);
        let n2 = oriented(v2.normal);
        let n3 = oriented(v3.normal);

        for pixel in rasterize_triangle(p1.xy(), p2.xy(), p3.xy()) {
            let (x, y) = (pixel.x, pixel.y);
            if !buffers.depth.contains(x, y) {
                continue;
            }

            let a = pixel.affinity;
            let depth = p1.z * a.x + p2.z * a.y + p3.z * a.z;

            if depth <= *buffers.depth.at(x, y) {
                buffers.depth.set(x, y, depth);

                let normal = n1 * a.x + n2 * a.y + n3 * a.z;
                buffers
                    .normal
                    .set(x, y, transform.transform_vector(normal).normalize());

                buffers.material.set(x, y, Some(face.material));
            }
        }
    }
}
