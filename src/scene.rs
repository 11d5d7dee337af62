//! Scene data: materials, vertices, triangular faces, and OBJ/MTL loading.
//!
//! Faces copy their three vertices by value, so no vertex storage is shared
//! between faces. Materials live in a per-mesh table and faces reference them
//! through [`MaterialId`] handles; handle equality is *identity*, which is
//! what the material-boundary outline pass compares. Two materials with equal
//! numeric fields but different ids are still different materials.

use std::io::BufRead;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::color::Color;
use crate::math::{Vec2, Vec3};

const LOAD_OPTIONS: tobj::LoadOptions = tobj::LoadOptions {
    single_index: false,
    triangulate: true,
    ignore_points: true,
    ignore_lines: true,
};

/// A fatal scene-loading fault. No partial mesh is ever produced: any
/// malformed line or unopenable material library aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load model: {0}")]
    Obj(#[from] tobj::LoadError),
}

/// Surface reflectance description.
///
/// Components are meaningfully in [0, 1] but unconstrained; the shininess
/// exponent controls specular falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl Default for Material {
    /// The material bound to faces that never saw a `usemtl`.
    fn default() -> Self {
        Self {
            ambient: Color::new(0.3, 0.0, 0.0),
            diffuse: Color::new(0.5, 0.5, 1.0),
            specular: Color::new(1.0, 1.0, 1.0),
            shininess: 30.0,
        }
    }
}

/// Identity handle for a material in a [`Mesh`]'s table.
///
/// Comparing two ids compares *which* material, not its numeric contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialId(usize);

/// One corner of a face. Texture coordinates are parsed and carried but not
/// consumed by the shading model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub texcoord: Vec2,
}

impl Vertex {
    pub const fn new(position: Vec3, normal: Vec3, texcoord: Vec2) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }
}

/// A triangle: three owned vertices plus the material they render with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub vertices: [Vertex; 3],
    pub material: MaterialId,
}

/// An ordered collection of faces and the material table they reference.
///
/// Face order is significant: the visibility compositor resolves exact depth
/// ties in favor of the later face.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    faces: Vec<Face>,
    materials: Vec<Material>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    /// Appends a material and returns its identity handle.
    pub fn push_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Appends a face referencing an already-pushed material.
    pub fn push_face(&mut self, vertices: [Vertex; 3], material: MaterialId) {
        assert!(material.0 < self.materials.len(), "unknown material id");
        self.faces.push(Face { vertices, material });
    }

    /// Loads an OBJ file; `mtllib` references resolve relative to the OBJ's
    /// directory. Faces with more than three vertices are triangulated.
    pub fn load_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let (models, materials) = tobj::load_obj(path.as_ref(), &LOAD_OPTIONS)?;
        Ok(Self::from_tobj(&models, &materials?))
    }

    /// Loads OBJ text from a reader; `material_loader` is invoked for every
    /// `mtllib` statement. This is the in-memory entry point used by tests.
    pub fn read_obj<R: BufRead>(
        reader: &mut R,
        material_loader: impl Fn(&Path) -> tobj::MTLLoadResult,
    ) -> Result<Self, LoadError> {
        let (models, materials) = tobj::load_obj_buf(reader, &LOAD_OPTIONS, material_loader)?;
        Ok(Self::from_tobj(&models, &materials?))
    }

    fn from_tobj(models: &[tobj::Model], mtls: &[tobj::Material]) -> Self {
        let mut mesh = Mesh {
            faces: Vec::new(),
            materials: mtls.iter().map(convert_material).collect(),
        };

        // Faces without a usemtl all share one fallback material, appended
        // lazily so meshes with full material coverage don't carry it.
        let mut fallback = None;

        for model in models {
            let m = &model.mesh;
            let material = match m.material_id {
                Some(ix) => MaterialId(ix),
                None => *fallback.get_or_insert_with(|| {
                    mesh.materials.push(Material::default());
                    MaterialId(mesh.materials.len() - 1)
                }),
            };

            let vertex = |i: usize| {
                let p = m.indices[i] as usize;
                let position = Vec3::new(
                    m.positions[3 * p],
                    m.positions[3 * p + 1],
                    m.positions[3 * p + 2],
                );
                let normal = if m.normal_indices.is_empty() {
                    Vec3::ZERO
                } else {
                    let n = m.normal_indices[i] as usize;
                    Vec3::new(m.normals[3 * n], m.normals[3 * n + 1], m.normals[3 * n + 2])
                };
                let texcoord = if m.texcoord_indices.is_empty() {
                    Vec2::ZERO
                } else {
                    let t = m.texcoord_indices[i] as usize;
                    Vec2::new(m.texcoords[2 * t], m.texcoords[2 * t + 1])
                };
                Vertex::new(position, normal, texcoord)
            };

            for tri in 0..m.indices.len() / 3 {
                mesh.faces.push(Face {
                    vertices: [vertex(3 * tri), vertex(3 * tri + 1), vertex(3 * tri + 2)],
                    material,
                });
            }
            debug!(
                "model '{}': {} triangles, material {:?}",
                model.name,
                m.indices.len() / 3,
                m.material_id
            );
        }

        mesh
    }

    /// Replaces every vertex normal with its face's geometric normal, for
    /// models authored without `vn` data. Orientation does not matter: the
    /// compositor flips normals toward the eye anyway.
    pub fn autocompute_normals(&mut self) {
        for face in &mut self.faces {
            let [v0, v1, v2] = &mut face.vertices;
            let normal = (v1.position - v0.position)
                .cross(v2.position - v0.position)
                .normalize();
            v0.normal = normal;
            v1.normal = normal;
            v2.normal = normal;
        }
    }
}

/// Maps a parsed MTL material onto ours, with the loader's defaults for
/// missing fields: gray ambient/diffuse, black specular, shininess 100.
fn convert_material(m: &tobj::Material) -> Material {
    let color = |c: Option<[f32; 3]>, default: Color| {
        c.map_or(default, |[r, g, b]| Color::new(r, g, b))
    };
    let gray = Color::new(0.5, 0.5, 0.5);
    Material {
        ambient: color(m.ambient, gray),
        diffuse: color(m.diffuse, gray),
        specular: color(m.specular, Color::BLACK),
        shininess: m.shininess.unwrap_or(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    const OBJ: &str = "\
mtllib scene.mtl
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 1.0 1.0 0.0
vn 0.0 0.0 1.0
usemtl shell
f 1//1 2//1 3//1
usemtl core
f 2//1 4//1 3//1
";

    const MTL: &str = "\
newmtl shell
Ka 0.1 0.2 0.3
Kd 0.4 0.5 0.6
Ks 0.7 0.8 0.9
Ns 25
newmtl core
Kd 1.0 0.0 0.0
";

    fn load_two_material_mesh() -> Mesh {
        Mesh::read_obj(&mut Cursor::new(OBJ), |_| {
            tobj::load_mtl_buf(&mut Cursor::new(MTL))
        })
        .unwrap()
    }

    #[test]
    fn test_load_resolves_materials() {
        let mesh = load_two_material_mesh();
        assert_eq!(mesh.faces().len(), 2);

        let first = mesh.material(mesh.faces()[0].material);
        assert_eq!(first.ambient, Color::new(0.1, 0.2, 0.3));
        assert_eq!(first.diffuse, Color::new(0.4, 0.5, 0.6));
        assert_eq!(first.specular, Color::new(0.7, 0.8, 0.9));
        assert_relative_eq!(first.shininess, 25.0);

        // Identity, not value, distinguishes the two faces' materials.
        assert_ne!(mesh.faces()[0].material, mesh.faces()[1].material);
    }

    #[test]
    fn test_mtl_defaults_fill_missing_fields() {
        let mesh = load_two_material_mesh();
        let core = mesh.material(mesh.faces()[1].material);
        assert_eq!(core.diffuse, Color::new(1.0, 0.0, 0.0));
        assert_eq!(core.ambient, Color::new(0.5, 0.5, 0.5));
        assert_eq!(core.specular, Color::BLACK);
        assert_relative_eq!(core.shininess, 100.0);
    }

    #[test]
    fn test_vertices_carry_normals() {
        let mesh = load_two_material_mesh();
        for face in mesh.faces() {
            for v in &face.vertices {
                assert_eq!(v.normal, Vec3::Z);
            }
        }
    }

    #[test]
    fn test_faces_without_usemtl_bind_fallback() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = Mesh::read_obj(&mut Cursor::new(obj), |_| {
            tobj::load_mtl_buf(&mut Cursor::new(""))
        })
        .unwrap();
        assert_eq!(mesh.faces().len(), 1);
        let mat = mesh.material(mesh.faces()[0].material);
        assert_eq!(mat.ambient, Color::new(0.3, 0.0, 0.0));
        assert_relative_eq!(mat.shininess, 30.0);
    }

    #[test]
    fn test_malformed_obj_aborts_whole_load() {
        let obj = "v 0.0 oops 0.0\nf 1 1 1\n";
        let result = Mesh::read_obj(&mut Cursor::new(obj), |_| {
            tobj::load_mtl_buf(&mut Cursor::new(""))
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_quads_triangulate() {
        let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = Mesh::read_obj(&mut Cursor::new(obj), |_| {
            tobj::load_mtl_buf(&mut Cursor::new(""))
        })
        .unwrap();
        assert_eq!(mesh.faces().len(), 2);
    }

    #[test]
    fn test_autocompute_normals() {
        let mut mesh = Mesh::new();
        let id = mesh.push_material(Material::default());
        let v = |x, y| Vertex::new(Vec3::new(x, y, 0.0), Vec3::ZERO, Vec2::ZERO);
        mesh.push_face([v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)], id);

        mesh.autocompute_normals();
        for vertex in &mesh.faces()[0].vertices {
            assert_relative_eq!(vertex.normal.magnitude(), 1.0);
            assert_eq!(vertex.normal, Vec3::Z);
        }
    }
}
