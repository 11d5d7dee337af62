//! A stylized CPU software renderer.
//!
//! The pipeline takes a triangle mesh with per-vertex normals and materials,
//! a camera transform, and a set of directional lights, and produces a 2D
//! image: projection, scanline rasterization, depth-tested compositing,
//! majority-vote supersampling, banded (cel-style) lighting, and an
//! image-space outline pass. Everything runs on the CPU; the only output
//! surface is a TGA file.
//!
//! # Quick start
//!
//! ```ignore
//! use inkline::prelude::*;
//!
//! let mut mesh = Mesh::load_obj("model.obj")?;
//! let mut canvas = Canvas::new(512, 512, Color::new(0.5, 0.5, 0.5));
//! let lights = [SunLight::new(Vec3::new(1.0, -2.0, 0.0), Color::new(1.0, 1.0, 1.0))];
//! render(&mesh, Mat4::identity(), &lights, &mut canvas, CullMode::None);
//! ```

pub mod canvas;
pub mod color;
pub mod grid;
pub mod light;
pub mod math;
pub mod render;
pub mod scene;

// Re-export commonly needed types at crate root for convenience
pub use canvas::Canvas;
pub use color::Color;
pub use light::SunLight;
pub use render::{render, CullMode};
pub use scene::{LoadError, Mesh};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Color;
    pub use crate::grid::Grid;
    pub use crate::light::SunLight;
    pub use crate::math::{Mat4, Vec2, Vec3};
    pub use crate::render::{render, CullMode};
    pub use crate::scene::{Face, LoadError, Material, MaterialId, Mesh, Vertex};
}
