//! Directional ("sun") lights.

use crate::color::Color;
use crate::math::Vec3;

/// A directional light: parallel rays from infinitely far away.
///
/// `direction` points from the surface *toward* the light, so a surface
/// whose normal aligns with it is fully lit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunLight {
    pub direction: Vec3,
    pub color: Color,
}

impl SunLight {
    /// Creates a light toward `direction`, normalizing it.
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self {
            direction: direction.normalize(),
            color,
        }
    }
}
