//! Floating-point RGB color.
//!
//! Channels are deliberately unconstrained: lighting sums several terms and
//! the outline passes subtract from shaded pixels, so intermediate values may
//! leave [0, 1] or go negative. Clamping happens once, at image
//! serialization, never mid-pipeline.

use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Clamps every channel into [0, 1]. Infinite channels collapse to an
    /// end of the range, which is what the outline passes rely on when they
    /// drive a pixel to negative infinity. NaN stays NaN and serializes as 0.
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Linear blend: `f = 0` gives `self`, `f = 1` gives `other`.
    pub fn mix(&self, other: Self, f: f32) -> Self {
        Self {
            r: self.r * (1.0 - f) + other.r * f,
            g: self.g * (1.0 - f) + other.g * f,
            b: self.b * (1.0 - f) + other.b * f,
        }
    }
}

/// Channel-wise addition.
impl Add<Color> for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

/// Channel-wise subtraction.
impl Sub<Color> for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Self::Output {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

/// Channel-wise modulation, used to filter one color through another.
impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        Self {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

/// Scalar scaling.
impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

/// Scalar scaling with the scalar on the left.
impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_survives_arithmetic() {
        let c = Color::new(0.8, 0.8, 0.8) + Color::new(0.5, -1.0, 0.0);
        assert_eq!(c, Color::new(1.3, -0.2, 0.8));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(
            Color::new(1.3, -0.2, 0.5).clamp(),
            Color::new(1.0, 0.0, 0.5)
        );
        let driven_dark = Color::new(f32::NEG_INFINITY, 0.5, f32::NAN).clamp();
        assert_eq!(driven_dark.r, 0.0);
        assert_eq!(driven_dark.g, 0.5);
    }

    #[test]
    fn test_modulation() {
        let filtered = Color::new(0.5, 1.0, 0.0) * Color::new(0.5, 0.25, 1.0);
        assert_eq!(filtered, Color::new(0.25, 0.25, 0.0));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color::new(1.0, 0.0, 0.0);
        let b = Color::new(0.0, 1.0, 0.0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Color::new(0.5, 0.5, 0.0));
    }
}
