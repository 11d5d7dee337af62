//! 4x4 transformation matrix using column-vector convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * v`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! Points and directions transform differently: [`Mat4::transform_point`]
//! extends with w = 1 and performs the homogeneous divide, while
//! [`Mat4::transform_vector`] extends with w = 0, so translation never
//! applies to directions.

use std::ops::Mul;

use super::vec3::Vec3;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation lives in the last column (column-vector convention).
    pub fn translation(t: Vec3) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, t.x],
            [0.0, 1.0, 0.0, t.y],
            [0.0, 0.0, 1.0, t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a non-uniform scale matrix.
    pub fn scaling(s: Vec3) -> Self {
        Mat4::new([
            [s.x, 0.0, 0.0, 0.0],
            [0.0, s.y, 0.0, 0.0],
            [0.0, 0.0, s.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation of `angle` radians around an arbitrary `axis`.
    ///
    /// The axis must be a unit vector.
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        let Vec3 { x, y, z } = axis;
        let c = angle.cos();
        let s = angle.sin();
        let c2 = 1.0 - c;
        Mat4::new([
            [x * x * c2 + c, x * y * c2 - z * s, x * z * c2 + y * s, 0.0],
            [x * y * c2 + z * s, y * y * c2 + c, y * z * c2 - x * s, 0.0],
            [x * z * c2 - y * s, y * z * c2 + x * s, z * z * c2 + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut data = [[0.0f32; 4]; 4];
        for (r, row) in data.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.data[c][r];
            }
        }
        Mat4 { data }
    }

    /// Transforms a point: w is taken as 1 and the result is divided by the
    /// transformed w (homogeneous divide).
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.data;
        let x = m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3];
        let y = m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3];
        let z = m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3];
        let w = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];
        Vec3::new(x / w, y / w, z / w)
    }

    /// Transforms a direction: w is taken as 0, so translation does not
    /// apply and no divide happens.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_identity_is_noop() {
        let p = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(Mat4::identity().transform_point(p), p);
        assert_eq!(Mat4::identity().transform_vector(p), p);
    }

    #[test]
    fn test_translation_moves_points_not_vectors() {
        let m = Mat4::translation(Vec3::new(5.0, 0.0, -1.0));
        assert_eq!(
            m.transform_point(Vec3::ZERO),
            Vec3::new(5.0, 0.0, -1.0)
        );
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_scaling() {
        let m = Mat4::scaling(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(
            m.transform_point(Vec3::ONE),
            Vec3::new(2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_rotation_quarter_turn_about_y() {
        let m = Mat4::rotation(FRAC_PI_2, Vec3::Y);
        // +X rotates toward -Z for a right-handed quarter turn about +Y.
        assert_vec3_eq(m.transform_vector(Vec3::X), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_composition_applies_right_to_left() {
        let scale = Mat4::scaling(Vec3::splat(2.0));
        let translate = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));

        // translate * scale: scale first, then translate.
        let m = translate * scale;
        assert_vec3_eq(m.transform_point(Vec3::X), Vec3::new(3.0, 0.0, 0.0));

        // scale * translate: translate first, then scale.
        let m = scale * translate;
        assert_vec3_eq(m.transform_point(Vec3::X), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_transpose() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let t = m.transpose();
        assert_eq!(t.get(3, 0), 1.0);
        assert_eq!(t.get(3, 1), 2.0);
        assert_eq!(t.get(3, 2), 3.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_homogeneous_divide() {
        // A matrix whose bottom row produces w = 2 for every point.
        let m = Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
        ]);
        assert_vec3_eq(
            m.transform_point(Vec3::new(2.0, 4.0, 6.0)),
            Vec3::new(1.0, 2.0, 3.0),
        );
    }
}
