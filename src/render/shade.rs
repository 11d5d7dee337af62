//! The fragment shader: banded ambient + diffuse + specular lighting.
//!
//! Diffuse alignment is deliberately quantized to two flat bands, which is
//! what gives renders their cel-shaded look. The band constants are part of
//! the visual contract, not tuning knobs.

use crate::color::Color;
use crate::light::SunLight;
use crate::math::Vec3;
use crate::scene::Material;

/// Softens the lighting terminator: raw alignment is biased toward the light
/// before banding, so surfaces slightly past 90 degrees still catch light.
const ALIGNMENT_BIAS: f32 = 0.2;

/// Computes the color of one fragment.
///
/// `position` travels with the fragment for depth bookkeeping upstream but
/// does not influence shading (directional lights have no falloff). `eye` is
/// the view axis in the same space as `normal`. The result is intentionally
/// unclamped; serialization clamps once at the end.
pub fn light_fragment(
    position: Vec3,
    normal: Vec3,
    material: &Material,
    lights: &[SunLight],
    eye: Vec3,
) -> Color {
    let _ = position;

    // Ambient term, unconditionally.
    let mut color = material.ambient;

    for light in lights {
        let raw = (light.direction.dot(normal) + ALIGNMENT_BIAS) / (1.0 + ALIGNMENT_BIAS);
        if raw <= 0.0 {
            continue;
        }

        // Quantize to exactly two bands.
        let alignment = if raw < 0.6 { 0.4 } else { 0.8 };

        // Diffuse term.
        color = color + alignment * material.diffuse * light.color;

        // Specular: reflect the (banded) light alignment about the normal
        // and compare against the view axis.
        let reflection = (2.0 * alignment * normal - light.direction).normalize();
        let eye_alignment = -eye.dot(reflection);
        if eye_alignment > 0.0 {
            color =
                color + eye_alignment.powf(material.shininess) * material.specular * light.color;
        }
    }

    color
}
