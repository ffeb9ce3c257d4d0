//! Sphere primitive.

use super::color::*;
use super::types::*;

pub const DEFAULT_SPECULAR: i32 = 50;
pub const DEFAULT_REFLECTIVE: f32 = 0.3;

/// A sphere with its shading parameters. `specular` is the highlight
/// exponent, where -1 disables the specular term entirely. `reflective`
/// in [0, 1] is the fraction of the surface color replaced by a mirror
/// reflection. `radius` must be positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3f,
    pub radius: f32,
    pub color: Color,
    pub specular: i32,
    pub reflective: f32,
}

impl Sphere {
    pub fn new(center: Vec3f, radius: f32, color: Color) -> Sphere {
        Sphere {
            center,
            radius,
            color,
            specular: DEFAULT_SPECULAR,
            reflective: DEFAULT_REFLECTIVE,
        }
    }

    pub fn with_specular(mut self, specular: i32) -> Sphere {
        self.specular = specular;
        self
    }

    pub fn with_reflective(mut self, reflective: f32) -> Sphere {
        self.reflective = reflective;
        self
    }

    /// A matte sphere: no specular highlight, no reflection.
    pub fn matte(center: Vec3f, radius: f32, color: Color) -> Sphere {
        Sphere::new(center, radius, color)
            .with_specular(-1)
            .with_reflective(0.)
    }
}
