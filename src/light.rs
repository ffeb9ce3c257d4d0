//! Light sources.

use super::types::*;

/// A light source. Each kind carries only the fields that mean something
/// for it; the serializer fills in the rest (see `buffers`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient { intensity: f32 },
    Point { intensity: f32, position: Vec3f },
    Directional { intensity: f32, direction: Vec3f },
}

impl Light {
    pub fn ambient(intensity: f32) -> Light {
        Light::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Vec3f) -> Light {
        Light::Point {
            intensity,
            position,
        }
    }

    /// `direction` need not be normalized; the lighting math divides by
    /// its length.
    pub fn directional(intensity: f32, direction: Vec3f) -> Light {
        Light::Directional {
            intensity,
            direction,
        }
    }

    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_is_kind_independent() {
        assert_eq!(Light::ambient(0.2).intensity(), 0.2);
        assert_eq!(Light::point(0.6, Vec3f::zero()).intensity(), 0.6);
        assert_eq!(
            Light::directional(0.4, Vec3f::new(0., -1., 0.)).intensity(),
            0.4
        );
    }
}
