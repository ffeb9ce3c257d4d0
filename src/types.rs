// Provides basic types.

use ultraviolet;

pub type Vec3f = ultraviolet::Vec3;
pub type Vec4f = ultraviolet::Vec4;
pub type Mat4f = ultraviolet::Mat4;

#[derive(Clone, Copy)]
pub struct Ray {
    pub origin: Vec3f,
    pub direction: Vec3f,
}

impl Ray {
    pub fn point_at(&self, t: f32) -> Vec3f {
        self.origin + (t * self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_walks_along_the_direction() {
        let r = Ray {
            origin: Vec3f::new(1., 0., 0.),
            direction: Vec3f::new(0., 2., 0.),
        };
        let p = r.point_at(1.5);
        assert_eq!((p.x, p.y, p.z), (1., 3., 0.));
    }
}
