//! Free-look camera. +Z is forward, +Y is up.

use super::math::*;
use super::types::*;

/// Camera pose as a position plus Euler angles in degrees. The angles are
/// not range-limited; the trigonometry wraps them naturally.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3f,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    /// Multiplier applied to every translation.
    pub speed: f32,
}

impl Camera {
    pub fn new(position: Vec3f) -> Camera {
        Camera {
            position,
            roll: 0.,
            pitch: 0.,
            yaw: 0.,
            speed: 1.,
        }
    }

    fn local_forward() -> Vec3f {
        Vec3f::new(0., 0., 1.)
    }

    fn local_right() -> Vec3f {
        Vec3f::new(-1., 0., 0.)
    }

    /// Pitch rotation (about X).
    pub fn rotation_x(&self) -> Mat4f {
        rotation_about_x(self.pitch)
    }

    /// Yaw rotation (about Y).
    pub fn rotation_y(&self) -> Mat4f {
        rotation_about_y(self.yaw)
    }

    /// Roll rotation (about Z). Only affects on-screen orientation, never
    /// movement.
    pub fn rotation_z(&self) -> Mat4f {
        rotation_about_z(self.roll)
    }

    /// Walks along the view direction. Roll is excluded: the projection
    /// treats roll as screen-space rotation only, so movement ignores it
    /// too.
    pub fn move_forward(&mut self, distance: f32) {
        let facing = rotate_direction(self.rotation_x() * self.rotation_y(), Self::local_forward());
        self.position = self.position + facing * self.speed * distance;
    }

    /// Strafes. Only yaw steers strafing, so looking up or down never
    /// tilts sideways motion out of the horizontal plane.
    pub fn move_right(&mut self, distance: f32) {
        let facing_right = rotate_direction(self.rotation_y(), Self::local_right());
        self.position = self.position + facing_right * self.speed * distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_motion_follows_yaw() {
        let mut camera = Camera::new(Vec3f::zero());
        camera.yaw = 90.;
        camera.move_forward(2.);
        // Local +Z rotated 90 degrees about Y lands on +X.
        assert_relative_eq!(camera.position.x, 2., epsilon = 1e-5);
        assert_relative_eq!(camera.position.y, 0., epsilon = 1e-5);
        assert_relative_eq!(camera.position.z, 0., epsilon = 1e-5);
    }

    #[test]
    fn forward_motion_follows_pitch() {
        let mut camera = Camera::new(Vec3f::zero());
        camera.pitch = 90.;
        camera.move_forward(1.);
        assert_relative_eq!(camera.position.x, 0., epsilon = 1e-5);
        assert_relative_eq!(camera.position.y, -1., epsilon = 1e-5);
        assert_relative_eq!(camera.position.z, 0., epsilon = 1e-5);
    }

    #[test]
    fn strafing_ignores_pitch() {
        let mut camera = Camera::new(Vec3f::zero());
        camera.pitch = 45.;
        camera.move_right(1.);
        assert_relative_eq!(camera.position.x, -1., epsilon = 1e-5);
        assert_relative_eq!(camera.position.y, 0., epsilon = 1e-5);
        assert_relative_eq!(camera.position.z, 0., epsilon = 1e-5);
    }

    #[test]
    fn speed_scales_translation() {
        let mut camera = Camera::new(Vec3f::zero());
        camera.speed = 2.;
        camera.move_forward(3.);
        assert_relative_eq!(camera.position.z, 6., epsilon = 1e-5);
    }
}
