//! Rotation matrices and direction transforms.

use super::types::*;

/// Rotation about the X axis by `degrees`, right-handed, column-major.
pub fn rotation_about_x(degrees: f32) -> Mat4f {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Mat4f::new(
        Vec4f::new(1., 0., 0., 0.),
        Vec4f::new(0., cos, sin, 0.),
        Vec4f::new(0., -sin, cos, 0.),
        Vec4f::new(0., 0., 0., 1.),
    )
}

/// Rotation about the Y axis by `degrees`, right-handed, column-major.
pub fn rotation_about_y(degrees: f32) -> Mat4f {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Mat4f::new(
        Vec4f::new(cos, 0., -sin, 0.),
        Vec4f::new(0., 1., 0., 0.),
        Vec4f::new(sin, 0., cos, 0.),
        Vec4f::new(0., 0., 0., 1.),
    )
}

/// Rotation about the Z axis by `degrees`, right-handed, column-major.
pub fn rotation_about_z(degrees: f32) -> Mat4f {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Mat4f::new(
        Vec4f::new(cos, sin, 0., 0.),
        Vec4f::new(-sin, cos, 0., 0.),
        Vec4f::new(0., 0., 1., 0.),
        Vec4f::new(0., 0., 0., 1.),
    )
}

/// Rotates a direction vector. The homogeneous component is zero, so the
/// translation row of `m` never contributes.
pub fn rotate_direction(m: Mat4f, v: Vec3f) -> Vec3f {
    Vec3f::from(m * Vec4f::new(v.x, v.y, v.z, 0.))
}
