//! Fixed-layout upload buffers for the parallel per-pixel evaluator.
//!
//! Both buffers follow the same shape: a 16-byte header whose first four
//! bytes are the little-endian entry count, then a packed array of 48-byte
//! records with std140-style 16-byte vector alignment. The evaluator
//! consumes these blocks verbatim, so any change to field order, width, or
//! padding here is a breaking compatibility change.

use super::color::*;
use super::error::*;
use super::light::*;
use super::sphere::*;
use super::types::*;
use bytemuck::{Pod, Zeroable};

/// Capacity of the sphere buffer, in records.
pub const MAX_SPHERES: usize = 100;
/// Capacity of the light buffer, in records.
pub const MAX_LIGHTS: usize = 100;

pub const SPHERE_BUFFER_SIZE: usize = std::mem::size_of::<SphereBlock>();
pub const LIGHT_BUFFER_SIZE: usize = std::mem::size_of::<LightBlock>();

pub const LIGHT_KIND_AMBIENT: i32 = 0;
pub const LIGHT_KIND_POINT: i32 = 1;
pub const LIGHT_KIND_DIRECTIONAL: i32 = 2;

fn vec4(v: Vec3f) -> [f32; 4] {
    [v.x, v.y, v.z, 1.]
}

const ZERO_VEC4: [f32; 4] = [0., 0., 0., 1.];

/// One serialized sphere: 48 bytes, 16-byte aligned fields first.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereRecord {
    pub center: [f32; 4],
    pub color: [f32; 4],
    pub radius: f32,
    pub specular: i32,
    pub reflective: f32,
    _pad: f32,
}

impl From<&Sphere> for SphereRecord {
    fn from(sphere: &Sphere) -> SphereRecord {
        SphereRecord {
            center: vec4(sphere.center),
            color: sphere.color.to_float(),
            radius: sphere.radius,
            specular: sphere.specular,
            reflective: sphere.reflective,
            _pad: 0.,
        }
    }
}

/// One serialized light: 48 bytes. Both vectors are always written; the
/// kind tag tells the evaluator which one is meaningful.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LightRecord {
    pub position: [f32; 4],
    pub direction: [f32; 4],
    pub kind: i32,
    pub intensity: f32,
    _pad: [f32; 2],
}

impl From<&Light> for LightRecord {
    fn from(light: &Light) -> LightRecord {
        let (kind, position, direction) = match *light {
            Light::Ambient { .. } => (LIGHT_KIND_AMBIENT, ZERO_VEC4, ZERO_VEC4),
            Light::Point { position, .. } => (LIGHT_KIND_POINT, vec4(position), ZERO_VEC4),
            Light::Directional { direction, .. } => {
                (LIGHT_KIND_DIRECTIONAL, ZERO_VEC4, vec4(direction))
            }
        };
        LightRecord {
            position,
            direction,
            kind,
            intensity: light.intensity(),
            _pad: [0.; 2],
        }
    }
}

/// Count header followed by the record array. The struct layout *is* the
/// wire layout; `as_bytes` hands out the block without copying.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct SphereBlock {
    count: i32,
    _pad: [i32; 3],
    records: [SphereRecord; MAX_SPHERES],
}

impl SphereBlock {
    pub fn write(&mut self, spheres: &[Sphere]) -> Result<(), SceneError> {
        if spheres.len() > MAX_SPHERES {
            return Err(SceneError::TooManySpheres {
                count: spheres.len(),
                capacity: MAX_SPHERES,
            });
        }
        self.count = spheres.len() as i32;
        for (record, sphere) in self.records.iter_mut().zip(spheres) {
            *record = SphereRecord::from(sphere);
        }
        Ok(())
    }

    pub fn records(&self) -> &[SphereRecord] {
        &self.records[..self.count as usize]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct LightBlock {
    count: i32,
    _pad: [i32; 3],
    records: [LightRecord; MAX_LIGHTS],
}

impl LightBlock {
    pub fn write(&mut self, lights: &[Light]) -> Result<(), SceneError> {
        if lights.len() > MAX_LIGHTS {
            return Err(SceneError::TooManyLights {
                count: lights.len(),
                capacity: MAX_LIGHTS,
            });
        }
        self.count = lights.len() as i32;
        for (record, light) in self.records.iter_mut().zip(lights) {
            *record = LightRecord::from(light);
        }
        Ok(())
    }

    pub fn records(&self) -> &[LightRecord] {
        &self.records[..self.count as usize]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// The pair of upload blocks for one rendering session. Owned by the
/// driver and passed to serialization explicitly; lifetime matches the
/// session, not the process.
pub struct UploadBuffers {
    pub spheres: SphereBlock,
    pub lights: LightBlock,
}

impl UploadBuffers {
    pub fn new() -> UploadBuffers {
        UploadBuffers {
            spheres: Zeroable::zeroed(),
            lights: Zeroable::zeroed(),
        }
    }
}

impl Default for UploadBuffers {
    fn default() -> UploadBuffers {
        UploadBuffers::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn record_and_block_sizes_match_the_wire_contract() {
        assert_eq!(size_of::<SphereRecord>(), 48);
        assert_eq!(size_of::<LightRecord>(), 48);
        assert_eq!(SPHERE_BUFFER_SIZE, 16 + MAX_SPHERES * 48);
        assert_eq!(LIGHT_BUFFER_SIZE, 16 + MAX_LIGHTS * 48);
    }

    #[test]
    fn count_header_is_little_endian_at_offset_zero() {
        let mut block: SphereBlock = Zeroable::zeroed();
        let spheres = vec![Sphere::new(Vec3f::zero(), 1., Color::WHITE); 3];
        block.write(&spheres).unwrap();
        assert_eq!(&block.as_bytes()[..4], &3i32.to_le_bytes());
        // Header padding stays zero.
        assert_eq!(&block.as_bytes()[4..16], &[0u8; 12]);
    }

    #[test]
    fn first_record_starts_at_byte_sixteen() {
        let mut block: SphereBlock = Zeroable::zeroed();
        let sphere = Sphere::new(Vec3f::new(1., 2., 3.), 4., Color::WHITE);
        block.write(&[sphere]).unwrap();
        let bytes = block.as_bytes();
        assert_eq!(&bytes[16..20], &1f32.to_le_bytes());
        assert_eq!(&bytes[20..24], &2f32.to_le_bytes());
        assert_eq!(&bytes[24..28], &3f32.to_le_bytes());
    }

    #[test]
    fn light_records_tag_their_kind() {
        let ambient = LightRecord::from(&Light::ambient(0.2));
        assert_eq!(ambient.kind, LIGHT_KIND_AMBIENT);
        assert_eq!(ambient.intensity, 0.2);
        assert_eq!(ambient.position, ZERO_VEC4);
        assert_eq!(ambient.direction, ZERO_VEC4);

        let point = LightRecord::from(&Light::point(0.6, Vec3f::new(2., 1., 0.)));
        assert_eq!(point.kind, LIGHT_KIND_POINT);
        assert_eq!(point.position, [2., 1., 0., 1.]);
        assert_eq!(point.direction, ZERO_VEC4);

        let directional = LightRecord::from(&Light::directional(0.4, Vec3f::new(1., 4., 4.)));
        assert_eq!(directional.kind, LIGHT_KIND_DIRECTIONAL);
        assert_eq!(directional.direction, [1., 4., 4., 1.]);
        assert_eq!(directional.position, ZERO_VEC4);
    }

    #[test]
    fn over_capacity_is_rejected_and_leaves_the_block_unchanged() {
        let mut block: LightBlock = Zeroable::zeroed();
        block.write(&[Light::ambient(1.)]).unwrap();
        let before = *block.as_bytes().first().unwrap();

        let too_many = vec![Light::ambient(0.1); MAX_LIGHTS + 1];
        let err = block.write(&too_many).unwrap_err();
        assert_eq!(
            err,
            SceneError::TooManyLights {
                count: MAX_LIGHTS + 1,
                capacity: MAX_LIGHTS,
            }
        );
        assert_eq!(*block.as_bytes().first().unwrap(), before);
    }
}
