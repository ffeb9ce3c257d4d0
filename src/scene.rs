//! Scene: the arena of spheres and lights plus a camera.

use super::buffers::*;
use super::camera::*;
use super::error::*;
use super::light::*;
use super::sphere::*;
use super::types::*;
use log::debug;

/// Owns every entity outright. Callers address entities by the index
/// returned from `add_*`; during a render pass the tracer only borrows
/// the scene read-only, so there is no shared ownership to manage.
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            spheres: vec![],
            lights: vec![],
            camera: Camera::new(Vec3f::zero()),
        }
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Removes the light at `index`, preserving the order of the rest.
    /// Later indices shift down by one.
    pub fn remove_light(&mut self, index: usize) -> Result<Light, SceneError> {
        if index >= self.lights.len() {
            return Err(SceneError::BadIndex {
                index,
                len: self.lights.len(),
            });
        }
        Ok(self.lights.remove(index))
    }

    /// Removes the sphere at `index`, preserving the order of the rest.
    pub fn remove_sphere(&mut self, index: usize) -> Result<Sphere, SceneError> {
        if index >= self.spheres.len() {
            return Err(SceneError::BadIndex {
                index,
                len: self.spheres.len(),
            });
        }
        Ok(self.spheres.remove(index))
    }

    /// Serializes the whole scene into `buffers` for the parallel
    /// evaluator. Fails without touching either block when an entity list
    /// exceeds its buffer capacity.
    pub fn serialize(&self, buffers: &mut UploadBuffers) -> Result<(), SceneError> {
        if self.spheres.len() > MAX_SPHERES {
            return Err(SceneError::TooManySpheres {
                count: self.spheres.len(),
                capacity: MAX_SPHERES,
            });
        }
        if self.lights.len() > MAX_LIGHTS {
            return Err(SceneError::TooManyLights {
                count: self.lights.len(),
                capacity: MAX_LIGHTS,
            });
        }
        buffers.spheres.write(&self.spheres)?;
        buffers.lights.write(&self.lights)?;
        debug!(
            "serialized {} spheres, {} lights",
            self.spheres.len(),
            self.lights.len()
        );
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Scene {
        Scene::new()
    }
}
