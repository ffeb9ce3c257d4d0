//! Error types.

use thiserror::Error;

/// Failures surfaced at scene mutation or serialization time. Rendering
/// itself cannot fail; malformed rays degrade to the background color.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene holds {count} spheres but the upload buffer fits {capacity}")]
    TooManySpheres { count: usize, capacity: usize },
    #[error("scene holds {count} lights but the upload buffer fits {capacity}")]
    TooManyLights { count: usize, capacity: usize },
    #[error("no entity at index {index} (len {len})")]
    BadIndex { index: usize, len: usize },
}
