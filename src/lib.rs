//! Recursive sphere ray tracer with a fixed-layout scene handoff for a
//! parallel per-pixel evaluator.
//!
//! The CPU path renders frames directly (`tracer::Tracer::render`); the
//! alternative path serializes the same scene into std140-style upload
//! buffers (`scene::Scene::serialize`) consumed by an external evaluator.
//! Both paths read identical scene state, so they agree numerically.

pub mod animation;
pub mod buffers;
pub mod camera;
pub mod color;
pub mod error;
pub mod light;
pub mod math;
pub mod scene;
pub mod scenes;
pub mod sphere;
pub mod tracer;
pub mod types;

pub use buffers::UploadBuffers;
pub use color::Color;
pub use error::SceneError;
pub use scene::Scene;
pub use tracer::{Frame, Tracer};
