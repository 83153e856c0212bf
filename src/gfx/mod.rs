//! Rendering: camera math, static geometry, and the wgpu render engine.

pub mod camera;
pub mod geometry;
pub mod render_engine;
pub mod vertex;

pub use camera::{Camera, CameraUniform};
pub use render_engine::RenderEngine;
pub use vertex::ColorVertex;
