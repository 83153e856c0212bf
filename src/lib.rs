// src/lib.rs
//! Gridwalk
//!
//! A minimal first-person walkabout demo built on wgpu and winit: mouse-look
//! camera, gravity and jumping over a flat ground grid, and one pyramid
//! obstacle.

pub mod app;
pub mod gfx;
pub mod input;
pub mod physics;
pub mod settings;

// Re-export main types for convenience
pub use app::WalkApp;
pub use physics::{Player, Stance};
pub use settings::Settings;

/// Creates a default Gridwalk application instance
pub fn default() -> anyhow::Result<WalkApp> {
    WalkApp::new()
}
