//! # Static Scene Geometry
//!
//! Generates the ground grid and the pyramid obstacle from [`Settings`].
//! Both are computed once at startup and uploaded to static vertex buffers;
//! nothing here changes between frames.

use crate::gfx::vertex::ColorVertex;
use crate::settings::Settings;

const GRID_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
const BASE_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// One color per pyramid side, keyed by base corner index.
const SIDE_COLORS: [[f32; 3]; 4] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
];

/// Generates grid line endpoints as a LineList vertex stream.
///
/// For each integer step i in [-extent, extent] there is one line parallel
/// to Z at x = i and one parallel to X at z = i, all at the ground level.
pub fn generate_grid(settings: &Settings) -> Vec<ColorVertex> {
    let extent = settings.grid_extent;
    let y = settings.ground_y;
    // One line per whole unit; a fractional extent rounds to the nearest.
    let steps = extent.round() as i32;

    let mut vertices = Vec::with_capacity(((2 * steps + 1) * 4) as usize);
    for i in -steps..=steps {
        let i = i as f32;
        vertices.push(ColorVertex::new([i, y, -extent], GRID_COLOR));
        vertices.push(ColorVertex::new([i, y, extent], GRID_COLOR));
        vertices.push(ColorVertex::new([-extent, y, i], GRID_COLOR));
        vertices.push(ColorVertex::new([extent, y, i], GRID_COLOR));
    }
    vertices
}

/// Generates the pyramid as a TriangleList vertex stream.
///
/// Four side triangles fan from the apex to consecutive base corners, each
/// side flat-colored by its corner index; the base quad is emitted as two
/// grey triangles.
pub fn generate_pyramid(settings: &Settings) -> Vec<ColorVertex> {
    let b = settings.base_half;
    let y = settings.ground_y;
    let apex = [0.0, y + settings.obstacle_height, 0.0];
    let corners = [[-b, y, -b], [b, y, -b], [b, y, b], [-b, y, b]];

    let mut vertices = Vec::with_capacity(18);
    for (idx, corner) in corners.iter().enumerate() {
        let color = SIDE_COLORS[idx];
        vertices.push(ColorVertex::new(apex, color));
        vertices.push(ColorVertex::new(*corner, color));
        vertices.push(ColorVertex::new(corners[(idx + 1) % 4], color));
    }

    // Base quad split along corners 0-2.
    for idx in [0, 1, 2, 0, 2, 3] {
        vertices.push(ColorVertex::new(corners[idx], BASE_COLOR));
    }
    vertices
}
