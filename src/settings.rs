//! Tuning constants for the walkabout demo.
//!
//! Everything here is fixed at startup and never mutated; a [`Settings`]
//! value is built once and handed by reference to physics, geometry
//! generation, and the camera.

/// Immutable demo configuration.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Initial window size in logical pixels.
    pub window_size: (u32, u32),
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near_plane: f32,
    pub far_plane: f32,

    /// Walking speed in units per second.
    pub move_speed: f32,
    /// Look sensitivity in degrees per pixel of mouse motion.
    pub mouse_sensitivity: f32,

    /// Half-width of the ground grid in X/Z.
    pub grid_extent: f32,
    /// Y level of the ground plane.
    pub ground_y: f32,

    /// Half-width of the pyramid base; the obstacle footprint spans
    /// [-base_half, base_half] in both X and Z.
    pub base_half: f32,
    /// Pyramid apex height above the ground.
    pub obstacle_height: f32,

    /// Eye offset above the ground when standing.
    pub camera_height: f32,
    /// Initial vertical velocity of a jump, units per second.
    pub jump_speed: f32,
    /// Downward acceleration, units per second squared.
    pub gravity: f32,
    /// Minimum time between jumps, seconds.
    pub jump_interval: f32,
}

impl Settings {
    /// X/Z bounds of the obstacle footprint as (min, max).
    pub fn footprint(&self) -> (f32, f32) {
        (-self.base_half, self.base_half)
    }

    /// Y level the eye rests at when standing on the ground.
    pub fn floor_y(&self) -> f32 {
        self.ground_y + self.camera_height
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: (1200, 675),
            fov: 60.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            move_speed: 0.5,
            mouse_sensitivity: 0.2,
            grid_extent: 20.0,
            ground_y: -1.0,
            base_half: 1.0,
            obstacle_height: 2.0,
            camera_height: 0.05,
            jump_speed: 5.0,
            gravity: 15.0,
            jump_interval: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_sits_above_ground() {
        let settings = Settings::default();
        assert!(settings.floor_y() > settings.ground_y);
        assert_eq!(settings.floor_y(), -0.95);
    }

    #[test]
    fn test_footprint_is_symmetric() {
        let settings = Settings::default();
        let (min, max) = settings.footprint();
        assert_eq!(min, -max);
        assert_eq!(max, settings.base_half);
    }
}
