//! Player movement and jump physics.
//!
//! The player is a single point of state threaded through the frame loop:
//! position, look angles, vertical velocity, and a two-state stance machine
//! (grounded or airborne). Horizontal movement is blocked only by the one
//! static pyramid footprint; the ground check only applies within the grid
//! extent, so walking off the edge means falling forever.

use cgmath::Vector3;

use crate::input::FrameInput;
use crate::settings::Settings;

/// Whether the player is standing on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Grounded,
    Airborne,
}

/// Mutable per-frame player state.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Eye position in world space.
    pub position: Vector3<f32>,
    /// Horizontal look angle in degrees.
    pub yaw: f32,
    /// Vertical look angle in degrees, clamped to [-89, 89].
    pub pitch: f32,
    /// Vertical velocity in units per second; negative is downward.
    pub vertical_vel: f32,
    pub stance: Stance,
    /// Seconds until the next jump is allowed.
    pub jump_timer: f32,
}

impl Player {
    /// Spawns the player a few units back from the pyramid, facing it.
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 5.0),
            yaw: 0.0,
            pitch: 0.0,
            vertical_vel: 0.0,
            stance: Stance::Grounded,
            jump_timer: 0.0,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.stance == Stance::Grounded
    }

    /// Integrates one frame of look, gravity, collision, and movement.
    pub fn update(&mut self, dt: f32, input: &FrameInput, settings: &Settings) {
        self.apply_look(input.look_delta, settings);

        // Jump cooldown counts down regardless of stance.
        self.jump_timer = (self.jump_timer - dt).max(0.0);

        // Gravity and vertical integration.
        self.vertical_vel -= settings.gravity * dt;
        self.position.y += self.vertical_vel * dt;

        // Ground collision, but only while over the grid. Off the edge the
        // floor check never fires and the fall is unbounded.
        let over_grid = self.position.x.abs() <= settings.grid_extent
            && self.position.z.abs() <= settings.grid_extent;
        if over_grid {
            if self.position.y <= settings.floor_y() {
                self.position.y = settings.floor_y();
                self.vertical_vel = 0.0;
                self.stance = Stance::Grounded;
            }
        } else {
            self.stance = Stance::Airborne;
        }

        // Horizontal movement along the yaw basis vectors. Forward/back and
        // strafe resolve as two independent move attempts.
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let forward = Vector3::new(sin_yaw, 0.0, -cos_yaw);
        let right = Vector3::new(cos_yaw, 0.0, sin_yaw);

        if input.forward || input.back {
            let sign = if input.forward { 1.0 } else { -1.0 };
            self.try_move(forward * sign, dt, settings);
        }
        if input.right || input.left {
            let sign = if input.right { 1.0 } else { -1.0 };
            self.try_move(right * sign, dt, settings);
        }

        // Jump last, so the post-update state observes the exact launch
        // velocity and a full cooldown.
        if input.jump_requested && self.stance == Stance::Grounded && self.jump_timer == 0.0 {
            self.vertical_vel = settings.jump_speed;
            self.stance = Stance::Airborne;
            self.jump_timer = settings.jump_interval;
        }
    }

    fn apply_look(&mut self, delta: (f32, f32), settings: &Settings) {
        self.yaw += delta.0 * settings.mouse_sensitivity;
        self.pitch += delta.1 * settings.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-89.0, 89.0);
    }

    /// Commits a horizontal move unless the candidate position lands
    /// strictly inside the obstacle footprint. A rejected candidate leaves
    /// both axes of this attempt unchanged.
    fn try_move(&mut self, dir: Vector3<f32>, dt: f32, settings: &Settings) {
        let nx = self.position.x + dir.x * settings.move_speed * dt;
        let nz = self.position.z + dir.z * settings.move_speed * dt;

        let (min, max) = settings.footprint();
        let inside_footprint = min < nx && nx < max && min < nz && nz < max;
        if !inside_footprint {
            self.position.x = nx;
            self.position.z = nz;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn settings() -> Settings {
        Settings::default()
    }

    fn grounded_player(settings: &Settings) -> Player {
        let mut player = Player::new();
        player.position.y = settings.floor_y();
        player
    }

    fn jump_input() -> FrameInput {
        FrameInput {
            jump_requested: true,
            ..FrameInput::default()
        }
    }

    #[test]
    fn test_pitch_clamped_under_extreme_look() {
        let settings = settings();
        let mut player = Player::new();
        for _ in 0..100 {
            player.update(
                DT,
                &FrameInput {
                    look_delta: (37.0, 500.0),
                    ..FrameInput::default()
                },
                &settings,
            );
        }
        assert_eq!(player.pitch, 89.0);

        for _ in 0..200 {
            player.update(
                DT,
                &FrameInput {
                    look_delta: (-11.0, -500.0),
                    ..FrameInput::default()
                },
                &settings,
            );
        }
        assert_eq!(player.pitch, -89.0);
    }

    #[test]
    fn test_falls_to_floor_and_lands() {
        let settings = settings();
        let mut player = Player::new();
        player.position.y = 0.5;
        player.stance = Stance::Airborne;

        for _ in 0..600 {
            player.update(DT, &FrameInput::default(), &settings);
        }
        assert!(player.on_ground());
        assert_eq!(player.stance, Stance::Grounded);
        assert_eq!(player.vertical_vel, 0.0);
        assert_eq!(player.position.y, settings.floor_y());
    }

    #[test]
    fn test_jump_from_rest() {
        let settings = settings();
        let mut player = grounded_player(&settings);

        player.update(DT, &jump_input(), &settings);
        assert!(!player.on_ground());
        assert_eq!(player.stance, Stance::Airborne);
        assert_eq!(player.vertical_vel, settings.jump_speed);
        assert_eq!(player.jump_timer, settings.jump_interval);

        // Next frame integrates upward.
        let y_before = player.position.y;
        player.update(DT, &FrameInput::default(), &settings);
        assert!(player.position.y > y_before);
    }

    #[test]
    fn test_jump_scenario_constants() {
        // dt = 1/60, gravity = 15, grounded with velocity 0, jump pressed.
        let settings = settings();
        assert_eq!(settings.gravity, 15.0);
        let mut player = grounded_player(&settings);
        player.update(DT, &jump_input(), &settings);
        assert_eq!(player.vertical_vel, 5.0);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let settings = settings();
        let mut player = Player::new();
        player.position.y = 10.0;
        player.stance = Stance::Airborne;
        let vel_before = player.vertical_vel;

        player.update(DT, &jump_input(), &settings);
        assert!(player.vertical_vel < vel_before);
        assert_ne!(player.vertical_vel, settings.jump_speed);
    }

    #[test]
    fn test_no_jump_during_cooldown() {
        let settings = settings();
        let mut player = grounded_player(&settings);

        player.update(DT, &jump_input(), &settings);
        assert_eq!(player.stance, Stance::Airborne);

        // Land again well within the cooldown window.
        player.position.y = settings.floor_y();
        player.vertical_vel = 0.0;
        player.update(DT, &FrameInput::default(), &settings);
        assert_eq!(player.stance, Stance::Grounded);
        assert!(player.jump_timer > 0.0);

        let timer_before = player.jump_timer;
        player.update(DT, &jump_input(), &settings);
        assert_eq!(player.stance, Stance::Grounded);
        assert!(player.jump_timer < timer_before);
    }

    #[test]
    fn test_cooldown_expires_and_allows_jump() {
        let settings = settings();
        let mut player = grounded_player(&settings);
        player.jump_timer = settings.jump_interval;

        // Run the cooldown out while grounded.
        for _ in 0..60 {
            player.update(DT, &FrameInput::default(), &settings);
        }
        assert_eq!(player.jump_timer, 0.0);

        player.update(DT, &jump_input(), &settings);
        assert_eq!(player.stance, Stance::Airborne);
    }

    #[test]
    fn test_move_into_footprint_rejected() {
        let settings = settings();
        let mut player = grounded_player(&settings);
        // Just outside the footprint boundary, facing the pyramid at -Z.
        player.position.x = 0.0;
        player.position.z = settings.base_half + 0.001;

        let before = player.position;
        player.update(
            DT,
            &FrameInput {
                forward: true,
                ..FrameInput::default()
            },
            &settings,
        );
        // The candidate lands strictly inside the footprint and is rejected.
        assert_eq!(player.position.x, before.x);
        assert_eq!(player.position.z, before.z);
    }

    #[test]
    fn test_move_in_open_ground_commits() {
        let settings = settings();
        let mut player = grounded_player(&settings);
        player.position.z = 5.0;

        player.update(
            DT,
            &FrameInput {
                forward: true,
                ..FrameInput::default()
            },
            &settings,
        );
        // Facing -Z at yaw 0, forward motion decreases z.
        assert!(player.position.z < 5.0);
        assert_eq!(player.position.z, 5.0 - settings.move_speed * DT);
    }

    #[test]
    fn test_strafe_uses_right_basis() {
        let settings = settings();
        let mut player = grounded_player(&settings);
        player.position.z = 5.0;

        player.update(
            DT,
            &FrameInput {
                right: true,
                ..FrameInput::default()
            },
            &settings,
        );
        assert!(player.position.x > 0.0);
        assert_eq!(player.position.z, 5.0);
    }

    #[test]
    fn test_off_the_edge_falls_forever() {
        let settings = settings();
        let mut player = Player::new();
        player.position.x = settings.grid_extent + 5.0;
        player.position.y = settings.ground_y;
        player.stance = Stance::Grounded;

        let mut last_vel = player.vertical_vel;
        for _ in 0..120 {
            player.update(DT, &FrameInput::default(), &settings);
            assert!(player.vertical_vel < last_vel);
            assert_eq!(player.stance, Stance::Airborne);
            last_vel = player.vertical_vel;
        }
    }

    #[test]
    fn test_landing_within_extent_grounds() {
        let settings = settings();
        let mut player = Player::new();
        player.position.y = settings.floor_y() - 0.5;
        player.vertical_vel = -3.0;
        player.stance = Stance::Airborne;

        player.update(DT, &FrameInput::default(), &settings);
        assert_eq!(player.stance, Stance::Grounded);
        assert_eq!(player.vertical_vel, 0.0);
        assert_eq!(player.position.y, settings.floor_y());
    }
}
