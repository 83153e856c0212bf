//! First-person camera derived from the player's position and look angles.

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

use crate::physics::Player;
use crate::settings::Settings;

/// Maps OpenGL clip-space depth [-1, 1] to wgpu's [0, 1].
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Immutable per-frame camera snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vector3<f32>,
    /// Degrees, positive turns right.
    pub yaw: f32,
    /// Degrees, clamped by physics to [-89, 89].
    pub pitch: f32,
    pub aspect: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Snapshots the camera from the current player state.
    pub fn from_player(player: &Player, settings: &Settings, aspect: f32) -> Self {
        Self {
            eye: player.position,
            yaw: player.yaw,
            pitch: player.pitch,
            aspect,
            fovy: Deg(settings.fov),
            znear: settings.near_plane,
            zfar: settings.far_plane,
        }
    }

    /// View matrix in fixed-function order: pitch about X, then yaw
    /// about Y, then translate by -eye.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_x(Deg(self.pitch))
            * Matrix4::from_angle_y(Deg(self.yaw))
            * Matrix4::from_translation(-self.eye)
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let proj = cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar);
        OPENGL_TO_WGPU_MATRIX * proj * self.view_matrix()
    }

    pub fn build_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_position: [self.eye.x, self.eye.y, self.eye.z, 1.0],
            view_proj: convert_matrix4_to_array(self.build_view_projection_matrix()),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    fn test_camera() -> Camera {
        Camera {
            eye: Vector3::new(0.0, 0.0, 5.0),
            yaw: 0.0,
            pitch: 0.0,
            aspect: 16.0 / 9.0,
            fovy: Deg(60.0),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn test_view_translates_eye_to_origin() {
        let camera = test_camera();
        let eye_h = Vector4::new(0.0, 0.0, 5.0, 1.0);
        let transformed = camera.view_matrix() * eye_h;
        assert!(transformed.x.abs() < 1e-5);
        assert!(transformed.y.abs() < 1e-5);
        assert!(transformed.z.abs() < 1e-5);
    }

    #[test]
    fn test_point_ahead_lands_in_front_of_clip_plane() {
        // At yaw 0 the camera looks down -Z; the pyramid apex at the origin
        // should project inside the frustum with positive w.
        let camera = test_camera();
        let clip = camera.build_view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.w > 0.0);
        assert!(clip.x.abs() <= clip.w);
        assert!(clip.y.abs() <= clip.w);
    }

    #[test]
    fn test_yaw_turns_view() {
        let mut camera = test_camera();
        camera.eye = Vector3::new(0.0, 0.0, 0.0);
        camera.yaw = 90.0;
        // After a 90 degree right turn the view faces +X, matching the
        // physics forward basis (sin yaw, 0, -cos yaw). A point at +X
        // should sit ahead (negative view-space z).
        let view = camera.view_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!(view.z < 0.0);
        assert!(view.x.abs() < 1e-5);
    }

    #[test]
    fn test_uniform_carries_eye_position() {
        let camera = test_camera();
        let uniform = camera.build_uniform();
        assert_eq!(uniform.view_position, [0.0, 0.0, 5.0, 1.0]);
    }

    #[test]
    fn test_matrix_conversion_roundtrip() {
        let m = Matrix4::identity();
        let arr = convert_matrix4_to_array(m);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(arr[i][j], if i == j { 1.0 } else { 0.0 });
            }
        }
    }
}
