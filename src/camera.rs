//! Camera system: fixed eye/target view with keyboard-driven orbit.

use glam::{Mat4, Quat, Vec3};

use crate::params::{CameraParams, RenderConfig};

/// Camera looking at a fixed target, orbitable around it
pub struct CameraSystem {
    params: CameraParams,
    home: CameraParams,
}

impl CameraSystem {
    pub fn new(params: CameraParams) -> Self {
        let home = params.clone();
        Self { params, home }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.params.eye)
    }

    pub fn target(&self) -> Vec3 {
        Vec3::from_array(self.params.target)
    }

    /// Rotate the eye around the target by yaw (about world Y) and pitch
    /// (about the camera's right axis). Pitch stops short of the poles so
    /// the look-at basis stays well-defined.
    pub fn orbit(&mut self, yaw_rad: f32, pitch_rad: f32) {
        let target = self.target();
        let mut offset = self.eye() - target;

        offset = Quat::from_rotation_y(yaw_rad) * offset;

        let right = offset.cross(Vec3::Y);
        if right.length_squared() > 1e-6 {
            let pitched = Quat::from_axis_angle(right.normalize(), pitch_rad) * offset;
            if pitched.normalize().dot(Vec3::Y).abs() < 0.99 {
                offset = pitched;
            }
        }

        self.params.eye = (target + offset).to_array();
    }

    /// Step size for one orbit key press.
    pub fn orbit_step(&self) -> f32 {
        self.params.orbit_step_rad
    }

    /// Restore the initial eye/target.
    pub fn reset(&mut self) {
        self.params = self.home.clone();
    }

    /// Build the view-projection matrix for the current frame.
    pub fn create_view_proj_matrix(&self, render_config: &RenderConfig) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target(), Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane_m,
            render_config.far_plane_m,
        );

        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_proj_matrix_is_finite_and_nontrivial() {
        let camera = CameraSystem::new(CameraParams::default());
        let view_proj = camera.create_view_proj_matrix(&RenderConfig::default());

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(view_proj.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_orbit_preserves_distance_to_target() {
        let mut camera = CameraSystem::new(CameraParams::default());
        let distance = (camera.eye() - camera.target()).length();

        for _ in 0..50 {
            camera.orbit(0.1, 0.05);
        }

        let after = (camera.eye() - camera.target()).length();
        assert!((distance - after).abs() < 1e-3);
    }

    #[test]
    fn test_orbit_never_reaches_pole() {
        let mut camera = CameraSystem::new(CameraParams::default());
        for _ in 0..500 {
            camera.orbit(0.0, 0.1);
        }
        let dir = (camera.eye() - camera.target()).normalize();
        assert!(dir.dot(Vec3::Y).abs() < 0.999);
    }

    #[test]
    fn test_reset_restores_home_position() {
        let mut camera = CameraSystem::new(CameraParams::default());
        let home_eye = camera.eye();

        camera.orbit(1.0, 0.3);
        assert_ne!(camera.eye(), home_eye);

        camera.reset();
        assert_eq!(camera.eye(), home_eye);
    }
}
