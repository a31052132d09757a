//! Camera parameters (eye point and look-at target).

/// Camera placement, editable from the parameter panel
#[derive(Debug, Clone)]
pub struct CameraParams {
    /// Eye position (meters)
    pub eye: [f32; 3],

    /// Look-at target (meters)
    pub target: [f32; 3],

    /// Orbit step applied per key press (radians)
    pub orbit_step_rad: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            eye: [20.41, 30.3, 30.93],
            target: [2.41, 3.81, 5.68],
            orbit_step_rad: 0.05,
        }
    }
}
