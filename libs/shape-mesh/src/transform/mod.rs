//! Transform helpers for presenting a generated mesh.
//!
//! The sample scene tilts the model towards the camera and swings it back
//! and forth about its Z axis. [`PingPongRotation`] drives the swing angle
//! from frame times, and [`model_view_projection`] turns that angle into the
//! matrix a vertex shader multiplies positions by.

pub use config::constants::ViewConfig;

use config::constants::{
    ROTATION_FALL_SPEED, ROTATION_MAX_DEGREES, ROTATION_MIN_DEGREES,
    ROTATION_RISE_SPEED, ROTATION_START_DEGREES,
};
use glam::{Mat4, Vec3};

use crate::error::{MeshError, MeshResult};

/// Swing angle that rises to an upper bound, then falls to a lower bound,
/// and repeats.
///
/// The angle rises faster than it falls. Reaching a bound clamps the angle
/// to it and reverses direction on the same step.
///
/// # Examples
/// ```
/// use shape_mesh::transform::PingPongRotation;
///
/// let mut rotation = PingPongRotation::default();
/// assert_eq!(rotation.angle(), -45.0);
/// assert_eq!(rotation.advance(0.5), 5.0);
/// assert_eq!(rotation.advance(10.0), 75.0);
/// assert!(!rotation.is_rising());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingPongRotation {
    angle: f32,
    rising: bool,
    min: f32,
    max: f32,
    rise_speed: f32,
    fall_speed: f32,
}

impl Default for PingPongRotation {
    fn default() -> Self {
        Self {
            angle: ROTATION_START_DEGREES,
            rising: true,
            min: ROTATION_MIN_DEGREES,
            max: ROTATION_MAX_DEGREES,
            rise_speed: ROTATION_RISE_SPEED,
            fall_speed: ROTATION_FALL_SPEED,
        }
    }
}

impl PingPongRotation {
    /// Current angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }

    /// Advances the swing by `delta_seconds` and returns the new angle.
    pub fn advance(&mut self, delta_seconds: f32) -> f32 {
        if self.rising {
            self.angle += delta_seconds * self.rise_speed;
            if self.angle >= self.max {
                self.angle = self.max;
                self.rising = false;
            }
        } else {
            self.angle -= delta_seconds * self.fall_speed;
            if self.angle <= self.min {
                self.angle = self.min;
                self.rising = true;
            }
        }
        self.angle
    }
}

/// Width over height of a viewport.
///
/// # Examples
/// ```
/// use shape_mesh::transform::aspect_ratio;
///
/// assert_eq!(aspect_ratio(320, 240).unwrap(), 4.0 / 3.0);
/// assert!(aspect_ratio(320, 0).is_err());
/// ```
pub fn aspect_ratio(width: u32, height: u32) -> MeshResult<f32> {
    if width == 0 || height == 0 {
        return Err(MeshError::InvalidViewport { width, height });
    }
    Ok(width as f32 / height as f32)
}

/// Builds the model-view-projection matrix for a swing angle.
///
/// The model is rotated by `angle_degrees` about Z, tilted by the view's
/// tilt about X, pushed `camera_distance` away along -Z and projected with a
/// right-handed OpenGL-style perspective.
///
/// # Examples
/// ```
/// use config::constants::ViewConfig;
/// use glam::Vec3;
/// use shape_mesh::transform::model_view_projection;
///
/// let mvp = model_view_projection(0.0, 1.0, &ViewConfig::default());
/// let centre = mvp.project_point3(Vec3::ZERO);
/// assert!(centre.x.abs() < 1e-6 && centre.y.abs() < 1e-6);
/// ```
pub fn model_view_projection(angle_degrees: f32, aspect: f32, view: &ViewConfig) -> Mat4 {
    let projection = Mat4::perspective_rh_gl(
        view.fov_y_degrees.to_radians(),
        aspect,
        view.near,
        view.far,
    );
    let model_view = Mat4::from_translation(Vec3::new(0.0, 0.0, -view.camera_distance))
        * Mat4::from_rotation_x(view.tilt_degrees.to_radians())
        * Mat4::from_rotation_z(angle_degrees.to_radians());
    projection * model_view
}
