//! # Configuration Constants
//!
//! Centralized constants for the shape generators. Tessellation limits,
//! fixed shape topology, precision values and view defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sphere**: Slice count defaults and limits
//! - **Fixed Shapes**: Vertex/index counts of the cube and arrow
//! - **View**: Camera and animation defaults for the transform helpers

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for single-precision comparisons on generated geometry.
///
/// Positions and normals are produced in `f32`, so comparisons against
/// analytic values (unit length, distance to the sphere centre) are done
/// relative to this value.
///
/// # Example
///
/// ```rust
/// use config::constants::F32_TOLERANCE;
///
/// let length: f32 = 1.0 + 1.0e-7;
/// assert!((length - 1.0).abs() < F32_TOLERANCE);
/// ```
pub const F32_TOLERANCE: f32 = 1.0e-5;

// =============================================================================
// SPHERE CONSTANTS
// =============================================================================

/// Smallest accepted slice count.
///
/// The sphere uses `slices / 2` parallels and its texture V coordinate
/// divides by `parallels - 1`, so at least two parallels are required.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SPHERE_SLICES;
///
/// assert!(MIN_SPHERE_SLICES / 2 > 1);
/// ```
pub const MIN_SPHERE_SLICES: u32 = 4;

/// Slice count used by the sample scene when the caller has no preference.
pub const DEFAULT_SPHERE_SLICES: u32 = 16;

/// Maximum number of vertices in a single generated mesh.
///
/// Keeps every vertex index and the index count representable as `u32`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_MESH_VERTICES;
///
/// let vertex_count = 15;
/// assert!(vertex_count <= MAX_MESH_VERTICES);
/// ```
pub const MAX_MESH_VERTICES: usize = 1 << 24;

// =============================================================================
// FIXED SHAPE CONSTANTS
// =============================================================================

/// Vertices in the cube: four per face so each face owns its normal and UVs.
pub const CUBE_VERTEX_COUNT: usize = 24;

/// Indices in the cube: two triangles per face.
pub const CUBE_INDEX_COUNT: usize = 36;

/// Vertices in the arrowhead: four flat triangles, unshared.
pub const ARROW_VERTEX_COUNT: usize = 12;

/// Indices in the arrowhead.
pub const ARROW_INDEX_COUNT: usize = 12;

// =============================================================================
// VIEW CONSTANTS
// =============================================================================

/// Vertical field of view of the sample camera, in degrees.
pub const DEFAULT_FOV_Y_DEGREES: f32 = 60.0;

/// Near clip plane distance.
pub const DEFAULT_NEAR_PLANE: f32 = 1.0;

/// Far clip plane distance.
pub const DEFAULT_FAR_PLANE: f32 = 20.0;

/// Distance the model is pushed away from the viewer along -Z.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 2.0;

/// Fixed tilt about the X axis applied before the animated spin, in degrees.
pub const DEFAULT_TILT_DEGREES: f32 = 60.0;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Spin angle at the first frame, in degrees.
pub const ROTATION_START_DEGREES: f32 = -45.0;

/// Upper turning point of the spin, in degrees.
pub const ROTATION_MAX_DEGREES: f32 = 75.0;

/// Lower turning point of the spin, in degrees.
pub const ROTATION_MIN_DEGREES: f32 = -75.0;

/// Angular speed while the spin angle increases, in degrees per second.
pub const ROTATION_RISE_SPEED: f32 = 100.0;

/// Angular speed while the spin angle decreases, in degrees per second.
pub const ROTATION_FALL_SPEED: f32 = 60.0;

// =============================================================================
// VIEW CONFIGURATION
// =============================================================================

/// Camera parameters consumed by the model-view-projection helper.
///
/// # Examples
/// ```
/// use config::constants::ViewConfig;
/// let view = ViewConfig::default();
/// assert!(view.far > view.near);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Translation of the model along -Z.
    pub camera_distance: f32,
    /// Rotation about X applied before the spin, in degrees.
    pub tilt_degrees: f32,
}

impl ViewConfig {
    /// Builds a view configuration, rejecting values a perspective
    /// projection cannot use.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ViewConfig;
    /// let view = ViewConfig::new(45.0, 0.1, 100.0, 5.0, 30.0).expect("valid view");
    /// assert_eq!(view.camera_distance, 5.0);
    /// assert!(ViewConfig::new(45.0, 2.0, 1.0, 5.0, 30.0).is_err());
    /// ```
    pub fn new(
        fov_y_degrees: f32,
        near: f32,
        far: f32,
        camera_distance: f32,
        tilt_degrees: f32,
    ) -> Result<Self, ConfigError> {
        if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(fov_y_degrees));
        }
        if !(near > 0.0 && far > near && far.is_finite()) {
            return Err(ConfigError::InvalidClipRange { near, far });
        }
        if !camera_distance.is_finite() || !tilt_degrees.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        Ok(Self {
            fov_y_degrees,
            near,
            far,
            camera_distance,
            tilt_degrees,
        })
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            near: DEFAULT_NEAR_PLANE,
            far: DEFAULT_FAR_PLANE,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            tilt_degrees: DEFAULT_TILT_DEGREES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Field of view outside the open interval (0, 180) degrees.
    InvalidFieldOfView(f32),
    /// Clip planes that are not `0 < near < far`.
    InvalidClipRange { near: f32, far: f32 },
    /// Camera distance or tilt is NaN or infinite.
    NonFinite,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFieldOfView(value) => {
                write!(f, "field of view must be in (0, 180) degrees: {value}")
            }
            ConfigError::InvalidClipRange { near, far } => {
                write!(f, "clip planes must satisfy 0 < near < far: near={near}, far={far}")
            }
            ConfigError::NonFinite => write!(f, "camera distance and tilt must be finite"),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f32 values are approximately equal within F32_TOLERANCE.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-7));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < F32_TOLERANCE
}
