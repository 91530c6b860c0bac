//! Orbit camera for viewing the voxel scene

use crate::core::types::{Mat4, Vec3};
use crate::math::Aabb;
use crate::voxel::{SceneVoxel, scene_bounds};
use std::f32::consts::PI;

/// Radians of azimuth/elevation change per pixel of pointer drag
pub const ROTATE_SENSITIVITY: f32 = 0.005;

/// Fractional distance change per scroll step
pub const ZOOM_STEP: f32 = 0.1;

/// Closest allowed orbit distance
pub const ZOOM_MIN: f32 = 1.5;

/// Farthest allowed orbit distance
pub const ZOOM_MAX: f32 = 200.0;

/// Elevation clamp band. Stays strictly inside +/-90 degrees so the
/// eye direction never aligns with the world up vector and the
/// look-at basis stays well conditioned.
pub const ELEVATION_MIN: f32 = -PI * 0.44;
pub const ELEVATION_MAX: f32 = PI * 0.44;

/// Headroom multiplier applied to the fitted distance when auto-framing
const FRAME_MARGIN: f32 = 1.3;

/// Constant added to the fitted distance so tiny scenes clear the near plane
const FRAME_OFFSET: f32 = 1.0;

/// Camera orbiting a target point, parameterized by a spherical offset
/// (distance, azimuth, elevation) rather than raw position/orientation.
pub struct OrbitCamera {
    /// Point the camera looks at and orbits around
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
    /// Distance from target to eye, kept within [ZOOM_MIN, ZOOM_MAX]
    distance: f32,
    /// Horizontal orbit angle in radians; accumulates unbounded and
    /// relies on trig periodicity
    azimuth: f32,
    /// Vertical orbit angle in radians, kept within the elevation band
    elevation: f32,
}

impl OrbitCamera {
    /// Create a camera at the default orbit around the origin
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            fov: PI / 3.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            distance: 10.0,
            azimuth: PI * 0.25,
            elevation: PI * 0.2,
        }
    }

    /// Restore the default orbit. Target and aspect are left untouched.
    pub fn reset(&mut self) {
        self.distance = 12.0;
        self.azimuth = PI * 0.3;
        self.elevation = PI * 0.2;
    }

    /// Update aspect ratio (call on viewport resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    /// Current orbit distance
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current azimuth in radians
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Current elevation in radians
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Apply a pointer drag of (dx, dy) screen pixels.
    /// Elevation is clamped; azimuth accumulates freely.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth += dx * ROTATE_SENSITIVITY;
        self.elevation =
            (self.elevation + dy * ROTATE_SENSITIVITY).clamp(ELEVATION_MIN, ELEVATION_MAX);
    }

    /// Apply a scroll step; only the sign of `delta` matters.
    /// Positive zooms out, negative zooms in.
    pub fn zoom(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        let factor = 1.0 + ZOOM_STEP * delta.signum();
        self.distance = (self.distance * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Aim at the center of `bounds` and pull back far enough to fit it
    /// in view at the current field of view.
    pub fn frame_bounds(&mut self, bounds: Aabb) {
        self.target = bounds.center();
        let radius = bounds.size().max_element() * 0.5;
        let fitted = radius / (self.fov * 0.5).tan() * FRAME_MARGIN + FRAME_OFFSET;
        self.distance = fitted.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Auto-frame a voxel set, treating each voxel as a unit cube.
    /// No-op when the set is empty.
    pub fn frame_voxels(&mut self, voxels: &[SceneVoxel]) {
        if let Some(bounds) = scene_bounds(voxels) {
            self.frame_bounds(bounds);
        }
    }

    /// Eye position derived from the spherical offset around the target
    pub fn eye(&self) -> Vec3 {
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        let (sin_e, cos_e) = self.elevation.sin_cos();
        self.target + self.distance * Vec3::new(cos_e * cos_a, sin_e, cos_e * sin_a)
    }

    /// Get view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Get projection matrix (camera to clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
