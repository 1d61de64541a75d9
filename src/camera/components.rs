use std::f32::consts::PI;

use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
};

/// Where the camera starts, looking down at the orbit target.
pub const START_POSITION: Vec3 = Vec3::new(0.0, 2.1, 0.0);
pub const FOV_DEGREES: f32 = 75.0;
/// Exposure relative to the engine default; below 1 darkens.
pub const TONE_MAPPING_EXPOSURE: f32 = 0.27;

/// Camera Z change per pixel of wheel delta.
pub const WHEEL_STEP: f32 = 0.025;
/// Height the camera is held at while dollying.
pub const DOLLY_HEIGHT: f32 = 3.0;
/// Pixel equivalent of one wheel notch on line-based devices.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Keeps the camera off the exact poles where the up vector degenerates.
const POLE_EPSILON: f32 = 1e-4;

/// Moves the camera along the room's depth axis on mouse wheel input.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Accumulated Z position; never clamped.
    pub z_offset: f32,
}

impl CameraRig {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            z_offset: transform.translation.z,
        }
    }

    /// Adds a wheel delta (browser convention, pixels) and returns the new Z.
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.z_offset += delta * WHEEL_STEP;
        self.z_offset
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, DOLLY_HEIGHT, self.z_offset)
    }
}

/// Wheel delta in pixels, positive when scrolling down (towards the user).
pub fn wheel_delta(event: &MouseWheel) -> f32 {
    let scale = match event.unit {
        MouseScrollUnit::Line => PIXELS_PER_LINE,
        MouseScrollUnit::Pixel => 1.0,
    };
    -event.y * scale
}

/// Drag-to-orbit around a target point. Zoom is not handled here; the wheel
/// belongs to [`CameraRig`].
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            min_polar: 0.0,
            max_polar: PI,
        }
    }
}

impl OrbitControls {
    /// Aims the camera at the target.
    pub fn update(&self, transform: &mut Transform) {
        transform.look_at(self.target, Vec3::Y);
    }

    /// Orbits the camera around the target by the given angles, keeping its distance.
    pub fn rotate(&self, transform: &mut Transform, azimuth_delta: f32, polar_delta: f32) {
        let offset = transform.translation - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        let azimuth = offset.x.atan2(offset.z) - azimuth_delta;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - polar_delta).clamp(
            self.min_polar.max(POLE_EPSILON),
            self.max_polar.min(PI - POLE_EPSILON),
        );

        let (sin_polar, cos_polar) = polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
        transform.translation = self.target
            + radius * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth);
        self.update(transform);
    }
}
