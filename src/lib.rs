//! Radar Sweep - an animated 2D radar simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sweep angle, drifting targets, scan history)
//! - `renderer`: Layer composition into draw commands, plus a tessellating surface
//! - `control`: Adapter for the two UI parameters (scan speed, target regeneration)
//! - `timer`: Fixed-period tick source
//! - `session`: Ties state, RNG, timer and composer together
//! - `settings`: Startup configuration

pub mod control;
pub mod error;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod timer;

pub use control::ControlBridge;
pub use error::RadarError;
pub use session::RadarSession;
pub use settings::{QualityPreset, RadarConfig};

use glam::Vec2;

/// Radar configuration constants
pub mod consts {
    /// Distance represented by the rim of the display disk
    pub const MAX_DISTANCE: f32 = 500.0;
    /// Scan history capacity (sweep angles)
    pub const MAX_HISTORY: usize = 50;
    /// Targets created at startup and on every regeneration
    pub const DEFAULT_TARGET_COUNT: usize = 8;
    /// Timer period between ticks (25 fps)
    pub const TICK_INTERVAL_MS: u32 = 40;
    /// Half of the highlighted sweep wedge
    pub const SWEEP_ARC_HALF_WIDTH_DEG: f32 = 30.0;
    /// Scan speed a fresh session starts with (degrees per tick)
    pub const DEFAULT_SCAN_SPEED: f32 = 3.0;
    /// Scan speed range advertised to the UI slider
    pub const SCAN_SPEED_MIN: f32 = 1.0;
    pub const SCAN_SPEED_MAX: f32 = 10.0;
    /// Gap between the display disk and the surface edge (pixels)
    pub const SURFACE_MARGIN: f32 = 30.0;

    /// Targets keep this far from the center and from the rim
    pub const TARGET_EDGE_CLEARANCE: f32 = 50.0;
    pub const TARGET_MIN_ANGULAR_SPEED: f32 = 0.5;
    pub const TARGET_MAX_ANGULAR_SPEED: f32 = 2.0;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Map polar radar coordinates to screen space.
///
/// Angle 0 points to screen-up and angles grow clockwise (screen y grows
/// downward). `distance` is in simulation units and is scaled so that
/// `max_distance` lands on the rim at `radius` pixels.
///
/// Every layer that places something at an angle goes through this function.
#[inline]
pub fn to_screen(center: Vec2, radius: f32, max_distance: f32, distance: f32, angle_deg: f32) -> Vec2 {
    let scaled = (distance / max_distance) * radius;
    let rad = (angle_deg - 90.0).to_radians();
    Vec2::new(center.x + scaled * rad.cos(), center.y + scaled * rad.sin())
}

/// Point on a circle of `radius` pixels around `center` at a radar angle
#[inline]
pub fn rim_point(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    to_screen(center, radius, 1.0, 1.0, angle_deg)
}
