//! Visual encoding of targets
//!
//! Size class drives both marker size and palette; distance dims the color
//! so far contacts read as fainter.

use super::command::Color;
use crate::sim::Target;

/// How a target is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetStyle {
    pub color: Color,
    /// Outer ring radius in pixels (the filled core is 2px smaller)
    pub radius_px: f32,
}

/// Brightness channel for a target at `distance` (255 at the center, 155 at the rim)
pub fn intensity(distance: f32, max_distance: f32) -> u8 {
    let falloff = ((distance / max_distance) * 100.0).floor();
    (255.0 - falloff).clamp(0.0, 255.0) as u8
}

/// Map a size class and distance to a marker style.
///
/// Classes other than 1 and 2 use the class-3 palette.
pub fn encode_style(size_class: u8, distance: f32, max_distance: f32) -> TargetStyle {
    let i = intensity(distance, max_distance);
    let color = match size_class {
        1 => Color::rgb(255, 255, i),
        2 => Color::rgb(255, i, 0),
        _ => Color::rgb(255, i / 2, i / 2),
    };

    TargetStyle {
        color,
        radius_px: 4.0 + size_class as f32 * 2.0,
    }
}

pub fn encode(target: &Target, max_distance: f32) -> TargetStyle {
    encode_style(target.size_class, target.distance, max_distance)
}
