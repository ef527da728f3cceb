//! Error taxonomy for the radar core

use std::fmt;

/// Errors surfaced by radar operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadarError {
    /// A control parameter outside its valid domain (e.g. non-positive scan speed)
    InvalidParameter { name: &'static str, value: f32 },
    /// The render surface is too small to hold the display disk
    DegenerateSurface { radius: f32 },
}

impl fmt::Display for RadarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadarError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name}: {value}")
            }
            RadarError::DegenerateSurface { radius } => {
                write!(f, "degenerate surface: display radius {radius}")
            }
        }
    }
}

impl std::error::Error for RadarError {}
