//! Startup configuration
//!
//! Everything here has a compile-time default in [`crate::consts`]; the
//! native runner overrides fields from its command line.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::RadarError;

/// Tessellation quality levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Segments used for a full circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 24,
            QualityPreset::Medium => 48,
            QualityPreset::High => 96,
        }
    }
}

/// Radar session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    /// Distance mapped onto the display rim
    pub max_distance: f32,
    /// Scan history capacity
    pub max_history: usize,
    /// Targets per generation
    pub target_count: usize,
    /// Timer period
    pub tick_interval_ms: u32,
    /// Half width of the sweep highlight
    pub sweep_arc_half_width_deg: f32,
    /// Scan speed at startup (degrees per tick)
    pub scan_speed: f32,
    /// Gap between display disk and surface edge (pixels)
    pub surface_margin: f32,
    /// Seed for target generation
    pub seed: u64,
    /// Fading scan history trail behind the sweep
    pub afterglow: bool,
    pub quality: QualityPreset,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            max_distance: MAX_DISTANCE,
            max_history: MAX_HISTORY,
            target_count: DEFAULT_TARGET_COUNT,
            tick_interval_ms: TICK_INTERVAL_MS,
            sweep_arc_half_width_deg: SWEEP_ARC_HALF_WIDTH_DEG,
            scan_speed: DEFAULT_SCAN_SPEED,
            surface_margin: SURFACE_MARGIN,
            seed: 0,
            afterglow: false,
            quality: QualityPreset::Medium,
        }
    }
}

impl RadarConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), RadarError> {
        let positive = |name: &'static str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(RadarError::InvalidParameter { name, value })
            }
        };

        positive("max_distance", self.max_distance)?;
        // Targets need room between the center and rim clearances
        if self.max_distance < 2.0 * TARGET_EDGE_CLEARANCE {
            return Err(RadarError::InvalidParameter {
                name: "max_distance",
                value: self.max_distance,
            });
        }
        positive("scan_speed", self.scan_speed)?;
        positive("sweep_arc_half_width_deg", self.sweep_arc_half_width_deg)?;
        positive("tick_interval_ms", self.tick_interval_ms as f32)?;
        if !(self.surface_margin.is_finite() && self.surface_margin >= 0.0) {
            return Err(RadarError::InvalidParameter {
                name: "surface_margin",
                value: self.surface_margin,
            });
        }
        Ok(())
    }

    /// Whether the startup speed sits inside the slider range
    pub fn scan_speed_in_ui_range(&self) -> bool {
        (SCAN_SPEED_MIN..=SCAN_SPEED_MAX).contains(&self.scan_speed)
    }
}
