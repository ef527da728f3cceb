//! Control bridge for the UI layer
//!
//! The UI exposes two inputs: a scan speed slider and a "new targets" button.
//! Both land here and are forwarded to the simulation on the tick thread.

use rand::Rng;

use crate::consts::DEFAULT_TARGET_COUNT;
use crate::error::RadarError;
use crate::sim::{SimulationState, regenerate, set_speed};

/// Forwards UI events to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBridge {
    /// Targets created per regeneration request
    pub regenerate_count: usize,
}

impl Default for ControlBridge {
    fn default() -> Self {
        Self {
            regenerate_count: DEFAULT_TARGET_COUNT,
        }
    }
}

impl ControlBridge {
    pub fn new(regenerate_count: usize) -> Self {
        Self { regenerate_count }
    }

    /// Scan speed slider moved. Errors are returned for the UI to handle.
    pub fn on_speed_changed(&self, state: &mut SimulationState, value: f32) -> Result<(), RadarError> {
        set_speed(state, value).inspect_err(|err| log::warn!("Rejected scan speed: {err}"))
    }

    /// "New targets" pressed
    pub fn on_regenerate_requested<R: Rng>(&self, state: &mut SimulationState, rng: &mut R) {
        regenerate(state, self.regenerate_count, rng);
    }
}
