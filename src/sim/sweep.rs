//! Scan sweep controller
//!
//! Rotates the sweep line by a configurable number of degrees per tick and
//! records every new angle in the scan history.

use super::state::SimulationState;
use crate::error::RadarError;
use crate::wrap_degrees;

/// Advance the sweep by one tick
pub fn advance_sweep(state: &mut SimulationState) {
    state.sweep_angle_deg = wrap_degrees(state.sweep_angle_deg + state.scan_speed_deg_per_tick);
    state.scan_history.push(state.sweep_angle_deg);
}

/// Set the sweep speed (degrees per tick).
///
/// Non-positive and non-finite speeds are rejected. Values outside the
/// advertised slider range are accepted as-is; range policy belongs to the
/// caller.
pub fn set_speed(state: &mut SimulationState, speed: f32) -> Result<(), RadarError> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(RadarError::InvalidParameter {
            name: "scan_speed",
            value: speed,
        });
    }
    state.scan_speed_deg_per_tick = speed;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sweep_wraps_past_360() {
        let mut state = SimulationState::default();
        state.sweep_angle_deg = 358.0;
        set_speed(&mut state, 3.0).unwrap();
        advance_sweep(&mut state);
        assert_eq!(state.sweep_angle_deg, 1.0);
        assert_eq!(state.scan_history.iter().last(), Some(1.0));
    }

    #[test]
    fn test_set_speed_rejects_non_positive() {
        let mut state = SimulationState::default();
        assert!(matches!(
            set_speed(&mut state, 0.0),
            Err(RadarError::InvalidParameter { .. })
        ));
        assert!(set_speed(&mut state, -2.0).is_err());
        assert!(set_speed(&mut state, f32::NAN).is_err());
        // Rejected values leave the previous speed in place
        assert_eq!(state.scan_speed(), crate::consts::DEFAULT_SCAN_SPEED);
    }

    #[test]
    fn test_set_speed_does_not_clamp() {
        let mut state = SimulationState::default();
        set_speed(&mut state, 25.0).unwrap();
        assert_eq!(state.scan_speed(), 25.0);
        set_speed(&mut state, 0.25).unwrap();
        assert_eq!(state.scan_speed(), 0.25);
    }

    #[test]
    fn test_history_fills_to_capacity() {
        let mut state = SimulationState::new(500.0, 50);
        for _ in 0..60 {
            advance_sweep(&mut state);
        }
        assert_eq!(state.scan_history.len(), 50);
        // Oldest retained entry is tick 11 at 3 deg/tick
        assert_eq!(state.scan_history.iter().next(), Some(33.0));
    }

    proptest! {
        #[test]
        fn sweep_advance_matches_modulo(start in 0.0f32..360.0, speed in 0.01f32..10.0) {
            let mut state = SimulationState::default();
            state.sweep_angle_deg = start;
            set_speed(&mut state, speed).unwrap();
            advance_sweep(&mut state);
            prop_assert_eq!(state.sweep_angle_deg, wrap_degrees(start + speed));
            prop_assert!((0.0..360.0).contains(&state.sweep_angle_deg));
        }
    }
}
