//! Target motion model
//!
//! Targets drift along circles: only the bearing changes, distance stays
//! fixed for the lifetime of a target.

use rand::Rng;

use super::state::{Direction, SimulationState, Target};
use crate::consts::*;
use crate::wrap_degrees;

/// Advance every target's bearing by one tick
pub fn advance_targets(state: &mut SimulationState) {
    for target in state.targets_mut() {
        target.angle_deg = wrap_degrees(target.angle_deg + target.angular_step());
    }
}

/// Draw a single random target for a radar of the given range
pub fn random_target<R: Rng>(rng: &mut R, min_distance: f32, max_distance: f32) -> Target {
    let lo = min_distance as i32;
    let hi = (max_distance as i32).max(lo);

    Target {
        distance: rng.random_range(lo..=hi) as f32,
        angle_deg: rng.random_range(0..360) as f32,
        size_class: rng.random_range(1..=3),
        angular_speed_deg_per_tick: rng
            .random_range(TARGET_MIN_ANGULAR_SPEED..=TARGET_MAX_ANGULAR_SPEED),
        direction: if rng.random_bool(0.5) {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        },
    }
}

/// Replace all targets with `count` freshly drawn ones.
///
/// The new collection is built completely before it is swapped in, so a
/// reader never observes a mix of old and new targets.
pub fn regenerate<R: Rng>(state: &mut SimulationState, count: usize, rng: &mut R) {
    let (lo, hi) = state.target_distance_bounds();
    let fresh: Vec<Target> = (0..count).map(|_| random_target(rng, lo, hi)).collect();
    let previous = state.replace_targets(fresh);
    log::info!("Regenerated targets: {} -> {}", previous.len(), count);
}
