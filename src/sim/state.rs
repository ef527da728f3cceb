//! Simulation state and core types
//!
//! Everything the tick mutates and the composer reads lives here.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Sense of a target's angular drift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing angle (clockwise on screen)
    Clockwise,
    /// Decreasing angle
    CounterClockwise,
}

impl Direction {
    /// +1 or -1, multiplied into the angular speed
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }
}

/// A simulated contact: fixed distance, drifting angle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Distance from the radar (simulation units, fixed after creation)
    pub distance: f32,
    /// Bearing in degrees, [0, 360)
    pub angle_deg: f32,
    /// Visual category, 1..=3
    pub size_class: u8,
    pub angular_speed_deg_per_tick: f32,
    pub direction: Direction,
}

impl Target {
    /// Signed change in bearing applied every tick
    #[inline]
    pub fn angular_step(&self) -> f32 {
        self.angular_speed_deg_per_tick * self.direction.sign()
    }
}

/// Bounded FIFO of recent sweep angles (oldest first)
#[derive(Debug, Clone, PartialEq)]
pub struct ScanHistory {
    angles: VecDeque<f32>,
    capacity: usize,
}

impl ScanHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            angles: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append an angle, evicting the oldest once past capacity
    pub fn push(&mut self, angle_deg: f32) {
        self.angles.push_back(angle_deg);
        while self.angles.len() > self.capacity {
            self.angles.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Angles from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f32> + ExactSizeIterator + '_ {
        self.angles.iter().copied()
    }

    pub fn clear(&mut self) {
        self.angles.clear();
    }
}

/// Complete radar simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Current sweep line bearing, [0, 360)
    pub sweep_angle_deg: f32,
    /// Degrees the sweep advances per tick (> 0)
    pub(crate) scan_speed_deg_per_tick: f32,
    /// Active targets in insertion order
    pub(crate) targets: Vec<Target>,
    /// Recent sweep angles
    pub scan_history: ScanHistory,
    /// Distance mapped onto the display rim
    pub max_distance: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(MAX_DISTANCE, MAX_HISTORY)
    }
}

impl SimulationState {
    /// Create an empty state (no targets yet, sweep pointing up)
    pub fn new(max_distance: f32, max_history: usize) -> Self {
        Self {
            sweep_angle_deg: 0.0,
            scan_speed_deg_per_tick: DEFAULT_SCAN_SPEED,
            targets: Vec::new(),
            scan_history: ScanHistory::new(max_history),
            max_distance,
            time_ticks: 0,
        }
    }

    pub fn scan_speed(&self) -> f32 {
        self.scan_speed_deg_per_tick
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Mutable access for the motion model (collection size stays fixed)
    pub(crate) fn targets_mut(&mut self) -> &mut [Target] {
        &mut self.targets
    }

    /// Publish a fully built target collection in one move
    pub(crate) fn replace_targets(&mut self, targets: Vec<Target>) -> Vec<Target> {
        std::mem::replace(&mut self.targets, targets)
    }

    /// Nearest and farthest distance a target may be created at
    pub fn target_distance_bounds(&self) -> (f32, f32) {
        let lo = TARGET_EDGE_CLEARANCE;
        let hi = (self.max_distance - TARGET_EDGE_CLEARANCE).max(lo);
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_state_defaults() {
        let state = SimulationState::default();
        assert_eq!(state.sweep_angle_deg, 0.0);
        assert_eq!(state.scan_speed(), DEFAULT_SCAN_SPEED);
        assert!(state.targets().is_empty());
        assert_eq!(state.scan_history.capacity(), 50);
        assert_eq!(state.max_distance, 500.0);
        assert_eq!(state.target_distance_bounds(), (50.0, 450.0));
    }

    #[test]
    fn test_history_keeps_last_pushed_in_order() {
        let mut history = ScanHistory::new(50);
        for i in 0..60 {
            history.push(i as f32);
        }
        assert_eq!(history.len(), 50);
        let kept: Vec<f32> = history.iter().collect();
        let expected: Vec<f32> = (10..60).map(|i| i as f32).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn test_history_zero_capacity() {
        let mut history = ScanHistory::new(0);
        history.push(12.0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Clockwise.sign(), 1.0);
        assert_eq!(Direction::CounterClockwise.sign(), -1.0);
    }

    proptest! {
        #[test]
        fn history_never_exceeds_capacity(capacity in 0usize..80, pushes in 0usize..200) {
            let mut history = ScanHistory::new(capacity);
            for i in 0..pushes {
                history.push(i as f32);
                prop_assert!(history.len() <= capacity);
            }
            prop_assert_eq!(history.len(), pushes.min(capacity));
        }
    }
}
