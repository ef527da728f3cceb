//! Deterministic simulation module
//!
//! All radar motion lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Randomness only through an explicitly passed, seedable RNG
//! - Stable target order (insertion order)
//! - No rendering or platform dependencies

pub mod motion;
pub mod state;
pub mod sweep;
pub mod tick;

pub use motion::{advance_targets, random_target, regenerate};
pub use state::{Direction, ScanHistory, SimulationState, Target};
pub use sweep::{advance_sweep, set_speed};
pub use tick::{run_ticks, tick};
