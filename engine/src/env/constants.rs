// engine/src/env/constants.rs
#![forbid(unsafe_code)]

/// Number of valid, reachable cells. Ids are dense: `0..N_CELLS`.
pub const N_CELLS: usize = 29;

/// North, South, East, West, Tag.
pub const ACTION_DIM: usize = 5;

/// Cell ids `0..=28` plus the co-located sentinel.
pub const OBS_DIM: usize = N_CELLS + 1;

/// Observation emitted when agent and opponent share a cell.
pub const OBS_COLOCATED: u32 = N_CELLS as u32;

/// Probability the opponent skips its move entirely.
pub const P_STAY: f64 = 0.2;

pub const REWARD_STEP: f64 = -1.0;
pub const REWARD_TAG_HIT: f64 = 10.0;
pub const REWARD_TAG_MISS: f64 = -10.0;
