// engine/src/env/mod.rs
#![forbid(unsafe_code)]

mod action;
mod constants;
mod episode;
mod error;
mod grid;
mod opponent;

/**
 * Curated environment public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use action::{Action, Offset};
pub use constants::{
    ACTION_DIM, N_CELLS, OBS_COLOCATED, OBS_DIM, P_STAY, REWARD_STEP, REWARD_TAG_HIT,
    REWARD_TAG_MISS,
};
pub use episode::{EpisodeState, StepResult, TagEnv};
pub use error::EnvError;
pub use grid::{Grid, Pos, COLS, ROWS};
pub use opponent::evasion_move;
