// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod env;
pub mod policy;

// Re-export the bits harnesses need most often:
pub use env::{
    Action, EnvError, EpisodeState, Grid, StepResult, TagEnv, ACTION_DIM, N_CELLS, OBS_COLOCATED,
    OBS_DIM,
};
