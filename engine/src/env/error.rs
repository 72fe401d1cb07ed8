// engine/src/env/error.rs
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::env::constants::{ACTION_DIM, N_CELLS};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvError {
    /// Action id outside `0..ACTION_DIM`. The environment state is untouched.
    #[error("action id {0} out of range 0..{ACTION_DIM}")]
    InvalidAction(usize),

    /// `step` called before the first `reset`, or after a successful tag ended the episode.
    #[error("no active episode; call reset first")]
    EpisodeNotActive,

    /// The layout never assigns this id. Ids must cover `0..N_CELLS` with no gaps.
    #[error("grid layout has no cell with id {0}; ids must cover 0..{N_CELLS}")]
    LayoutGap(usize),

    /// Cell id outside `0..N_CELLS` handed to the state fixture API.
    #[error("cell id {0} out of range 0..{N_CELLS}")]
    InvalidCell(usize),
}
