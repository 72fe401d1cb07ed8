// engine/src/env/action.rs
#![forbid(unsafe_code)]

use crate::env::constants::ACTION_DIM;
use crate::env::error::EnvError;

pub type Offset = (i32, i32);

/// Agent actions. The integer encoding (`id`) is the wire format used by harnesses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    North,
    South,
    East,
    West,
    Tag,
}

impl Action {
    pub const ALL: [Action; ACTION_DIM] = [
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Tag,
    ];

    pub fn from_id(id: usize) -> Result<Action, EnvError> {
        match id {
            0 => Ok(Action::North),
            1 => Ok(Action::South),
            2 => Ok(Action::East),
            3 => Ok(Action::West),
            4 => Ok(Action::Tag),
            _ => Err(EnvError::InvalidAction(id)),
        }
    }

    #[inline]
    pub fn id(self) -> usize {
        match self {
            Action::North => 0,
            Action::South => 1,
            Action::East => 2,
            Action::West => 3,
            Action::Tag => 4,
        }
    }

    /// (d_row, d_col) for directional actions; `None` for Tag.
    #[inline]
    pub fn offset(self) -> Option<Offset> {
        match self {
            Action::North => Some((-1, 0)),
            Action::South => Some((1, 0)),
            Action::East => Some((0, 1)),
            Action::West => Some((0, -1)),
            Action::Tag => None,
        }
    }
}
