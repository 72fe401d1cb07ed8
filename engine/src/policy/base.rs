// engine/src/policy/base.rs
#![forbid(unsafe_code)]

use crate::env::{Action, TagEnv};

/// Policy chooses the agent's next action for the current environment state.
///
/// Object-safe so it can be used as `Box<dyn Policy>`.
pub trait Policy {
    fn choose_action(&mut self, env: &TagEnv) -> Action;
}
