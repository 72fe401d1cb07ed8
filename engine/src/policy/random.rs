// engine/src/policy/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::env::{Action, TagEnv};

use super::base::Policy;

pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_action(&mut self, _env: &TagEnv) -> Action {
        *Action::ALL.choose(&mut self.rng).unwrap()
    }
}
