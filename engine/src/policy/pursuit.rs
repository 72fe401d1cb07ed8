// engine/src/policy/pursuit.rs
#![forbid(unsafe_code)]

use crate::env::{Action, TagEnv};

use super::base::Policy;

/**
 * Scripted chaser: tags when co-located with the opponent, otherwise
 * steps along the axis with the larger gap (falling back to the other
 * axis when that step would bump a wall).
 *
 * Reads the full episode state, not the observation; it is a rollout
 * driver, not a learned partially-observable policy.
 */
#[derive(Default)]
pub struct PursuitPolicy;

impl PursuitPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for PursuitPolicy {
    fn choose_action(&mut self, env: &TagEnv) -> Action {
        let Some(state) = env.state() else {
            // No live episode; any action errors upstream, Tag is as good as any.
            return Action::Tag;
        };

        let dr = state.opponent.0 - state.agent.0;
        let dc = state.opponent.1 - state.agent.1;
        if dr == 0 && dc == 0 {
            return Action::Tag;
        }

        let vertical = if dr < 0 {
            Some(Action::North)
        } else if dr > 0 {
            Some(Action::South)
        } else {
            None
        };
        let horizontal = if dc < 0 {
            Some(Action::West)
        } else if dc > 0 {
            Some(Action::East)
        } else {
            None
        };

        // Prefer the larger gap, but never waste a turn bumping a wall
        // when the other axis still has a useful legal step.
        let (first, second) = if dr.abs() >= dc.abs() {
            (vertical, horizontal)
        } else {
            (horizontal, vertical)
        };

        for action in [first, second].into_iter().flatten() {
            let offset = action.offset().unwrap();
            let target = (state.agent.0 + offset.0, state.agent.1 + offset.1);
            if env.grid().is_legal(target) {
                return action;
            }
        }

        // Both useful steps are walled off; take the first preference anyway
        // (a bump is a no-op and the opponent may still move).
        first.or(second).unwrap_or(Action::Tag)
    }
}
