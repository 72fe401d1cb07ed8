// engine/src/env/opponent.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::env::constants::P_STAY;
use crate::env::grid::{Grid, Pos};

// Candidate offsets per axis, indexed by sign(diff) + 1.
// A sign of 0 means either direction opens the gap equally.
const VERT_CHOICES: [&[(i32, i32)]; 3] = [&[(-1, 0)], &[(-1, 0), (1, 0)], &[(1, 0)]];
const HORIZ_CHOICES: [&[(i32, i32)]; 3] = [&[(0, -1)], &[(0, -1), (0, 1)], &[(0, 1)]];

/**
 * One evasive move of the opponent.
 *
 * Draw order is fixed (it defines the reproducible RNG stream):
 * 1. one uniform `f64`; below `P_STAY` the opponent stays put;
 * 2. otherwise the per-axis sign of (opponent - agent) selects 2-4
 *    distance-opening candidate offsets, illegal targets are dropped,
 *    and one survivor is drawn uniformly.
 *
 * A cornered opponent (no legal candidate) stays in place; the policy is
 * memoryless and never looks at the agent's possible future moves.
 */
pub fn evasion_move(rng: &mut StdRng, grid: &Grid, agent: Pos, opponent: Pos) -> Pos {
    if rng.gen::<f64>() < P_STAY {
        return opponent;
    }

    let vsign = (opponent.0 - agent.0).signum();
    let hsign = (opponent.1 - agent.1).signum();

    let mut candidates: Vec<Pos> = Vec::with_capacity(4);
    for &(dr, dc) in VERT_CHOICES[(vsign + 1) as usize]
        .iter()
        .chain(HORIZ_CHOICES[(hsign + 1) as usize])
    {
        let target = (opponent.0 + dr, opponent.1 + dc);
        if grid.is_legal(target) {
            candidates.push(target);
        }
    }

    match candidates.choose(rng) {
        Some(&target) => target,
        None => opponent,
    }
}
