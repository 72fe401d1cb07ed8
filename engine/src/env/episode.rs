// engine/src/env/episode.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::env::action::Action;
use crate::env::constants::{N_CELLS, OBS_COLOCATED, REWARD_STEP, REWARD_TAG_HIT, REWARD_TAG_MISS};
use crate::env::error::EnvError;
use crate::env::grid::{Grid, Pos};
use crate::env::opponent::evasion_move;

/// Live episode state. Both positions always denote valid cells;
/// they may coincide only as the result of a step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EpisodeState {
    pub agent: Pos,
    pub opponent: Pos,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepResult {
    /// Opponent cell id, or `OBS_COLOCATED` when both share a cell.
    pub observation: u32,
    pub reward: f64,
    /// True only on a successful tag; the episode is over until the next `reset`.
    pub terminated: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    AwaitingReset,
    Active,
    Terminated,
}

/**
 * The tag environment: a controlled agent chasing a stochastically
 * evading opponent on the fixed 29-cell grid.
 *
 * One `StdRng` per instance covers every stochastic decision (reset
 * sampling, opponent stay/move, candidate choice) in a fixed order, so a
 * fixed seed and action sequence replay an identical trajectory.
 */
pub struct TagEnv {
    grid: Grid,
    rng: StdRng,
    seed: u64,
    state: EpisodeState,
    phase: Phase,
}

impl TagEnv {
    /// Entropy-seeded environment.
    pub fn new() -> Result<Self, EnvError> {
        Self::with_seed(rand::random::<u64>())
    }

    pub fn with_seed(seed: u64) -> Result<Self, EnvError> {
        let grid = Grid::new()?;
        Ok(Self {
            grid,
            rng: StdRng::seed_from_u64(seed),
            seed,
            // Placeholder until the first reset; `phase` gates all access.
            state: EpisodeState {
                agent: (4, 0),
                opponent: (4, 0),
            },
            phase: Phase::AwaitingReset,
        })
    }

    /// Reseed the RNG stream. `None` draws a fresh seed from thread entropy.
    /// Returns the effective seed. Does not touch the episode itself.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
        seed
    }

    pub fn current_seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// `None` before the first reset.
    pub fn state(&self) -> Option<&EpisodeState> {
        match self.phase {
            Phase::AwaitingReset => None,
            _ => Some(&self.state),
        }
    }

    pub fn terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Start a new episode: agent and opponent cells are drawn independently
    /// and uniformly from `0..N_CELLS` (agent first). Coincidence is allowed.
    pub fn reset(&mut self) -> u32 {
        let agent_cell = self.rng.gen_range(0..N_CELLS);
        let opponent_cell = self.rng.gen_range(0..N_CELLS);
        self.state = EpisodeState {
            agent: self.grid.coord_of(agent_cell),
            opponent: self.grid.coord_of(opponent_cell),
        };
        self.phase = Phase::Active;
        self.observation()
    }

    /// Pin an exact episode state. Fixture entry point for harnesses and tests;
    /// the normal path is `reset`.
    pub fn place(&mut self, agent_cell: usize, opponent_cell: usize) -> Result<u32, EnvError> {
        if agent_cell >= N_CELLS {
            return Err(EnvError::InvalidCell(agent_cell));
        }
        if opponent_cell >= N_CELLS {
            return Err(EnvError::InvalidCell(opponent_cell));
        }
        self.state = EpisodeState {
            agent: self.grid.coord_of(agent_cell),
            opponent: self.grid.coord_of(opponent_cell),
        };
        self.phase = Phase::Active;
        Ok(self.observation())
    }

    /// Integer-encoded entry point: 0=North, 1=South, 2=East, 3=West, 4=Tag.
    pub fn step_id(&mut self, action_id: usize) -> Result<StepResult, EnvError> {
        self.step(Action::from_id(action_id)?)
    }

    pub fn step(&mut self, action: Action) -> Result<StepResult, EnvError> {
        if self.phase != Phase::Active {
            return Err(EnvError::EpisodeNotActive);
        }

        let (reward, terminated) = match action.offset() {
            Some(offset) => {
                // Agent moves first; the opponent reacts to the agent's new position.
                self.state.agent = self.grid.apply_move(self.state.agent, offset);
                self.state.opponent = evasion_move(
                    &mut self.rng,
                    &self.grid,
                    self.state.agent,
                    self.state.opponent,
                );
                (REWARD_STEP, false)
            }
            None => {
                // Tag is judged on the pre-movement observation.
                if self.observation() == OBS_COLOCATED {
                    self.phase = Phase::Terminated;
                    (REWARD_TAG_HIT, true)
                } else {
                    // A missed tag does not freeze the opponent.
                    self.state.opponent = evasion_move(
                        &mut self.rng,
                        &self.grid,
                        self.state.agent,
                        self.state.opponent,
                    );
                    (REWARD_TAG_MISS, false)
                }
            }
        };

        Ok(StepResult {
            observation: self.observation(),
            reward,
            terminated,
        })
    }

    /// Opponent cell id when visible, the co-located sentinel otherwise.
    fn observation(&self) -> u32 {
        if self.state.agent != self.state.opponent {
            self.grid.cell_id_at(self.state.opponent) as u32
        } else {
            OBS_COLOCATED
        }
    }
}
