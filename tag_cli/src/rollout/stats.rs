// tag_cli/src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct RolloutStats {
    pub steps_done: u64,

    pub ep_len: u64,
    pub ep_return: f64,

    pub episodes_finished: u64,
    pub captures: u64,
    pub truncations: u64,

    pub episode_len_sum: u64,
    pub episode_len_max: u64,
    pub return_sum: f64,

    pub tag_attempts: u64,

    pub t0: Instant,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            steps_done: 0,
            ep_len: 0,
            ep_return: 0.0,
            episodes_finished: 0,
            captures: 0,
            truncations: 0,
            episode_len_sum: 0,
            episode_len_max: 0,
            return_sum: 0.0,
            tag_attempts: 0,
            t0: Instant::now(),
        }
    }

    /// Call once per environment step.
    pub fn on_step(&mut self, reward: f64, was_tag: bool) {
        self.steps_done += 1;
        self.ep_len += 1;
        self.ep_return += reward;
        if was_tag {
            self.tag_attempts += 1;
        }
    }

    /// Call at every episode boundary (capture or runner-level truncation),
    /// before the next reset.
    pub fn on_episode_end(&mut self, captured: bool) {
        self.episodes_finished += 1;
        if captured {
            self.captures += 1;
        } else {
            self.truncations += 1;
        }

        self.episode_len_sum += self.ep_len;
        self.episode_len_max = self.episode_len_max.max(self.ep_len);
        self.return_sum += self.ep_return;

        self.ep_len = 0;
        self.ep_return = 0.0;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn steps_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.steps_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_ep_len(&self) -> f64 {
        if self.episodes_finished > 0 {
            self.episode_len_sum as f64 / self.episodes_finished as f64
        } else {
            0.0
        }
    }

    pub fn avg_return(&self) -> f64 {
        if self.episodes_finished > 0 {
            self.return_sum / self.episodes_finished as f64
        } else {
            0.0
        }
    }

    pub fn final_report(&self, policy: &str, last_ep_len: u64) -> FinalReport {
        FinalReport {
            policy: policy.to_string(),
            steps_done: self.steps_done,
            elapsed_s: self.elapsed_secs(),
            steps_per_s: self.steps_per_sec(),
            episodes_finished: self.episodes_finished,
            captures: self.captures,
            truncations: self.truncations,
            avg_ep_len: self.avg_ep_len(),
            max_ep_len: self.episode_len_max,
            avg_return: self.avg_return(),
            tag_attempts: self.tag_attempts,
            last_ep_len,
        }
    }
}

/// Snapshot for the end-of-run summary line.
#[derive(Clone, Debug)]
pub struct FinalReport {
    pub policy: String,
    pub steps_done: u64,
    pub elapsed_s: f64,
    pub steps_per_s: f64,
    pub episodes_finished: u64,
    pub captures: u64,
    pub truncations: u64,
    pub avg_ep_len: f64,
    pub max_ep_len: u64,
    pub avg_return: f64,
    pub tag_attempts: u64,
    pub last_ep_len: u64,
}
