// tag_cli/src/rollout/runner.rs
#![forbid(unsafe_code)]

use indicatif::{ProgressBar, ProgressStyle};

use tag_engine::env::{Action, TagEnv};
use tag_engine::policy::Policy;

use super::sinks::{ReportRow, RolloutSink};
use super::stats::{FinalReport, RolloutStats};

/// Fixed internal cadence for progress-bar live message updates.
/// (No CLI knob on purpose.)
const LIVE_EVERY: u64 = 200;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core rollout ----------------
    /// Total environment steps to execute across episodes.
    pub steps: u64,
    /// Base seed; episode e reseeds the environment with base_seed + e.
    pub base_seed: u64,
    /// Force a reset after this many steps in one episode (0 = never).
    /// Runner-level truncation; the environment itself has no step limit.
    pub max_ep_len: u64,

    /// Used only for the final report string.
    pub policy_name: String,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N steps (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn RolloutSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn RolloutSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, policy: &mut dyn Policy) -> FinalReport {
        let cfg = self.cfg.clone();

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.steps);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .unwrap()
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = RolloutStats::new();

        // Episode state. The builtin layout is gap-free, so construction cannot fail.
        let mut env = TagEnv::with_seed(cfg.base_seed).expect("builtin layout is dense");
        let mut episode_id: u64 = 0;
        env.reset();

        while stats.steps_done < cfg.steps {
            // ------------------------------------------------------------
            // Episode boundary: finalize counters, reseed, reset.
            // ------------------------------------------------------------
            let truncated = cfg.max_ep_len > 0 && stats.ep_len >= cfg.max_ep_len;
            if env.terminated() || truncated {
                stats.on_episode_end(env.terminated());

                episode_id += 1;
                env.seed(Some(cfg.base_seed.wrapping_add(episode_id)));
                env.reset();
            }

            // ------------------------------------------------------------
            // One step: the policy picks an action, the env applies it.
            // ------------------------------------------------------------
            let action = policy.choose_action(&env);
            let step = env.step(action).expect("episode is active");
            stats.on_step(step.reward, action == Action::Tag);

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            // ------------------------------------------------------------
            // Periodic table report.
            // ------------------------------------------------------------
            if cfg.verbosity >= 2 && cfg.report_every > 0 && stats.steps_done % cfg.report_every == 0
            {
                let row = ReportRow {
                    step: stats.steps_done,
                    steps_total: cfg.steps,
                    sps: stats.steps_per_sec(),
                    episodes_finished: stats.episodes_finished,
                    captures: stats.captures,
                    truncations: stats.truncations,
                    avg_ep_len: stats.avg_ep_len(),
                    max_ep_len: stats.episode_len_max,
                    avg_return: stats.avg_return(),
                    tag_attempts: stats.tag_attempts,
                };
                self.sink.on_report_row(&row, pb.as_ref());
            }

            // ------------------------------------------------------------
            // Live progress message cadence.
            // ------------------------------------------------------------
            if let Some(ref pb) = pb {
                if stats.steps_done % LIVE_EVERY == 0 {
                    pb.set_message(format!(
                        "eps={} captures={} avg_ep={:.1} avg_ret={:.1}",
                        stats.episodes_finished,
                        stats.captures,
                        stats.avg_ep_len(),
                        stats.avg_return(),
                    ));
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        stats.final_report(&cfg.policy_name, stats.ep_len)
    }
}
