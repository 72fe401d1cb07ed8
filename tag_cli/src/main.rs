// tag_cli/src/main.rs
#![forbid(unsafe_code)]

mod rollout;

use clap::Parser;

use crate::rollout::{NoopSink, Runner, RunnerConfig, RolloutSink, TableSink};
use tag_engine::policy::{Policy, PursuitPolicy, RandomPolicy};

#[derive(Parser, Debug)]
#[command(name = "tag_cli")]
struct Args {
    // ---------------- rollout sizing ----------------
    /// Total environment steps to execute across episodes.
    #[arg(long, default_value_t = 10_000)]
    steps: u64,

    /// Base RNG seed (episode e reseeds with base_seed + e). If omitted, a fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Policy: random | pursuit
    #[arg(long, default_value = "pursuit")]
    policy: String,

    /// Force a reset after this many steps in one episode (0 = never truncate).
    /// Mostly relevant for --policy random, which may wander for a long time.
    #[arg(long, default_value_t = 500)]
    max_ep_len: u64,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Print a table row every N steps (only used with --verbosity 2).
    #[arg(long, default_value_t = 2000)]
    report_every: u64,
}

fn main() {
    let args = Args::parse();

    // Episode seeds are derived from this base seed.
    let base_seed = args.seed.unwrap_or(12345);

    // Policy instance (boxed so the CLI can switch implementations at runtime).
    let mut policy: Box<dyn Policy> = match args.policy.as_str() {
        "random" => Box::new(RandomPolicy::new(base_seed.wrapping_add(999))),
        _ => Box::new(PursuitPolicy::new()),
    };

    // Rollout configuration (data only; no logic).
    let cfg = RunnerConfig {
        steps: args.steps,
        base_seed,
        max_ep_len: args.max_ep_len,
        policy_name: args.policy.clone(),
        verbosity: args.verbosity,
        report_every: args.report_every,
    };

    // Reporting sink:
    // - verbosity 2 => periodic table (unless report_every == 0)
    // - otherwise   => no-op
    let sink: Box<dyn RolloutSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        // Header cadence is a formatting detail; cadence in *steps* is handled by Runner.
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run(&mut *policy);

    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: policy={} steps_done={} elapsed={:.3}s steps/s={:.1} episodes_finished={} captures={} truncations={} avg_ep_len={:.2} max_ep_len={} avg_return={:.2} tag_attempts={} (last_ep_len={})",
        report.policy,
        report.steps_done,
        report.elapsed_s,
        report.steps_per_s,
        report.episodes_finished,
        report.captures,
        report.truncations,
        report.avg_ep_len,
        report.max_ep_len,
        report.avg_return,
        report.tag_attempts,
        report.last_ep_len,
    );
}
