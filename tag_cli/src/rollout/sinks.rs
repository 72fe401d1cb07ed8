// tag_cli/src/rollout/sinks.rs
#![forbid(unsafe_code)]

/// One periodic row emitted by the runner.
///
/// Transport struct: runner/stats compute fields, sinks only format/emit.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub step: u64,
    pub steps_total: u64,

    pub sps: f64,

    pub episodes_finished: u64,
    pub captures: u64,
    pub truncations: u64,

    pub avg_ep_len: f64,
    pub max_ep_len: u64,
    pub avg_return: f64,

    pub tag_attempts: u64,
}

/// Sink interface for periodic reporting.
pub trait RolloutSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>);
}

/// Default sink: does nothing.
#[derive(Default)]
pub struct NoopSink;

impl RolloutSink for NoopSink {
    fn on_report_row(&mut self, _row: &ReportRow, _pb: Option<&indicatif::ProgressBar>) {}
}

/// Human-readable periodic table sink.
///
/// Cadence (every N steps) is handled by Runner. This sink prints whenever called.
pub struct TableSink {
    header_every: u64,
    rows_printed: u64,
}

impl TableSink {
    const DEFAULT_HEADER_EVERY: u64 = 20;

    /// If `header_every == 0`, a reasonable default is used.
    pub fn new(header_every: u64) -> Self {
        Self {
            header_every: if header_every == 0 {
                Self::DEFAULT_HEADER_EVERY
            } else {
                header_every
            },
            rows_printed: 0,
        }
    }

    fn header_line(&self) -> String {
        // Note: keep widths aligned with row_line() below.
        format!(
            "{:>21} {:>9} {:>6} {:>8} {:>8} {:>9} {:>8} {:>10} {:>8}",
            "step/total",
            "sps",
            "eps",
            "captures",
            "truncs",
            "avg_ep",
            "max_ep",
            "avg_ret",
            "tags",
        )
    }

    fn sep_line(&self) -> String {
        "-".repeat(self.header_line().len())
    }

    fn row_line(&self, r: &ReportRow) -> String {
        format!(
            "{:>10}/{:<10} {:>9.1} {:>6} {:>8} {:>8} {:>9.1} {:>8} {:>10.2} {:>8}",
            r.step,
            r.steps_total,
            r.sps,
            r.episodes_finished,
            r.captures,
            r.truncations,
            r.avg_ep_len,
            r.max_ep_len,
            r.avg_return,
            r.tag_attempts,
        )
    }
}

impl RolloutSink for TableSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>) {
        let mut lines: Vec<String> = Vec::new();

        if self.rows_printed == 0 || (self.rows_printed % self.header_every == 0) {
            lines.push(self.header_line());
            lines.push(self.sep_line());
        }

        lines.push(self.row_line(row));
        self.rows_printed += 1;

        if let Some(pb) = pb {
            for l in lines {
                pb.println(l);
            }
        } else {
            for l in lines {
                println!("{l}");
            }
        }
    }
}
