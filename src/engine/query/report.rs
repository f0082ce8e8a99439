use std::io::{self, Write};

use crate::engine::query::histogram::Histogram;
use crate::engine::query::timing::TimingRecord;

/// Renders the result of one pass as plain lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    show_histogram: bool,
}

impl Reporter {
    pub fn new(show_histogram: bool) -> Self {
        Self { show_histogram }
    }

    /// Optional `bucket,count` listing in ascending order, then the summary
    /// and the two timing lines.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        histogram: &Histogram,
        timing: &TimingRecord,
    ) -> io::Result<()> {
        if self.show_histogram {
            for (bucket, count) in histogram.iter() {
                writeln!(out, "{bucket},{count}")?;
            }
        }
        writeln!(
            out,
            "found {} buckets with cnt[0] {}",
            histogram.size(),
            histogram.count_of(0)
        )?;
        writeln!(out, "Runtime-Initialization: {}us", timing.initialization_us())?;
        writeln!(out, "Runtime-Analysis: {}us", timing.analysis_us())?;
        Ok(())
    }
}
