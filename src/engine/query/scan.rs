use std::io::Write;

use tracing::{Level, debug, info, warn};

use crate::engine::errors::ScanError;
use crate::engine::query::bucketizer::Bucketizer;
use crate::engine::query::histogram::Histogram;
use crate::engine::query::profiler::IoPerfStats;
use crate::engine::query::report::Reporter;
use crate::engine::query::timing::{PhaseClock, TimingRecord};
use crate::engine::source::column_reader::ColumnReader;
use crate::engine::source::observer::{IoObserver, NoopObserver};
use crate::shared::config::QueryConfig;

/// What one pass reads and how it buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    /// Momentum components in (x, y, z) order.
    pub columns: [String; 3],
    pub bucketizer: Bucketizer,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            columns: QueryConfig::default().columns,
            bucketizer: Bucketizer::default(),
        }
    }
}

impl ScanOptions {
    /// `None` when the configured bucket width is not usable.
    pub fn from_config(cfg: &QueryConfig) -> Option<Self> {
        Some(Self {
            columns: cfg.columns.clone(),
            bucketizer: Bucketizer::new(cfg.bucket_width)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutput {
    pub histogram: Histogram,
    pub timing: TimingRecord,
    pub rows: u64,
}

/// One full, ordered pass over `source`.
///
/// Initialization covers column binding; analysis covers the row loop. Any
/// read failure aborts the pass with no partial histogram.
pub fn run_pass<R: ColumnReader>(
    source: &R,
    options: &ScanOptions,
    io: &mut dyn IoObserver,
) -> Result<PassOutput, ScanError> {
    let mut clock = PhaseClock::start();

    let [x_name, y_name, z_name] = &options.columns;
    let mut px = source.bind_column(x_name)?;
    let mut py = source.bind_column(y_name)?;
    let mut pz = source.bind_column(z_name)?;
    let rows = source.row_count();

    debug!(
        target: "engine::query::scan",
        rows,
        width = options.bucketizer.width(),
        "Columns bound, starting scan"
    );

    clock.mark_scan_start();
    io.on_scan_start(rows);

    let mut histogram = Histogram::new();
    for row in 0..rows {
        let x = source.read_at(&mut px, row, io)?;
        let y = source.read_at(&mut py, row, io)?;
        let z = source.read_at(&mut pz, row, io)?;
        match options.bucketizer.bucket_of(x, y, z) {
            Some(bucket) => histogram.increment(bucket),
            None => {
                if tracing::enabled!(Level::DEBUG) {
                    debug!(target: "engine::query::scan", row, x, y, z, "Row has no valid bucket");
                }
                histogram.increment_invalid();
            }
        }
    }

    let timing = clock.finish();
    io.on_scan_end(timing.analysis);

    if histogram.invalid() > 0 {
        warn!(
            target: "engine::query::scan",
            invalid = histogram.invalid(),
            rows,
            "Rows with non-finite or out-of-range magnitude were not bucketed"
        );
    }
    info!(
        target: "engine::query::scan",
        rows,
        buckets = histogram.size(),
        init_us = timing.initialization_us() as u64,
        analysis_us = timing.analysis_us() as u64,
        "Scan pass completed"
    );

    Ok(PassOutput {
        histogram,
        timing,
        rows,
    })
}

/// Run one pass and write its report to `out`. With `profiled` set, the pass
/// is recorded by an `IoPerfStats` whose summary follows the report.
pub fn run_and_report<R: ColumnReader, W: Write>(
    source: &R,
    options: &ScanOptions,
    profiled: bool,
    reporter: &Reporter,
    out: &mut W,
) -> Result<PassOutput, ScanError> {
    let output = if profiled {
        let mut stats = IoPerfStats::new();
        let output = run_pass(source, options, &mut stats)?;
        reporter.render(out, &output.histogram, &output.timing)?;
        stats.write_summary(out)?;
        output
    } else {
        let output = run_pass(source, options, &mut NoopObserver)?;
        reporter.render(out, &output.histogram, &output.timing)?;
        output
    };
    Ok(output)
}
