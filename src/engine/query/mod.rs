pub mod bucketizer;
pub mod histogram;
pub mod profiler;
pub mod report;
pub mod scan;
pub mod timing;

pub use bucketizer::{Bucketizer, DEFAULT_BUCKET_WIDTH, bucketize, magnitude};
pub use histogram::Histogram;
pub use profiler::{ColumnIoStats, IoPerfStats};
pub use report::Reporter;
pub use scan::{PassOutput, ScanOptions, run_and_report, run_pass};
pub use timing::{PhaseClock, TimingRecord};

#[cfg(test)]
mod histogram_test;
