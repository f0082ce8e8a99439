use std::time::{Duration, Instant};

/// Durations of the two phases of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimingRecord {
    /// Column binding and other setup before the first row.
    pub initialization: Duration,
    /// The row loop.
    pub analysis: Duration,
}

impl TimingRecord {
    pub fn initialization_us(&self) -> u128 {
        self.initialization.as_micros()
    }

    pub fn analysis_us(&self) -> u128 {
        self.analysis.as_micros()
    }
}

/// Monotonic phase marks: init start, scan start, scan end.
#[derive(Debug, Clone, Copy)]
pub struct PhaseClock {
    init_start: Instant,
    scan_start: Option<Instant>,
}

impl PhaseClock {
    pub fn start() -> Self {
        Self {
            init_start: Instant::now(),
            scan_start: None,
        }
    }

    pub fn mark_scan_start(&mut self) {
        self.scan_start = Some(Instant::now());
    }

    /// Close the analysis phase. Without a scan-start mark the whole span is
    /// counted as initialization.
    pub fn finish(self) -> TimingRecord {
        let end = Instant::now();
        let scan_start = self.scan_start.unwrap_or(end);
        TimingRecord {
            initialization: scan_start.saturating_duration_since(self.init_start),
            analysis: end.saturating_duration_since(scan_start),
        }
    }
}
