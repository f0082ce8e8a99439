use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::source::MemoryTable;

/// Ten hand-picked momenta hitting bucket edges, ties and the zero bucket.
///
/// Expected buckets at width 10000: `0 -> 2, 10000 -> 4, 20000 -> 2,
/// 30000 -> 1, 100000 -> 1`.
pub fn default_momenta() -> Vec<[f64; 3]> {
    vec![
        [6000.0, 8000.0, 0.0],
        [0.0, 0.0, 0.0],
        [3000.0, 4000.0, 0.0],
        [1.0, 2.0, 2.0],
        [12000.0, 16000.0, 0.0],
        [-6000.0, -8000.0, 0.0],
        [100000.0, 0.0, 0.0],
        [0.0, 0.0, 14999.0],
        [0.0, 0.0, 15000.0],
        [0.0, 25000.0, 0.0],
    ]
}

pub fn random_momenta(rows: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            [
                rng.gen_range(-60_000.0..60_000.0),
                rng.gen_range(-60_000.0..60_000.0),
                rng.gen_range(-120_000.0..120_000.0),
            ]
        })
        .collect()
}

pub(crate) fn split_columns(rows: &[[f64; 3]]) -> [Vec<f64>; 3] {
    let mut columns = [
        Vec::with_capacity(rows.len()),
        Vec::with_capacity(rows.len()),
        Vec::with_capacity(rows.len()),
    ];
    for row in rows {
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(*value);
        }
    }
    columns
}

pub struct MemoryTableFactory {
    names: [String; 3],
    rows: Vec<[f64; 3]>,
    omit: Option<String>,
    with_event_numbers: bool,
}

impl MemoryTableFactory {
    pub fn new() -> Self {
        Self {
            names: ["H1_PX".into(), "H1_PY".into(), "H1_PZ".into()],
            rows: default_momenta(),
            omit: None,
            with_event_numbers: false,
        }
    }

    pub fn with_rows(mut self, rows: Vec<[f64; 3]>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_random_rows(mut self, rows: usize, seed: u64) -> Self {
        self.rows = random_momenta(rows, seed);
        self
    }

    pub fn with_names(mut self, names: [&str; 3]) -> Self {
        self.names = names.map(|n| n.to_string());
        self
    }

    pub fn without_column(mut self, name: &str) -> Self {
        self.omit = Some(name.to_string());
        self
    }

    /// Adds an integer `eventNumber` column counting from zero.
    pub fn with_event_numbers(mut self) -> Self {
        self.with_event_numbers = true;
        self
    }

    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    pub fn create(self) -> MemoryTable {
        let row_count = self.rows.len();
        let mut table = MemoryTable::new();
        for (name, values) in self.names.iter().zip(split_columns(&self.rows)) {
            if self.omit.as_deref() == Some(name.as_str()) {
                continue;
            }
            table = table
                .with_f64_column(name, values)
                .expect("factory columns share one length");
        }
        if self.with_event_numbers {
            table = table
                .with_i64_column("eventNumber", (0..row_count as i64).collect())
                .expect("factory columns share one length");
        }
        table
    }
}
