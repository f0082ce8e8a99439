use std::path::{Path, PathBuf};

use crate::engine::core::table::{ColumnSlice, TableFileWriter};
use crate::test_helpers::factories::memory_table_factory::{
    default_momenta, random_momenta, split_columns,
};

/// Writes a single-table file of momenta through `TableFileWriter`.
pub struct TableFileFactory {
    table: String,
    names: [String; 3],
    rows: Vec<[f64; 3]>,
    rows_per_block: usize,
    omit: Option<String>,
    file_name: String,
}

impl TableFileFactory {
    pub fn new() -> Self {
        Self {
            table: "DecayTree".into(),
            names: ["H1_PX".into(), "H1_PY".into(), "H1_PZ".into()],
            rows: default_momenta(),
            rows_per_block: 4,
            omit: None,
            file_name: "decay.cscn".into(),
        }
    }

    pub fn with_table(mut self, name: &str) -> Self {
        self.table = name.to_string();
        self
    }

    pub fn with_rows(mut self, rows: Vec<[f64; 3]>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_random_rows(mut self, rows: usize, seed: u64) -> Self {
        self.rows = random_momenta(rows, seed);
        self
    }

    pub fn with_rows_per_block(mut self, rows_per_block: usize) -> Self {
        self.rows_per_block = rows_per_block;
        self
    }

    pub fn without_column(mut self, name: &str) -> Self {
        self.omit = Some(name.to_string());
        self
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    /// Write the file into `dir` and return its path. Every table also gets
    /// an integer `eventNumber` column.
    pub fn create_in(self, dir: &Path) -> PathBuf {
        let path = dir.join(&self.file_name);
        let [px, py, pz] = split_columns(&self.rows);
        let events: Vec<i64> = (0..self.rows.len() as i64).collect();

        let mut columns: Vec<(&str, ColumnSlice<'_>)> = Vec::new();
        for (name, values) in self.names.iter().zip([&px, &py, &pz]) {
            if self.omit.as_deref() != Some(name.as_str()) {
                columns.push((name.as_str(), ColumnSlice::F64(values)));
            }
        }
        columns.push(("eventNumber", ColumnSlice::I64(&events)));

        let mut writer = TableFileWriter::create(&path).expect("create table file");
        writer
            .add_table(&self.table, &columns, self.rows_per_block)
            .expect("add table");
        writer.finish().expect("finish table file");
        path
    }
}
