use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use colscan::engine::core::table::{Catalog, ColumnSlice, TableFile, TableFileWriter};
use colscan::engine::source::NoopObserver;
use colscan::logging;
use colscan::shared::config::load_settings;

#[derive(Parser)]
#[command(name = "table_tool")]
#[command(about = "Create and inspect colscan table files", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a synthetic momentum table
    Generate {
        path: PathBuf,
        #[arg(long, default_value = "100000")]
        rows: usize,
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Defaults to query.table from config
        #[arg(long)]
        table: Option<String>,
        /// Defaults to storage.rows_per_block from config
        #[arg(long)]
        rows_per_block: Option<usize>,
    },
    /// Print the catalog of a table file
    Inspect {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the values of one column
    Dump {
        path: PathBuf,
        #[arg(long)]
        column: String,
        #[arg(long)]
        table: Option<String>,
        /// Maximum number of rows to print (0 = all)
        #[arg(long, default_value = "20")]
        limit: u64,
    },
}

#[derive(Serialize)]
struct InspectReport<'a> {
    path: String,
    bytes: usize,
    catalog: &'a Catalog,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings().context("failed to load configuration")?;
    logging::init(&settings.logging)?;

    match args.command {
        Command::Generate {
            path,
            rows,
            seed,
            table,
            rows_per_block,
        } => {
            let table = table.unwrap_or_else(|| settings.query.table.clone());
            let rows_per_block = rows_per_block.unwrap_or(settings.storage.rows_per_block);

            // Transverse components around zero, longitudinal one wider.
            let mut rng = StdRng::seed_from_u64(seed);
            let mut px = Vec::with_capacity(rows);
            let mut py = Vec::with_capacity(rows);
            let mut pz = Vec::with_capacity(rows);
            for _ in 0..rows {
                px.push(rng.gen_range(-50_000.0..50_000.0));
                py.push(rng.gen_range(-50_000.0..50_000.0));
                pz.push(rng.gen_range(-200_000.0..200_000.0));
            }
            let events: Vec<i64> = (0..rows as i64).collect();

            let [x, y, z] = &settings.query.columns;
            let columns = [
                (x.as_str(), ColumnSlice::F64(&px)),
                (y.as_str(), ColumnSlice::F64(&py)),
                (z.as_str(), ColumnSlice::F64(&pz)),
                ("eventNumber", ColumnSlice::I64(&events)),
            ];
            let mut writer = TableFileWriter::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            writer.add_table(&table, &columns, rows_per_block)?;
            writer.finish()?;
            println!("wrote {} rows of {} to {}", rows, table, path.display());
        }
        Command::Inspect { path, json } => {
            let file = TableFile::open(&path).inspect_err(|e| e.log_error())?;
            if json {
                let report = InspectReport {
                    path: path.display().to_string(),
                    bytes: file.len(),
                    catalog: file.catalog(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", file.describe());
                for meta in &file.catalog().tables {
                    print!("{}", file.table(&meta.name)?.describe());
                }
            }
        }
        Command::Dump {
            path,
            column,
            table,
            limit,
        } => {
            let table = table.unwrap_or_else(|| settings.query.table.clone());
            let file = TableFile::open(&path).inspect_err(|e| e.log_error())?;
            let table = file.table(&table)?;
            let mut cursor = table.bind_any(&column)?;
            let rows = table.meta().row_count;
            let end = if limit == 0 { rows } else { rows.min(limit) };
            let mut io = NoopObserver;
            println!("row,{}", column);
            for row in 0..end {
                println!("{},{}", row, table.format_at(&mut cursor, row, &mut io)?);
            }
        }
    }
    Ok(())
}
