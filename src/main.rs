use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use colscan::engine::core::table::TableFile;
use colscan::engine::query::{Reporter, ScanOptions, run_and_report};
use colscan::logging;
use colscan::shared::config::{load_settings, load_settings_from};

#[derive(Parser)]
#[command(name = "colscan")]
#[command(about = "Momentum-magnitude histogram over a columnar table file", long_about = None)]
struct Args {
    /// Table file to scan
    path: Option<PathBuf>,

    /// Any value enables the I/O profiler
    profile: Option<String>,

    /// Any value enables the full histogram listing
    show: Option<String>,

    /// Table to scan (defaults to query.table from config)
    #[arg(long)]
    table: Option<String>,

    /// Number of passes (defaults to query.passes from config)
    #[arg(long)]
    passes: Option<u32>,

    /// Config file, without or with extension
    #[arg(long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let Some(path) = args.path.as_ref() else {
        eprintln!("No file provided");
        std::process::exit(1);
    };

    let settings = match args.config.as_deref() {
        Some(config_path) => load_settings_from(config_path),
        None => load_settings(),
    }
    .context("failed to load configuration")?;
    logging::init(&settings.logging)?;

    let options = ScanOptions::from_config(&settings.query).with_context(|| {
        format!("unusable bucket width {}", settings.query.bucket_width)
    })?;
    let table_name = args.table.as_deref().unwrap_or(&settings.query.table);
    let passes = args.passes.unwrap_or(settings.query.passes);
    let reporter = Reporter::new(args.show.is_some());
    let profiled = args.profile.is_some();

    let file = TableFile::open(path).inspect_err(|e| e.log_error())?;
    let table = file.table(table_name).inspect_err(|e| e.log_error())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", file.describe())?;
    write!(out, "{}", table.describe())?;

    info!(
        target: "colscan::main",
        path = %path.display(),
        table = table_name,
        passes,
        profiled,
        "Starting scan passes"
    );
    for i in 0..passes {
        let started = Instant::now();
        run_and_report(&table, &options, profiled, &reporter, &mut out)
            .inspect_err(|e| e.log_error())?;
        writeln!(out, "run {} total time: {}ms", i, started.elapsed().as_millis())?;
    }
    out.flush()?;
    Ok(())
}
