use anyhow::{Context, Result};
use neo_csv_to_sqlite::{cli::Cli, ui::LogUi, writer::load_csv};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("Invalid log level: {}", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let options = cli.load_options();
    let mut ui = LogUi::new();

    let summary = load_csv(&options, &mut ui)?;

    let elapsed = start.elapsed();
    println!(
        "Loaded {} records into {} ({:?}) in {:.1}s",
        summary.records,
        summary.target,
        summary.database_path,
        elapsed.as_secs_f64()
    );

    Ok(())
}
