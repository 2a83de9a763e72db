//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - pulls the full day-by-day intensity history
//! - writes the aggregated TSV export

use clap::Parser;

use crate::cli::Cli;
use crate::data::IntensityClient;
use crate::domain::PullConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `carbon-pull` binary.
pub fn run() -> Result<(), AppError> {
    init_logger();

    // clap's own error path exits with status 2; the usage contract here is
    // status 1, so parse failures fold into the normal error channel. Help
    // and version requests stay on stdout with a clean exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => return Err(AppError::new(1, err.to_string())),
        Err(err) => {
            let _ = err.print();
            return Ok(());
        }
    };

    let config = PullConfig::default();
    let client = IntensityClient::new(&config)?;
    let records = pipeline::pull_all_days(&client, &config)?;

    log::info!(
        "Pulled {} intervals; writing {}",
        records.len(),
        cli.output.display()
    );
    crate::io::export::write_intensity_tsv(&cli.output, &records)?;

    Ok(())
}

fn init_logger() {
    // Per-day progress is the tool's main feedback; default the filter to
    // info so a plain run shows it, while RUST_LOG still takes precedence.
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
