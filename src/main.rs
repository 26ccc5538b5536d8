use clap::Parser;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use dcmfilter::cli::{run, Args, CliConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = CliConfig::from_args(args);

    // Set up logging
    init_logging(config.is_verbose())?;

    let stdout = std::io::stdout();
    let ok = run(&config, &mut stdout.lock())?;

    if !ok && config.is_strict() {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
}
