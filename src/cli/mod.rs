//! Command-line interface module

use clap::Parser;
use std::io::Write;

use crate::error::FilterResult;
use crate::matching::Criteria;
use crate::pipeline::{FilterConfig, FilterEngine};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "dcmfilter")]
#[command(about = "DCM filter. Prints matching DCM json files for given keys and values.")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// DCM keys to be filtered (comma-separated)
    #[arg(long, allow_negative_numbers = true)]
    pub keys: String,

    /// DCM values to be filtered (comma-separated, paired with --keys by position)
    #[arg(long, allow_negative_numbers = true)]
    pub values: String,

    /// Directory holding DCM json files
    #[arg()]
    pub folder: String,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Exit with a non-zero status when the run fails
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub filter_config: FilterConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> Self {
        let filter_config = FilterConfig::new().with_follow_links(args.follow_links);

        Self {
            args,
            filter_config,
        }
    }

    /// Check if a failed run should exit non-zero
    pub fn is_strict(&self) -> bool {
        self.args.strict
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Build criteria and collect matching paths
    pub fn filter(&self) -> FilterResult<Vec<String>> {
        let criteria = Criteria::from_comma_separated(&self.args.keys, &self.args.values)?;
        tracing::debug!(criteria = criteria.len(), folder = %self.args.folder, "starting filter run");

        FilterEngine::new(self.filter_config.clone()).filter_files(&self.args.folder, &criteria)
    }
}

/// Run the filter and write the report to `out`.
///
/// Matching paths go one per line; a failed run writes a single `Error:` line
/// instead. Returns `Ok(false)` when the run failed.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> std::io::Result<bool> {
    match config.filter() {
        Ok(paths) => {
            for path in paths {
                writeln!(out, "{}", path)?;
            }
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{}", e.user_message())?;
            Ok(false)
        }
    }
}
