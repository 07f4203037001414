//! These structs provide the CLI interface for the coloc CLI.

use crate::report::Format;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// coloc: Summarize the expenses of a shared household.
///
/// The input has one entry per line. Exactly one line declares the overall spend, e.g.
/// `total 1200`. The other lines declare expenses that only some members share, written as the
/// letters of those members followed by the amount, e.g. `fi 45.50` for an expense shared by f
/// and i. The letters are f, s, i and n, in any order. Blank lines are ignored.
///
/// The output gives the total, the common expenses (the total minus every tagged expense), the
/// non-common expenses, and the sum for each combination of members.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    /// The file to read expenses from, or - for standard input.
    input: PathBuf,

    /// The output format. Defaults to the format in the config file, or table.
    #[arg(long)]
    format: Option<Format>,
}

impl Args {
    pub fn new(common: Common, input: impl Into<PathBuf>, format: Option<Format>) -> Self {
        Self {
            common,
            input: input.into(),
            format,
        }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }
}

/// Arguments that control the program rather than the report.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The path to the config file. Defaults to coloc/config.json in your config directory, which
    /// is optional.
    #[arg(long, env = "COLOC_CONFIG")]
    config: Option<PathBuf>,
}

impl Common {
    pub fn new(log_level: LevelFilter, config: Option<PathBuf>) -> Self {
        Self { log_level, config }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}
