use crate::commands::Out;
use crate::report::{Format, Report};
use crate::{count_from_reader, source, Config, Result};
use std::path::Path;
use tracing::debug;

/// Reads the expense lines at `input` (a path, or `-` for stdin) and summarizes them.
///
/// # Arguments
/// - `config` - Presentation settings such as member names.
/// - `input` - Where to read the lines from.
/// - `format` - Overrides the config's output format when `Some`.
///
/// # Errors
/// - Returns an error if `input` cannot be opened or read.
/// - Returns a `CountError` (wrapped in `anyhow::Error`) if the lines are malformed, declare the
///   total twice, or never declare it.
pub async fn summarize(
    config: &Config,
    input: &Path,
    format: Option<Format>,
) -> Result<Out<Report>> {
    let reader = source::open(input).await?;
    let report = count_from_reader(reader).await?;
    let format = format.unwrap_or(config.format());
    debug!("Rendering report as {format}");
    let message = report.render(format, config)?;
    Ok(Out::new(message, report))
}
