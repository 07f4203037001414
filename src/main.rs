use clap::Parser;
use coloc::args::Args;
use coloc::{commands, Config, CountError, Error, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match parse_diagnostic(&e) {
                Some(diagnostic) => {
                    // Printed directly so that it survives --log-level off
                    eprintln!("{diagnostic}");
                    error!("{diagnostic}");
                }
                None => error!("Exiting with error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::load(args.common().config()).await?;
    match config.path() {
        Some(path) => debug!("Using config from {}", path.display()),
        None => debug!("Using the default config"),
    }
    commands::summarize(&config, args.input(), args.format())
        .await?
        .print();
    Ok(())
}

/// The message for an input line that could not be parsed, `None` for every other error.
fn parse_diagnostic(e: &Error) -> Option<String> {
    match e.downcast_ref::<CountError>() {
        Some(malformed @ CountError::MalformedLine { .. }) => Some(malformed.to_string()),
        _ => None,
    }
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
