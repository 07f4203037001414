pub mod args;
pub mod commands;
mod config;
mod count;
mod error;
pub mod model;
mod report;
mod source;

pub use config::Config;
pub use count::{count_from_reader, count_lines, Count};
pub use error::{CountError, Error, Result};
pub use report::{Format, Report};
