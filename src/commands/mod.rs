//! Command handlers for the coloc CLI.

mod summarize;

use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

pub use summarize::summarize;

/// The output type for a command: the text to show the user and, optionally, the structured data
/// it was rendered from.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// The text that is printed to stdout.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to stdout and the structured data (if it exists) as JSON to `debug!`.
    pub fn print(&self) {
        print!("{}", self.message);
        if !self.message.ends_with('\n') {
            println!();
        }
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string(structure) {
                debug!("Command output: {json}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_new() {
        let out = Out::new("two", vec![1, 2]);
        assert_eq!(out.message(), "two");
        assert_eq!(out.structure(), Some(&vec![1, 2]));
    }
}
