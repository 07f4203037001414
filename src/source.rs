//! Opens the stream of expense lines: a file, or standard input when the path is `-`.

use crate::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::debug;

/// The path that stands for standard input.
pub const STDIN: &str = "-";

/// A buffered, single-pass source of lines.
pub type LineSource = Box<dyn AsyncBufRead + Unpin + Send>;

/// Opens `input` for line-by-line reading.
pub async fn open(input: &Path) -> Result<LineSource> {
    if is_stdin(input) {
        debug!("Reading expenses from standard input");
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }
    let file = File::open(input)
        .await
        .with_context(|| format!("Unable to open {}", input.display()))?;
    debug!("Reading expenses from {}", input.display());
    Ok(Box::new(BufReader::new(file)))
}

/// Only the bare `-` means stdin, a path such as `./-` names a file.
fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == STDIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncBufReadExt;

    #[tokio::test]
    async fn test_open_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("expenses.txt");
        tokio::fs::write(&path, "total 10\nf 2\n").await.unwrap();

        let mut lines = open(&path).await.unwrap().lines();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("total 10"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("f 2"));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let err = open(&path).await.err().unwrap();
        assert!(err.to_string().starts_with("Unable to open"), "{err}");
    }

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("./-")));
        assert!(!is_stdin(Path::new("--")));
        assert!(!is_stdin(Path::new("expenses.txt")));
    }

    #[tokio::test]
    async fn test_open_stdin() {
        let dir = TempDir::new().unwrap();
        assert!(!dir.path().join(STDIN).exists());
        // Does not touch the filesystem, so no file named "-" is needed
        assert!(open(Path::new(STDIN)).await.is_ok());
    }

    #[tokio::test]
    async fn test_open_file_named_dash() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STDIN);
        tokio::fs::write(&path, "total 3\n").await.unwrap();

        let mut lines = open(&path).await.unwrap().lines();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("total 3"));
    }
}
