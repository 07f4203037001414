//! Folds the lines of an expense stream into a running `Count`.
//!
//! Lines are consumed strictly in order. The first malformed line or second `total` line stops
//! the fold, and no report is produced.

use crate::error::CountError;
use crate::model::{Amount, Entry, Key};
use crate::report::Report;
use crate::Result;
use std::collections::BTreeMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, trace};

/// The accumulated state of an expense stream that has been read up to some line.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Count {
    /// The declared total. Goes from `None` to `Some` once and only once.
    total: Option<Amount>,
    /// Running sum per normalized contributor code.
    buckets: BTreeMap<Key, Amount>,
    /// Sum of every bucket.
    non_commons: Amount,
    /// How many lines have been consumed, blank ones included.
    lines: usize,
}

impl Count {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Option<Amount> {
        self.total
    }

    pub fn buckets(&self) -> &BTreeMap<Key, Amount> {
        &self.buckets
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Classifies one raw line and folds it in. Blank lines only advance the line counter.
    pub fn push_line(&mut self, line: &str) -> std::result::Result<(), CountError> {
        self.lines += 1;
        match classify(line, self.lines)? {
            Some(entry) => self.push(entry),
            None => Ok(()),
        }
    }

    /// Folds one classified entry into the count. Errors are reported against the most recent
    /// line number seen by `push_line`.
    pub fn push(&mut self, entry: Entry) -> std::result::Result<(), CountError> {
        let line_number = self.lines;
        trace!("Line {line_number}: {entry}");
        match entry {
            Entry::Total(amount) => {
                if self.total.is_some() {
                    return Err(CountError::RedefinedTotal { line_number });
                }
                self.total = Some(amount);
            }
            Entry::Expense { code, amount } => {
                let overflow = || CountError::AmountOverflow { line_number };
                // Amounts are never negative so no bucket can exceed the running sum
                self.non_commons = self.non_commons.checked_add(amount).ok_or_else(overflow)?;
                let bucket = self.buckets.entry(code.key()).or_insert(Amount::ZERO);
                *bucket = bucket.checked_add(amount).ok_or_else(overflow)?;
            }
        }
        Ok(())
    }

    /// Ends the stream. Fails if no total was ever declared.
    pub fn finish(self) -> std::result::Result<Report, CountError> {
        let total = self.total.ok_or(CountError::MissingTotal)?;
        debug!(
            "Counted {} lines into {} buckets",
            self.lines(),
            self.buckets.len()
        );
        Ok(Report::build(total, self.buckets, self.non_commons))
    }
}

/// Trims `line` and parses it. Returns `None` for a blank line.
pub(crate) fn classify(
    line: &str,
    line_number: usize,
) -> std::result::Result<Option<Entry>, CountError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Entry>()
        .map(Some)
        .map_err(|e: anyhow::Error| {
            trace!("Line {line_number} rejected: {e:#}");
            CountError::MalformedLine {
                line: trimmed.to_string(),
                line_number,
            }
        })
}

/// Counts an in-memory sequence of lines.
pub fn count_lines<I, S>(lines: I) -> std::result::Result<Report, CountError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = Count::new();
    for line in lines {
        count.push_line(line.as_ref())?;
    }
    count.finish()
}

/// Reads `reader` line by line and counts it. Each line is folded in before the next one is
/// read.
pub async fn count_from_reader<R>(reader: R) -> Result<Report>
where
    R: AsyncBufRead + Unpin,
{
    let mut count = Count::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        count.push_line(&line)?;
    }
    Ok(count.finish()?)
}
