pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The ways in which an expense stream can be rejected. Each of these aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    /// A non-blank line did not match `<total|code> <amount>`.
    #[error("Parsing error on line {line_number}: {line}")]
    MalformedLine { line: String, line_number: usize },

    /// The stream ended without a `total` line.
    #[error("No total was declared")]
    MissingTotal,

    /// A second `total` line was found.
    #[error("The total was declared a second time on line {line_number}")]
    RedefinedTotal { line_number: usize },

    /// Adding the amount on this line went beyond what a decimal can hold.
    #[error("The amount on line {line_number} overflows the running sum")]
    AmountOverflow { line_number: usize },
}
