use crate::model::{Amount, ContributorCode};
use anyhow::Context;
use std::fmt;
use std::str::FromStr;

/// The keyword that declares the overall total.
pub const TOTAL: &str = "total";

/// One classified line of an expense stream.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Entry {
    /// `total <amount>`: the overall spend. Exactly one per stream.
    Total(Amount),
    /// `<code> <amount>`: an expense shared only by the members in `code`.
    Expense { code: ContributorCode, amount: Amount },
}

/// Parses an already-trimmed line of the form `<keyword> <number>`, where the two parts are
/// separated by exactly one space.
impl FromStr for Entry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, number) = s
            .split_once(' ')
            .with_context(|| format!("Expected '<keyword> <amount>', got: {s}"))?;
        let amount: Amount = number
            .parse()
            .with_context(|| format!("Invalid amount in: {s}"))?;
        if keyword == TOTAL {
            return Ok(Entry::Total(amount));
        }
        let code: ContributorCode = keyword
            .parse()
            .with_context(|| format!("Invalid keyword in: {s}"))?;
        Ok(Entry::Expense { code, amount })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Total(amount) => write!(f, "{TOTAL} {}", amount.value()),
            Entry::Expense { code, amount } => write!(f, "{code} {}", amount.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn amount(s: &str) -> Amount {
        Amount::new(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_total() {
        let entry: Entry = "total 100".parse().unwrap();
        assert_eq!(entry, Entry::Total(amount("100")));
    }

    #[test]
    fn test_expense() {
        let entry: Entry = "if 12.5".parse().unwrap();
        match entry {
            Entry::Expense { code, amount: a } => {
                assert_eq!(code.as_str(), "if");
                assert_eq!(code.key().as_str(), "fi");
                assert_eq!(a, amount("12.5"));
            }
            other => panic!("expected an expense, got {other:?}"),
        }
    }

    #[test]
    fn test_number_forms() {
        for (line, expected) in [("f .45", "0.45"), ("f 123.", "123"), ("n 0", "0")] {
            let entry: Entry = line.parse().unwrap();
            match entry {
                Entry::Expense { amount: a, .. } => assert_eq!(a, amount(expected), "{line}"),
                other => panic!("expected an expense, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejected_lines() {
        let bad = [
            "xyz 5",       // Unknown letters
            "total",       // No amount
            "f",           // No amount
            "f  5",        // Two spaces
            "f\t5",        // Wrong separator
            "f 5 6",       // Extra token
            "f 5 s",       // Extra token
            "f .",         // Bare decimal point
            "f -5",        // Sign
            "f abc",       // Not a number
            "Total 5",     // Case sensitive
            "F 5",         // Case sensitive
            "totals 5",    // Not the keyword, not a code
            " 5",          // Empty keyword
            "fi5",         // No separator
        ];
        for line in bad {
            assert!(line.parse::<Entry>().is_err(), "'{line}' should be rejected");
        }
    }

    #[test]
    fn test_display() {
        let entry: Entry = "nf 7.25".parse().unwrap();
        assert_eq!(entry.to_string(), "nf 7.25");
    }
}
