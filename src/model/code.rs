use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The letters that may appear in a contributor code. Each one stands for a member of the
/// household.
pub const ALPHABET: [char; 4] = ['f', 's', 'i', 'n'];

/// Returns true if `c` is one of the contributor letters.
pub fn is_member(c: char) -> bool {
    ALPHABET.contains(&c)
}

/// A validated contributor code as written on an expense line, e.g. `if`. The letter order is
/// kept as written; use `key` to get the grouping form.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ContributorCode(String);

impl ContributorCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical grouping key for this code.
    pub fn key(&self) -> Key {
        Key::normalize(&self.0)
    }
}

impl FromStr for ContributorCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            anyhow::bail!("A contributor code cannot be empty");
        }
        if let Some(c) = s.chars().find(|c| !is_member(*c)) {
            anyhow::bail!("'{c}' is not a contributor code letter, expected one of f, s, i, n");
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ContributorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The bucket that expenses accumulate into: a contributor code with its letters sorted, so that
/// `fi` and `if` are the same key.
///
/// ```
/// # use coloc::model::Key;
/// assert_eq!(Key::normalize("nif"), Key::normalize("fin"));
/// assert_eq!(Key::normalize("nif").as_str(), "fin");
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Sorts the letters of `code` into ascending code-point order.
    pub fn normalize(code: &str) -> Self {
        let mut letters: Vec<char> = code.chars().collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The distinct letters in this key, in key order.
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        let mut previous = None;
        self.0.chars().filter(move |c| {
            let fresh = previous != Some(*c);
            previous = Some(*c);
            fresh
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
