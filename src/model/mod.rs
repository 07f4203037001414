//! Types that represent a line of the expense stream, such as `Entry` and `Amount`.
mod amount;
mod code;
mod entry;

pub use amount::{Amount, AmountError};
pub use code::{is_member, ContributorCode, Key, ALPHABET};
pub use entry::{Entry, TOTAL};
