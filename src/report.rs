//! The summary derived from a finished `Count`, and its console renderings.

use crate::model::{Amount, Key};
use crate::{Config, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

const TOTAL_LABEL: &str = "Dépenses totales";
const COMMONS_LABEL: &str = "Dépenses communes";
const NON_COMMONS_LABEL: &str = "Dépenses non communes";
const CODE_HEADER: &str = "Code";
const AMOUNT_HEADER: &str = "Montant";
const MEMBERS_HEADER: &str = "Membres";

/// How a `Report` is written to the console.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Labelled totals followed by a table of the buckets.
    #[default]
    Table,
    /// The report as pretty-printed JSON.
    Json,
}

serde_plain::derive_display_from_serialize!(Format);
serde_plain::derive_fromstr_from_deserialize!(Format);

/// The split of the declared total into common and non-common spending.
///
/// `commons` is `total - non_commons` and is negative when the tagged expenses exceed the total.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Report {
    total: Amount,
    commons: Amount,
    non_commons: Amount,
    buckets: BTreeMap<Key, Amount>,
}

impl Report {
    /// `non_commons` must be the sum of `buckets`, which the caller has already computed without
    /// overflow.
    pub(crate) fn build(
        total: Amount,
        buckets: BTreeMap<Key, Amount>,
        non_commons: Amount,
    ) -> Self {
        // Both operands are in [0, MAX] so the difference always fits
        let commons = Amount::new(total.value() - non_commons.value());
        Self {
            total,
            commons,
            non_commons,
            buckets,
        }
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn commons(&self) -> Amount {
        self.commons
    }

    pub fn non_commons(&self) -> Amount {
        self.non_commons
    }

    pub fn buckets(&self) -> &BTreeMap<Key, Amount> {
        &self.buckets
    }

    /// Renders the report in the given `format`. Member names from `config` are shown next to
    /// each bucket in the table format.
    pub fn render(&self, format: Format, config: &Config) -> Result<String> {
        match format {
            Format::Table => Ok(self.table(config)),
            Format::Json => {
                serde_json::to_string_pretty(self).context("Unable to serialize the report")
            }
        }
    }

    fn table(&self, config: &Config) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{TOTAL_LABEL} : {}", self.total);
        let _ = writeln!(out, "{COMMONS_LABEL} : {}", self.commons);
        let _ = writeln!(out, "{NON_COMMONS_LABEL} : {}", self.non_commons);
        out.push('\n');

        let rows: Vec<(String, String, Option<String>)> = self
            .buckets
            .iter()
            .map(|(key, amount)| {
                (
                    key.to_string(),
                    amount.to_string(),
                    config.member_names(key),
                )
            })
            .collect();
        let show_members = rows.iter().any(|(_, _, names)| names.is_some());

        let code_width = rows
            .iter()
            .map(|(code, _, _)| code.chars().count())
            .chain([CODE_HEADER.len()])
            .max()
            .unwrap_or_default();
        let amount_width = rows
            .iter()
            .map(|(_, amount, _)| amount.chars().count())
            .chain([AMOUNT_HEADER.len()])
            .max()
            .unwrap_or_default();

        let header = format!("{CODE_HEADER:<code_width$}  {AMOUNT_HEADER:>amount_width$}");
        if show_members {
            let _ = writeln!(out, "{header}  {MEMBERS_HEADER}");
        } else {
            let _ = writeln!(out, "{header}");
        }

        for (code, amount, names) in rows {
            let row = format!("{code:<code_width$}  {amount:>amount_width$}");
            match names {
                Some(names) if show_members => {
                    let _ = writeln!(out, "{row}  {names}");
                }
                _ => {
                    let _ = writeln!(out, "{row}");
                }
            }
        }
        out
    }
}
