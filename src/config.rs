//! Configuration file handling for coloc.
//!
//! The configuration file is optional. It is looked up at `--config` (or `$COLOC_CONFIG`), and
//! otherwise at `<config dir>/coloc/config.json`, e.g. `~/.config/coloc/config.json` on Linux. It
//! holds the display names of the household members and the default output format.

use crate::model::{is_member, Key};
use crate::report::Format;
use crate::Result;
use anyhow::{bail, ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "coloc";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const MEMBER_SEPARATOR: &str = " + ";

/// The `Config` object holds the settings that change how a report is presented. It never
/// changes how lines are parsed or counted.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Config {
    /// Where the config was loaded from, `None` when the built-in defaults are used.
    path: Option<PathBuf>,
    format: Format,
    members: BTreeMap<char, String>,
}

impl Config {
    /// Loads the configuration.
    ///
    /// - If `explicit` is given, that file must exist and be valid.
    /// - Otherwise the default location is tried, and its absence means the defaults are used.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                bail!("The config file is missing '{}'", path.display())
            }
            return Self::from_file(path).await;
        }
        match default_path() {
            Some(path) if path.is_file() => Self::from_file(&path).await,
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("Unable to determine the config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and validates the config file at `path`.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let config_file = ConfigFile::load(path).await?;
        let mut members = BTreeMap::new();
        for (code, name) in config_file.members {
            let mut chars = code.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) if is_member(c) => c,
                _ => bail!(
                    "Invalid member code '{code}' in {}, expected one of f, s, i, n",
                    path.display()
                ),
            };
            members.insert(letter, name);
        }
        debug!("Loaded config from {}", path.display());
        Ok(Self {
            path: Some(path.to_path_buf()),
            format: config_file.format.unwrap_or_default(),
            members,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn members(&self) -> &BTreeMap<char, String> {
        &self.members
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_member(mut self, code: char, name: impl Into<String>) -> Self {
        self.members.insert(code, name.into());
        self
    }

    /// The names of the members in `key`, joined with ` + `. Letters without a configured name
    /// are shown as-is. Returns `None` when no names are configured at all.
    pub fn member_names(&self, key: &Key) -> Option<String> {
        if self.members.is_empty() {
            return None;
        }
        let names: Vec<String> = key
            .members()
            .map(|c| match self.members.get(&c) {
                Some(name) => name.clone(),
                None => c.to_string(),
            })
            .collect();
        Some(names.join(MEMBER_SEPARATOR))
    }
}

/// `<config dir>/coloc/config.json`, if the platform has a config directory.
pub(crate) fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_JSON))
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "coloc",
///   "config_version": 1,
///   "format": "table",
///   "members": { "f": "Fanny", "s": "Sam", "i": "Ines", "n": "Nico" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "coloc"
    app_name: String,

    /// Configuration file version
    #[serde(default = "default_version")]
    config_version: u8,

    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<Format>,

    /// Display name for each contributor letter
    #[serde(default)]
    members: BTreeMap<String, String>,
}

fn default_version() -> u8 {
    CONFIG_VERSION
}

impl ConfigFile {
    /// Loads a ConfigFile asynchronously from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if it belongs to another app or
    /// a newer version of this one.
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        ensure!(
            config.config_version <= CONFIG_VERSION,
            "Config version {} is unsupported. Is a newer version of coloc available?",
            config.config_version
        );

        Ok(config)
    }
}
