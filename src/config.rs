//! Runtime settings loaded from an optional TOML file.

use crate::{document::DEFAULT_LABEL, error::Result};
use anyhow::Context;
use rust_stemmers::Algorithm;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "sonnet-search.toml";

/// Snowball stemmer languages offered for the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Dutch,
    French,
    German,
    Italian,
    Spanish,
}

impl Language {
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::English => Algorithm::English,
            Self::Dutch => Algorithm::Dutch,
            Self::French => Algorithm::French,
            Self::German => Algorithm::German,
            Self::Italian => Algorithm::Italian,
            Self::Spanish => Algorithm::Spanish,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// PoetryDB-shaped JSON file with the corpus records.
    pub corpus: PathBuf,
    /// Heading label preceding each document number.
    pub label: String,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from("data/sonnets.json"),
            label: DEFAULT_LABEL.to_string(),
            language: Language::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings")
    }

    /// Loads `path`, or [`CONFIG_FILE`] from the working directory when `path` is
    /// `None`. Only an explicitly given file has to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(CONFIG_FILE).is_file() => Path::new(CONFIG_FILE),
            None => {
                tracing::debug!("No {} found, using default settings", CONFIG_FILE);
                return Ok(Self::default());
            }
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings at {}", path.display()))?;
        let settings = Self::from_toml(&content)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        tracing::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }
}
