//! Listing and sorting options, loadable from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Inputs to one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ListOptions {
    /// `|`-delimited extension filter such as `"sfc|.smc|zip"`. `None` accepts every file.
    pub extensions: Option<String>,
    /// List subdirectories.
    pub include_dirs: bool,
    /// Keep recognised archives even when their extension is not in the filter.
    pub include_compressed: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self { extensions: None, include_dirs: true, include_compressed: true }
    }
}

impl ListOptions {
    pub fn with_extensions<S: Into<String>>(mut self, extensions: S) -> Self {
        self.extensions = Some(extensions.into());
        self
    }

    pub fn with_include_dirs(mut self, include: bool) -> Self {
        self.include_dirs = include;
        self
    }

    pub fn with_include_compressed(mut self, include: bool) -> Self {
        self.include_compressed = include;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Case-insensitive comparison of the whole path.
    #[default]
    Lexical,
    /// Like `Lexical`, but digit runs compare by numeric value.
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SortOptions {
    pub directories_first: bool,
    pub order: SortOrder,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self { directories_first: true, order: SortOrder::Lexical }
    }
}

/// Complete configuration for a listing request. `sort: None` keeps enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListerConfig {
    pub list: ListOptions,
    pub sort: Option<SortOptions>,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self { list: ListOptions::default(), sort: Some(SortOptions::default()) }
    }
}

impl ListerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parsing lister configuration")
    }

    /// Read a JSON configuration file; missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading lister configuration at {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("invalid lister configuration in {}", path.display()))
    }
}
