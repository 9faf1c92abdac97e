// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Defaults loaded from an optional TOML file.
//!
//! # TOML Format
//! ```toml
//! method = "legacy"
//! verbose = true
//! ```

use anyhow::Context;
use std::path::Path;

/// Per-user defaults for flags the caller left unset.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Method applied when `--method` is not given.
    pub method: Option<String>,
    /// Always emit the verbose breakdown.
    #[serde(default)]
    pub verbose: bool,
}

impl Defaults {
    /// Loads defaults from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        let defaults = Self::from_toml(&content)
            .with_context(|| format!("invalid config '{}'", path.display()))?;
        tracing::debug!("loaded defaults from '{}'", path.display());
        Ok(defaults)
    }

    /// Parses defaults from a TOML string.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}
