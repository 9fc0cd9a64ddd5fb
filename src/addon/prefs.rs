// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Importer preferences
//!
//! The only setting is where the OpenSCAD binary lives. Defaults come
//! from `scadport.toml` next to the working directory, overridden by the
//! `OPENSCAD_PATH` environment variable. Once the add-on is registered
//! the effective values live in the host's preference store.

use super::ADDON_ID;
use crate::host::PreferenceStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read for defaults
pub const CONFIG_FILE: &str = "scadport.toml";

/// Preferences of the OpenSCAD importer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImporterPreferences {
    /// OpenSCAD executable path
    pub openscad_path: PathBuf,
}

impl Default for ImporterPreferences {
    fn default() -> Self {
        Self {
            // Resolved through PATH when not configured
            openscad_path: PathBuf::from("openscad"),
        }
    }
}

impl ImporterPreferences {
    /// Load preferences from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let prefs: ImporterPreferences = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(prefs)
    }

    /// Load preferences with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut prefs = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        if let Ok(openscad) = std::env::var("OPENSCAD_PATH") {
            prefs.openscad_path = PathBuf::from(openscad);
        }

        Ok(prefs)
    }

    /// Save preferences to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Read the add-on's values from the host store
    ///
    /// Missing or malformed values fall back to the defaults.
    pub fn from_store(store: &PreferenceStore) -> Self {
        store.get(ADDON_ID).unwrap_or_default()
    }

    /// Write the add-on's values into the host store
    pub fn write_to_store(&self, store: &mut PreferenceStore) -> Result<()> {
        store.set(ADDON_ID, self)
    }
}
