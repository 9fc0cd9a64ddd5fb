// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Per-add-on preference values held by the host
//!
//! Values are stored as JSON documents keyed by add-on id. They outlive
//! registration, so an add-on that unregisters and registers again sees
//! its previous settings.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    values: HashMap<String, Value>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Store an add-on's values
    pub fn set<T: Serialize>(&mut self, addon: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).context("Failed to serialize preferences")?;
        self.values.insert(addon.to_string(), value);
        Ok(())
    }

    /// Read an add-on's values, if present and well-formed
    pub fn get<T: DeserializeOwned>(&self, addon: &str) -> Option<T> {
        self.values
            .get(addon)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn contains(&self, addon: &str) -> bool {
        self.values.contains_key(addon)
    }
}
