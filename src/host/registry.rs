// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Extension registry - operators, menu entries and preferences panes

use super::prefs::PreferenceStore;
use super::scene::Scene;
use anyhow::{bail, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Menu that file importers hook their entries into
pub const FILE_IMPORT_MENU: &str = "file_import";

/// Outcome of an operator invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    Finished,
    Cancelled,
}

/// Host state handed to an executing operator
pub struct OperatorContext<'a> {
    pub scene: &'a mut Scene,
    pub preferences: &'a PreferenceStore,
}

/// Callable extension point
///
/// Operators are registered under a stable idname and invoked with a
/// JSON property bag.
pub trait Operator {
    fn idname(&self) -> &'static str;
    fn label(&self) -> &'static str;

    /// Glob shown by file dialogs, if the operator works on files
    fn file_filter(&self) -> Option<&'static str> {
        None
    }

    fn execute(&self, ctx: &mut OperatorContext<'_>, props: &Value) -> OperatorStatus;
}

/// Descriptive metadata an add-on registers about itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonInfo {
    pub name: String,
    pub description: String,
    pub author: String,
    pub version: (u32, u32),
    pub location: String,
    pub category: String,
}

/// Entry drawn in a host menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub operator: String,
    pub label: String,
}

/// Preferences pane registered by an add-on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesPane {
    pub addon: String,
    pub title: String,
}

/// Registry of everything add-ons hook into the host
pub struct ExtensionRegistry {
    operators: HashMap<String, Box<dyn Operator>>,
    menus: HashMap<String, Vec<MenuEntry>>,
    preferences_panes: HashMap<String, PreferencesPane>,
    addons: HashMap<String, AddonInfo>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            operators: HashMap::new(),
            menus: HashMap::new(),
            preferences_panes: HashMap::new(),
            addons: HashMap::new(),
        }
    }

    /// Register an operator under its idname
    ///
    /// Registering the same idname twice is an error.
    pub fn add_operator(&mut self, operator: Box<dyn Operator>) -> Result<()> {
        let idname = operator.idname().to_string();
        if self.operators.contains_key(&idname) {
            bail!("Operator already registered: {}", idname);
        }
        self.operators.insert(idname, operator);
        Ok(())
    }

    /// Remove an operator, reporting whether it was registered
    pub fn remove_operator(&mut self, idname: &str) -> bool {
        self.operators.remove(idname).is_some()
    }

    pub fn operator(&self, idname: &str) -> Option<&dyn Operator> {
        self.operators.get(idname).map(|operator| operator.as_ref())
    }

    pub fn has_operator(&self, idname: &str) -> bool {
        self.operators.contains_key(idname)
    }

    /// Append a menu entry, deduplicating on the operator idname
    pub fn append_menu_entry(&mut self, menu: &str, entry: MenuEntry) {
        let entries = self.menus.entry(menu.to_string()).or_default();
        if entries.iter().any(|existing| existing.operator == entry.operator) {
            return;
        }
        entries.push(entry);
    }

    /// Remove a menu entry, reporting whether it was present
    pub fn remove_menu_entry(&mut self, menu: &str, operator: &str) -> bool {
        match self.menus.get_mut(menu) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|entry| entry.operator != operator);
                entries.len() != before
            }
            None => false,
        }
    }

    pub fn menu_entries(&self, menu: &str) -> &[MenuEntry] {
        self.menus.get(menu).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn add_preferences_pane(&mut self, pane: PreferencesPane) -> Result<()> {
        if self.preferences_panes.contains_key(&pane.addon) {
            bail!("Preferences pane already registered: {}", pane.addon);
        }
        self.preferences_panes.insert(pane.addon.clone(), pane);
        Ok(())
    }

    pub fn remove_preferences_pane(&mut self, addon: &str) -> bool {
        self.preferences_panes.remove(addon).is_some()
    }

    pub fn preferences_pane(&self, addon: &str) -> Option<&PreferencesPane> {
        self.preferences_panes.get(addon)
    }

    pub fn add_addon(&mut self, id: &str, info: AddonInfo) -> Result<()> {
        if self.addons.contains_key(id) {
            bail!("Add-on already registered: {}", id);
        }
        self.addons.insert(id.to_string(), info);
        Ok(())
    }

    pub fn remove_addon(&mut self, id: &str) -> bool {
        self.addons.remove(id).is_some()
    }

    pub fn addon(&self, id: &str) -> Option<&AddonInfo> {
        self.addons.get(id)
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
