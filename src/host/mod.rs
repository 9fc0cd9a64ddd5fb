// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Host module - the surface add-ons extend
//!
//! A minimal stand-in for the embedding application: a scene graph, an
//! extension registry and a preference store. Add-ons register operators
//! and menu entries against it, and operators run against its scene.

mod prefs;
mod registry;
mod scene;

pub use prefs::PreferenceStore;
pub use registry::{
    AddonInfo, ExtensionRegistry, MenuEntry, Operator, OperatorContext, OperatorStatus,
    PreferencesPane, FILE_IMPORT_MENU,
};
pub use scene::{Mode, ObjectId, Scene, SceneObject};

use anyhow::{Context, Result};
use serde_json::Value;

/// The embedding application
pub struct Host {
    pub scene: Scene,
    pub registry: ExtensionRegistry,
    pub preferences: PreferenceStore,
}

impl Host {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            registry: ExtensionRegistry::new(),
            preferences: PreferenceStore::new(),
        }
    }

    /// Invoke a registered operator with a JSON property bag
    pub fn invoke(&mut self, idname: &str, props: &Value) -> Result<OperatorStatus> {
        let operator = self
            .registry
            .operator(idname)
            .context(format!("Unknown operator: {}", idname))?;

        let mut ctx = OperatorContext {
            scene: &mut self.scene,
            preferences: &self.preferences,
        };

        Ok(operator.execute(&mut ctx, props))
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoke_unknown_operator() {
        let mut host = Host::new();
        let result = host.invoke("import_mesh.missing", &json!({}));
        assert!(result.is_err());
    }
}
