// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Add-on module - registration of the OpenSCAD importer
//!
//! The add-on is deliberately thin: OpenSCAD does all geometry work, the
//! host does all scene work. Registration hooks the import operator, a
//! file menu entry and a preferences pane into the host.

mod openscad;
mod operator;
mod prefs;

pub use openscad::{is_openscad_available, run_openscad};
pub use operator::{
    import_scad_file, ImportProps, ScadImport, FILENAME_EXT, FILTER_GLOB, IDNAME, LABEL,
};
pub use prefs::{ImporterPreferences, CONFIG_FILE};

use crate::host::{AddonInfo, Host, MenuEntry, PreferencesPane, FILE_IMPORT_MENU};
use anyhow::Result;

/// Add-on id, also the key of its preference values
pub const ADDON_ID: &str = "scadport";

/// Label of the file import menu entry
pub const MENU_LABEL: &str = "OpenSCAD (.scad)";

fn addon_info() -> AddonInfo {
    AddonInfo {
        name: "OpenSCAD importer".to_string(),
        description: "Imports OpenSCAD (.scad) files.".to_string(),
        author: "Scadport Developers".to_string(),
        version: (1, 2),
        location: "File > Import".to_string(),
        category: "Import-Export".to_string(),
    }
}

/// Register the importer with the host
///
/// Seeds the host preference store from `scadport.toml` and the
/// `OPENSCAD_PATH` environment variable unless values are already
/// present.
pub fn register(host: &mut Host) -> Result<()> {
    host.registry.add_addon(ADDON_ID, addon_info())?;
    host.registry.add_operator(Box::new(ScadImport))?;

    host.registry.append_menu_entry(
        FILE_IMPORT_MENU,
        MenuEntry {
            operator: IDNAME.to_string(),
            label: MENU_LABEL.to_string(),
        },
    );

    host.registry.add_preferences_pane(PreferencesPane {
        addon: ADDON_ID.to_string(),
        title: "OpenSCAD Importer".to_string(),
    })?;

    if !host.preferences.contains(ADDON_ID) {
        ImporterPreferences::load()?.write_to_store(&mut host.preferences)?;
    }

    Ok(())
}

/// Unregister the importer
///
/// Preference values stay in the host store, so a later register sees
/// them again.
pub fn unregister(host: &mut Host) {
    host.registry.remove_preferences_pane(ADDON_ID);
    host.registry.remove_menu_entry(FILE_IMPORT_MENU, IDNAME);
    host.registry.remove_operator(IDNAME);
    host.registry.remove_addon(ADDON_ID);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_unregister() -> Result<()> {
        let mut host = Host::new();
        register(&mut host)?;

        assert!(host.registry.has_operator(IDNAME));
        assert_eq!(host.registry.menu_entries(FILE_IMPORT_MENU).len(), 1);
        assert!(host.registry.preferences_pane(ADDON_ID).is_some());

        let info = host.registry.addon(ADDON_ID).unwrap();
        assert_eq!(info.name, "OpenSCAD importer");
        assert_eq!(info.version, (1, 2));

        unregister(&mut host);

        assert!(!host.registry.has_operator(IDNAME));
        assert!(host.registry.menu_entries(FILE_IMPORT_MENU).is_empty());
        assert!(host.registry.preferences_pane(ADDON_ID).is_none());
        assert!(host.registry.addon(ADDON_ID).is_none());
        Ok(())
    }

    #[test]
    fn test_double_register_rejected() -> Result<()> {
        let mut host = Host::new();
        register(&mut host)?;
        assert!(register(&mut host).is_err());
        Ok(())
    }
}
