// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! The `.scad` import operator

use super::openscad;
use super::prefs::ImporterPreferences;
use crate::cli::Reporter;
use crate::geometry::uniform_scale;
use crate::host::{Mode, ObjectId, Operator, OperatorContext, OperatorStatus, Scene};
use crate::io;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const IDNAME: &str = "import_mesh.scad";
pub const LABEL: &str = "Import OpenSCAD";
pub const FILENAME_EXT: &str = ".scad";
pub const FILTER_GLOB: &str = "*.scad";

/// Properties of an import invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportProps {
    /// Path of the `.scad` file to import
    pub filepath: PathBuf,
    /// Uniform scale applied to the imported mesh
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// Import a `.scad` file into the scene
///
/// Renders through the external OpenSCAD binary into a temporary STL,
/// reads it back, then links it as a new object scaled uniformly. The
/// temporary directory is removed as soon as the STL is read.
pub fn import_scad_file(
    scene: &mut Scene,
    prefs: &ImporterPreferences,
    filepath: &Path,
    scale: f64,
) -> Result<ObjectId> {
    let stl = {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let stl_path = temp_dir.path().join("tempexport.stl");

        openscad::run_openscad(&prefs.openscad_path, filepath, &stl_path)?;
        io::read_stl(&stl_path)?
    };

    if scene.can_set_mode() {
        scene.set_mode(Mode::Object);
    }
    if scene.can_select() {
        scene.deselect_all();
    }

    let global_matrix = uniform_scale(scale);
    io::create_and_link_mesh(scene, &object_name(filepath), &stl, &global_matrix)
}

/// Object name is the file name up to the first dot
fn object_name(path: &Path) -> String {
    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    file_name.split('.').next().unwrap_or("").to_string()
}

/// File import operator registered under `import_mesh.scad`
pub struct ScadImport;

impl Operator for ScadImport {
    fn idname(&self) -> &'static str {
        IDNAME
    }

    fn label(&self) -> &'static str {
        LABEL
    }

    fn file_filter(&self) -> Option<&'static str> {
        Some(FILTER_GLOB)
    }

    fn execute(&self, ctx: &mut OperatorContext<'_>, props: &serde_json::Value) -> OperatorStatus {
        let props: ImportProps = match serde_json::from_value(props.clone()) {
            Ok(props) => props,
            Err(err) => {
                Reporter::report_error(&format!("Invalid import properties: {}", err));
                return OperatorStatus::Cancelled;
            }
        };

        let prefs = ImporterPreferences::from_store(ctx.preferences);

        // Failures leave the scene as it was; the invocation still
        // counts as finished
        if let Err(err) = import_scad_file(ctx.scene, &prefs, &props.filepath, props.scale) {
            Reporter::report_error(&format!("Running OpenSCAD failed: {:#}", err));
        }

        OperatorStatus::Finished
    }
}
