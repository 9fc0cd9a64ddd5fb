// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Discovery of .scad files from files and folders

use super::Reporter;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect `.scad` files from a mix of file and directory paths
///
/// Directories are walked recursively, following symlinks. Inputs that
/// do not exist are skipped with a warning. The result is sorted for
/// consistent ordering.
pub fn discover_scad_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut models = Vec::new();

    for path in paths {
        if path.is_file() && is_scad(path) {
            models.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let entry_path = entry.path();
                if entry_path.is_file() && is_scad(entry_path) {
                    models.push(entry_path.to_path_buf());
                }
            }
        } else if !path.exists() {
            Reporter::report_warning(&format!("Input not found: {}. Skipping.", path.display()));
        }
    }

    models.sort();
    Ok(models)
}

fn is_scad(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "scad")
}
