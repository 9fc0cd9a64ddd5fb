// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Subprocess execution of the OpenSCAD binary

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Render a `.scad` file to STL with the external OpenSCAD binary
///
/// Geometry evaluation happens entirely inside OpenSCAD. The command
/// line is `<executable> -o <output> <input>`, letting OpenSCAD pick
/// the output format from the `.stl` extension.
pub fn run_openscad(executable: &Path, input: &Path, output: &Path) -> Result<()> {
    println!(
        "Executing command: {} -o {} {}",
        executable.display(),
        output.display(),
        input.display()
    );

    let status = Command::new(executable)
        .arg("-o")
        .arg(output)
        .arg(input)
        .status()
        .context(format!("Failed to execute OpenSCAD: {:?}", executable))?;

    if !status.success() {
        bail!("OpenSCAD exited with status: {}", status);
    }

    Ok(())
}

/// Check if the OpenSCAD binary can be spawned
pub fn is_openscad_available(executable: &Path) -> bool {
    Command::new(executable).arg("--version").output().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_reported() {
        let result = run_openscad(
            Path::new("/nonexistent/openscad"),
            Path::new("model.scad"),
            Path::new("model.stl"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_executable_not_available() {
        assert!(!is_openscad_available(Path::new("/nonexistent/openscad")));
    }
}
