// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Scadport
//!
//! A thin OpenSCAD import add-on for mesh hosts. Geometry evaluation is
//! delegated to the external OpenSCAD binary; the resulting STL is read
//! back and linked into the host scene as a uniformly scaled mesh object.

pub mod addon;
pub mod cli;
pub mod geometry;
pub mod host;
pub mod io;

pub use addon::{import_scad_file, ImporterPreferences, ScadImport};
pub use geometry::{uniform_scale, BoundingBox, Mesh};
pub use host::{Host, OperatorStatus, Scene};
pub use io::{create_and_link_mesh, read_stl, write_stl, StlMesh};

use anyhow::Result;

/// Create a host with the OpenSCAD importer registered
pub fn install() -> Result<Host> {
    let mut host = Host::new();
    addon::register(&mut host)?;
    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_registers_importer() {
        let host = install().unwrap();
        assert!(host.registry.has_operator(addon::IDNAME));
    }
}
