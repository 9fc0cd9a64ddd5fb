// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! I/O module - STL decoding, encoding and scene linking

mod mesh_import;
mod stl;

pub use mesh_import::create_and_link_mesh;
pub use stl::{read_stl, write_stl, StlMesh};
