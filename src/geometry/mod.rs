// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Geometry module - mesh representation and transforms

mod mesh;
mod bbox;

pub use mesh::{uniform_scale, Mesh, Vertex, Triangle};
pub use bbox::BoundingBox;
