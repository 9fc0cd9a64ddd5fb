// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Turns parsed STL data into a linked scene object

use crate::geometry::{Mesh, Triangle, Vertex};
use crate::host::{ObjectId, Scene};
use crate::io::StlMesh;
use anyhow::{bail, Result};
use nalgebra::Matrix4;

/// Build a mesh from STL data, apply a transform and link it into the scene
///
/// Each face keeps its own normal, so shared positions are expanded into
/// per-corner vertices. Faces referencing positions out of range are an
/// error, reported before the scene is touched. Returns the id of the new
/// object.
pub fn create_and_link_mesh(
    scene: &mut Scene,
    name: &str,
    stl: &StlMesh,
    transform: &Matrix4<f64>,
) -> Result<ObjectId> {
    for face in &stl.triangles {
        for &index in face {
            if index >= stl.positions.len() {
                bail!("Face index out of range: {}", index);
            }
        }
    }

    let mut mesh = Mesh::with_capacity(stl.triangles.len() * 3, stl.triangles.len());

    for (face, normal) in stl.triangles.iter().zip(&stl.normals) {
        let corners = face.map(|index| mesh.add_vertex(Vertex::new(stl.positions[index], *normal)));
        mesh.add_triangle(Triangle::new(corners));
    }

    mesh.transform(transform);
    Ok(scene.link(name, mesh))
}
