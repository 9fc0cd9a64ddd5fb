// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! STL reading and writing on top of `stl_io`

use crate::geometry::Mesh;
use anyhow::{Context, Result};
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::path::Path;

/// Parsed STL: indexed triangles with one normal per face
#[derive(Debug, Clone)]
pub struct StlMesh {
    pub triangles: Vec<[usize; 3]>,
    pub normals: Vec<Vector3<f64>>,
    pub positions: Vec<Point3<f64>>,
}

impl StlMesh {
    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Read an STL file into triangle, normal and position sequences
///
/// Both binary and ASCII STL are handled by `stl_io`; positions are
/// deduplicated by the decoder.
pub fn read_stl(path: &Path) -> Result<StlMesh> {
    let mut file = File::open(path).context(format!("Failed to open STL file: {:?}", path))?;

    let stl = stl_io::read_stl(&mut file).context("Failed to read STL file")?;
    stl.validate().context("Invalid STL file")?;

    let positions = stl
        .vertices
        .iter()
        .map(|vertex| {
            Point3::new(
                f64::from(vertex[0]),
                f64::from(vertex[1]),
                f64::from(vertex[2]),
            )
        })
        .collect();

    let mut triangles = Vec::with_capacity(stl.faces.len());
    let mut normals = Vec::with_capacity(stl.faces.len());

    for face in &stl.faces {
        triangles.push(face.vertices);
        normals.push(Vector3::new(
            f64::from(face.normal[0]),
            f64::from(face.normal[1]),
            f64::from(face.normal[2]),
        ));
    }

    Ok(StlMesh {
        triangles,
        normals,
        positions,
    })
}

/// Write a mesh as binary STL
///
/// The facet normal is taken from the first vertex of each triangle.
pub fn write_stl(mesh: &Mesh, path: &Path) -> Result<()> {
    let triangles: Vec<stl_io::Triangle> = mesh
        .triangles
        .iter()
        .map(|triangle| {
            let [i0, i1, i2] = triangle.indices;
            let normal = mesh.vertices[i0].normal;

            stl_io::Triangle {
                normal: stl_io::Normal::new([
                    normal.x as f32,
                    normal.y as f32,
                    normal.z as f32,
                ]),
                vertices: [
                    stl_vertex(&mesh.vertices[i0]),
                    stl_vertex(&mesh.vertices[i1]),
                    stl_vertex(&mesh.vertices[i2]),
                ],
            }
        })
        .collect();

    let mut file =
        File::create(path).context(format!("Failed to create STL file: {:?}", path))?;
    stl_io::write_stl(&mut file, triangles.iter()).context("Failed to write STL file")?;

    Ok(())
}

fn stl_vertex(vertex: &crate::geometry::Vertex) -> stl_io::Vertex {
    stl_io::Vertex::new([
        vertex.position.x as f32,
        vertex.position.y as f32,
        vertex.position.z as f32,
    ])
}
