// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Mesh representation and utilities

use super::BoundingBox;
use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// The 4x4 uniform scaling matrix
pub fn uniform_scale(factor: f64) -> Matrix4<f64> {
    Matrix4::new_scaling(factor)
}

/// Vertex with position and normal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }

    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        self.position = matrix.transform_point(&self.position);
        // Transform normal (use inverse transpose for normals)
        let normal_matrix = matrix
            .try_inverse()
            .map(|m| m.transpose())
            .unwrap_or(*matrix);
        let transformed = normal_matrix.transform_vector(&self.normal);
        // Degenerate normals stay zero
        if transformed.norm() > 0.0 {
            self.normal = transformed.normalize();
        } else {
            self.normal = transformed;
        }
    }
}

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }
}

/// Triangular mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Transform all vertices by a matrix
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        for vertex in &mut self.vertices {
            vertex.transform(matrix);
        }
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
