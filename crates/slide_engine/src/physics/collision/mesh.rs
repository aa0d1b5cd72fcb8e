//! Collision mesh representations
//!
//! Geometry handed over by whoever owns the scene: models made of meshes,
//! each mesh a flat, non-indexed vertex list where every three consecutive
//! vertices form one triangle.

use thiserror::Error;

use crate::foundation::math::Vec3;
use super::primitives::Triangle;

/// Errors raised while building collision geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The vertex list cannot be split into whole triangles
    #[error("Vertex count {vertex_count} is not a multiple of 3")]
    IncompleteTriangle {
        /// Number of vertices supplied
        vertex_count: usize,
    },

    /// A vertex contains NaN or infinity
    #[error("Vertex {index} is not finite: {vertex:?}")]
    NonFiniteVertex {
        /// Position of the vertex in the list
        index: usize,
        /// The offending vertex
        vertex: Vec3,
    },
}

/// A triangle soup in world space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionMesh {
    vertices: Vec<Vec3>,
}

impl CollisionMesh {
    /// Creates a mesh from a flat vertex list (three vertices per triangle)
    pub fn from_vertices(vertices: Vec<Vec3>) -> Result<Self, GeometryError> {
        if vertices.len() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangle { vertex_count: vertices.len() });
        }
        if let Some((index, vertex)) = vertices
            .iter()
            .enumerate()
            .find(|(_, v)| v.iter().any(|c| !c.is_finite()))
        {
            return Err(GeometryError::NonFiniteVertex { index, vertex: *vertex });
        }
        Ok(Self { vertices })
    }

    /// Creates a mesh from already assembled triangles
    pub fn from_triangles(triangles: &[Triangle]) -> Result<Self, GeometryError> {
        Self::from_vertices(triangles.iter().flat_map(Triangle::vertices).collect())
    }

    /// The flat vertex list
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Iterates the mesh triangles in storage order
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|chunk| Triangle::new(chunk[0], chunk[1], chunk[2]))
    }
}

/// A named group of collision meshes, typically one loaded model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionModel {
    /// Name used in logs
    pub name: String,
    /// Meshes making up the model
    pub meshes: Vec<CollisionMesh>,
}

impl CollisionModel {
    /// Creates a model from its meshes
    pub fn new(name: impl Into<String>, meshes: Vec<CollisionMesh>) -> Self {
        Self { name: name.into(), meshes }
    }

    /// Creates a single-mesh model from a flat vertex list
    pub fn from_vertices(name: impl Into<String>, vertices: Vec<Vec3>) -> Result<Self, GeometryError> {
        Ok(Self::new(name, vec![CollisionMesh::from_vertices(vertices)?]))
    }

    /// Total number of triangles over all meshes
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(CollisionMesh::triangle_count).sum()
    }

    /// Iterates every triangle of every mesh
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.meshes.iter().flat_map(CollisionMesh::triangles)
    }
}
