//! Swept-ellipsoid collision detection
//!
//! # Architecture
//!
//! The moving ellipsoid is handled in ellipsoid space ("e-space"), where the
//! world is divided component-wise by the ellipsoid radius so the agent
//! becomes a unit sphere. Every test in this module assumes its inputs are
//! already in that space.
//!
//! # Module Organization
//!
//! - [`plane`] - Infinite planes with signed distance and facing queries
//! - [`primitives`] - Triangles, point-in-triangle and the lowest-root solver
//! - [`sweep`] - The swept unit sphere vs. triangle test and its packet
//! - [`mesh`] - Collision meshes and models supplied by the scene
//!
//! # Key Types
//!
//! - [`CollisionPacket`] - Per-pass move request plus the nearest hit so far
//! - [`CollisionModel`] / [`CollisionMesh`] - World geometry as triangle soups
//! - [`Plane`], [`Triangle`] - Primitive geometric types

pub mod plane;
pub mod primitives;
pub mod sweep;
pub mod mesh;

// Re-export commonly used types
pub use plane::Plane;
pub use primitives::{lowest_root, point_in_triangle, Triangle};
pub use sweep::{check_triangle, CollisionPacket};
pub use mesh::{CollisionMesh, CollisionModel, GeometryError};
