//! Spatial queries over collision geometry
//!
//! Defines the seam between the collision resolver and whatever structure
//! supplies candidate triangles.

pub mod spatial_query;

pub use spatial_query::SpatialQuery;
