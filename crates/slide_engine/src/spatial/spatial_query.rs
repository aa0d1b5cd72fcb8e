//! Abstract triangle query interface for the world collision pass
//!
//! The resolver only needs "every triangle that might touch this move". This
//! trait hides where those triangles come from, so the linear scan used today
//! can be swapped for a BVH or grid without touching the sweep test or the
//! slide resolver.

use crate::physics::collision::Triangle;

/// Source of candidate triangles for a collision sweep
///
/// Implementations must visit candidates in a deterministic order: when two
/// triangles are hit at exactly the same distance, the first one visited is
/// the one kept.
pub trait SpatialQuery {
    /// Calls `visit` with every candidate triangle, in world space
    fn for_each_triangle(&self, visit: &mut dyn FnMut(&Triangle));

    /// Number of triangles a full query would visit
    fn triangle_count(&self) -> usize;
}

impl SpatialQuery for [Triangle] {
    fn for_each_triangle(&self, visit: &mut dyn FnMut(&Triangle)) {
        for triangle in self {
            visit(triangle);
        }
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }
}

impl SpatialQuery for Vec<Triangle> {
    fn for_each_triangle(&self, visit: &mut dyn FnMut(&Triangle)) {
        self.as_slice().for_each_triangle(visit);
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }
}
