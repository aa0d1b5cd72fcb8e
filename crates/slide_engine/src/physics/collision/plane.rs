//! Infinite planes with signed-distance and facing queries

use nalgebra::Vector4;

use crate::foundation::math::{Vec3, NORMALIZE_EPSILON};

/// An infinite plane through `origin` with unit `normal`
///
/// `equation` holds the implicit form `[n.x, n.y, n.z, d]` with
/// `d = -dot(origin, normal)`, so `dot(p, n) + d` is the signed distance of `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Point on the plane
    pub origin: Vec3,
    /// Unit normal; the front half-space is the side it points into
    pub normal: Vec3,
    /// Implicit plane equation
    pub equation: Vector4<f32>,
}

impl Plane {
    /// Creates a plane from a point on it and its normal
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        let equation = Vector4::new(normal.x, normal.y, normal.z, -origin.dot(&normal));
        Self { origin, normal, equation }
    }

    /// Creates the plane containing a triangle (right-hand rule)
    ///
    /// Counter-clockwise winding seen from the front gives a normal pointing
    /// towards the viewer. Returns `None` when the points are collinear.
    pub fn from_triangle(p1: Vec3, p2: Vec3, p3: Vec3) -> Option<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1)).try_normalize(NORMALIZE_EPSILON)?;
        Some(Self::new(p1, normal))
    }

    /// Signed distance from the plane; positive in front
    pub fn signed_distance_to(&self, point: &Vec3) -> f32 {
        point.dot(&self.normal) + self.equation.w
    }

    /// Whether the plane faces against a travel direction
    ///
    /// True when the normal opposes `direction` (or is perpendicular to it).
    pub fn is_front_facing_to(&self, direction: &Vec3) -> bool {
        self.normal.dot(direction) <= 0.0
    }
}
