//! Primitive collision shapes and geometric predicates
//!
//! Triangles plus the two numeric building blocks the swept-sphere test is
//! made of: a point-in-triangle check and a lowest-root quadratic solver.

use crate::foundation::math::{Vec3, Vec3Ext};
use super::plane::Plane;

/// A triangle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    pub v0: Vec3,
    /// Second vertex
    pub v1: Vec3,
    /// Third vertex
    pub v2: Vec3,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// The triangle's vertices in winding order
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Calculates the normal of the triangle (right-hand rule)
    pub fn normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0)).normalize_or_zero()
    }

    /// Calculates the centroid (center point) of the triangle
    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Supporting plane, or `None` for a zero-area triangle
    pub fn plane(&self) -> Option<Plane> {
        Plane::from_triangle(self.v0, self.v1, self.v2)
    }

    /// Copy of this triangle scaled into the ellipsoid space of `radius`
    pub fn to_ellipsoid_space(&self, radius: &Vec3) -> Self {
        Self::new(
            self.v0.to_ellipsoid_space(radius),
            self.v1.to_ellipsoid_space(radius),
            self.v2.to_ellipsoid_space(radius),
        )
    }

    /// Whether `point` (assumed to lie in the triangle's plane) is inside it
    pub fn contains_point(&self, point: &Vec3) -> bool {
        point_in_triangle(point, &self.v0, &self.v1, &self.v2)
    }
}

/// Tests whether a point lying in a triangle's plane is inside the triangle
///
/// Edges and vertices count as inside.
pub fn point_in_triangle(point: &Vec3, p1: &Vec3, p2: &Vec3, p3: &Vec3) -> bool {
    let u = p2 - p1;
    let v = p3 - p1;
    let w = point - p1;

    let vw = v.cross(&w);
    let vu = v.cross(&u);
    if vw.dot(&vu) < 0.0 {
        return false;
    }

    let uw = u.cross(&w);
    let uv = u.cross(&v);
    if uw.dot(&uv) < 0.0 {
        return false;
    }

    // Barycentric weights from sub-triangle areas
    let area = uv.magnitude();
    let r = vw.magnitude() / area;
    let t = uw.magnitude() / area;

    r + t <= 1.0
}

/// Lowest root of `a*t^2 + b*t + c = 0` inside the open interval `(0, max_r)`
///
/// Returns `None` if there is no real root, no root in range, or `a` is
/// exactly zero. Tiny but nonzero `a` is solved normally, so slow sweeps
/// still find their roots; callers that know the scale of their
/// coefficients reject near-parallel cases themselves.
pub fn lowest_root(a: f32, b: f32, c: f32, max_r: f32) -> Option<f32> {
    if a == 0.0 {
        return None;
    }

    let determinant = b * b - 4.0 * a * c;
    if determinant < 0.0 {
        return None;
    }

    let sqrt_d = determinant.sqrt();
    let mut r1 = (-b - sqrt_d) / (2.0 * a);
    let mut r2 = (-b + sqrt_d) / (2.0 * a);

    // Sort so r1 <= r2
    if r1 > r2 {
        std::mem::swap(&mut r1, &mut r2);
    }

    if r1 > 0.0 && r1 < max_r {
        return Some(r1);
    }
    // r1 may be behind us while r2 is still ahead
    if r2 > 0.0 && r2 < max_r {
        return Some(r2);
    }
    None
}
