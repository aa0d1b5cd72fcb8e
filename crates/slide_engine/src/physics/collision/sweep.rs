//! Swept unit sphere against triangle test
//!
//! All inputs here live in ellipsoid space ("e-space"): world coordinates
//! divided component-wise by the ellipsoid radius, which turns the moving
//! ellipsoid into a unit sphere. The sphere starts at `base_point` and moves
//! by `velocity` over `t` in `[0, 1]`.

use crate::foundation::math::{Vec3, Vec3Ext};
use super::primitives::{lowest_root, Triangle};

/// Edges shorter than this (squared) are treated as points
///
/// Only sliver triangles reach this: a triangle with coincident vertices has
/// no plane and is rejected before the edge tests.
const DEGENERATE_EDGE_EPSILON: f32 = 1.0e-12;

/// Motion this close to parallel with an edge, relative to
/// `|edge|^2 * |velocity|^2`, has no edge root; the end vertices cover it
const PARALLEL_EDGE_EPSILON: f32 = f32::EPSILON;

/// State for one collide-and-slide pass
///
/// Holds the requested move in both world space and e-space, and the nearest
/// hit found so far. At most one hit is kept: the one closest along the
/// velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPacket {
    /// Ellipsoid radius
    pub e_radius: Vec3,
    /// Requested velocity in world space, as the pass was started
    pub r3_velocity: Vec3,
    /// Starting position in world space, as the pass was started
    pub r3_position: Vec3,
    /// Current velocity in e-space
    pub velocity: Vec3,
    /// Current velocity direction in e-space (zero when not moving)
    pub normalized_velocity: Vec3,
    /// Current sphere center in e-space
    pub base_point: Vec3,
    /// Whether any triangle was hit during the current sweep
    pub found_collision: bool,
    /// Distance along the velocity to the nearest hit (e-space)
    pub nearest_distance: f32,
    /// Point on the geometry where the nearest hit touches the sphere (e-space)
    pub intersection_point: Vec3,
    /// Number of slide iterations already performed
    pub recursion_depth: u32,
}

impl CollisionPacket {
    /// Creates a packet for a move of an ellipsoid with radius `e_radius`
    pub fn new(e_radius: Vec3, r3_position: Vec3, r3_velocity: Vec3) -> Self {
        Self {
            e_radius,
            r3_velocity,
            r3_position,
            velocity: Vec3::zeros(),
            normalized_velocity: Vec3::zeros(),
            base_point: Vec3::zeros(),
            found_collision: false,
            nearest_distance: f32::INFINITY,
            intersection_point: Vec3::zeros(),
            recursion_depth: 0,
        }
    }

    /// Prepares a new sweep from `base_point` along `velocity` (both e-space)
    ///
    /// Clears any previous hit but keeps the recursion depth.
    pub fn begin_sweep(&mut self, base_point: Vec3, velocity: Vec3) {
        self.velocity = velocity;
        self.normalized_velocity = velocity.normalize_or_zero();
        self.base_point = base_point;
        self.found_collision = false;
        self.nearest_distance = f32::INFINITY;
    }

    /// Records a hit if it is the first one or strictly closer than the current one
    ///
    /// Returns whether the hit was kept.
    pub fn record_hit(&mut self, distance: f32, point: Vec3) -> bool {
        if self.found_collision && distance >= self.nearest_distance {
            return false;
        }
        self.nearest_distance = distance;
        self.intersection_point = point;
        self.found_collision = true;
        true
    }
}

/// Sweeps the packet's unit sphere against one e-space triangle
///
/// Only triangles facing against the direction of travel are considered.
/// If the sphere touches the triangle within this move and the contact is
/// nearer than the packet's current hit, the packet is updated.
pub fn check_triangle(packet: &mut CollisionPacket, triangle: &Triangle) {
    let Some(plane) = triangle.plane() else {
        return;
    };
    if !plane.is_front_facing_to(&packet.normalized_velocity) {
        return;
    }

    let base = packet.base_point;
    let velocity = packet.velocity;

    let signed_dist = plane.signed_distance_to(&base);
    let normal_dot_velocity = plane.normal.dot(&velocity);

    // Interval of t during which the sphere intersects the plane
    let mut embedded_in_plane = false;
    let (t0, _t1) = if normal_dot_velocity == 0.0 {
        if signed_dist.abs() >= 1.0 {
            return;
        }
        embedded_in_plane = true;
        (0.0_f32, 1.0_f32)
    } else {
        let mut t0 = (-1.0 - signed_dist) / normal_dot_velocity;
        let mut t1 = (1.0 - signed_dist) / normal_dot_velocity;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > 1.0 || t1 < 0.0 {
            return;
        }
        (t0.clamp(0.0, 1.0), t1.clamp(0.0, 1.0))
    };

    let mut collision_point = Vec3::zeros();
    let mut found = false;
    let mut t = 1.0_f32;

    // A hit inside the triangle has to happen at t0, when the sphere first
    // rests on the plane. It always precedes any vertex or edge hit.
    if !embedded_in_plane {
        let plane_intersection = (base - plane.normal) + velocity * t0;
        if triangle.contains_point(&plane_intersection) {
            found = true;
            t = t0;
            collision_point = plane_intersection;
        }
    }

    if !found {
        let velocity_sq = velocity.magnitude_squared();

        for vertex in triangle.vertices() {
            let b = 2.0 * velocity.dot(&(base - vertex));
            let c = (vertex - base).magnitude_squared() - 1.0;
            if let Some(root) = lowest_root(velocity_sq, b, c, t) {
                t = root;
                found = true;
                collision_point = vertex;
            }
        }

        let [p1, p2, p3] = triangle.vertices();
        for (start, end) in [(p1, p2), (p2, p3), (p3, p1)] {
            let edge = end - start;
            let base_to_vertex = start - base;
            let edge_sq = edge.magnitude_squared();
            if edge_sq < DEGENERATE_EDGE_EPSILON {
                continue;
            }
            let edge_dot_velocity = edge.dot(&velocity);
            let edge_dot_base_to_vertex = edge.dot(&base_to_vertex);

            let a = edge_sq * -velocity_sq + edge_dot_velocity * edge_dot_velocity;
            if a.abs() <= PARALLEL_EDGE_EPSILON * edge_sq * velocity_sq {
                continue;
            }
            let b = edge_sq * (2.0 * velocity.dot(&base_to_vertex))
                - 2.0 * edge_dot_velocity * edge_dot_base_to_vertex;
            let c = edge_sq * (1.0 - base_to_vertex.magnitude_squared())
                + edge_dot_base_to_vertex * edge_dot_base_to_vertex;

            // Hit on the infinite line, then check it lies within the segment
            if let Some(root) = lowest_root(a, b, c, t) {
                let f = (edge_dot_velocity * root - edge_dot_base_to_vertex) / edge_sq;
                if (0.0..=1.0).contains(&f) {
                    t = root;
                    found = true;
                    collision_point = start + edge * f;
                }
            }
        }
    }

    if found {
        let distance = t * velocity.magnitude();
        if packet.record_hit(distance, collision_point) {
            log::trace!(
                "Sweep hit at t={:.5} distance={:.5} point={:?}",
                t,
                distance,
                collision_point
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Large triangle in the plane z = `z`, facing +Z
    fn wall_at(z: f32) -> Triangle {
        Triangle::new(
            Vec3::new(-5.0, -5.0, z),
            Vec3::new(5.0, -5.0, z),
            Vec3::new(0.0, 5.0, z),
        )
    }

    fn sweep(base: Vec3, velocity: Vec3) -> CollisionPacket {
        let mut packet = CollisionPacket::new(Vec3::new(1.0, 1.0, 1.0), base, velocity);
        packet.begin_sweep(base, velocity);
        packet
    }

    #[test]
    fn test_new_packet_has_no_hit() {
        let packet = CollisionPacket::new(Vec3::new(0.5, 1.0, 0.5), Vec3::zeros(), Vec3::zeros());
        assert!(!packet.found_collision);
        assert_eq!(packet.nearest_distance, f32::INFINITY);
        assert_eq!(packet.recursion_depth, 0);
    }

    #[test]
    fn test_face_hit_inside_triangle() {
        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        check_triangle(&mut packet, &wall_at(-1.8));

        assert!(packet.found_collision);
        assert_relative_eq!(packet.nearest_distance, 0.8, epsilon = 1e-5);
        assert_relative_eq!(packet.intersection_point, Vec3::new(0.0, 0.0, -1.8), epsilon = 1e-5);
    }

    #[test]
    fn test_distance_scales_with_velocity_length() {
        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.0, 0.0, -2.0));
        check_triangle(&mut packet, &wall_at(-1.8));

        // t = 0.4 of a move of length 2
        assert!(packet.found_collision);
        assert_relative_eq!(packet.nearest_distance, 0.8, epsilon = 1e-5);
    }

    #[test]
    fn test_back_facing_triangle_is_ignored() {
        let wall = wall_at(-1.8);
        let flipped = Triangle::new(wall.v0, wall.v2, wall.v1);

        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        check_triangle(&mut packet, &flipped);
        assert!(!packet.found_collision);
    }

    #[test]
    fn test_out_of_reach_triangle_is_missed() {
        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        check_triangle(&mut packet, &wall_at(-5.0));
        assert!(!packet.found_collision);
    }

    #[test]
    fn test_zero_velocity_reports_nothing() {
        let triangles = [
            wall_at(-1.8),
            wall_at(-1.0001),
            // Close to the plane but beside the triangle
            Triangle::new(
                Vec3::new(3.0, 0.0, -0.5),
                Vec3::new(5.0, 0.0, -0.5),
                Vec3::new(4.0, 2.0, -0.5),
            ),
        ];

        for triangle in &triangles {
            let mut packet = sweep(Vec3::zeros(), Vec3::zeros());
            check_triangle(&mut packet, triangle);
            assert!(!packet.found_collision, "unexpected hit against {:?}", triangle);
        }
    }

    #[test]
    fn test_parallel_motion_away_from_plane() {
        let floor = Triangle::new(
            Vec3::new(-5.0, 0.0, 5.0),
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -5.0),
        );
        let mut packet = sweep(Vec3::new(0.0, 1.5, 0.0), Vec3::new(1.0, 0.0, 0.0));
        check_triangle(&mut packet, &floor);
        assert!(!packet.found_collision);
    }

    #[test]
    fn test_vertex_hit() {
        // Triangle whose plane faces +Z but whose nearest feature is the vertex at (2, 0, -1.5)
        let triangle = Triangle::new(
            Vec3::new(2.0, 0.0, -1.5),
            Vec3::new(6.0, 0.0, -1.5),
            Vec3::new(4.0, 3.0, -1.5),
        );
        let mut packet = sweep(Vec3::zeros(), Vec3::new(2.0, 0.0, -2.0));
        check_triangle(&mut packet, &triangle);

        assert!(packet.found_collision);
        assert_relative_eq!(packet.intersection_point, Vec3::new(2.0, 0.0, -1.5), epsilon = 1e-5);
        // The sphere surface reaches the vertex exactly one unit from the center
        let t = packet.nearest_distance / packet.velocity.magnitude();
        let center = packet.base_point + packet.velocity * t;
        assert_relative_eq!((center - packet.intersection_point).magnitude(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_edge_hit() {
        // Edge along X at y = 1.5 on the plane z = -1; the sphere slides up into it
        let triangle = Triangle::new(
            Vec3::new(-3.0, 1.5, -1.0),
            Vec3::new(3.0, 1.5, -1.0),
            Vec3::new(0.0, 5.0, -1.0),
        );
        let mut packet = sweep(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 2.0, -0.5));
        check_triangle(&mut packet, &triangle);

        assert!(packet.found_collision);
        assert_relative_eq!(packet.intersection_point.y, 1.5, epsilon = 1e-5);
        assert_relative_eq!(packet.intersection_point.z, -1.0, epsilon = 1e-5);
        let t = packet.nearest_distance / packet.velocity.magnitude();
        let center = packet.base_point + packet.velocity * t;
        assert_relative_eq!((center - packet.intersection_point).magnitude(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.0, 0.0, -3.0));
        check_triangle(&mut packet, &wall_at(-2.5));
        let far = packet.nearest_distance;
        check_triangle(&mut packet, &wall_at(-1.5));
        let near = packet.nearest_distance;
        check_triangle(&mut packet, &wall_at(-2.0));

        assert!(near < far);
        assert_relative_eq!(packet.nearest_distance, 0.5, epsilon = 1e-5);
        assert_relative_eq!(packet.intersection_point.z, -1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_ties_keep_first_hit() {
        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        assert!(packet.record_hit(0.5, Vec3::new(1.0, 0.0, 0.0)));
        assert!(!packet.record_hit(0.5, Vec3::new(2.0, 0.0, 0.0)));
        assert!(packet.record_hit(0.25, Vec3::new(3.0, 0.0, 0.0)));
        assert_eq!(packet.intersection_point, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_triangle_is_skipped() {
        let sliver = Triangle::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        );
        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        check_triangle(&mut packet, &sliver);
        assert!(!packet.found_collision);
    }

    #[test]
    fn test_embedded_sphere_hits_leading_edge() {
        // Sphere half a unit in front of the plane, moving parallel to it
        // towards the edge at x = 2
        let triangle = Triangle::new(
            Vec3::new(2.0, -5.0, -0.5),
            Vec3::new(8.0, 0.0, -0.5),
            Vec3::new(2.0, 5.0, -0.5),
        );
        let mut packet = sweep(Vec3::zeros(), Vec3::new(3.0, 0.0, 0.0));
        check_triangle(&mut packet, &triangle);

        assert!(packet.found_collision);
        assert_relative_eq!(packet.nearest_distance, 2.0 - 0.75_f32.sqrt(), epsilon = 1e-4);
        assert_relative_eq!(packet.intersection_point, Vec3::new(2.0, 0.0, -0.5), epsilon = 1e-4);
    }

    #[test]
    fn test_embedded_sphere_skips_inside_test() {
        // Embedded over the middle of a large triangle, far from its edges
        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.1, 0.0, 0.0));
        check_triangle(&mut packet, &wall_at(-0.5));
        assert!(!packet.found_collision);
    }

    #[test]
    fn test_sliver_edge_is_skipped() {
        // One edge of 1e-7 next to two long ones; the plane still exists
        let sliver = Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0e-7, 0.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
        );
        assert!(sliver.plane().is_some());

        let mut packet = sweep(Vec3::new(0.0, -3.0, 0.5), Vec3::new(0.0, 4.0, 0.0));
        check_triangle(&mut packet, &sliver);

        // The short edge's end vertices still stop the sphere
        assert!(packet.found_collision);
        assert!(packet.nearest_distance.is_finite());
        assert!(packet.intersection_point.iter().all(|c| c.is_finite()));
        assert_relative_eq!(packet.nearest_distance, 3.0 - 0.75_f32.sqrt(), epsilon = 1e-4);
        assert_relative_eq!(packet.intersection_point.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_begin_sweep_resets_hit_but_keeps_depth() {
        let mut packet = sweep(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        check_triangle(&mut packet, &wall_at(-1.8));
        packet.recursion_depth = 3;

        packet.begin_sweep(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert!(!packet.found_collision);
        assert_eq!(packet.nearest_distance, f32::INFINITY);
        assert_eq!(packet.normalized_velocity, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(packet.recursion_depth, 3);
    }
}
