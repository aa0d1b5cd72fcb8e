//! Ellipsoid character with collide-and-slide movement
//!
//! Each tick the character's velocity is resolved against the world in two
//! independent passes: a horizontal move that slides along whatever it hits,
//! followed by a vertical gravity pass that settles the character onto the
//! ground and decides whether it is grounded.
//!
//! Both passes run in ellipsoid space (see [`crate::physics::collision`]).

use crate::core::config::{AgentConfig, ConfigError};
use crate::foundation::math::{Vec3, Vec3Ext, NORMALIZE_EPSILON};
use crate::physics::collision::{CollisionPacket, Plane};
use crate::physics::world::check_collision;
use crate::spatial::SpatialQuery;

/// Slide iterations allowed per pass before the move is cut short
pub const MAX_RECURSION_DEPTH: u32 = 5;

/// Closest approach to geometry, in meters, before scaling by units per meter
pub const VERY_CLOSE_DISTANCE: f32 = 0.005;

/// Height above the ellipsoid's lowest point, in world units, that still counts as underfoot
pub const GROUNDED_TOLERANCE: f32 = 0.1;

/// An agent whose collision volume is an axis-aligned ellipsoid
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterEntity {
    /// Center of the ellipsoid in world space
    pub position: Vec3,
    /// Requested displacement for the next update, in world units per tick
    pub velocity: Vec3,
    radius: Vec3,
    units_per_meter: f32,
    grounded: bool,
}

impl CharacterEntity {
    /// Creates a character at the origin with the given ellipsoid radius
    pub fn new(radius: Vec3) -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            radius,
            units_per_meter: 100.0,
            grounded: false,
        }
    }

    /// Creates a character from validated configuration
    pub fn from_config(config: &AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.radius)
            .with_position(config.spawn_position)
            .with_units_per_meter(config.units_per_meter))
    }

    /// Set starting position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the world unit scale
    pub fn with_units_per_meter(mut self, units_per_meter: f32) -> Self {
        self.units_per_meter = units_per_meter;
        self
    }

    /// Ellipsoid semi-axes
    pub fn radius(&self) -> Vec3 {
        self.radius
    }

    /// World units per meter
    pub fn units_per_meter(&self) -> f32 {
        self.units_per_meter
    }

    /// Whether the last update ended standing on something
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Distance below which the character stops short of geometry
    pub fn very_close_distance(&self) -> f32 {
        VERY_CLOSE_DISTANCE * (self.units_per_meter / 100.0)
    }

    /// Moves the character by its velocity, resolving collisions with `world`
    ///
    /// The horizontal part of the velocity slides along obstacles; the
    /// vertical part is resolved as a separate gravity pass.
    pub fn update<Q: SpatialQuery + ?Sized>(&mut self, world: &Q) {
        self.grounded = false;
        let gravity = Vec3::new(0.0, self.velocity.y, 0.0);
        self.collide_and_slide(world, gravity);
    }

    /// Runs the horizontal slide pass followed by a gravity pass
    ///
    /// `gravity` is a world-space displacement. Only the gravity pass may
    /// change the grounded flag.
    pub fn collide_and_slide<Q: SpatialQuery + ?Sized>(&mut self, world: &Q, gravity: Vec3) {
        let e_position = self.position.to_ellipsoid_space(&self.radius);
        let e_velocity = self.velocity.horizontal().to_ellipsoid_space(&self.radius);

        let grounded = self.grounded;
        let slid = self.collide_with_world(world, e_position, e_velocity);
        self.grounded = grounded;

        let e_gravity = gravity.to_ellipsoid_space(&self.radius);
        let settled = self.collide_with_world(world, slid, e_gravity);

        self.position = settled.to_world_space(&self.radius);
    }

    /// Resolves one move in ellipsoid space and returns where it ends
    ///
    /// Repeatedly sweeps towards the destination, stops just short of the
    /// first obstruction and continues with the remaining motion projected
    /// onto the sliding plane. Gives up after [`MAX_RECURSION_DEPTH`]
    /// deflections, leaving the character where the last step ended.
    pub fn collide_with_world<Q: SpatialQuery + ?Sized>(&mut self, world: &Q, pos: Vec3, vel: Vec3) -> Vec3 {
        let very_close = self.very_close_distance();
        let mut packet = CollisionPacket::new(
            self.radius,
            pos.to_world_space(&self.radius),
            vel.to_world_space(&self.radius),
        );

        log::debug!(
            "Resolving move {:?} from {:?} (radius {:?})",
            packet.r3_velocity,
            packet.r3_position,
            packet.e_radius
        );

        let mut pos = pos;
        let mut vel = vel;

        loop {
            if packet.recursion_depth > MAX_RECURSION_DEPTH {
                log::debug!("Slide truncated after {} iterations at {:?}", packet.recursion_depth, pos);
                return pos;
            }

            packet.begin_sweep(pos, vel);
            check_collision(&mut packet, world);

            if !packet.found_collision {
                return pos + vel;
            }

            let destination = pos + vel;
            let mut new_base_point = pos;

            // Stop just short of the contact so the next sweep does not start
            // touching it.
            if packet.nearest_distance >= very_close {
                let advance = vel.with_length(vel.magnitude().min(packet.nearest_distance - very_close));
                new_base_point = packet.base_point + advance;
                packet.intersection_point -= advance.normalize_or_zero() * very_close;
            }

            let slide_origin = packet.intersection_point;
            let Some(slide_normal) = (new_base_point - slide_origin).try_normalize(NORMALIZE_EPSILON) else {
                return new_base_point;
            };
            let sliding_plane = Plane::new(slide_origin, slide_normal);

            let new_destination = destination - slide_normal * sliding_plane.signed_distance_to(&destination);
            let new_velocity = new_destination - slide_origin;

            if self.is_underfoot(&packet.intersection_point, &pos) && vel.y <= 0.0 {
                self.grounded = true;
            }

            log::debug!(
                "Slide step {}: hit at {:?}, distance {:.5}, new velocity {:?}",
                packet.recursion_depth,
                packet.intersection_point,
                packet.nearest_distance,
                new_velocity
            );

            if new_velocity.magnitude() < very_close {
                return new_base_point;
            }

            packet.recursion_depth += 1;
            pos = new_base_point;
            vel = new_velocity;
        }
    }

    /// Whether an e-space contact lies at the bottom of the ellipsoid centered at `center`
    fn is_underfoot(&self, contact: &Vec3, center: &Vec3) -> bool {
        let contact_y = contact.y * self.radius.y;
        let center_y = center.y * self.radius.y;
        contact_y <= center_y - self.radius.y + GROUNDED_TOLERANCE
    }
}
