//! Physics module for swept-ellipsoid collision and response
//!
//! Provides the swept-sphere vs. triangle test, the static collision world
//! and the character controller that slides along it.

pub mod character;
pub mod collision;
pub mod world;

#[cfg(test)]
mod tests;

pub use character::{CharacterEntity, GROUNDED_TOLERANCE, MAX_RECURSION_DEPTH, VERY_CLOSE_DISTANCE};
pub use collision::{
    CollisionMesh,
    CollisionModel,
    CollisionPacket,
    GeometryError,
    Plane,
    Triangle,
};
pub use world::{check_collision, CollisionWorld, ModelKey};
