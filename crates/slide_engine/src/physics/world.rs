//! Collision world and the per-step world query
//!
//! The world owns every loaded collision model. [`check_collision`] runs the
//! swept-sphere test against every triangle a [`SpatialQuery`] hands out; the
//! world's own implementation of that trait is a plain linear scan over all
//! models, meshes and triangles.

use slotmap::{new_key_type, SlotMap};

use crate::physics::collision::{check_triangle, CollisionModel, CollisionPacket, Triangle};
use crate::spatial::SpatialQuery;

new_key_type! {
    /// Handle to a model registered with a [`CollisionWorld`]
    pub struct ModelKey;
}

/// Static collision geometry, grouped by model
#[derive(Debug, Default)]
pub struct CollisionWorld {
    models: SlotMap<ModelKey, CollisionModel>,
}

impl CollisionWorld {
    /// Creates an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model and returns its handle
    pub fn add_model(&mut self, model: CollisionModel) -> ModelKey {
        log::info!(
            "Adding collision model '{}' ({} meshes, {} triangles)",
            model.name,
            model.meshes.len(),
            model.triangle_count()
        );
        self.models.insert(model)
    }

    /// Removes a model, returning it if the handle was valid
    pub fn remove_model(&mut self, key: ModelKey) -> Option<CollisionModel> {
        let removed = self.models.remove(key);
        if let Some(model) = &removed {
            log::info!("Removed collision model '{}'", model.name);
        }
        removed
    }

    /// Looks up a model by handle
    pub fn model(&self, key: ModelKey) -> Option<&CollisionModel> {
        self.models.get(key)
    }

    /// Iterates all models with their handles
    pub fn models(&self) -> impl Iterator<Item = (ModelKey, &CollisionModel)> {
        self.models.iter()
    }

    /// Number of registered models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Whether the world has no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl SpatialQuery for CollisionWorld {
    // TODO: replace with a BVH once scenes grow past a few thousand triangles
    fn for_each_triangle(&self, visit: &mut dyn FnMut(&Triangle)) {
        for model in self.models.values() {
            for triangle in model.triangles() {
                visit(&triangle);
            }
        }
    }

    fn triangle_count(&self) -> usize {
        self.models.values().map(CollisionModel::triangle_count).sum()
    }
}

/// Sweeps the packet against every candidate triangle of `world`
///
/// Triangles are rescaled into the packet's ellipsoid space before testing.
/// Afterwards the packet holds the nearest hit, if any.
pub fn check_collision<Q: SpatialQuery + ?Sized>(packet: &mut CollisionPacket, world: &Q) {
    let radius = packet.e_radius;
    world.for_each_triangle(&mut |triangle| {
        check_triangle(packet, &triangle.to_ellipsoid_space(&radius));
    });
}
