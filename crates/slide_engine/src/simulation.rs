//! Fixed-step simulation driver
//!
//! Owns the collision world, the agent and its movement input, and advances
//! them one tick at a time: input impulse and gravity feed the velocity, the
//! agent collides and slides, then grounding and damping shape the velocity
//! carried into the next tick.

use crate::core::config::{ConfigError, MovementConfig, SimulationConfig};
use crate::foundation::math::Vec3;
use crate::input::MovementInput;
use crate::physics::collision::{CollisionModel, GeometryError};
use crate::physics::{CharacterEntity, CollisionWorld, ModelKey};
use thiserror::Error;

/// Drives one agent through a static collision world
#[derive(Debug)]
pub struct Simulation {
    world: CollisionWorld,
    agent: CharacterEntity,
    input: MovementInput,
    movement: MovementConfig,
    tick_count: u64,
}

impl Simulation {
    /// Create a simulation from validated configuration and a prepared world
    pub fn new(config: &SimulationConfig, world: CollisionWorld) -> Result<Self, SimulationError> {
        config.validate()?;

        let agent = CharacterEntity::from_config(&config.agent)?;
        log::info!(
            "Spawning agent at {:?} with radius {:?} into {} models",
            agent.position,
            agent.radius(),
            world.model_count()
        );

        Ok(Self {
            world,
            agent,
            input: MovementInput::from_config(&config.movement),
            movement: config.movement.clone(),
            tick_count: 0,
        })
    }

    /// Advance the simulation by one tick and return the agent position
    pub fn tick(&mut self, delta_time: f32) -> Vec3 {
        self.agent.velocity += self.input.take_impulse();
        self.agent.velocity += self.movement.gravity * delta_time;

        self.agent.update(&self.world);

        if self.agent.is_grounded() && self.agent.velocity.y < 0.0 {
            self.agent.velocity.y = 0.0;
        }

        let damping = self.movement.velocity_damping;
        self.agent.velocity.x *= damping;
        self.agent.velocity.z *= damping;

        self.tick_count += 1;
        log::trace!(
            "Tick {}: position {:?}, grounded {}",
            self.tick_count,
            self.agent.position,
            self.agent.is_grounded()
        );

        self.agent.position
    }

    /// Build a model from a flat vertex list and add it to the world
    pub fn add_model(&mut self, name: impl Into<String>, vertices: Vec<Vec3>) -> Result<ModelKey, SimulationError> {
        let model = CollisionModel::from_vertices(name, vertices)?;
        Ok(self.world.add_model(model))
    }

    /// The simulated agent
    pub fn agent(&self) -> &CharacterEntity {
        &self.agent
    }

    /// Mutable access to the agent
    pub fn agent_mut(&mut self) -> &mut CharacterEntity {
        &mut self.agent
    }

    /// Movement input feeding the next tick
    pub fn input_mut(&mut self) -> &mut MovementInput {
        &mut self.input
    }

    /// The collision world
    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Mutable access to the collision world
    pub fn world_mut(&mut self) -> &mut CollisionWorld {
        &mut self.world
    }

    /// Number of ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

/// Simulation-level errors
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Collision geometry error
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}
