//! # Slide Engine
//!
//! Swept-ellipsoid character movement against static triangle geometry.
//!
//! ## Features
//!
//! - **Collide and Slide**: Ellipsoid agents slide along walls, floors and slopes
//! - **Ellipsoid Space**: Any axis-aligned ellipsoid reduced to a unit sphere test
//! - **Grounding**: Detects when the agent is standing on something
//! - **Configuration**: TOML or RON files for agent shape, movement and gravity
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slide_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SimulationConfig::default();
//!     let mut sim = Simulation::new(&config, CollisionWorld::new())?;
//!
//!     let floor = vec![
//!         Vec3::new(-10.0, 0.0, 10.0), Vec3::new(10.0, 0.0, 10.0), Vec3::new(10.0, 0.0, -10.0),
//!         Vec3::new(-10.0, 0.0, 10.0), Vec3::new(10.0, 0.0, -10.0), Vec3::new(-10.0, 0.0, -10.0),
//!     ];
//!     sim.add_model("floor", floor)?;
//!
//!     sim.input_mut().push(MoveDirection::Forward, config.engine.delta_time());
//!     let position = sim.tick(config.engine.delta_time());
//!     println!("agent at {position:?}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod config;
pub mod core;
pub mod foundation;

pub mod input;
pub mod physics;
pub mod spatial;

mod simulation;

pub use simulation::{Simulation, SimulationError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Simulation, SimulationError,
        core::config::{AgentConfig, Config, ConfigError, EngineConfig, MovementConfig, SimulationConfig},
        foundation::math::{Vec3, Vec3Ext},
        input::{MoveDirection, MovementInput, ViewBasis},
        physics::{CharacterEntity, CollisionModel, CollisionWorld, ModelKey, Triangle},
        spatial::SpatialQuery,
    };
}
