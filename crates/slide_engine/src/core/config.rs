//! # Unified Configuration System
//!
//! All configuration structures for the collide-and-slide simulation live
//! here. Every section can be written in TOML or RON through the [`Config`]
//! trait and checked with `validate()` before use.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging and tick rate for the driving loop
//! - **Agent Config**: ellipsoid shape, spawn point and world unit scale
//! - **Movement Config**: input speed, damping and gravity

use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// # Engine Configuration
///
/// Settings for the loop that drives the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            tick_rate: 60,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set tick rate
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Fixed time step in seconds derived from the tick rate
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("Tick rate must be at least 1".to_string()));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("Log level cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Agent Configuration
///
/// Shape and placement of the collision ellipsoid. These values are fixed
/// once the agent is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Ellipsoid semi-axes along X, Y and Z
    pub radius: Vec3,
    /// World-space position the agent starts at
    pub spawn_position: Vec3,
    /// How many world units make up one meter
    pub units_per_meter: f32,
}

impl AgentConfig {
    /// Create a new agent configuration
    pub fn new(radius: Vec3) -> Self {
        Self {
            radius,
            spawn_position: Vec3::new(0.0, 10.0, 5.0),
            units_per_meter: 100.0,
        }
    }

    /// Set spawn position
    pub fn with_spawn_position(mut self, position: Vec3) -> Self {
        self.spawn_position = position;
        self
    }

    /// Set world unit scale
    pub fn with_units_per_meter(mut self, units_per_meter: f32) -> Self {
        self.units_per_meter = units_per_meter;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Ellipsoid radius components must be positive and finite, got {:?}",
                self.radius
            )));
        }
        if self.spawn_position.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "Spawn position must be finite, got {:?}",
                self.spawn_position
            )));
        }
        if !self.units_per_meter.is_finite() || self.units_per_meter <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "Units per meter must be positive, got {}",
                self.units_per_meter
            )));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(Vec3::new(0.5, 1.0, 0.5))
    }
}

/// # Movement Configuration
///
/// How input and gravity feed the agent's velocity between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Impulse strength per second of held movement input
    pub movement_speed: f32,
    /// Degrees of view rotation per unit of look input
    pub mouse_sensitivity: f32,
    /// Fraction of horizontal velocity kept after each tick
    pub velocity_damping: f32,
    /// Acceleration applied to the velocity every second
    pub gravity: Vec3,
}

impl MovementConfig {
    /// Create a new movement configuration
    pub fn new() -> Self {
        Self {
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            velocity_damping: 0.7,
            gravity: Vec3::new(0.0, -0.5, 0.0),
        }
    }

    /// Set gravity
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set velocity damping
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.velocity_damping = damping;
        self
    }

    /// Set movement speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.movement_speed.is_finite() || self.movement_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "Movement speed must be non-negative, got {}",
                self.movement_speed
            )));
        }
        if !(0.0..=1.0).contains(&self.velocity_damping) {
            return Err(ConfigError::Invalid(format!(
                "Velocity damping must be within [0, 1], got {}",
                self.velocity_damping
            )));
        }
        if !self.mouse_sensitivity.is_finite() {
            return Err(ConfigError::Invalid("Mouse sensitivity must be finite".to_string()));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(ConfigError::Invalid(format!("Gravity must be finite, got {:?}", self.gravity)));
        }
        Ok(())
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Simulation Configuration
///
/// Top-level configuration that encompasses every subsystem. This is the
/// structure drivers load from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Driving loop configuration
    pub engine: EngineConfig,
    /// Agent shape configuration
    pub agent: AgentConfig,
    /// Movement configuration
    pub movement: MovementConfig,
}

impl SimulationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.agent.validate()?;
        self.movement.validate()?;
        Ok(())
    }
}

impl Config for SimulationConfig {}
