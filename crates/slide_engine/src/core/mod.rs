//! # Core Engine Module
//!
//! Shared abstractions that the other subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the engine, agent and movement
//! - **Foundation**: Low-level utilities (math, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    AgentConfig,
    Config,
    ConfigError,
    ConfigFormat,
    EngineConfig,
    MovementConfig,
    SimulationConfig,
};
