//! Walker demo application
//!
//! Runs a headless collide-and-slide simulation: an ellipsoid agent drops
//! onto a small procedural scene and follows a scripted walk while its
//! position and grounded state are logged.
//!
//! Usage: `walker [config.toml|config.ron]`

mod scene;

use slide_engine::foundation::logging;
use slide_engine::prelude::*;
use thiserror::Error;

/// Demo application errors
#[derive(Error, Debug)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

fn load_config() -> Result<SimulationConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load_from_file(path),
        None => Ok(SimulationConfig::default()),
    }
}

fn build_simulation(config: &SimulationConfig) -> Result<Simulation, AppError> {
    let mut sim = Simulation::new(config, CollisionWorld::new())?;
    sim.add_model("floor", scene::floor())?;
    sim.add_model("wall", scene::wall())?;
    sim.add_model("ramp", scene::ramp())?;
    Ok(sim)
}

fn run() -> Result<(), AppError> {
    let config = load_config()?;
    logging::init_with_level(&config.engine.log_level);

    log::info!("Starting walker demo");
    let mut sim = build_simulation(&config)?;
    let dt = config.engine.delta_time();

    for step in scene::script() {
        log::info!("Step '{}' for {} ticks", step.label, step.ticks);
        sim.input_mut().look(step.look.0, step.look.1);

        for _ in 0..step.ticks {
            if let Some(direction) = step.direction {
                sim.input_mut().push(direction, dt);
            }
            let position = sim.tick(dt);

            if sim.tick_count() % 30 == 0 {
                log::info!(
                    "tick {:>4}  position ({:>7.3}, {:>7.3}, {:>7.3})  grounded {}",
                    sim.tick_count(),
                    position.x,
                    position.y,
                    position.z,
                    sim.agent().is_grounded()
                );
            }
        }
    }

    let agent = sim.agent();
    log::info!(
        "Finished after {} ticks at {:?} (grounded: {})",
        sim.tick_count(),
        agent.position,
        agent.is_grounded()
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("Walker demo failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_walk_stays_in_scene() {
        let config = SimulationConfig::default();
        let mut sim = build_simulation(&config).unwrap();
        assert_eq!(sim.world().model_count(), 3);

        let dt = config.engine.delta_time();
        for step in scene::script() {
            sim.input_mut().look(step.look.0, step.look.1);
            for _ in 0..step.ticks {
                if let Some(direction) = step.direction {
                    sim.input_mut().push(direction, dt);
                }
                let position = sim.tick(dt);
                assert!(position.iter().all(|c| c.is_finite()));
                assert!(position.y >= 0.99, "fell through the floor: {position:?}");
                assert!(position.z >= -5.51, "walked through the wall: {position:?}");
            }
        }
        assert!(sim.agent().is_grounded());
    }
}
