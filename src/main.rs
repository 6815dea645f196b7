//! Bounce Arena entry point
//!
//! Headless demo loop: creates a world, steps it at roughly display rate
//! with a synthetic circling pointer, and logs progress. Usage:
//!
//! ```text
//! bounce-arena [config.json] [steps]
//! ```
//!
//! The optional JSON file deserializes into a [`WorldConfig`]; without it
//! the defaults apply. A renderer would poll [`World::snapshot`] where this
//! loop logs instead.

use std::time::{Duration, Instant};

use glam::Vec2;

use bounce_arena::consts::POINTER_INFLUENCE_RADIUS;
use bounce_arena::sim::{Arena, StepInput, World, step};
use bounce_arena::WorldConfig;

/// Demo arena size (stands in for the window size)
const ARENA: Arena = Arena {
    width: 1280.0,
    height: 720.0,
};

/// Target frame interval (~60 Hz)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const DEFAULT_STEPS: u64 = 600;

fn load_config(path: Option<&str>) -> Result<WorldConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let config = serde_json::from_str(&json)?;
            log::info!("loaded config from {path}");
            Ok(config)
        }
        None => Ok(WorldConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config_path = args.get(1).map(String::as_str);
    let steps: u64 = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => DEFAULT_STEPS,
    };

    let config = load_config(config_path)?;
    let mut world = World::new(&config, ARENA)?;

    let center = Vec2::new(ARENA.width / 2.0, ARENA.height / 2.0);
    let started = Instant::now();

    for frame in 0..steps {
        // Synthetic pointer circling the arena center, standing in for
        // mouse-move events
        let angle = frame as f32 * 0.02;
        let pointer = center + Vec2::from_angle(angle) * POINTER_INFLUENCE_RADIUS * 2.0;

        step(&mut world, &StepInput::with_pointer(ARENA, pointer));

        if frame % 120 == 0 {
            log::info!(
                "tick {}: {} bodies, kinetic energy {:.1}",
                world.time_ticks(),
                world.bodies().len(),
                world.kinetic_energy()
            );
        }

        std::thread::sleep(FRAME_INTERVAL);
    }

    log::info!(
        "ran {} steps in {:.2}s (seed {})",
        steps,
        started.elapsed().as_secs_f32(),
        world.seed()
    );
    Ok(())
}
