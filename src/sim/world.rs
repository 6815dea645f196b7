//! World state: the body population and its RNG
//!
//! The world owns everything that must be reproducible: body state and the
//! seeded RNG that drives spawning and recoloring. Arena size and pointer
//! position are deliberately not stored here; the caller passes them in
//! every step so resize and pointer events stay outside the core.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, Color};
use super::tick::Arena;
use crate::config::{ConfigError, WorldConfig};

/// A rendering snapshot of one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// The simulation world: a fixed population of bodies plus the RNG state
///
/// The population count is fixed at construction; bodies are never added or
/// removed afterwards.
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    seed: u64,
    pub(crate) bodies: Vec<Body>,
    pub(crate) palette: Vec<Color>,
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl World {
    /// Create a world from a validated configuration
    ///
    /// Every body spawns fully inside the arena with each velocity component
    /// uniform in `[-velocity_range, velocity_range]` and a uniformly random
    /// palette color. Fails with [`ConfigError::InvalidConfiguration`] when
    /// the configuration violates its constraints against the given arena.
    pub fn new(config: &WorldConfig, arena: Arena) -> Result<Self, ConfigError> {
        config.validate(arena)?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let radius = config.radius;
        let vel_range = config.velocity_range;

        let bodies = (0..config.count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(radius..=arena.width - radius),
                    rng.random_range(radius..=arena.height - radius),
                );
                let vel = Vec2::new(
                    rng.random_range(-vel_range..=vel_range),
                    rng.random_range(-vel_range..=vel_range),
                );
                let color = config.palette[rng.random_range(0..config.palette.len())];
                Body::new(pos, vel, radius, color)
            })
            .collect();

        log::info!(
            "created world: {} bodies, radius {}, arena {}x{}, seed {}",
            config.count,
            radius,
            arena.width,
            arena.height,
            config.seed
        );

        Ok(Self {
            seed: config.seed,
            bodies,
            palette: config.palette.clone(),
            rng,
            time_ticks: 0,
        })
    }

    /// The seed this world was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of steps taken so far
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Read-only view of the body population
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Read-only snapshot for rendering: one `(position, radius, color)`
    /// entry per body, in stable body order
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .map(|b| BodySnapshot {
                pos: b.pos,
                radius: b.radius,
                color: b.color,
            })
            .collect()
    }

    /// Sum of per-body kinetic energy with radius standing in for mass
    /// (used for logging, no physical meaning beyond a drift indicator)
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.radius * b.vel.length_squared())
            .sum()
    }

    /// Draw a uniformly random palette color from the world RNG
    pub(crate) fn random_color(rng: &mut Pcg32, palette: &[Color]) -> Color {
        palette[rng.random_range(0..palette.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::DEFAULT_PALETTE;

    fn test_config(count: u32) -> WorldConfig {
        WorldConfig {
            count,
            radius: 20.0,
            velocity_range: 2.0,
            palette: DEFAULT_PALETTE.to_vec(),
            seed: 7,
        }
    }

    #[test]
    fn test_spawn_inside_bounds_with_palette_colors() {
        let arena = Arena::new(800.0, 600.0);
        let world = World::new(&test_config(50), arena).unwrap();

        assert_eq!(world.bodies().len(), 50);
        for body in world.bodies() {
            assert!(body.pos.x >= body.radius && body.pos.x <= arena.width - body.radius);
            assert!(body.pos.y >= body.radius && body.pos.y <= arena.height - body.radius);
            assert!(body.vel.x.abs() <= 2.0 && body.vel.y.abs() <= 2.0);
            assert!(DEFAULT_PALETTE.contains(&body.color));
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let arena = Arena::new(640.0, 480.0);
        let a = World::new(&test_config(20), arena).unwrap();
        let b = World::new(&test_config(20), arena).unwrap();
        assert_eq!(a.bodies(), b.bodies());
    }

    #[test]
    fn test_snapshot_matches_bodies() {
        let arena = Arena::new(400.0, 400.0);
        let world = World::new(&test_config(5), arena).unwrap();
        let snap = world.snapshot();
        assert_eq!(snap.len(), 5);
        for (body, view) in world.bodies().iter().zip(&snap) {
            assert_eq!(view.pos, body.pos);
            assert_eq!(view.radius, body.radius);
            assert_eq!(view.color, body.color);
        }
    }

    #[test]
    fn test_rejects_arena_smaller_than_body() {
        let arena = Arena::new(30.0, 600.0);
        assert!(World::new(&test_config(3), arena).is_err());
    }
}
