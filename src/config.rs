//! World configuration and validation
//!
//! A [`WorldConfig`] is the only fallible input to the simulation: once it
//! passes validation against an arena, every later step is a total function
//! and nothing can fail mid-run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BODY_COUNT, DEFAULT_BODY_RADIUS, DEFAULT_VELOCITY_RANGE};
use crate::sim::body::{Color, DEFAULT_PALETTE};
use crate::sim::tick::Arena;

/// Construction-time configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration violates a constraint; the message names it
    InvalidConfiguration(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters for creating a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Number of bodies; fixed for the world's lifetime
    pub count: u32,
    /// Radius shared by every body
    pub radius: f32,
    /// Spawn velocity half-range: each component is uniform in
    /// `[-velocity_range, velocity_range]`
    pub velocity_range: f32,
    /// Colors drawn from on spawn, wall bounce, and collision
    pub palette: Vec<Color>,
    /// RNG seed for reproducible runs
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_BODY_COUNT,
            radius: DEFAULT_BODY_RADIUS,
            velocity_range: DEFAULT_VELOCITY_RANGE,
            palette: DEFAULT_PALETTE.to_vec(),
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Check the configuration against the arena it will spawn into
    pub fn validate(&self, arena: Arena) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidConfiguration("body count must be positive"));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidConfiguration("radius must be positive"));
        }
        if !self.velocity_range.is_finite() || self.velocity_range < 0.0 {
            return Err(ConfigError::InvalidConfiguration(
                "velocity range must be non-negative",
            ));
        }
        if !arena.width.is_finite() || arena.width <= 2.0 * self.radius {
            return Err(ConfigError::InvalidConfiguration(
                "arena width must exceed the body diameter",
            ));
        }
        if !arena.height.is_finite() || arena.height <= 2.0 * self.radius {
            return Err(ConfigError::InvalidConfiguration(
                "arena height must exceed the body diameter",
            ));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::InvalidConfiguration("palette must not be empty"));
        }
        Ok(())
    }
}
