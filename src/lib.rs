//! Bounce Arena - a deterministic 2D bouncing-ball simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, wall bounces, elastic collisions)
//! - `config`: World configuration and validation
//!
//! The simulation core is headless: rendering, frame scheduling, and pointer
//! events live with the caller. Each frame the caller reads the current arena
//! size and latest pointer position into a [`sim::StepInput`], calls
//! [`sim::step`], then draws the bodies returned by [`sim::World::snapshot`].

pub mod config;
pub mod sim;

pub use config::{ConfigError, WorldConfig};
pub use sim::{Arena, Body, BodySnapshot, Color, StepInput, World, step};

/// Simulation tuning constants
pub mod consts {
    /// Default number of bodies in a world
    pub const DEFAULT_BODY_COUNT: u32 = 50;
    /// Default body radius
    pub const DEFAULT_BODY_RADIUS: f32 = 20.0;
    /// Default velocity half-range: each spawn velocity component is
    /// uniform in [-DEFAULT_VELOCITY_RANGE, DEFAULT_VELOCITY_RANGE]
    pub const DEFAULT_VELOCITY_RANGE: f32 = 2.0;

    /// Pointer influence radius: bodies closer than this to the pointer
    /// receive a proximity impulse each step
    pub const POINTER_INFLUENCE_RADIUS: f32 = 100.0;
}
