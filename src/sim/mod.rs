//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - One tick per call, unit timestep
//! - Seeded RNG only
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod tick;
pub mod world;

pub use body::{Body, Color, DEFAULT_PALETTE};
pub use collision::{bodies_overlap, collision_angle, resolve_elastic};
pub use tick::{Arena, StepInput, apply_pointer_force, step};
pub use world::{BodySnapshot, World};
