//! Per-frame simulation step
//!
//! Advances the world by exactly one tick. The caller drives this once per
//! animation frame; there is no internal timer and no sub-stepping. Order
//! within a tick is fixed for reproducibility:
//!
//! 1. Integrate every body (`pos += vel`, unit timestep)
//! 2. Reflect off walls, per axis, recoloring on each bounce. Position is
//!    not clamped back inside, so a body can sit slightly out of bounds for
//!    one frame before the reversed velocity pulls it back.
//! 3. Resolve body-body collisions over pairs `(i, j)` with `i < j`. Pairs
//!    are resolved sequentially in enumeration order: a velocity written by
//!    an earlier pair is read by later pairs in the same tick.
//! 4. Apply the pointer proximity impulse if a reading exists.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{bodies_overlap, resolve_elastic};
use super::world::World;
use crate::consts::POINTER_INFLUENCE_RADIUS;

/// The bounded rectangular region bodies move within
///
/// Owned by the caller (it tracks window size there) and passed in each
/// step, so a resize simply shows up as a different value next tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// External inputs for a single step (deterministic)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInput {
    /// Current arena bounds, read at the top of the step
    pub arena: Arena,
    /// Latest pointer reading, if any; `None` skips the pointer pass
    pub pointer: Option<Vec2>,
}

impl StepInput {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            pointer: None,
        }
    }

    pub fn with_pointer(arena: Arena, pointer: Vec2) -> Self {
        Self {
            arena,
            pointer: Some(pointer),
        }
    }
}

/// Advance the world by one tick
pub fn step(world: &mut World, input: &StepInput) {
    let arena = input.arena;
    world.time_ticks += 1;

    // Integrate and reflect off walls. Both axes are tested every tick,
    // each bounce draws its own recolor.
    for i in 0..world.bodies.len() {
        let body = &mut world.bodies[i];
        body.pos += body.vel;

        let hit_x = body.pos.x + body.radius > arena.width || body.pos.x - body.radius < 0.0;
        if hit_x {
            body.vel.x = -body.vel.x;
        }
        let hit_y = body.pos.y + body.radius > arena.height || body.pos.y - body.radius < 0.0;
        if hit_y {
            body.vel.y = -body.vel.y;
        }

        if hit_x {
            world.bodies[i].color = World::random_color(&mut world.rng, &world.palette);
        }
        if hit_y {
            world.bodies[i].color = World::random_color(&mut world.rng, &world.palette);
        }
    }

    // Pairwise collision resolution over the wall-reflected state. Writes
    // land immediately, so a body hit by two pairs in one tick carries the
    // first resolution's velocity into the second.
    let count = world.bodies.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let a = world.bodies[i];
            let b = world.bodies[j];
            if !bodies_overlap(a.pos, a.radius, b.pos, b.radius) {
                continue;
            }

            let color_a = World::random_color(&mut world.rng, &world.palette);
            let color_b = World::random_color(&mut world.rng, &world.palette);
            let (vel_a, vel_b) = resolve_elastic(a.pos, a.vel, a.radius, b.pos, b.vel, b.radius);

            let body_a = &mut world.bodies[i];
            body_a.vel = vel_a;
            body_a.color = color_a;
            let body_b = &mut world.bodies[j];
            body_b.vel = vel_b;
            body_b.color = color_b;
        }
    }

    if let Some(pointer) = input.pointer {
        apply_pointer_force(world, pointer);
    }
}

/// Nudge every body within the influence radius toward the pointer
///
/// The impulse is `delta / POINTER_INFLUENCE_RADIUS`, so it scales linearly
/// with distance and tops out just under one unit of velocity per axis.
pub fn apply_pointer_force(world: &mut World, pointer: Vec2) {
    for body in &mut world.bodies {
        let delta = pointer - body.pos;
        if delta.length() < POINTER_INFLUENCE_RADIUS {
            body.vel += delta / POINTER_INFLUENCE_RADIUS;
        }
    }
}
