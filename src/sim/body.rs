//! Body and color types
//!
//! A body is a plain data struct; all behavior lives in free functions on the
//! world so there is no per-body dispatch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A packed 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Red channel (0-255)
    #[inline]
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel (0-255)
    #[inline]
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel (0-255)
    #[inline]
    pub fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Default spawn/recolor palette
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color(0xFF0000),
    Color(0x00FF00),
    Color(0x0000FF),
    Color(0xFFFF00),
    Color(0xFF00FF),
    Color(0x00FFFF),
];

/// A simulated circular body
///
/// Radius is fixed for the body's lifetime; position and velocity change
/// every step, color changes on wall bounces and collisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Speed of the body (velocity magnitude)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_channels() {
        let c = Color(0x12AB34);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0xAB);
        assert_eq!(c.b(), 0x34);
    }

    #[test]
    fn test_default_palette_distinct() {
        for (i, a) in DEFAULT_PALETTE.iter().enumerate() {
            for b in &DEFAULT_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
