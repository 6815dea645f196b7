//! Collision detection and response for circular bodies
//!
//! Detection is the plain center-distance test. Response decomposes each
//! velocity into the collision-normal frame (the line joining the two
//! centers), exchanges the normal components with a radius-weighted 1D
//! elastic formula (radius stands in for mass), and leaves the
//! perpendicular components untouched. Resolution changes velocities only,
//! never positions, so overlapping bodies may stay overlapped for a frame.

use glam::Vec2;

/// Check whether two bodies overlap (center distance strictly below the sum
/// of radii)
#[inline]
pub fn bodies_overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    pos_a.distance(pos_b) < radius_a + radius_b
}

/// Angle of the line from A's center to B's center (the collision normal)
#[inline]
pub fn collision_angle(pos_a: Vec2, pos_b: Vec2) -> f32 {
    let d = pos_b - pos_a;
    d.y.atan2(d.x)
}

/// Compute post-collision velocities for two overlapping bodies
///
/// Both velocities are rotated into the frame where x is the collision
/// normal, the normal components are exchanged with
///
/// ```text
/// out_a = ((ra - rb) * na + 2 * rb * nb) / (ra + rb)
/// out_b = (2 * ra * na + (rb - ra) * nb) / (ra + rb)
/// ```
///
/// and the result is rotated back using theta and theta + pi/2 as basis
/// directions. For equal radii this degenerates to a full swap of the
/// normal components. Radii are positive by world invariant, so the
/// denominator is never zero.
pub fn resolve_elastic(
    pos_a: Vec2,
    vel_a: Vec2,
    radius_a: f32,
    pos_b: Vec2,
    vel_b: Vec2,
    radius_b: f32,
) -> (Vec2, Vec2) {
    let theta = collision_angle(pos_a, pos_b);

    let speed_a = vel_a.length();
    let speed_b = vel_b.length();
    let dir_a = vel_a.y.atan2(vel_a.x);
    let dir_b = vel_b.y.atan2(vel_b.x);

    // Rotate into the collision frame: x along the normal, y perpendicular
    let norm_a = speed_a * (dir_a - theta).cos();
    let perp_a = speed_a * (dir_a - theta).sin();
    let norm_b = speed_b * (dir_b - theta).cos();
    let perp_b = speed_b * (dir_b - theta).sin();

    let radius_sum = radius_a + radius_b;
    let out_a = ((radius_a - radius_b) * norm_a + 2.0 * radius_b * norm_b) / radius_sum;
    let out_b = (2.0 * radius_a * norm_a + (radius_b - radius_a) * norm_b) / radius_sum;

    // Rotate back to world axes
    let normal_dir = Vec2::new(theta.cos(), theta.sin());
    let perp_dir = Vec2::new(
        (theta + std::f32::consts::FRAC_PI_2).cos(),
        (theta + std::f32::consts::FRAC_PI_2).sin(),
    );

    (
        normal_dir * out_a + perp_dir * perp_a,
        normal_dir * out_b + perp_dir * perp_b,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_detection() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(30.0, 0.0);
        // Sum of radii 40 > distance 30
        assert!(bodies_overlap(a, 20.0, b, 20.0));
        // Sum of radii 25 < distance 30
        assert!(!bodies_overlap(a, 15.0, b, 10.0));
        // Exactly touching is not overlapping (strict comparison)
        assert!(!bodies_overlap(a, 15.0, b, 15.0));
    }

    #[test]
    fn test_collision_angle_axes() {
        let origin = Vec2::ZERO;
        assert!((collision_angle(origin, Vec2::new(10.0, 0.0))).abs() < 1e-6);
        assert!(
            (collision_angle(origin, Vec2::new(0.0, 10.0)) - std::f32::consts::FRAC_PI_2).abs()
                < 1e-6
        );
    }

    #[test]
    fn test_equal_radius_head_on_swaps_normal_components() {
        // Centers along x, so theta = 0 and the normal frame is the world
        // frame. Normal speeds 3 and -1 must swap to -1 and 3.
        let pos_a = Vec2::new(0.0, 0.0);
        let pos_b = Vec2::new(30.0, 0.0);
        let (out_a, out_b) = resolve_elastic(
            pos_a,
            Vec2::new(3.0, 0.0),
            20.0,
            pos_b,
            Vec2::new(-1.0, 0.0),
            20.0,
        );
        assert!((out_a.x - (-1.0)).abs() < 1e-5);
        assert!(out_a.y.abs() < 1e-5);
        assert!((out_b.x - 3.0).abs() < 1e-5);
        assert!(out_b.y.abs() < 1e-5);
    }

    #[test]
    fn test_perpendicular_component_passes_through() {
        // Centers along x; y-velocity is perpendicular to the normal and
        // must survive the exchange unchanged.
        let (out_a, out_b) = resolve_elastic(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 5.0),
            10.0,
            Vec2::new(15.0, 0.0),
            Vec2::new(-2.0, -3.0),
            10.0,
        );
        assert!((out_a.y - 5.0).abs() < 1e-4);
        assert!((out_b.y - (-3.0)).abs() < 1e-4);
        // Equal radii: normal components swap
        assert!((out_a.x - (-2.0)).abs() < 1e-4);
        assert!((out_b.x - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_unequal_radii_weighted_exchange() {
        // ra=10 vs rb=30, head-on along x with na=4, nb=0:
        // out_a = ((10-30)*4 + 0) / 40 = -2
        // out_b = (2*10*4 + 0) / 40 = 2
        let (out_a, out_b) = resolve_elastic(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            10.0,
            Vec2::new(20.0, 0.0),
            Vec2::ZERO,
            30.0,
        );
        assert!((out_a.x - (-2.0)).abs() < 1e-4);
        assert!((out_b.x - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_coincident_centers_stay_finite() {
        // Degenerate geometry must not produce NaN (atan2(0, 0) is 0)
        let (out_a, out_b) = resolve_elastic(
            Vec2::new(5.0, 5.0),
            Vec2::new(1.0, 2.0),
            10.0,
            Vec2::new(5.0, 5.0),
            Vec2::new(-3.0, 0.5),
            10.0,
        );
        assert!(out_a.is_finite());
        assert!(out_b.is_finite());
    }

    proptest! {
        #[test]
        fn prop_resolution_conserves_weighted_momentum(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            dx in 1.0f32..100.0,
            dy in -100.0f32..100.0,
            vax in -50.0f32..50.0,
            vay in -50.0f32..50.0,
            vbx in -50.0f32..50.0,
            vby in -50.0f32..50.0,
            ra in 1.0f32..100.0,
            rb in 1.0f32..100.0,
        ) {
            let pos_a = Vec2::new(ax, ay);
            let pos_b = pos_a + Vec2::new(dx, dy);
            let vel_a = Vec2::new(vax, vay);
            let vel_b = Vec2::new(vbx, vby);

            let (out_a, out_b) = resolve_elastic(pos_a, vel_a, ra, pos_b, vel_b, rb);

            prop_assert!(out_a.is_finite());
            prop_assert!(out_b.is_finite());

            // Radius-weighted momentum is conserved by the exchange
            let before = vel_a * ra + vel_b * rb;
            let after = out_a * ra + out_b * rb;
            let tol = 1e-3 * (1.0 + before.length());
            prop_assert!((after - before).length() <= tol,
                "momentum drifted: before={before:?} after={after:?}");
        }

        #[test]
        fn prop_equal_radii_swap_normal_speeds(
            speed_a in -20.0f32..20.0,
            speed_b in -20.0f32..20.0,
            r in 1.0f32..50.0,
        ) {
            // Head-on along x with equal radii: full swap of x components
            let (out_a, out_b) = resolve_elastic(
                Vec2::ZERO,
                Vec2::new(speed_a, 0.0),
                r,
                Vec2::new(1.0, 0.0),
                Vec2::new(speed_b, 0.0),
                r,
            );
            prop_assert!((out_a.x - speed_b).abs() < 1e-3 * (1.0 + speed_b.abs()));
            prop_assert!((out_b.x - speed_a).abs() < 1e-3 * (1.0 + speed_a.abs()));
        }
    }
}
