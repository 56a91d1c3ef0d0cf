use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::math::Vec2;

pub type Real = f32;

/// Sigmoid rescaled to `(-1, 1)`; `k` controls how quickly it saturates.
#[inline]
pub fn soft_sign(z: Real, k: Real) -> Real {
    2.0 / (1.0 + (-z / k).exp()) - 1.0
}

/// Direction of `v` as an angle in `[0, 2π)`.
///
/// Zero and axis-aligned vectors are answered exactly so no division by a
/// zero component ever happens.
pub fn heading(v: Vec2) -> Real {
    match (v.x == 0.0, v.y == 0.0) {
        (true, true) => 0.0,
        (false, true) if v.x > 0.0 => 0.0,
        (false, true) => PI,
        (true, false) if v.y > 0.0 => FRAC_PI_2,
        (true, false) => 3.0 * FRAC_PI_2,
        (false, false) => v.y.atan2(v.x).rem_euclid(TAU),
    }
}

/// Signed angle from `from` to `to` if the two lie within a quarter turn of
/// each other, taking wrap-around at `2π` into account.
pub fn quarter_turn_delta(from: Real, to: Real) -> Option<Real> {
    [to - from, to + TAU - from, to - TAU - from]
        .into_iter()
        .find(|delta| delta.abs() < FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "expected {a} to be close to {b}");
    }

    #[test]
    fn heading_covers_all_quadrants() {
        assert_close(heading(Vec2::ZERO), 0.0);
        assert_close(heading(Vec2::new(2.0, 0.0)), 0.0);
        assert_close(heading(Vec2::new(-2.0, 0.0)), PI);
        assert_close(heading(Vec2::new(0.0, 3.0)), FRAC_PI_2);
        assert_close(heading(Vec2::new(0.0, -3.0)), 3.0 * FRAC_PI_2);
        assert_close(heading(Vec2::new(1.0, 1.0)), PI / 4.0);
        assert_close(heading(Vec2::new(-1.0, 1.0)), 3.0 * PI / 4.0);
        assert_close(heading(Vec2::new(-1.0, -1.0)), 5.0 * PI / 4.0);
        assert_close(heading(Vec2::new(1.0, -1.0)), 7.0 * PI / 4.0);
    }

    #[test]
    fn quarter_turn_delta_wraps() {
        let delta = quarter_turn_delta(7.0 * PI / 4.0, 0.0).unwrap();
        assert_close(delta, PI / 4.0);

        let delta = quarter_turn_delta(PI / 8.0, 7.0 * PI / 4.0).unwrap();
        assert_close(delta, -3.0 * PI / 8.0);
    }

    #[test]
    fn quarter_turn_delta_rejects_wide_angles() {
        assert_eq!(quarter_turn_delta(0.0, FRAC_PI_2), None);
        assert_eq!(quarter_turn_delta(0.0, PI), None);
    }

    #[test]
    fn soft_sign_is_odd_and_bounded() {
        assert_close(soft_sign(0.0, 12.0), 0.0);
        assert_close(soft_sign(5.0, 12.0), -soft_sign(-5.0, 12.0));
        assert!(soft_sign(1e4, 12.0) <= 1.0);
    }
}
