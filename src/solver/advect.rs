//! Semi-Lagrangian advection with bilinear sampling.

use crate::core::ScalarField;
use crate::math::Real;

use super::boundary::{BoundaryKind, apply_boundary};

/// Transport `source` along `(velocity_x, velocity_y)` for one step of `dt`,
/// writing the result into `target`.
///
/// Every interior cell traces backward to a fractional position, clamped to
/// `[0.5, N - 0.5]` so the four interpolation corners stay on the lattice,
/// and samples `source` there.
pub fn advect(
    target: &mut ScalarField,
    source: &ScalarField,
    velocity_x: &ScalarField,
    velocity_y: &ScalarField,
    dt: Real,
    kind: BoundaryKind,
) {
    target.assert_same_size(source);
    target.assert_same_size(velocity_x);
    target.assert_same_size(velocity_y);
    let n = target.size();
    let upper = n as Real - 0.5;

    for i in 1..n {
        for j in 1..n {
            let fx = (i as Real - dt * velocity_x.get(i, j)).clamp(0.5, upper);
            let fy = (j as Real - dt * velocity_y.get(i, j)).clamp(0.5, upper);
            target.set(i, j, sample_bilinear(source, fx, fy));
        }
    }
    apply_boundary(target, kind);
}

/// Bilinear interpolation of `field` at a position inside `[0, N)^2`.
#[inline(always)]
pub fn sample_bilinear(field: &ScalarField, x: Real, y: Real) -> Real {
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;
    let sx = x - x0 as Real;
    let sy = y - y0 as Real;
    let rx = 1.0 - sx;
    let ry = 1.0 - sy;

    let low = rx * (ry * field.get(x0, y0) + sy * field.get(x0, y1));
    let high = sx * (ry * field.get(x1, y0) + sy * field.get(x1, y1));
    low + high
}
