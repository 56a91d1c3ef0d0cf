//! Implicit diffusion by Gauss-Seidel relaxation.

use crate::core::ScalarField;
use crate::math::Real;

use super::boundary::{BoundaryKind, apply_boundary};

/// Relax `target` toward the backward-Euler solution of diffusing `source`
/// at rate `rate`.
///
/// Each sweep updates interior cells in place with
/// `(source + rate * mean4(target)) / (1 + rate)` and then rederives the
/// boundary ring. `target` is also the initial guess.
pub fn diffuse(
    target: &mut ScalarField,
    source: &ScalarField,
    rate: Real,
    kind: BoundaryKind,
    iterations: usize,
) {
    target.assert_same_size(source);
    let n = target.size();
    let inv_denominator = 1.0 / (1.0 + rate);

    for _ in 0..iterations {
        for i in 1..n {
            for j in 1..n {
                let neighbors_avg = target.neighbor_sum(i, j) * 0.25;
                let value = (source.get(i, j) + rate * neighbors_avg) * inv_denominator;
                target.set(i, j, value);
            }
        }
        apply_boundary(target, kind);
    }
}
