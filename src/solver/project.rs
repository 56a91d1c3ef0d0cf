//! Pressure projection (Helmholtz-Hodge decomposition).
//!
//! Removes the gradient part of a velocity field by solving a Poisson
//! problem for pressure and subtracting its gradient.

use crate::core::ScalarField;
use crate::math::Real;

use super::boundary::{BoundaryKind, apply_boundary};

/// Buffers the projection writes into but nobody reads afterwards.
#[derive(Clone, Debug)]
pub struct ProjectionScratch {
    pub pressure: ScalarField,
    pub divergence: ScalarField,
}

impl ProjectionScratch {
    pub fn new(size: usize) -> Self {
        Self {
            pressure: ScalarField::zeros(size),
            divergence: ScalarField::zeros(size),
        }
    }
}

/// Make `(velocity_x, velocity_y)` approximately divergence free.
pub fn project(
    velocity_x: &mut ScalarField,
    velocity_y: &mut ScalarField,
    scratch: &mut ProjectionScratch,
    iterations: usize,
) {
    velocity_x.assert_same_size(velocity_y);
    velocity_x.assert_same_size(&scratch.pressure);
    let n = velocity_x.size();
    let h = 1.0 / n as Real;
    let ProjectionScratch {
        pressure,
        divergence,
    } = scratch;

    for i in 1..n {
        for j in 1..n {
            let flux = velocity_x.get(i + 1, j) - velocity_x.get(i - 1, j)
                + velocity_y.get(i, j + 1)
                - velocity_y.get(i, j - 1);
            divergence.set(i, j, -0.5 * h * flux);
            pressure.set(i, j, 0.0);
        }
    }
    apply_boundary(pressure, BoundaryKind::Scalar);
    apply_boundary(divergence, BoundaryKind::Scalar);

    for _ in 0..iterations {
        for i in 1..n {
            for j in 1..n {
                let value = (divergence.get(i, j) + pressure.neighbor_sum(i, j)) * 0.25;
                pressure.set(i, j, value);
            }
        }
        apply_boundary(pressure, BoundaryKind::Scalar);
    }

    let scale = 0.5 / h;
    for i in 1..n {
        for j in 1..n {
            let grad_x = pressure.get(i + 1, j) - pressure.get(i - 1, j);
            let grad_y = pressure.get(i, j + 1) - pressure.get(i, j - 1);
            velocity_x.add(i, j, -scale * grad_x);
            velocity_y.add(i, j, -scale * grad_y);
        }
    }
    apply_boundary(velocity_x, BoundaryKind::HorizontalVelocity);
    apply_boundary(velocity_y, BoundaryKind::VerticalVelocity);
}

/// Central-difference divergence of an interior cell, in cells/tick.
#[inline]
pub fn divergence_at(velocity_x: &ScalarField, velocity_y: &ScalarField, i: usize, j: usize) -> Real {
    0.5 * (velocity_x.get(i + 1, j) - velocity_x.get(i - 1, j) + velocity_y.get(i, j + 1)
        - velocity_y.get(i, j - 1))
}

/// Sum of squared interior divergence; used to judge how incompressible a
/// field is.
pub fn divergence_energy(velocity_x: &ScalarField, velocity_y: &ScalarField) -> Real {
    let n = velocity_x.size();
    let mut total = 0.0;
    for i in 1..n {
        for j in 1..n {
            let d = divergence_at(velocity_x, velocity_y, i, j);
            total += d * d;
        }
    }
    total
}
