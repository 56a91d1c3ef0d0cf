//! Edge and corner conditions for the axis-aligned box domain.

use crate::core::ScalarField;

/// Which reflection rule the boundary ring follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Density-like: every edge copies its interior neighbour
    Scalar,
    /// x-velocity: negated across the `i = 0` and `i = N` walls
    HorizontalVelocity,
    /// y-velocity: negated across the `j = 0` and `j = N` walls
    VerticalVelocity,
}

/// Overwrite the boundary ring of `field` from its interior neighbours.
///
/// Edges are filled first, then each corner becomes the mean of its two
/// adjacent edge cells.
pub fn apply_boundary(field: &mut ScalarField, kind: BoundaryKind) {
    let n = field.size();
    let flip_i = if kind == BoundaryKind::HorizontalVelocity { -1.0 } else { 1.0 };
    let flip_j = if kind == BoundaryKind::VerticalVelocity { -1.0 } else { 1.0 };

    for k in 1..n {
        field.set(0, k, flip_i * field.get(1, k));
        field.set(n, k, flip_i * field.get(n - 1, k));
        field.set(k, 0, flip_j * field.get(k, 1));
        field.set(k, n, flip_j * field.get(k, n - 1));
    }

    field.set(0, 0, 0.5 * (field.get(1, 0) + field.get(0, 1)));
    field.set(n, 0, 0.5 * (field.get(n - 1, 0) + field.get(n, 1)));
    field.set(0, n, 0.5 * (field.get(0, n - 1) + field.get(1, n)));
    field.set(n, n, 0.5 * (field.get(n, n - 1) + field.get(n - 1, n)));
}
