//! Field grid for the stable fluids solver
//!
//! Square `(N+1) x (N+1)` lattice; indices `0` and `N` form the boundary ring.

use bevy::prelude::*;

use crate::core::field::ScalarField;
use crate::math::Real;
use crate::solver::boundary::{BoundaryKind, apply_boundary};

/// Quantities a collaborator may inject into or read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    Density,
    VelocityX,
    VelocityY,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [Quantity::Density, Quantity::VelocityX, Quantity::VelocityY];
}

/// Every per-cell scalar owned by the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Density,
    VelocityX,
    VelocityY,
    PrevDensity,
    PrevVelocityX,
    PrevVelocityY,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Density,
        Field::VelocityX,
        Field::VelocityY,
        Field::PrevDensity,
        Field::PrevVelocityX,
        Field::PrevVelocityY,
    ];

    /// The snapshot slot paired with a current field.
    pub fn previous(quantity: Quantity) -> Self {
        match quantity {
            Quantity::Density => Field::PrevDensity,
            Quantity::VelocityX => Field::PrevVelocityX,
            Quantity::VelocityY => Field::PrevVelocityY,
        }
    }
}

impl From<Quantity> for Field {
    fn from(quantity: Quantity) -> Self {
        match quantity {
            Quantity::Density => Field::Density,
            Quantity::VelocityX => Field::VelocityX,
            Quantity::VelocityY => Field::VelocityY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FluidGrid {
    size: usize,
    cell_scale: Real,
    pub density: ScalarField,
    pub velocity_x: ScalarField,
    pub velocity_y: ScalarField,
    pub prev_density: ScalarField,
    pub prev_velocity_x: ScalarField,
    pub prev_velocity_y: ScalarField,
}

impl FluidGrid {
    pub fn new(size: usize, cell_scale: Real) -> Self {
        Self {
            size,
            cell_scale,
            density: ScalarField::zeros(size),
            velocity_x: ScalarField::zeros(size),
            velocity_y: ScalarField::zeros(size),
            prev_density: ScalarField::zeros(size),
            prev_velocity_x: ScalarField::zeros(size),
            prev_velocity_y: ScalarField::zeros(size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, i: usize, j: usize) -> bool {
        i <= self.size && j <= self.size
    }

    /// Render-space corner of cell `(i, j)`.
    pub fn cell_position(&self, i: usize, j: usize) -> Vec2 {
        Vec2::new(i as Real * self.cell_scale, j as Real * self.cell_scale)
    }

    /// Cell under a render-space point, if it lies on the lattice.
    pub fn cell_at(&self, position: Vec2) -> Option<UVec2> {
        let cell = (position / self.cell_scale).floor();
        let limit = self.size as Real;
        if cell.x < 0.0 || cell.y < 0.0 || cell.x >= limit || cell.y >= limit {
            return None;
        }
        Some(cell.as_uvec2())
    }

    pub fn field(&self, field: Field) -> &ScalarField {
        match field {
            Field::Density => &self.density,
            Field::VelocityX => &self.velocity_x,
            Field::VelocityY => &self.velocity_y,
            Field::PrevDensity => &self.prev_density,
            Field::PrevVelocityX => &self.prev_velocity_x,
            Field::PrevVelocityY => &self.prev_velocity_y,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut ScalarField {
        match field {
            Field::Density => &mut self.density,
            Field::VelocityX => &mut self.velocity_x,
            Field::VelocityY => &mut self.velocity_y,
            Field::PrevDensity => &mut self.prev_density,
            Field::PrevVelocityX => &mut self.prev_velocity_x,
            Field::PrevVelocityY => &mut self.prev_velocity_y,
        }
    }

    /// Rederive the boundary ring of `field` from its interior.
    pub fn apply_boundary(&mut self, field: Field, kind: BoundaryKind) {
        apply_boundary(self.field_mut(field), kind);
    }

    /// Copy every current field into its snapshot slot.
    pub fn snapshot(&mut self) {
        self.prev_density.copy_from(&self.density);
        self.prev_velocity_x.copy_from(&self.velocity_x);
        self.prev_velocity_y.copy_from(&self.velocity_y);
    }

    /// Decay current fields toward zero by `factor`.
    pub fn fade(&mut self, factor: Real) {
        let keep = 1.0 - factor;
        self.density.scale_in_place(keep);
        self.velocity_x.scale_in_place(keep);
        self.velocity_y.scale_in_place(keep);
    }

    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).fill(0.0);
        }
    }
}
