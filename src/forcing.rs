//! External forcing
//!
//! Collaborators queue impulses during a frame; they are applied to the grid
//! in one batch before the next tick so no sweep ever sees a half-written
//! snapshot.

use bevy::prelude::*;

use crate::core::{FluidSim, Quantity};
use crate::math::{Real, soft_sign};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impulse {
    pub cell: UVec2,
    pub quantity: Quantity,
    pub value: Real,
}

#[derive(Resource, Default, Debug)]
pub struct ForcingQueue {
    impulses: Vec<Impulse>,
}

impl ForcingQueue {
    pub fn push(&mut self, cell: UVec2, quantity: Quantity, value: Real) {
        self.impulses.push(Impulse {
            cell,
            quantity,
            value,
        });
    }

    /// Turn a pointer movement from `from` to `to` (render space) into
    /// density and velocity at the cells under both endpoints.
    ///
    /// Returns `false` and queues nothing when either endpoint is off the
    /// lattice.
    pub fn push_stroke(&mut self, sim: &FluidSim, from: Vec2, to: Vec2) -> bool {
        let grid = sim.grid();
        let (Some(from_cell), Some(to_cell)) = (grid.cell_at(from), grid.cell_at(to)) else {
            debug!("stroke {from} -> {to} leaves the lattice, ignored");
            return false;
        };

        let stroke = &sim.config().stroke;
        let delta = to - from;
        let velocity = Vec2::new(
            soft_sign(delta.x, stroke.sigmoid_step),
            soft_sign(delta.y, stroke.sigmoid_step),
        ) * stroke.gain;
        let speed = velocity.length();

        for cell in [to_cell, from_cell] {
            self.push(cell, Quantity::Density, speed);
            self.push(cell, Quantity::VelocityX, velocity.x);
            self.push(cell, Quantity::VelocityY, velocity.y);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.impulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.impulses.is_empty()
    }

    pub fn impulses(&self) -> &[Impulse] {
        &self.impulses
    }

    /// Apply and forget every queued impulse.
    pub fn apply_to(&mut self, sim: &mut FluidSim) {
        for impulse in self.impulses.drain(..) {
            sim.add_source(
                impulse.cell.x as usize,
                impulse.cell.y as usize,
                impulse.quantity,
                impulse.value,
            );
        }
    }
}

pub fn apply_queued_forcing(mut queue: ResMut<ForcingQueue>, mut sim: ResMut<FluidSim>) {
    if queue.is_empty() {
        return;
    }
    queue.apply_to(&mut sim);
}
