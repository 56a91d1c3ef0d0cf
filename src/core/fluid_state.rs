use std::time::Instant;

use bevy::prelude::*;

use crate::config::{ConfigError, FluidConfig};
use crate::math::{Real, soft_sign};
use crate::solver::{ProjectionScratch, deflect, density_step, velocity_step};

use super::field::ScalarField;
use super::grid::{Field, FluidGrid, Quantity};

/// Aggregate simulation state: the grid, its configuration and the scratch
/// buffers the solver needs so a tick never allocates.
#[derive(Resource, Clone, Debug)]
pub struct FluidSim {
    config: FluidConfig,
    grid: FluidGrid,
    scratch: ProjectionScratch,
    ticks: u64,
}

impl FluidSim {
    /// Panics if `config` does not validate.
    pub fn new(config: FluidConfig) -> Self {
        match Self::try_new(config) {
            Ok(sim) => sim,
            Err(err) => panic!("invalid fluid config: {err}"),
        }
    }

    pub fn try_new(config: FluidConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "fluid grid {}x{} (dt {}, diffusion {}, viscosity {}, {} sweeps)",
            config.size + 1,
            config.size + 1,
            config.dt,
            config.diffusion,
            config.viscosity,
            config.iterations
        );
        Ok(Self {
            config,
            grid: FluidGrid::new(config.size, config.cell_scale),
            scratch: ProjectionScratch::new(config.size),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn grid(&self) -> &FluidGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut FluidGrid {
        &mut self.grid
    }

    pub fn field(&self, field: Field) -> &ScalarField {
        self.grid.field(field)
    }

    /// Add `value` to one quantity of cell `(i, j)`.
    pub fn add_source(&mut self, i: usize, j: usize, quantity: Quantity, value: Real) {
        self.assert_cell(i, j);
        self.grid.field_mut(quantity.into()).add(i, j, value);
    }

    pub fn get(&self, i: usize, j: usize, quantity: Quantity) -> Real {
        self.assert_cell(i, j);
        self.grid.field(quantity.into()).get(i, j)
    }

    pub fn density(&self, i: usize, j: usize) -> Real {
        self.get(i, j, Quantity::Density)
    }

    pub fn velocity(&self, i: usize, j: usize) -> Vec2 {
        Vec2::new(
            self.get(i, j, Quantity::VelocityX),
            self.get(i, j, Quantity::VelocityY),
        )
    }

    /// Opacity in `[0, 1)` a renderer can use for the density of a cell.
    pub fn density_alpha(&self, i: usize, j: usize) -> Real {
        soft_sign(self.density(i, j), self.config.stroke.sigmoid_step)
    }

    /// Advance one frame: snapshot, velocity step, density step, deflection
    /// forcing and fade.
    pub fn tick(&mut self) {
        let start = Instant::now();

        self.grid.snapshot();
        velocity_step(&mut self.grid, &mut self.scratch, &self.config);
        density_step(&mut self.grid, &self.config);
        if let Some(deflection) = &self.config.deflection {
            deflect(&mut self.grid, deflection);
        }
        self.grid.fade(self.config.fade);
        self.ticks += 1;

        let elapsed = start.elapsed().as_secs_f32() * 1000.0;
        debug!("fluid_tick {}: {:.3}ms", self.ticks, elapsed);
    }

    /// Zero every field; the configuration is kept.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.ticks = 0;
    }

    fn assert_cell(&self, i: usize, j: usize) {
        assert!(
            self.grid.in_bounds(i, j),
            "cell ({i}, {j}) is outside the 0..={} lattice",
            self.config.size
        );
    }
}

pub fn advance_fluid(mut sim: ResMut<FluidSim>) {
    sim.tick();
}
