use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod forcing;
pub mod math;
pub mod solver;

// Public re-exports for clean API
pub use crate::config::{ConfigError, DeflectionParams, FluidConfig, StrokeParams};
pub use crate::core::{Field, FluidGrid, FluidSim, Quantity, ScalarField};
pub use crate::forcing::{ForcingQueue, Impulse};
pub use crate::solver::BoundaryKind;

use crate::core::advance_fluid;
use crate::forcing::apply_queued_forcing;

/// Ordering of the fluid systems inside `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FluidSystems {
    /// Queued impulses are written into the grid
    Forcing,
    /// One simulation tick
    Advance,
}

#[derive(Default)]
pub struct FluidPlugin {
    pub config: FluidConfig,
}

impl FluidPlugin {
    pub fn new(config: FluidConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FluidPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FluidSim::new(self.config))
            .init_resource::<ForcingQueue>()
            .configure_sets(Update, (FluidSystems::Forcing, FluidSystems::Advance).chain())
            .add_systems(Update, apply_queued_forcing.in_set(FluidSystems::Forcing))
            .add_systems(Update, advance_fluid.in_set(FluidSystems::Advance));
    }
}
