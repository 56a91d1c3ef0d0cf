pub mod field;
pub mod fluid_state;
pub mod grid;

pub use field::ScalarField;
pub use fluid_state::{FluidSim, advance_fluid};
pub use grid::{Field, FluidGrid, Quantity};
