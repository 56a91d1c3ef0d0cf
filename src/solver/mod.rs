//! Stable fluids solver passes
//!
//! Boundary handling, implicit diffusion, semi-Lagrangian advection,
//! pressure projection, deflection forcing and their per-tick sequencing.

pub mod advect;
pub mod boundary;
pub mod deflect;
pub mod diffuse;
pub mod project;
pub mod step;

pub use advect::{advect, sample_bilinear};
pub use boundary::{BoundaryKind, apply_boundary};
pub use deflect::{DEFLECTION_OFFSETS, deflect, deflected_velocity};
pub use diffuse::diffuse;
pub use project::{ProjectionScratch, divergence_at, divergence_energy, project};
pub use step::{density_step, velocity_step};
