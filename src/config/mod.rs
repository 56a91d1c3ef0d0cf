//! Configuration and parameters
//!
//! Default constants and the immutable solver configuration.

pub mod constants;
pub mod solver_params;

pub use constants::*;
pub use solver_params::*;
