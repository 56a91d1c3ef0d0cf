// Default constants for the stable fluids solver

// Lattice
pub const GRID_SIZE: usize = 31;
pub const CELL_SCALE: f32 = 30.0;

// Integration
pub const TIME_STEP: f32 = 0.2;
pub const DIFFUSION_RATE: f32 = 0.2;
pub const VISCOSITY: f32 = 0.1;
pub const RELAXATION_ITERATIONS: usize = 15;

// Dissipation applied to current fields after every tick
pub const FADE_FACTOR: f32 = 0.001;

// Deflection forcing
pub const DEFLECTION_THRESHOLD: f32 = 0.7;
pub const DEFLECTION_STRENGTH: f32 = 0.7;

// Pointer strokes and density opacity
pub const SIGMOID_STEP: f32 = 12.0;
pub const STROKE_GAIN: f32 = 50.0;

/// Smallest lattice that still has an interior to relax.
pub const MIN_GRID_SIZE: usize = 3;
