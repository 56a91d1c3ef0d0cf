use bevy::prelude::*;

use super::constants::*;

/// Parameters of the heuristic that steers fast flow toward its nearest
/// lattice directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeflectionParams {
    /// Speed (cells/tick) a cell must exceed before it deflects anything
    pub threshold: f32,
    /// Fraction of the deflected velocity injected into the neighbour
    pub strength: f32,
}

impl Default for DeflectionParams {
    fn default() -> Self {
        Self {
            threshold: DEFLECTION_THRESHOLD,
            strength: DEFLECTION_STRENGTH,
        }
    }
}

/// How pointer movement in render space is turned into forcing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeParams {
    /// Softness of the sigmoid applied to the pointer delta
    pub sigmoid_step: f32,
    /// Velocity injected for a saturated pointer delta
    pub gain: f32,
}

impl Default for StrokeParams {
    fn default() -> Self {
        Self {
            sigmoid_step: SIGMOID_STEP,
            gain: STROKE_GAIN,
        }
    }
}

/// Solver configuration, fixed for the lifetime of a simulation.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct FluidConfig {
    /// N: the lattice spans indices `0..=N` on both axes
    pub size: usize,
    /// Time step used by the backward trace
    pub dt: f32,
    /// Diffusion rate of the density field
    pub diffusion: f32,
    /// Diffusion rate of the velocity field
    pub viscosity: f32,
    /// Gauss-Seidel sweeps per relaxation
    pub iterations: usize,
    /// Multiplicative decay applied to current fields after each tick
    pub fade: f32,
    /// Render-space edge length of one cell
    pub cell_scale: f32,
    pub stroke: StrokeParams,
    /// Deflection forcing feeds energy back into fast flow every tick and
    /// grows without bound for strong impulses, so it is opt-in
    pub deflection: Option<DeflectionParams>,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            dt: TIME_STEP,
            diffusion: DIFFUSION_RATE,
            viscosity: VISCOSITY,
            iterations: RELAXATION_ITERATIONS,
            fade: FADE_FACTOR,
            cell_scale: CELL_SCALE,
            stroke: StrokeParams::default(),
            deflection: None,
        }
    }
}

impl FluidConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_diffusion(mut self, diffusion: f32) -> Self {
        self.diffusion = diffusion;
        self
    }

    pub fn with_viscosity(mut self, viscosity: f32) -> Self {
        self.viscosity = viscosity;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_fade(mut self, fade: f32) -> Self {
        self.fade = fade;
        self
    }

    pub fn with_cell_scale(mut self, cell_scale: f32) -> Self {
        self.cell_scale = cell_scale;
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeParams) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_deflection(mut self, deflection: DeflectionParams) -> Self {
        self.deflection = Some(deflection);
        self
    }

    pub fn without_deflection(mut self) -> Self {
        self.deflection = None;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(self.size));
        }
        check_rate("dt", self.dt)?;
        check_rate("diffusion", self.diffusion)?;
        check_rate("viscosity", self.viscosity)?;
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if !(0.0..1.0).contains(&self.fade) {
            return Err(ConfigError::FadeOutOfRange(self.fade));
        }
        if !(self.cell_scale.is_finite() && self.cell_scale > 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "cell_scale",
                value: self.cell_scale,
            });
        }
        if !(self.stroke.sigmoid_step.is_finite() && self.stroke.sigmoid_step > 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "stroke.sigmoid_step",
                value: self.stroke.sigmoid_step,
            });
        }
        check_rate("stroke.gain", self.stroke.gain)?;
        if let Some(deflection) = &self.deflection {
            check_rate("deflection.threshold", deflection.threshold)?;
            check_rate("deflection.strength", deflection.strength)?;
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { name, value })
    }
}

/// Reasons a configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size {0} is below the minimum of {min}", min = MIN_GRID_SIZE)]
    GridTooSmall(usize),
    #[error("relaxation needs at least one iteration")]
    NoIterations,
    #[error("fade factor {0} is outside [0, 1)")]
    FadeOutOfRange(f32),
    #[error("{name} has invalid value {value}")]
    InvalidValue { name: &'static str, value: f32 },
}
