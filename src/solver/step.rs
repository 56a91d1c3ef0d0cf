//! Per-tick sequencing of the solver passes.

use crate::config::FluidConfig;
use crate::core::FluidGrid;

use super::advect::advect;
use super::boundary::BoundaryKind;
use super::diffuse::diffuse;
use super::project::{ProjectionScratch, project};

/// Diffuse, project, advect and project again.
///
/// `prev_velocity_*` ends up holding the diffused, projected velocity the
/// advection traced through; `velocity_*` holds the result of the step.
pub fn velocity_step(grid: &mut FluidGrid, scratch: &mut ProjectionScratch, config: &FluidConfig) {
    let FluidGrid {
        velocity_x,
        velocity_y,
        prev_velocity_x,
        prev_velocity_y,
        ..
    } = grid;
    let iterations = config.iterations;

    diffuse(
        prev_velocity_x,
        velocity_x,
        config.viscosity,
        BoundaryKind::HorizontalVelocity,
        iterations,
    );
    diffuse(
        prev_velocity_y,
        velocity_y,
        config.viscosity,
        BoundaryKind::VerticalVelocity,
        iterations,
    );
    project(prev_velocity_x, prev_velocity_y, scratch, iterations);

    let (trace_x, trace_y) = (&*prev_velocity_x, &*prev_velocity_y);
    advect(
        velocity_x,
        trace_x,
        trace_x,
        trace_y,
        config.dt,
        BoundaryKind::HorizontalVelocity,
    );
    advect(
        velocity_y,
        trace_y,
        trace_x,
        trace_y,
        config.dt,
        BoundaryKind::VerticalVelocity,
    );
    project(velocity_x, velocity_y, scratch, iterations);
}

/// Diffuse the density into its snapshot slot, then carry it back along the
/// current velocity.
pub fn density_step(grid: &mut FluidGrid, config: &FluidConfig) {
    let FluidGrid {
        density,
        prev_density,
        velocity_x,
        velocity_y,
        ..
    } = grid;

    diffuse(
        prev_density,
        density,
        config.diffusion,
        BoundaryKind::Scalar,
        config.iterations,
    );
    advect(
        density,
        prev_density,
        velocity_x,
        velocity_y,
        config.dt,
        BoundaryKind::Scalar,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScalarField;

    fn config() -> FluidConfig {
        FluidConfig::default().with_size(12)
    }

    fn swirling_grid(size: usize) -> FluidGrid {
        let mut grid = FluidGrid::new(size, 1.0);
        grid.velocity_x =
            ScalarField::from_fn(size, |i, j| (i as f32 * 0.9).sin() * 3.0 + j as f32 * 0.2);
        grid.velocity_y =
            ScalarField::from_fn(size, |i, j| (j as f32 * 0.6).cos() * -2.0 + i as f32 * 0.1);
        grid.density = ScalarField::from_fn(size, |i, j| ((i * 7 + j * 3) % 11) as f32);
        grid.snapshot();
        grid
    }

    #[test]
    fn velocity_step_wires_fields_in_order() {
        let config = config();
        let mut grid = swirling_grid(config.size);
        let (mut vx, mut vy) = (grid.velocity_x.clone(), grid.velocity_y.clone());
        let (mut prev_x, mut prev_y) = (grid.prev_velocity_x.clone(), grid.prev_velocity_y.clone());

        let mut expected_scratch = ProjectionScratch::new(config.size);
        let iterations = config.iterations;
        diffuse(&mut prev_x, &vx, config.viscosity, BoundaryKind::HorizontalVelocity, iterations);
        diffuse(&mut prev_y, &vy, config.viscosity, BoundaryKind::VerticalVelocity, iterations);
        project(&mut prev_x, &mut prev_y, &mut expected_scratch, iterations);
        advect(&mut vx, &prev_x, &prev_x, &prev_y, config.dt, BoundaryKind::HorizontalVelocity);
        advect(&mut vy, &prev_y, &prev_x, &prev_y, config.dt, BoundaryKind::VerticalVelocity);
        project(&mut vx, &mut vy, &mut expected_scratch, iterations);

        let mut scratch = ProjectionScratch::new(config.size);
        velocity_step(&mut grid, &mut scratch, &config);

        assert_eq!(grid.prev_velocity_x, prev_x);
        assert_eq!(grid.prev_velocity_y, prev_y);
        assert_eq!(grid.velocity_x, vx);
        assert_eq!(grid.velocity_y, vy);
        assert!(grid.velocity_x.max_abs() > 0.0);
    }

    #[test]
    fn density_step_wires_fields_in_order() {
        let config = config();
        let mut grid = swirling_grid(config.size);
        let mut density = grid.density.clone();
        let mut prev_density = grid.prev_density.clone();

        diffuse(
            &mut prev_density,
            &density,
            config.diffusion,
            BoundaryKind::Scalar,
            config.iterations,
        );
        advect(
            &mut density,
            &prev_density,
            &grid.velocity_x,
            &grid.velocity_y,
            config.dt,
            BoundaryKind::Scalar,
        );

        density_step(&mut grid, &config);
        assert_eq!(grid.prev_density, prev_density);
        assert_eq!(grid.density, density);
    }

    #[test]
    fn still_fluid_stays_still() {
        let config = config();
        let mut grid = FluidGrid::new(config.size, 1.0);
        let mut scratch = ProjectionScratch::new(config.size);
        grid.snapshot();
        velocity_step(&mut grid, &mut scratch, &config);
        assert_eq!(grid.velocity_x.max_abs(), 0.0);
        assert_eq!(grid.velocity_y.max_abs(), 0.0);
    }

    #[test]
    fn density_step_spreads_without_velocity() {
        let config = config();
        let mut grid = FluidGrid::new(config.size, 1.0);
        grid.density.set(6, 6, 50.0);
        grid.snapshot();
        density_step(&mut grid, &config);
        assert!(grid.density.get(6, 6) < 50.0);
        assert!(grid.density.get(7, 6) > 0.0);
        assert_eq!(grid.density, grid.prev_density);
    }

    #[test]
    fn density_follows_the_flow() {
        let config = config();
        let mut grid = FluidGrid::new(config.size, 1.0);
        grid.density.set(5, 6, 50.0);
        grid.velocity_x.fill(5.0);
        grid.snapshot();
        density_step(&mut grid, &config);
        assert!(grid.density.get(6, 6) > grid.density.get(4, 6));
    }

    #[test]
    fn velocity_step_is_finite_for_violent_input() {
        let config = config();
        let mut grid = FluidGrid::new(config.size, 1.0);
        grid.velocity_x.set(6, 6, 1.0e4);
        grid.velocity_y.set(3, 8, -1.0e4);
        let mut scratch = ProjectionScratch::new(config.size);
        grid.snapshot();
        velocity_step(&mut grid, &mut scratch, &config);
        assert!(grid.velocity_x.is_finite());
        assert!(grid.velocity_y.is_finite());
    }
}
