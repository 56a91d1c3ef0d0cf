//! Pressure projection tests
//!
//! Divergence reduction on randomized fields and on a pair of opposing jets.

use fluid2d::solver::{ProjectionScratch, apply_boundary, divergence_at, divergence_energy, project};
use fluid2d::{BoundaryKind, ScalarField};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZE: usize = 31;
const ITERATIONS: usize = 15;

fn random_velocity(seed: u64) -> (ScalarField, ScalarField) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut vx = ScalarField::zeros(SIZE);
    let mut vy = ScalarField::zeros(SIZE);
    for i in 1..SIZE {
        for j in 1..SIZE {
            vx.set(i, j, rng.random_range(-1.0f32..1.0));
            vy.set(i, j, rng.random_range(-1.0f32..1.0));
        }
    }
    apply_boundary(&mut vx, BoundaryKind::HorizontalVelocity);
    apply_boundary(&mut vy, BoundaryKind::VerticalVelocity);
    (vx, vy)
}

/// Projection shrinks the divergence of randomized fields
#[test]
fn test_projection_reduces_random_divergence() {
    let mut scratch = ProjectionScratch::new(SIZE);
    for seed in 0..5 {
        let (mut vx, mut vy) = random_velocity(seed);
        let before = divergence_energy(&vx, &vy);
        project(&mut vx, &mut vy, &mut scratch, ITERATIONS);
        let after = divergence_energy(&vx, &vy);

        assert!(
            after < 0.75 * before,
            "seed {seed}: divergence {before} only dropped to {after}"
        );
        assert!(vx.is_finite() && vy.is_finite());
    }
}

/// More sweeps never leave more divergence behind
#[test]
fn test_more_sweeps_converge_further() {
    let (vx, vy) = random_velocity(42);
    let mut scratch = ProjectionScratch::new(SIZE);

    let (mut few_x, mut few_y) = (vx.clone(), vy.clone());
    project(&mut few_x, &mut few_y, &mut scratch, 2);
    let (mut many_x, mut many_y) = (vx, vy);
    project(&mut many_x, &mut many_y, &mut scratch, 40);

    assert!(divergence_energy(&many_x, &many_y) < divergence_energy(&few_x, &few_y));
}

/// Opposing jets converge on one cell; projection drains most of that inflow
#[test]
fn test_opposing_jets_flux_shrinks() {
    let mut vx = ScalarField::zeros(SIZE);
    let mut vy = ScalarField::zeros(SIZE);
    vx.set(10, 12, 5.0);
    vx.set(12, 12, -5.0);

    let before = divergence_at(&vx, &vy, 11, 12);
    assert_eq!(before, -5.0);

    let mut scratch = ProjectionScratch::new(SIZE);
    project(&mut vx, &mut vy, &mut scratch, ITERATIONS);
    let after = divergence_at(&vx, &vy, 11, 12);

    assert!(
        after.abs() < before.abs(),
        "net inflow went from {before} to {after}"
    );
    assert!(divergence_energy(&vx, &vy).is_finite());
}
