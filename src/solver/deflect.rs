//! Deflection forcing
//!
//! Fast flow leaks part of its speed into the neighbours whose lattice
//! direction lies within a quarter turn of its heading. Purely stylistic;
//! runs on top of the physical step.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::config::DeflectionParams;
use crate::core::FluidGrid;
use crate::math::{Real, heading, quarter_turn_delta};

/// Neighbour offsets in the order they are visited.
pub const DEFLECTION_OFFSETS: [IVec2; 8] = [
    IVec2::new(0, 1),
    IVec2::new(0, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, -1),
    IVec2::new(-1, 1),
];

/// Velocity to add to the neighbour at `offset` for flow `velocity`, or
/// `None` if that neighbour lies a quarter turn or more off the heading.
pub fn deflected_velocity(velocity: Vec2, offset: IVec2, strength: Real) -> Option<Vec2> {
    let speed = velocity.length();
    if speed == 0.0 {
        return None;
    }
    let flow_heading = heading(velocity);
    let delta = quarter_turn_delta(flow_heading, heading(offset.as_vec2()))?;

    let deflected_speed = speed * ((FRAC_PI_2 - delta.abs()) / FRAC_PI_2);
    let turn = (deflected_speed / speed).clamp(-1.0, 1.0).acos();
    let angle = if delta >= 0.0 {
        flow_heading + turn
    } else {
        flow_heading - turn
    };
    Some(Vec2::from_angle(angle) * deflected_speed * strength)
}

/// Read `prev_velocity_*`, inject into `velocity_*` of neighbouring cells.
pub fn deflect(grid: &mut FluidGrid, params: &DeflectionParams) {
    let n = grid.size();
    let FluidGrid {
        velocity_x,
        velocity_y,
        prev_velocity_x,
        prev_velocity_y,
        ..
    } = grid;

    for i in 1..n {
        for j in 1..n {
            let velocity = Vec2::new(prev_velocity_x.get(i, j), prev_velocity_y.get(i, j));
            // NaN compares false here too, so broken cells never deflect
            if !(velocity.length() > params.threshold) {
                continue;
            }
            for offset in DEFLECTION_OFFSETS {
                let Some(push) = deflected_velocity(velocity, offset, params.strength) else {
                    continue;
                };
                let ni = (i as i32 + offset.x) as usize;
                let nj = (j as i32 + offset.y) as usize;
                velocity_x.add(ni, nj, push.x);
                velocity_y.add(ni, nj, push.y);
            }
        }
    }
}
