// Headless stirring demo: drags a jittery pointer in circles and reports how
// much dye and motion the grid holds.
use bevy::log::LogPlugin;
use bevy::prelude::*;
use fluid2d::{Field, FluidConfig, FluidPlugin, FluidSim, FluidSystems, ForcingQueue};
use rand::Rng;

const FRAMES: u32 = 600;
const REPORT_EVERY: u64 = 60;
const STIR_RADIUS: f32 = 240.0;

#[derive(Resource, Default)]
struct Pointer {
    last: Option<Vec2>,
    phase: f32,
}

fn stir(mut pointer: ResMut<Pointer>, mut queue: ResMut<ForcingQueue>, sim: Res<FluidSim>) {
    let mut rand = rand::rng();
    let size = sim.size() as f32 * sim.config().cell_scale;
    let center = Vec2::splat(size * 0.5);

    pointer.phase += 0.08;
    let jitter = Vec2::new(rand.random_range(-6.0..=6.0), rand.random_range(-6.0..=6.0));
    let position = center + Vec2::from_angle(pointer.phase) * STIR_RADIUS + jitter;

    if let Some(last) = pointer.last {
        queue.push_stroke(&sim, last, position);
    }
    pointer.last = Some(position);
}

fn report(sim: Res<FluidSim>) {
    if sim.ticks() % REPORT_EVERY != 0 {
        return;
    }
    let density = sim.field(Field::Density);
    let speed = sim
        .field(Field::VelocityX)
        .max_abs()
        .max(sim.field(Field::VelocityY).max_abs());
    info!(
        "tick {}: total density {:.2}, peak density {:.2}, peak speed {:.2}",
        sim.ticks(),
        density.sum(),
        density.max_abs(),
        speed
    );
}

fn main() {
    let mut app = App::new();
    app.add_plugins((
        LogPlugin::default(),
        FluidPlugin::new(FluidConfig::default()),
    ))
    .init_resource::<Pointer>()
    .add_systems(Update, stir.before(FluidSystems::Forcing))
    .add_systems(Update, report.after(FluidSystems::Advance));

    for _ in 0..FRAMES {
        app.update();
    }
}
