//! Systems driving the orbit simulation

use bevy::prelude::*;
use chrono::Utc;

use crate::config::AnimationSettings;
use crate::orbital::layout::OrbitLayout;
use crate::orbital::simulation::SimulationState;

/// Trace sizes at which a progress line is logged
const TRACE_LOG_INTERVAL: usize = 1000;

/// Report the fixed geometry once at startup
pub fn log_orbit_layout(layout: Res<OrbitLayout>) {
    for body in &layout.bodies {
        let info = body.planet.info();
        info!(
            "{}: orbit radius {:.2}, angular increment {:.4}, period {} y, day {} d",
            body.planet,
            body.radius,
            body.angular_increment,
            info.orbital_period,
            info.rotational_period
        );
    }
    info!(
        "Larger orbit ratio {}, max orbit radius {:.2}, scaling factor {:.4}",
        layout.larger_ratio, layout.max_orbit_radius, layout.scaling_factor
    );
    if layout.tie_broken {
        info!("Both orbits coincide; shrinking {}'s orbit", layout.bodies[0].planet);
    }
}

/// Advance the simulation by one fixed tick
pub fn advance_simulation(
    layout: Res<OrbitLayout>,
    settings: Res<AnimationSettings>,
    mut state: ResMut<SimulationState>,
) {
    if state.step(&layout, &settings).is_some() && state.trace.len() % TRACE_LOG_INTERVAL == 0 {
        debug!(
            "Trace reached {} segments after {} ticks",
            state.trace.len(),
            state.frame_counter
        );
    }
}

/// Log a summary once the app has been asked to exit
pub fn report_run_summary(
    mut exits: MessageReader<AppExit>,
    layout: Res<OrbitLayout>,
    state: Res<SimulationState>,
) {
    if exits.read().next().is_none() {
        return;
    }

    let elapsed = Utc::now().signed_duration_since(state.started_at);
    info!(
        "{} and {}: {} ticks, {} trace segments, ran {:.1} s",
        layout.bodies[0].planet,
        layout.bodies[1].planet,
        state.frame_counter,
        state.trace.len(),
        elapsed.num_milliseconds() as f64 / 1000.0
    );
}
