//! Orbit simulation module
//!
//! This module computes the orbit layout for the selected pair of planets and
//! advances their angles on the fixed timestep, sampling the connecting trace.

use bevy::prelude::*;

pub mod layout;
pub mod simulation;
pub mod systems;

pub use layout::OrbitLayout;
pub use simulation::{SimulationState, TraceSegment};
pub use systems::{advance_simulation, log_orbit_layout, report_run_summary};

use crate::cli::PlanetPair;
use crate::config::AnimationSettings;

/// Plugin for the two-body orbit simulation
///
/// Uses the installed [`AnimationSettings`], inserting defaults if none are present.
pub struct OrbitalPlugin {
    pub pair: PlanetPair,
}

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world_mut()
            .get_resource_or_insert_with(AnimationSettings::default)
            .clone();
        let layout = OrbitLayout::new(self.pair, &settings);
        let state = SimulationState::new(&layout, &settings);

        app.insert_resource(layout)
            .insert_resource(state)
            .add_systems(Startup, log_orbit_layout)
            .add_systems(FixedUpdate, advance_simulation)
            .add_systems(Last, report_run_summary);
    }
}
