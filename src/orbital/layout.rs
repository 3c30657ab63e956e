//! Orbit layout: fitting two circular orbits onto the canvas
//!
//! Computed once per run from the selected planets and the canvas size.

use bevy::math::{DVec2, IVec2};
use bevy::prelude::*;

use crate::catalog::{Planet, REFERENCE_PLANET};
use crate::cli::PlanetPair;
use crate::config::AnimationSettings;

/// Orbit of one selected planet on the canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyOrbit {
    pub planet: Planet,
    /// Orbit radius in canvas units
    pub radius: f64,
    /// Angle advance per step relative to the reference planet
    pub angular_increment: f64,
}

/// Fixed geometry for a run
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrbitLayout {
    pub bodies: [BodyOrbit; 2],
    pub larger_ratio: f64,
    /// Canvas radius that corresponds to an orbit ratio of 1.0
    pub max_orbit_radius: f64,
    /// Uniform size multiplier for the sun and planet discs
    pub scaling_factor: f64,
    /// True when the first orbit was shrunk to separate identical orbits
    pub tie_broken: bool,
}

/// Angle advance per step, relative to the reference planet's orbital period
pub fn angular_increment(planet: Planet) -> f64 {
    REFERENCE_PLANET.info().orbital_period / planet.info().orbital_period
}

/// Position on a circular orbit, truncated to whole canvas units
pub fn orbit_position(center: DVec2, radius: f64, angle: f64) -> IVec2 {
    IVec2::new(
        (center.x + radius * angle.cos()) as i32,
        (center.y + radius * angle.sin()) as i32,
    )
}

impl OrbitLayout {
    pub fn new(pair: PlanetPair, settings: &AnimationSettings) -> Self {
        let half_extent = settings.half_extent();
        let ratio_1 = pair.first.info().orbit_ratio;
        let ratio_2 = pair.second.info().orbit_ratio;

        let larger_ratio = ratio_1.max(ratio_2);
        let max_orbit_radius = half_extent / larger_ratio;
        let scaling_factor = max_orbit_radius / half_extent;

        // ratio / larger_ratio is exactly 1.0 for the outer planet, so its
        // orbit lands on the half extent without rounding drift.
        let mut radius_1 = half_extent * (ratio_1 / larger_ratio);
        let radius_2 = half_extent * (ratio_2 / larger_ratio);

        let tie_broken = radius_1 == radius_2;
        if tie_broken {
            radius_1 *= settings.tie_break_factor;
        }

        Self {
            bodies: [
                BodyOrbit {
                    planet: pair.first,
                    radius: radius_1,
                    angular_increment: angular_increment(pair.first),
                },
                BodyOrbit {
                    planet: pair.second,
                    radius: radius_2,
                    angular_increment: angular_increment(pair.second),
                },
            ],
            larger_ratio,
            max_orbit_radius,
            scaling_factor,
            tie_broken,
        }
    }

    /// Angle advance per tick for one body
    ///
    /// Divides by the scaling factor, so configurations with a larger outer
    /// orbit ratio also animate faster.
    pub fn angle_step(&self, body: usize, settings: &AnimationSettings) -> f64 {
        self.bodies[body].angular_increment * settings.step_constant / self.scaling_factor
    }

    /// Current canvas positions of both bodies
    pub fn positions(&self, angles: [f64; 2], settings: &AnimationSettings) -> [IVec2; 2] {
        let center = settings.center();
        [
            orbit_position(center, self.bodies[0].radius, angles[0]),
            orbit_position(center, self.bodies[1].radius, angles[1]),
        ]
    }
}
