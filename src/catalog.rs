//! Planet catalog
//!
//! Fixed per-planet display and orbital data. Orbit ratios and periods are
//! expressed relative to Earth.

use bevy::prelude::*;
use std::fmt;

/// One of the eight planets the animator knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Static data for a single planet
#[derive(Clone, Copy, Debug)]
pub struct PlanetInfo {
    pub name: &'static str,
    /// Display color as sRGB bytes
    pub rgb: [u8; 3],
    /// Mean orbital radius relative to Earth's
    pub orbit_ratio: f64,
    /// Orbital period in Earth years
    pub orbital_period: f64,
    /// Length of a day in Earth days
    pub rotational_period: f64,
}

impl PlanetInfo {
    pub fn color(&self) -> Color {
        Color::srgb_u8(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

static CATALOG: [PlanetInfo; 8] = [
    PlanetInfo {
        name: "Mercury",
        rgb: [169, 169, 169],
        orbit_ratio: 0.39,
        orbital_period: 0.24,
        rotational_period: 58.6,
    },
    PlanetInfo {
        name: "Venus",
        rgb: [255, 215, 0],
        orbit_ratio: 0.72,
        orbital_period: 0.62,
        rotational_period: 243.0,
    },
    PlanetInfo {
        name: "Earth",
        rgb: [0, 191, 255],
        orbit_ratio: 1.0,
        orbital_period: 1.0,
        rotational_period: 1.0,
    },
    PlanetInfo {
        name: "Mars",
        rgb: [255, 0, 0],
        orbit_ratio: 1.52,
        orbital_period: 1.88,
        rotational_period: 1.03,
    },
    PlanetInfo {
        name: "Jupiter",
        rgb: [255, 140, 0],
        orbit_ratio: 5.2,
        orbital_period: 11.86,
        rotational_period: 0.41,
    },
    PlanetInfo {
        name: "Saturn",
        rgb: [218, 165, 32],
        orbit_ratio: 9.58,
        orbital_period: 29.46,
        rotational_period: 0.45,
    },
    PlanetInfo {
        name: "Uranus",
        rgb: [173, 216, 230],
        orbit_ratio: 19.22,
        orbital_period: 84.01,
        rotational_period: 0.72,
    },
    PlanetInfo {
        name: "Neptune",
        rgb: [65, 105, 225],
        orbit_ratio: 30.05,
        orbital_period: 164.8,
        rotational_period: 0.67,
    },
];

/// Planet whose orbital period is the unit for angular speed
pub const REFERENCE_PLANET: Planet = Planet::Earth;

impl Planet {
    /// All planets in catalog order (innermost first)
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn info(self) -> &'static PlanetInfo {
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Look up a planet by its exact, case-sensitive name
    pub fn from_name(name: &str) -> Option<Planet> {
        Planet::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Human readable list of the planet names, one per line
pub fn listing() -> String {
    let mut out = String::from("Available planets:");
    for planet in Planet::ALL {
        out.push('\n');
        out.push_str(planet.name());
    }
    out
}
