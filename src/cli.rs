//! Command line handling
//!
//! The animator takes exactly two positional planet names. Validation happens
//! before any window or simulation state exists.

use std::fmt;

use clap::Parser;
use clap::error::ErrorKind;

use crate::catalog::{self, Planet};

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "Trace the line between two orbiting planets"
)]
struct Cli {
    /// First planet, e.g. Earth
    planet1: String,
    /// Second planet, e.g. Mars
    planet2: String,
}

/// The two planets selected on the command line, in argument order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanetPair {
    pub first: Planet,
    pub second: Planet,
}

/// Reasons the command line was rejected
#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    /// Not exactly two planet arguments
    Usage { given: usize },
    /// At least one name is not in the catalog
    UnknownPlanet { names: Vec<String> },
    /// `--help` or `--version` was requested; not a failure
    Info { text: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::Usage { given } => {
                writeln!(f, "Expected 2 planet names, got {}.", given)?;
                writeln!(f, "{}", catalog::listing())?;
                write!(f, "{}", usage())
            }
            ArgsError::UnknownPlanet { names } => {
                writeln!(f, "Invalid planet names entered: {}", names.join(", "))?;
                write!(f, "{}", catalog::listing())
            }
            ArgsError::Info { text } => write!(f, "{}", text.trim_end()),
        }
    }
}

impl std::error::Error for ArgsError {}

pub fn usage() -> String {
    format!("Usage: {} planet1 planet2", env!("CARGO_PKG_NAME"))
}

/// Parse the arguments that follow the program name
pub fn parse_planet_pair<I, S>(args: I) -> Result<PlanetPair, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let argv = std::iter::once(env!("CARGO_PKG_NAME").to_string()).chain(args.iter().cloned());

    let cli = Cli::try_parse_from(argv).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::Info {
            text: err.render().to_string(),
        },
        _ => ArgsError::Usage { given: args.len() },
    })?;

    match (Planet::from_name(&cli.planet1), Planet::from_name(&cli.planet2)) {
        (Some(first), Some(second)) => Ok(PlanetPair { first, second }),
        _ => {
            let names = [cli.planet1.as_str(), cli.planet2.as_str()]
                .into_iter()
                .filter(|n| Planet::from_name(n).is_none())
                .map(str::to_string)
                .collect();
            Err(ArgsError::UnknownPlanet { names })
        }
    }
}
