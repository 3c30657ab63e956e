//! Animation settings
//!
//! Defaults reproduce the classic 800x600 view at 180 ticks per second. An
//! optional `settings.json` in the platform config directory may override any
//! subset of fields:
//! - Linux: ~/.config/solar-orbits/settings.json
//! - macOS: ~/Library/Application Support/solar-orbits/settings.json
//! - Windows: %APPDATA%\solar-orbits\config\settings.json

use anyhow::{Context, Result};
use bevy::math::DVec2;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

/// Faster rates shrink the fixed timestep toward zero
pub const MAX_TICK_HZ: f64 = 10_000.0;

/// Tunable constants for layout, pacing and drawing
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Simulation ticks per second
    pub tick_hz: f64,
    /// A trace segment is recorded every `line_draw_rate` ticks
    pub line_draw_rate: u64,
    /// Base angle advance per tick, in radians, for a body with Earth's period
    pub step_constant: f64,
    /// Unscaled sun disc radius
    pub sun_radius: f32,
    /// Unscaled planet disc radius
    pub planet_radius: f32,
    /// Applied to the first planet's orbit when both orbits coincide
    pub tie_break_factor: f64,
    pub label_font_size: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            tick_hz: 180.0,
            line_draw_rate: 5,
            step_constant: 0.01,
            sun_radius: 40.0,
            planet_radius: 10.0,
            tie_break_factor: 0.9,
            label_font_size: 20.0,
        }
    }
}

impl AnimationSettings {
    /// Half of the shorter canvas side; the outer orbit reaches exactly this far
    pub fn half_extent(&self) -> f64 {
        self.canvas_width.min(self.canvas_height) as f64 / 2.0
    }

    /// Canvas centre in canvas coordinates (origin top-left, y down)
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            self.canvas_width as f64 / 2.0,
            self.canvas_height as f64 / 2.0,
        )
    }

    /// Reject values that would make the layout or pacing meaningless
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            anyhow::bail!(
                "canvas must be non-empty (got {}x{})",
                self.canvas_width,
                self.canvas_height
            );
        }
        if !(self.tick_hz > 0.0 && self.tick_hz <= MAX_TICK_HZ) {
            anyhow::bail!(
                "tick_hz must lie in (0, {}] (got {})",
                MAX_TICK_HZ,
                self.tick_hz
            );
        }
        if self.line_draw_rate == 0 {
            anyhow::bail!("line_draw_rate must be at least 1");
        }
        if !(self.step_constant.is_finite() && self.step_constant > 0.0) {
            anyhow::bail!("step_constant must be positive (got {})", self.step_constant);
        }
        if !(self.tie_break_factor > 0.0 && self.tie_break_factor < 1.0) {
            anyhow::bail!(
                "tie_break_factor must lie in (0, 1) (got {})",
                self.tie_break_factor
            );
        }
        if self.sun_radius < 0.0 || self.planet_radius < 0.0 || self.label_font_size <= 0.0 {
            anyhow::bail!("radii and font size must not be negative");
        }
        Ok(())
    }
}

/// Where the active settings came from, reported once at startup
#[derive(Resource, Clone, Debug, PartialEq)]
pub enum SettingsOrigin {
    Defaults,
    File(PathBuf),
    Fallback { reason: String },
}

/// Resolve the platform settings file location
pub fn settings_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "solar-orbits")
        .context("could not resolve config directory")?;
    Ok(proj_dirs.config_dir().join(SETTINGS_FILE))
}

/// Read settings from `path`
///
/// Returns Ok(None) if the file does not exist.
/// Returns Err if the file exists but cannot be read, parsed or validated.
pub fn load_from(path: &Path) -> Result<Option<AnimationSettings>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let settings: AnimationSettings = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("validating {}", path.display()))?;

    Ok(Some(settings))
}

/// Settings for this run; never fails, any problem falls back to defaults
pub fn resolve() -> (AnimationSettings, SettingsOrigin) {
    let loaded = settings_path().and_then(|path| load_from(&path).map(|s| (path, s)));
    match loaded {
        Ok((path, Some(settings))) => (settings, SettingsOrigin::File(path)),
        Ok((_, None)) => (AnimationSettings::default(), SettingsOrigin::Defaults),
        Err(err) => (
            AnimationSettings::default(),
            SettingsOrigin::Fallback {
                reason: format!("{:#}", err),
            },
        ),
    }
}

/// Plugin that installs the resolved settings
pub struct SettingsPlugin {
    pub settings: AnimationSettings,
    pub origin: SettingsOrigin,
}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(self.origin.clone())
            .insert_resource(Time::<Fixed>::from_hz(self.settings.tick_hz))
            .add_systems(Startup, log_settings_origin);
    }
}

fn log_settings_origin(origin: Res<SettingsOrigin>, settings: Res<AnimationSettings>) {
    match &*origin {
        SettingsOrigin::Defaults => info!("Using default animation settings"),
        SettingsOrigin::File(path) => info!("Loaded animation settings from {}", path.display()),
        SettingsOrigin::Fallback { reason } => {
            warn!("Ignoring settings file, using defaults: {}", reason)
        }
    }
    debug!("Animation settings: {:?}", *settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "solar-orbits-settings-{}-{}-{}",
            test_name,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = AnimationSettings::default();
        settings.validate().expect("defaults should validate");
        assert_eq!(settings.half_extent(), 300.0);
        assert_eq!(settings.center(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = unique_temp_dir("missing");
        let result = load_from(&dir.join(SETTINGS_FILE)).expect("missing file is not an error");
        assert!(result.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = unique_temp_dir("partial");
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, r#"{ "line_draw_rate": 10, "canvas_width": 1024 }"#).unwrap();

        let settings = load_from(&path).unwrap().expect("file should load");
        assert_eq!(settings.line_draw_rate, 10);
        assert_eq!(settings.canvas_width, 1024);
        assert_eq!(settings.canvas_height, 600);
        assert_eq!(settings.tick_hz, 180.0);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = unique_temp_dir("malformed");
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = unique_temp_dir("invalid");
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, r#"{ "line_draw_rate": 0 }"#).unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("line_draw_rate"));

        let zero_canvas = AnimationSettings {
            canvas_height: 0,
            ..default()
        };
        assert!(zero_canvas.validate().is_err());

        let bad_tie_break = AnimationSettings {
            tie_break_factor: 1.0,
            ..default()
        };
        assert!(bad_tie_break.validate().is_err());
    }

    #[test]
    fn test_tick_rate_must_give_a_nonzero_timestep() {
        for tick_hz in [0.0, -60.0, f64::NAN, f64::INFINITY, 1e10, MAX_TICK_HZ + 1.0] {
            let settings = AnimationSettings {
                tick_hz,
                ..default()
            };
            assert!(settings.validate().is_err(), "tick_hz {} accepted", tick_hz);
        }

        let fastest = AnimationSettings {
            tick_hz: MAX_TICK_HZ,
            ..default()
        };
        fastest.validate().expect("upper bound is inclusive");
        assert!(!Duration::from_secs_f64(1.0 / fastest.tick_hz).is_zero());

        let dir = unique_temp_dir("tick_hz");
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, r#"{ "tick_hz": 1e10 }"#).unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("tick_hz"));
    }
}
