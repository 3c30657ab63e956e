use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin, WindowResolution};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod catalog;
mod cli;
mod config;
mod orbital;
mod visualization;

use config::{AnimationSettings, SettingsPlugin};
use orbital::OrbitalPlugin;
use visualization::VisualizationPlugin;

/// Escape ends the run the same way closing the window does
fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

fn primary_window(settings: &AnimationSettings) -> Window {
    Window {
        title: "Solar System Simulation".to_string(),
        resolution: WindowResolution::new(settings.canvas_width, settings.canvas_height),
        resizable: false,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}

fn main() -> AppExit {
    let pair = match cli::parse_planet_pair(std::env::args().skip(1)) {
        Ok(pair) => pair,
        Err(cli::ArgsError::Info { text }) => {
            println!("{}", text.trim_end());
            return AppExit::Success;
        }
        Err(err) => {
            eprintln!("{}", err);
            return AppExit::from_code(1);
        }
    };

    let (settings, origin) = config::resolve();
    println!("[INIT] Tracing {} and {}", pair.first, pair.second);

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(primary_window(&settings)),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Settings must be installed before the orbit plugin computes its layout.
    app.add_plugins(SettingsPlugin { settings, origin });
    app.add_plugins(OrbitalPlugin { pair });
    app.add_plugins(VisualizationPlugin);
    app.add_systems(Update, exit_on_escape);

    app.run()
}
