//! Visualization module
//!
//! This module draws the scene: the sun and planet discs, the accumulated
//! trace lines and the planet name labels.

use bevy::camera::visibility::RenderLayers;
use bevy::prelude::*;

pub mod bodies;
pub mod canvas;
pub mod config;
pub mod labels;
pub mod trace;

pub use bodies::{BODY_LAYER, spawn_bodies, sync_planet_transforms};
pub use config::SceneStyle;
pub use labels::spawn_planet_labels;
pub use trace::draw_trace;

/// Plugin for rendering the orbit scene
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        let style = SceneStyle::default();
        app.insert_resource(ClearColor(style.background))
            .insert_resource(style)
            .add_systems(Startup, (spawn_camera, spawn_bodies, spawn_planet_labels))
            .add_systems(Update, (sync_planet_transforms, draw_trace));
    }
}

/// Two cameras over the same canvas. The first clears the frame and renders
/// layer 0, where the trace gizmos live; the second renders only the discs on
/// top of it without clearing.
fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            order: 0,
            ..default()
        },
        Name::new("Trace Camera"),
    ));
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        RenderLayers::layer(BODY_LAYER),
        Name::new("Body Camera"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_camera_draws_after_trace_camera() {
        let mut app = App::new();
        app.add_systems(Startup, spawn_camera);
        app.update();

        let world = app.world_mut();
        let mut cameras: Vec<(isize, ClearColorConfig, Option<RenderLayers>)> = world
            .query::<(&Camera, Option<&RenderLayers>)>()
            .iter(world)
            .map(|(camera, layers)| (camera.order, camera.clear_color.clone(), layers.cloned()))
            .collect();
        cameras.sort_by_key(|(order, _, _)| *order);
        assert_eq!(cameras.len(), 2);

        let (trace_order, _, trace_layers) = &cameras[0];
        assert_eq!(*trace_order, 0);
        // No explicit layers means layer 0, the gizmo default
        assert!(trace_layers.is_none());

        let (body_order, body_clear, body_layers) = &cameras[1];
        assert_eq!(*body_order, 1);
        assert!(matches!(body_clear, ClearColorConfig::None));
        assert_eq!(body_layers.as_ref(), Some(&RenderLayers::layer(BODY_LAYER)));
    }
}
