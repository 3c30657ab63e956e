//! Sun and planet discs

use bevy::camera::visibility::RenderLayers;
use bevy::prelude::*;

use crate::config::AnimationSettings;
use crate::orbital::{OrbitLayout, SimulationState};
use crate::visualization::canvas::canvas_to_world;
use crate::visualization::config::SceneStyle;

/// Render layer of the discs, drawn by a camera ordered after the trace
pub const BODY_LAYER: usize = 1;

const SUN_Z: f32 = 0.0;
const PLANET_Z: f32 = 1.0;

/// Marker component for the sun disc
#[derive(Component)]
pub struct Sun;

/// Disc for one of the two simulated planets; the value indexes the layout
#[derive(Component, Clone, Copy, Debug)]
pub struct PlanetBody(pub usize);

/// Spawn the sun at the canvas centre and both planets at their start positions
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    settings: Res<AnimationSettings>,
    layout: Res<OrbitLayout>,
    state: Res<SimulationState>,
    style: Res<SceneStyle>,
) {
    let scale = layout.scaling_factor as f32;

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(settings.sun_radius * scale))),
        MeshMaterial2d(materials.add(style.sun_color)),
        Transform::from_xyz(0.0, 0.0, SUN_Z),
        RenderLayers::layer(BODY_LAYER),
        Sun,
        Name::new("Sun"),
    ));

    let planet_mesh = meshes.add(Circle::new(settings.planet_radius * scale));
    for (index, body) in layout.bodies.iter().enumerate() {
        let position = canvas_to_world(state.positions[index], &settings);
        commands.spawn((
            Mesh2d(planet_mesh.clone()),
            MeshMaterial2d(materials.add(body.planet.info().color())),
            Transform::from_translation(position.extend(PLANET_Z)),
            RenderLayers::layer(BODY_LAYER),
            PlanetBody(index),
            Name::new(body.planet.name()),
        ));
    }
}

/// Move planet discs to the positions sampled on the latest tick
pub fn sync_planet_transforms(
    settings: Res<AnimationSettings>,
    state: Res<SimulationState>,
    mut planets: Query<(&PlanetBody, &mut Transform)>,
) {
    for (body, mut transform) in &mut planets {
        let position = canvas_to_world(state.positions[body.0], &settings);
        transform.translation = position.extend(PLANET_Z);
    }
}
