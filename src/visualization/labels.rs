//! Planet name labels

use bevy::prelude::*;

use crate::config::AnimationSettings;
use crate::orbital::OrbitLayout;
use crate::visualization::config::SceneStyle;

/// Text label naming one of the simulated planets
#[derive(Component)]
pub struct PlanetLabel;

/// Window position of the label for body `index`
pub fn label_position(style: &SceneStyle, index: usize) -> Vec2 {
    style.label_origin + Vec2::new(0.0, style.label_spacing * index as f32)
}

pub fn spawn_planet_labels(
    mut commands: Commands,
    settings: Res<AnimationSettings>,
    layout: Res<OrbitLayout>,
    style: Res<SceneStyle>,
) {
    for (index, body) in layout.bodies.iter().enumerate() {
        let position = label_position(&style, index);
        commands.spawn((
            Text::new(body.planet.name()),
            TextFont {
                font_size: settings.label_font_size,
                ..default()
            },
            TextColor(style.label_color),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(position.x),
                top: Val::Px(position.y),
                ..default()
            },
            PlanetLabel,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Planet;
    use crate::cli::PlanetPair;

    #[test]
    fn test_labels_stack_from_top_left() {
        let style = SceneStyle::default();
        assert_eq!(label_position(&style, 0), Vec2::new(10.0, 10.0));
        assert_eq!(label_position(&style, 1), Vec2::new(10.0, 35.0));
    }

    #[test]
    fn test_labels_name_planets_in_argument_order() {
        let settings = AnimationSettings::default();
        let layout = OrbitLayout::new(
            PlanetPair {
                first: Planet::Saturn,
                second: Planet::Mercury,
            },
            &settings,
        );

        let mut app = App::new();
        app.insert_resource(settings)
            .insert_resource(layout)
            .insert_resource(SceneStyle::default())
            .add_systems(Startup, spawn_planet_labels);
        app.update();

        let world = app.world_mut();
        let labels: Vec<(String, Val)> = world
            .query_filtered::<(&Text, &Node), With<PlanetLabel>>()
            .iter(world)
            .map(|(text, node)| (text.0.clone(), node.top))
            .collect();
        assert_eq!(labels.len(), 2);
        assert!(labels.contains(&("Saturn".to_string(), Val::Px(10.0))));
        assert!(labels.contains(&("Mercury".to_string(), Val::Px(35.0))));
    }
}
