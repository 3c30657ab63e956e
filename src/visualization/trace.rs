//! Trace line rendering
//!
//! The full trace is redrawn every frame with gizmos, followed by the live
//! segment between the planets' current positions.

use bevy::prelude::*;

use crate::config::AnimationSettings;
use crate::orbital::{SimulationState, TraceSegment};
use crate::visualization::canvas::canvas_to_world;
use crate::visualization::config::SceneStyle;

/// Segments to draw this frame in world coordinates, recorded ones first
///
/// Borrows the trace; nothing is buffered per frame.
pub fn world_segments<'a>(
    state: &'a SimulationState,
    settings: &'a AnimationSettings,
    include_live: bool,
) -> impl Iterator<Item = (Vec2, Vec2)> + 'a {
    let live = include_live.then(|| state.live_segment());
    state
        .trace
        .iter()
        .copied()
        .chain(live)
        .map(move |segment| to_world(segment, settings))
}

fn to_world(segment: TraceSegment, settings: &AnimationSettings) -> (Vec2, Vec2) {
    (
        canvas_to_world(segment.from, settings),
        canvas_to_world(segment.to, settings),
    )
}

/// System drawing every recorded segment plus the live one
pub fn draw_trace(
    mut gizmos: Gizmos,
    settings: Res<AnimationSettings>,
    state: Res<SimulationState>,
    style: Res<SceneStyle>,
) {
    for (start, end) in world_segments(&state, &settings, style.show_live_segment) {
        gizmos.line_2d(start, end, style.trace_color);
    }
}
