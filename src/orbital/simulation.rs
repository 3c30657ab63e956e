//! Per-run simulation state and the fixed-tick step

use bevy::math::IVec2;
use bevy::prelude::*;
use chrono::{DateTime, Utc};

use crate::config::AnimationSettings;
use crate::orbital::layout::OrbitLayout;

/// Line between the two planets recorded at a sampled tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceSegment {
    pub from: IVec2,
    pub to: IVec2,
}

/// Mutable state of the running animation
#[derive(Resource, Debug)]
pub struct SimulationState {
    /// Orbital angles in radians; never wrapped
    pub angles: [f64; 2],
    pub frame_counter: u64,
    /// Canvas positions for the current tick
    pub positions: [IVec2; 2],
    /// Every recorded segment, oldest first. Never pruned during a run.
    pub trace: Vec<TraceSegment>,
    pub started_at: DateTime<Utc>,
}

impl SimulationState {
    pub fn new(layout: &OrbitLayout, settings: &AnimationSettings) -> Self {
        let angles = [0.0, 0.0];
        Self {
            angles,
            frame_counter: 0,
            positions: layout.positions(angles, settings),
            trace: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// The segment joining the two planets right now
    pub fn live_segment(&self) -> TraceSegment {
        TraceSegment {
            from: self.positions[0],
            to: self.positions[1],
        }
    }

    /// Run one tick: place both planets, sample the trace, then advance.
    ///
    /// `positions` keeps the placement computed at the start of the tick so
    /// the renderer draws what was sampled. Returns the segment recorded on
    /// this tick, if any.
    pub fn step(
        &mut self,
        layout: &OrbitLayout,
        settings: &AnimationSettings,
    ) -> Option<TraceSegment> {
        self.positions = layout.positions(self.angles, settings);

        let recorded = if self.frame_counter % settings.line_draw_rate == 0 {
            let segment = self.live_segment();
            self.trace.push(segment);
            Some(segment)
        } else {
            None
        };

        for (body, angle) in self.angles.iter_mut().enumerate() {
            *angle += layout.angle_step(body, settings);
        }
        self.frame_counter += 1;

        recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Planet;
    use crate::cli::PlanetPair;

    fn setup(first: Planet, second: Planet) -> (OrbitLayout, AnimationSettings) {
        let settings = AnimationSettings::default();
        let layout = OrbitLayout::new(PlanetPair { first, second }, &settings);
        (layout, settings)
    }

    #[test]
    fn test_initial_positions_on_positive_x_axis() {
        let (layout, settings) = setup(Planet::Earth, Planet::Mars);
        let state = SimulationState::new(&layout, &settings);
        assert_eq!(state.positions[0], IVec2::new(597, 300));
        assert_eq!(state.positions[1], IVec2::new(700, 300));
        assert!(state.trace.is_empty());
    }

    #[test]
    fn test_first_tick_records_segment() {
        let (layout, settings) = setup(Planet::Earth, Planet::Mars);
        let mut state = SimulationState::new(&layout, &settings);
        let recorded = state.step(&layout, &settings).expect("tick 0 records");
        assert_eq!(recorded.from, IVec2::new(597, 300));
        assert_eq!(recorded.to, IVec2::new(700, 300));
        assert_eq!(state.trace, vec![recorded]);
        assert_eq!(state.frame_counter, 1);
    }

    #[test]
    fn test_trace_grows_once_per_line_draw_rate() {
        let (layout, settings) = setup(Planet::Venus, Planet::Jupiter);
        let mut state = SimulationState::new(&layout, &settings);
        let mut previous_len = 0;
        for tick in 0..100u64 {
            let recorded = state.step(&layout, &settings);
            assert_eq!(recorded.is_some(), tick % 5 == 0);
            assert!(state.trace.len() >= previous_len);
            previous_len = state.trace.len();
        }
        // Ticks 0, 5, ..., 95
        assert_eq!(state.trace.len(), 20);
    }

    #[test]
    fn test_angles_increase_without_wrapping() {
        let (layout, settings) = setup(Planet::Mercury, Planet::Neptune);
        let mut state = SimulationState::new(&layout, &settings);
        for _ in 0..10_000 {
            state.step(&layout, &settings);
        }
        let expected = 10_000.0 * layout.angle_step(0, &settings);
        assert!((state.angles[0] - expected).abs() < 1e-6);
        assert!(state.angles[0] > std::f64::consts::TAU);
        assert!(state.angles[1] < state.angles[0]);
    }

    #[test]
    fn test_custom_line_draw_rate() {
        let (layout, _) = setup(Planet::Earth, Planet::Venus);
        let settings = AnimationSettings {
            line_draw_rate: 1,
            ..default()
        };
        let mut state = SimulationState::new(&layout, &settings);
        for _ in 0..7 {
            state.step(&layout, &settings);
        }
        assert_eq!(state.trace.len(), 7);
    }
}
