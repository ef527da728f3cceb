//! Radar session
//!
//! Owns everything with session lifetime: simulation state, the seeded RNG,
//! the tick timer and the composer. Each timer firing runs one tick followed
//! by one compose-and-present pass, on the caller's thread.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::control::ControlBridge;
use crate::error::RadarError;
use crate::renderer::{Frame, LayerComposer, RenderSurface, Viewport};
use crate::settings::RadarConfig;
use crate::sim::{SimulationState, set_speed, tick};
use crate::timer::FixedTimer;

pub struct RadarSession {
    config: RadarConfig,
    state: SimulationState,
    rng: Pcg32,
    timer: FixedTimer,
    composer: LayerComposer,
    bridge: ControlBridge,
    frames_rendered: u64,
    /// Whether the last frame hit a zero-size surface
    degenerate: bool,
}

impl RadarSession {
    /// Build a session and populate the initial targets
    pub fn new(config: RadarConfig) -> Result<Self, RadarError> {
        config.validate()?;

        let mut state = SimulationState::new(config.max_distance, config.max_history);
        set_speed(&mut state, config.scan_speed)?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let bridge = ControlBridge::new(config.target_count);
        bridge.on_regenerate_requested(&mut state, &mut rng);

        log::info!(
            "Radar session: seed={}, targets={}, speed={} deg/tick, period={} ms",
            config.seed,
            state.targets().len(),
            state.scan_speed(),
            config.tick_interval_ms
        );

        Ok(Self {
            timer: FixedTimer::new(config.tick_interval_ms),
            composer: LayerComposer::new(config.sweep_arc_half_width_deg, config.afterglow),
            config,
            state,
            rng,
            bridge,
            frames_rendered: 0,
            degenerate: false,
        })
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn start(&mut self) {
        self.timer.start();
        log::info!("Radar sweep started");
    }

    pub fn stop(&mut self) {
        self.timer.stop();
        log::info!(
            "Radar sweep stopped after {} ticks",
            self.state.time_ticks
        );
    }

    /// Feed elapsed wall time; every due timer firing ticks and renders once.
    /// Returns the number of ticks run.
    pub fn pump(&mut self, elapsed_ms: f64, surface: &mut impl RenderSurface) -> u32 {
        self.pump_at_most(elapsed_ms, u32::MAX, surface)
    }

    /// Like [`RadarSession::pump`], but run no more than `max_ticks` ticks
    pub fn pump_at_most(
        &mut self,
        elapsed_ms: f64,
        max_ticks: u32,
        surface: &mut impl RenderSurface,
    ) -> u32 {
        let Self {
            state,
            timer,
            composer,
            config,
            frames_rendered,
            degenerate,
            ..
        } = self;
        let margin = config.surface_margin;

        timer.pump_at_most(elapsed_ms, max_ticks, || {
            tick(state);
            let frame = compose_for(state, composer, margin, &*surface, degenerate);
            surface.present(frame);
            *frames_rendered += 1;
        })
    }

    /// One tick and one render, independent of the timer
    pub fn step(&mut self, surface: &mut impl RenderSurface) {
        tick(&mut self.state);
        self.render(surface);
    }

    /// Render the current state without advancing it
    pub fn render(&mut self, surface: &mut impl RenderSurface) {
        let frame = self.frame(&*surface);
        surface.present(frame);
        self.frames_rendered += 1;
    }

    /// Compose the current state for a surface without presenting it
    pub fn frame(&mut self, surface: &impl RenderSurface) -> Frame {
        let margin = self.config.surface_margin;
        compose_for(&self.state, &self.composer, margin, surface, &mut self.degenerate)
    }

    /// Scan speed control input
    pub fn set_scan_speed(&mut self, value: f32) -> Result<(), RadarError> {
        self.bridge.on_speed_changed(&mut self.state, value)
    }

    /// "New targets" control input
    pub fn regenerate_targets(&mut self) {
        self.bridge.on_regenerate_requested(&mut self.state, &mut self.rng);
    }
}

fn compose_for(
    state: &SimulationState,
    composer: &LayerComposer,
    margin: f32,
    surface: &impl RenderSurface,
    degenerate: &mut bool,
) -> Frame {
    match Viewport::for_surface(surface, margin) {
        Ok(viewport) => {
            if *degenerate {
                log::info!("Surface usable again ({:.0} px radius)", viewport.radius);
                *degenerate = false;
            }
            composer.compose(state, viewport.center, viewport.radius)
        }
        Err(err) => {
            if !*degenerate {
                log::warn!("{err}; presenting empty frames");
                *degenerate = true;
            }
            Frame::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, Layer, RecordingSurface};

    fn session(seed: u64) -> RadarSession {
        RadarSession::new(RadarConfig::with_seed(seed)).unwrap()
    }

    #[test]
    fn test_new_session_has_default_targets() {
        let s = session(1);
        assert_eq!(s.state().targets().len(), 8);
        assert_eq!(s.state().scan_speed(), 3.0);
        assert!(!s.is_running());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RadarConfig {
            scan_speed: 0.0,
            ..RadarConfig::default()
        };
        assert!(RadarSession::new(config).is_err());
    }

    #[test]
    fn test_pump_ticks_then_renders() {
        let mut s = session(2);
        let mut surface = RecordingSurface::new(700.0, 560.0);
        s.start();

        assert_eq!(s.pump(100.0, &mut surface), 2);
        assert_eq!(s.state().time_ticks, 2);
        assert_eq!(s.frames_rendered(), 2);
        assert_eq!(surface.frames_presented(), 2);

        // The presented frame reflects the post-tick sweep angle
        assert!(surface.commands().iter().any(
            |c| matches!(c, DrawCommand::Text { text, .. } if text == "Angle: 6°")
        ));
    }

    #[test]
    fn test_pump_stops_at_tick_budget() {
        let mut s = session(2);
        let mut surface = RecordingSurface::new(700.0, 560.0);
        s.start();
        assert_eq!(s.pump_at_most(120.0, 1, &mut surface), 1);
        assert_eq!(s.state().time_ticks, 1);
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test]
    fn test_stopped_session_does_not_tick() {
        let mut s = session(2);
        let mut surface = RecordingSurface::new(400.0, 400.0);
        assert_eq!(s.pump(1000.0, &mut surface), 0);
        s.start();
        s.stop();
        assert_eq!(s.pump(1000.0, &mut surface), 0);
        assert_eq!(s.state().time_ticks, 0);
    }

    #[test]
    fn test_degenerate_surface_presents_empty_frame() {
        let mut s = session(3);
        let mut surface = RecordingSurface::new(40.0, 40.0);
        s.step(&mut surface);
        assert_eq!(surface.frames_presented(), 1);
        assert!(surface.commands().is_empty());

        // Resize back to something usable
        surface.resize(400.0, 400.0);
        s.step(&mut surface);
        assert!(!surface.commands().is_empty());
    }

    #[test]
    fn test_controls() {
        let mut s = session(4);
        s.set_scan_speed(10.0).unwrap();
        assert!(s.set_scan_speed(-3.0).is_err());
        assert_eq!(s.state().scan_speed(), 10.0);

        let before = s.state().targets().to_vec();
        s.regenerate_targets();
        assert_eq!(s.state().targets().len(), 8);
        assert_ne!(s.state().targets(), before.as_slice());
    }

    #[test]
    fn test_frame_sees_whole_target_set() {
        let mut s = session(5);
        let surface = RecordingSurface::new(500.0, 500.0);
        s.regenerate_targets();
        let frame = s.frame(&surface);
        assert_eq!(frame.layer(Layer::Targets).len(), 2 * 8);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = session(77);
        let mut b = session(77);
        let mut surface = RecordingSurface::new(300.0, 300.0);
        for _ in 0..50 {
            a.step(&mut surface);
            b.step(&mut surface);
        }
        assert_eq!(a.state(), b.state());
    }
}
