//! The shoot mode: one frame loop of input, update and draw
//!
//! The host drives it once per frame in a fixed order:
//! [`ShootMode::handle_event`] for each pending event, then
//! [`ShootMode::update`], then [`ShootMode::draw`].

use glam::{Affine2, UVec2};

use crate::renderer::{RenderSink, build_scene};
use crate::settings::Settings;
use crate::sim::{self, GameState, InputEvent, ModeRequest};

/// Whatever owns the current mode
pub trait ModeHost {
    /// Leave no mode current (the host shuts down or moves on)
    fn clear_current(&mut self);
}

/// Cannon-versus-paddle game mode
#[derive(Debug, Clone)]
pub struct ShootMode {
    state: GameState,
    settings: Settings,
    /// Inverse of the transform used by the latest draw
    clip_to_court: Affine2,
}

impl ShootMode {
    /// New mode seeded from the wall clock
    pub fn new(settings: Settings) -> Self {
        Self::from_state(GameState::from_clock(), settings)
    }

    /// New mode with a fixed seed (reproducible AI)
    pub fn with_seed(seed: u64, settings: Settings) -> Self {
        Self::from_state(GameState::new(seed), settings)
    }

    fn from_state(state: GameState, settings: Settings) -> Self {
        Self {
            state,
            settings: settings.sanitized(),
            clip_to_court: Affine2::IDENTITY,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handle one event; returns `true` if it was consumed
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        window_size: UVec2,
        host: &mut dyn ModeHost,
    ) -> bool {
        let outcome = sim::handle_event(&mut self.state, &self.clip_to_court, event, window_size);
        if let Some(ModeRequest::Exit) = outcome.request {
            host.clear_current();
        }
        outcome.consumed
    }

    /// Advance the simulation by `elapsed` seconds
    pub fn update(&mut self, elapsed: f32) {
        sim::update(&mut self.state, elapsed);
    }

    /// Build the frame and hand it to `sink`
    pub fn draw(&mut self, drawable_size: UVec2, sink: &mut dyn RenderSink) {
        let scene = build_scene(&self.state, drawable_size, &self.settings);
        self.clip_to_court = scene.clip_to_court;
        sink.submit(&scene.vertices, scene.court_to_clip);
    }
}
