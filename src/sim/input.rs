//! Raw input events and how they drive the game state

use glam::{Affine2, UVec2, Vec2};

use super::state::GameState;
use crate::consts::*;
use crate::geometry::{rotation_about, window_to_clip};

/// Keys the mode cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// A raw event delivered by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved, in window pixels (top-left origin, +y down)
    PointerMotion { x: f32, y: f32 },
    PointerDown { button: PointerButton },
    KeyDown { key: Key },
}

/// What the mode wants its host to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRequest {
    /// No mode should remain current
    Exit,
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// The event should not be handled further
    pub consumed: bool,
    pub request: Option<ModeRequest>,
}

impl InputOutcome {
    fn consumed() -> Self {
        Self {
            consumed: true,
            request: None,
        }
    }

    fn exit() -> Self {
        Self {
            consumed: false,
            request: Some(ModeRequest::Exit),
        }
    }
}

/// Apply one input event to the state.
///
/// `clip_to_court` is the inverse transform from the most recent draw.
pub fn handle_event(
    state: &mut GameState,
    clip_to_court: &Affine2,
    event: &InputEvent,
    window_size: UVec2,
) -> InputOutcome {
    match *event {
        InputEvent::PointerMotion { x, y } => {
            let court = clip_to_court.transform_point2(window_to_clip(x, y, window_size));
            aim_at(state, court);
            InputOutcome::default()
        }
        InputEvent::KeyDown { key: Key::Escape } => {
            toggle_pause(state);
            InputOutcome::consumed()
        }
        InputEvent::KeyDown { key: Key::Char('q') } => {
            if state.status.paused && !state.status.outcome.is_ended() {
                log::info!("Quit requested from pause");
                InputOutcome::exit()
            } else {
                InputOutcome::default()
            }
        }
        InputEvent::KeyDown { key: Key::Char('y') } => {
            if state.status.outcome.is_ended() || state.status.paused {
                log::info!("Restarting game");
                state.restart();
            }
            InputOutcome::default()
        }
        InputEvent::KeyDown { key: Key::Char('n') } => {
            if state.status.outcome.is_ended() {
                log::info!("Declined new game");
                InputOutcome::exit()
            } else {
                InputOutcome::default()
            }
        }
        InputEvent::PointerDown {
            button: PointerButton::Left,
        } => {
            fire(state);
            InputOutcome::default()
        }
        _ => InputOutcome::default(),
    }
}

/// Point the cannon at a court-space target.
///
/// Targets at or behind the pivot (horizontal delta within [`AIM_EPSILON`])
/// leave the aim unchanged, so the barrel never flips through vertical.
pub fn aim_at(state: &mut GameState, target: Vec2) {
    if state.status.paused {
        return;
    }
    let delta = target - state.cannon.base;
    if delta.x > AIM_EPSILON {
        state.cannon.aim(delta.y.atan2(delta.x));
    }
}

/// Toggle pause while the run is still going
pub fn toggle_pause(state: &mut GameState) {
    if state.status.outcome.is_ended() {
        return;
    }
    state.status.paused = !state.status.paused;
    log::info!("{}", if state.status.paused { "Paused" } else { "Resumed" });
}

/// Launch the ball from the muzzle along the current aim
pub fn fire(state: &mut GameState) {
    if state.status.shooting || state.status.paused {
        return;
    }
    let cannon = state.cannon;
    let muzzle = Vec2::new(
        -state.court.radius.x + CANNON_BARREL_OFFSET + cannon.barrel_length - state.ball.radius,
        0.0,
    );

    state.status.shooting = true;
    state.ball.pos = rotation_about(cannon.base, cannon.angle).transform_point2(muzzle);
    state.ball.vel = BALL_SPEED * Vec2::from_angle(cannon.angle);
    log::debug!("Fired at {:.3} rad from {:?}", cannon.angle, state.ball.pos);
}
