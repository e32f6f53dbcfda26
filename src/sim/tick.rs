//! Per-frame simulation update
//!
//! [`update`] runs the steps below in order. Each step is public so it can be
//! driven on its own.

use glam::Vec2;
use rand::Rng;

use super::state::{Court, GameState, Outcome, Paddle};
use crate::consts::*;

/// Which paddle a ball collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleHit {
    /// Mid-court obstacle: costs health
    Obstacle,
    /// Right-side defender: scores
    Defender,
}

/// Advance the game by `dt` seconds.
///
/// Returns `false` without touching anything while paused.
pub fn update(state: &mut GameState, dt: f32) -> bool {
    if state.status.paused {
        return false;
    }

    let score = state.status.score;
    drive_paddle(&mut state.left_paddle, &state.court, score, dt, &mut state.rng);
    drive_paddle(&mut state.right_paddle, &state.court, score, dt, &mut state.rng);
    clamp_paddles(state);

    integrate_ball(state, dt);
    resolve_paddle_hits(state);
    resolve_wall_hits(state);
    update_outcome(state);

    state.trail.advance(state.ball.pos, dt);
    true
}

/// Paddle speed multiplier: doubles every four points, capped
#[inline]
pub fn ai_speed(score: u32) -> f32 {
    (AI_BASE_SPEED + score as f32 / 2.0).min(AI_MAX_SPEED)
}

/// Wander a paddle up and down.
///
/// The drift is resampled every `[2.0, 3.5)` seconds and reversed whenever it
/// would carry the paddle within [`WALL_MARGIN`] of a wall.
pub fn drive_paddle<R: Rng>(
    paddle: &mut Paddle,
    court: &Court,
    score: u32,
    dt: f32,
    rng: &mut R,
) {
    let speed = ai_speed(score);
    let ai = &mut paddle.ai;

    ai.countdown -= dt;
    if ai.countdown < dt {
        ai.countdown = rng.random_range(AI_RESAMPLE_MIN..AI_RESAMPLE_MAX);
        ai.drift = rng.random_range(-AI_MAX_DRIFT..=AI_MAX_DRIFT);
        log::debug!("AI drift {:.3} for {:.2}s", ai.drift, ai.countdown);
    }

    let limit = court.radius.y - paddle.radius.y;
    let near_top = limit - paddle.pos.y < WALL_MARGIN;
    let near_bottom = -limit - paddle.pos.y > -WALL_MARGIN;
    if (ai.drift > 0.0 && near_top) || (ai.drift < 0.0 && near_bottom) {
        ai.drift = -ai.drift;
    }

    paddle.pos.y += speed * dt * ai.drift;
}

/// Keep both paddles inside the court
pub fn clamp_paddles(state: &mut GameState) {
    state.left_paddle.clamp_to(&state.court);
    state.right_paddle.clamp_to(&state.court);
}

/// Explicit Euler step of the ball
pub fn integrate_ball(state: &mut GameState, dt: f32) {
    state.ball.pos += dt * state.ball.vel;
}

/// Whether two axis-aligned boxes overlap (touching counts)
#[inline]
pub fn boxes_overlap(a_center: Vec2, a_radius: Vec2, b_center: Vec2, b_radius: Vec2) -> bool {
    let min = (a_center - a_radius).max(b_center - b_radius);
    let max = (a_center + a_radius).min(b_center + b_radius);
    min.x <= max.x && min.y <= max.y
}

/// End the shot if the ball touches a paddle.
///
/// Paddles never bounce the ball: the obstacle costs health, the defender
/// scores. The obstacle is checked first.
pub fn resolve_paddle_hits(state: &mut GameState) -> Option<PaddleHit> {
    let mut hit = None;
    for (paddle, kind) in [
        (state.left_paddle, PaddleHit::Obstacle),
        (state.right_paddle, PaddleHit::Defender),
    ] {
        let ball = state.ball;
        if !boxes_overlap(paddle.pos, paddle.radius, ball.pos, ball.half_extents()) {
            continue;
        }
        state.reset_ball();
        match kind {
            PaddleHit::Obstacle => state.status.health -= 1,
            PaddleHit::Defender => state.status.score += 1,
        }
        log::debug!("Ball hit {:?} paddle", kind);
        hit = Some(kind);
    }
    hit
}

/// Bounce off the top and bottom walls; a ball leaving through the left or
/// right wall is a miss and costs health either way.
///
/// Returns `true` on a miss.
pub fn resolve_wall_hits(state: &mut GameState) -> bool {
    let court = state.court.radius;
    let ball = &mut state.ball;
    let r = ball.radius;

    if ball.pos.y > court.y - r {
        ball.pos.y = court.y - r;
        if ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
        }
    }
    if ball.pos.y < -court.y + r {
        ball.pos.y = -court.y + r;
        if ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
        }
    }

    let out_right = ball.pos.x >= court.x - r && ball.vel.x > f32::EPSILON;
    let out_left = ball.pos.x <= -court.x + r && ball.vel.x < -f32::EPSILON;
    if out_right || out_left {
        state.reset_ball();
        state.status.health -= 1;
        log::debug!("Missed, health {}", state.status.health);
        return true;
    }
    false
}

/// Move to a terminal outcome once health runs out or the score is reached
pub fn update_outcome(state: &mut GameState) {
    if state.status.health <= 0 {
        if state.status.outcome != Outcome::Lost {
            log::info!("Game over: lost with score {}", state.status.score);
        }
        state.end(Outcome::Lost);
    }
    if state.status.score >= MAX_SCORE {
        if state.status.outcome != Outcome::Won {
            log::info!("Game over: won with {} health left", state.status.health);
        }
        state.end(Outcome::Won);
    }
}
