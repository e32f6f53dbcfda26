//! Game state and core simulation types
//!
//! Everything the mode mutates per frame lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::trail::Trail;
use crate::consts::*;

/// The fixed play area, centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Court {
    /// Half extents
    pub radius: Vec2,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            radius: Vec2::from_array(COURT_RADIUS),
        }
    }
}

/// Randomized vertical wander for an AI paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AiDrift {
    /// Signed drift direction and magnitude
    pub drift: f32,
    /// Seconds until the drift is resampled
    pub countdown: f32,
}

/// An AI-driven paddle (only `pos.y` ever changes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub radius: Vec2,
    pub ai: AiDrift,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: Vec2::from_array(PADDLE_RADIUS),
            ai: AiDrift::default(),
        }
    }

    /// Highest `|y|` the paddle center may reach inside `court`
    #[inline]
    pub fn max_y(&self, court: &Court) -> f32 {
        court.radius.y - self.radius.y
    }

    /// Keep the paddle fully inside the court
    pub fn clamp_to(&mut self, court: &Court) {
        let limit = self.max_y(court);
        self.pos.y = self.pos.y.clamp(-limit, limit);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Resting spot before a shot, just inside the left wall
    pub fn loaded_position(court: &Court) -> Vec2 {
        Vec2::new(-court.radius.x + BALL_RADIUS + f32::EPSILON, 0.0)
    }

    pub fn loaded(court: &Court) -> Self {
        Self {
            pos: Self::loaded_position(court),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Axis-aligned half extents of the ball
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }
}

/// The player's cannon, pivoting on the left wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cannon {
    /// Center of the base and pivot of the barrel
    pub base: Vec2,
    pub base_radius: f32,
    pub barrel_length: f32,
    /// Barrel half thickness
    pub barrel_radius: f32,
    /// Aim angle, always within `[-MAX_ELEVATION, MAX_ELEVATION]`
    pub angle: f32,
}

impl Cannon {
    pub fn new(court: &Court) -> Self {
        Self {
            base: Vec2::new(-court.radius.x, 0.0),
            base_radius: CANNON_BASE_RADIUS,
            barrel_length: CANNON_BARREL_LENGTH,
            barrel_radius: CANNON_BARREL_RADIUS,
            angle: 0.0,
        }
    }

    /// Set the aim, clamped to the allowed elevation
    pub fn aim(&mut self, angle: f32) {
        self.angle = angle.clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }
}

/// How the run ended (if it has)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    Lost,
    Won,
}

impl Outcome {
    /// Numeric status code: 0 = playing, 1 = lost, 2 = won
    pub fn code(self) -> u8 {
        match self {
            Outcome::Playing => 0,
            Outcome::Lost => 1,
            Outcome::Won => 2,
        }
    }

    pub fn is_ended(self) -> bool {
        self != Outcome::Playing
    }
}

/// Health, score and the mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub health: i32,
    pub score: u32,
    pub paused: bool,
    /// Ball is in flight
    pub shooting: bool,
    pub outcome: Outcome,
}

impl Default for GameStatus {
    fn default() -> Self {
        Self {
            health: MAX_HEALTH,
            score: 0,
            paused: false,
            shooting: false,
            outcome: Outcome::Playing,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub court: Court,
    /// Obstacle paddle in mid-court; hitting it costs health
    pub left_paddle: Paddle,
    /// Defending paddle by the right wall; hitting it scores
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub cannon: Cannon,
    pub status: GameStatus,
    pub trail: Trail,
    /// Source of AI randomness, owned for the life of the state
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let court = Court::default();
        let ball = Ball::loaded(&court);

        Self {
            court,
            left_paddle: Paddle::new(Self::left_paddle_start(&court)),
            right_paddle: Paddle::new(Self::right_paddle_start(&court)),
            ball,
            cannon: Cannon::new(&court),
            status: GameStatus::default(),
            trail: Trail::primed(ball.pos, TRAIL_DURATION),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a new game state seeded from the wall clock
    pub fn from_clock() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::debug!("Seeding game state with {}", seed);
        Self::new(seed)
    }

    pub fn left_paddle_start(_court: &Court) -> Vec2 {
        Vec2::ZERO
    }

    pub fn right_paddle_start(court: &Court) -> Vec2 {
        Vec2::new(court.radius.x - DEFENDER_INSET, 0.0)
    }

    /// Put the ball back in the cannon and end the shot
    pub fn reset_ball(&mut self) {
        self.ball = Ball::loaded(&self.court);
        self.status.shooting = false;
    }

    /// Start a fresh run. AI wander and trail history carry over.
    pub fn restart(&mut self) {
        self.status = GameStatus::default();
        self.left_paddle.pos = Self::left_paddle_start(&self.court);
        self.right_paddle.pos = Self::right_paddle_start(&self.court);
        self.reset_ball();
        self.cannon.angle = 0.0;
    }

    /// Pause and record a terminal outcome
    pub fn end(&mut self, outcome: Outcome) {
        self.status.paused = true;
        self.status.outcome = outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_playing() {
        let state = GameState::new(1);
        assert_eq!(state.status.health, MAX_HEALTH);
        assert_eq!(state.status.score, 0);
        assert!(!state.status.paused);
        assert!(!state.status.shooting);
        assert_eq!(state.status.outcome.code(), 0);
        assert_eq!(state.ball.pos, Ball::loaded_position(&state.court));
        assert_eq!(state.trail.len(), 2);
    }

    #[test]
    fn test_reset_ball_clears_shot() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(1.0, 2.0);
        state.ball.vel = Vec2::new(3.0, -4.0);
        state.status.shooting = true;

        state.reset_ball();

        assert_eq!(state.ball.pos, Ball::loaded_position(&state.court));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert!(!state.status.shooting);
    }

    #[test]
    fn test_cannon_aim_is_clamped() {
        let mut cannon = Cannon::new(&Court::default());
        cannon.aim(10.0);
        assert_eq!(cannon.angle, MAX_ELEVATION);
        cannon.aim(-10.0);
        assert_eq!(cannon.angle, -MAX_ELEVATION);
    }

    #[test]
    fn test_paddle_clamp() {
        let court = Court::default();
        let mut paddle = Paddle::new(Vec2::new(0.0, 100.0));
        paddle.clamp_to(&court);
        assert_eq!(paddle.pos.y, court.radius.y - paddle.radius.y);
        paddle.pos.y = -100.0;
        paddle.clamp_to(&court);
        assert_eq!(paddle.pos.y, -court.radius.y + paddle.radius.y);
    }

    #[test]
    fn test_restart_restores_everything() {
        let mut state = GameState::new(7);
        state.status = GameStatus {
            health: 0,
            score: 3,
            paused: true,
            shooting: true,
            outcome: Outcome::Lost,
        };
        state.left_paddle.pos.y = 2.0;
        state.right_paddle.pos.y = -2.0;
        state.ball.vel = Vec2::new(5.0, 5.0);
        state.cannon.angle = 0.5;

        state.restart();

        assert_eq!(state.status, GameStatus::default());
        assert_eq!(state.left_paddle.pos, Vec2::ZERO);
        assert_eq!(state.right_paddle.pos, GameState::right_paddle_start(&state.court));
        assert_eq!(state.ball, Ball::loaded(&state.court));
        assert_eq!(state.cannon.angle, 0.0);
    }
}
