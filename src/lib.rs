//! Cannon Pong - a cannon-versus-paddle arcade game mode
//!
//! Core modules:
//! - `sim`: Simulation (state, input mapping, physics, trail history)
//! - `renderer`: Scene building into colored triangles, plus render sinks
//! - `mode`: The frame-stepped game mode tying input, update and draw together
//! - `settings`: Render quality settings

pub mod geometry;
pub mod mode;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use mode::{ModeHost, ShootMode};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::FRAC_PI_3;

    /// Court half extents (court is centered on the origin)
    pub const COURT_RADIUS: [f32; 2] = [5.0, 5.0];

    /// Paddle half extents
    pub const PADDLE_RADIUS: [f32; 2] = [0.2, 1.0];
    /// Distance of the defending paddle from the right wall
    pub const DEFENDER_INSET: f32 = 0.5;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.2;
    /// Muzzle speed of a fired ball
    pub const BALL_SPEED: f32 = 20.0;

    /// Cannon geometry (pivot sits on the left wall)
    pub const CANNON_BASE_RADIUS: f32 = 0.6;
    pub const CANNON_BARREL_LENGTH: f32 = 1.0;
    pub const CANNON_BARREL_RADIUS: f32 = 0.15;
    /// Barrel start, measured along x from the pivot
    pub const CANNON_BARREL_OFFSET: f32 = 0.0;
    /// Maximum aim angle above or below horizontal (radians)
    pub const MAX_ELEVATION: f32 = FRAC_PI_3;
    /// Horizontal distance under which pointer aiming is ignored
    pub const AIM_EPSILON: f32 = f32::EPSILON;

    /// Game rules
    pub const MAX_HEALTH: i32 = 5;
    pub const MAX_SCORE: u32 = 10;

    /// Paddle AI
    pub const AI_BASE_SPEED: f32 = 2.0;
    pub const AI_MAX_SPEED: f32 = 10.0;
    pub const AI_MAX_DRIFT: f32 = 1.25;
    /// Resample interval range in seconds: [min, max)
    pub const AI_RESAMPLE_MIN: f32 = 2.0;
    pub const AI_RESAMPLE_MAX: f32 = 3.5;
    /// Paddles turn around when they get this close to a wall
    pub const WALL_MARGIN: f32 = 0.3;

    /// How long (seconds) the ball trail lingers
    pub const TRAIL_DURATION: f32 = 1.3;

    /// Scene layout
    pub const WALL_RADIUS: f32 = 0.05;
    pub const SHADOW_OFFSET: f32 = 0.07;
    /// Padding between outside of walls and edge of window
    pub const PADDING: f32 = 0.14;
    /// Half extents of a health/score pip
    pub const PIP_RADIUS: f32 = 0.1;
}
