//! Simulation module
//!
//! All gameplay logic lives here:
//! - Explicitly seeded RNG only
//! - Frame-stepped with a caller-supplied `dt`
//! - No rendering or platform dependencies

pub mod input;
pub mod state;
pub mod tick;
pub mod trail;

pub use input::{InputEvent, InputOutcome, Key, ModeRequest, PointerButton, handle_event};
pub use state::{AiDrift, Ball, Cannon, Court, GameState, GameStatus, Outcome, Paddle};
pub use tick::{PaddleHit, update};
pub use trail::{Trail, TrailSample};
