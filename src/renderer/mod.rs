//! Rendering module
//!
//! The scene builder turns game state into colored triangles plus a
//! court-to-clip transform; a [`RenderSink`] consumes them.

pub mod scene;
pub mod shapes;
pub mod sink;
pub mod vertex;

pub use scene::{Scene, build_scene};
pub use sink::{RecordingSink, RenderSink};
pub use vertex::Vertex;
