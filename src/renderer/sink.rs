//! Render sink boundary

use glam::Mat4;

use super::vertex::Vertex;

/// Consumer of one frame's triangle list.
///
/// Implementations rasterize `vertices` as a triangle list with alpha blending
/// and no depth test, transforming each position by `court_to_clip`. They must
/// not keep `vertices` past the call. Backend failures are the sink's own
/// business (logged, never returned).
pub trait RenderSink {
    fn submit(&mut self, vertices: &[Vertex], court_to_clip: Mat4);
}

/// Sink that keeps a copy of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub vertices: Vec<Vertex>,
    pub court_to_clip: Mat4,
    /// Frames submitted so far
    pub frames: u64,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// The recorded frame as the packed bytes a vertex buffer upload would take
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RenderSink for RecordingSink {
    fn submit(&mut self, vertices: &[Vertex], court_to_clip: Mat4) {
        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        self.court_to_clip = court_to_clip;
        self.frames += 1;
    }
}
