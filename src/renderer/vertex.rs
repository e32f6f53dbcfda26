//! Vertex type for the colored triangle list

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Texture coordinate every vertex samples (center of the 1x1 white texture)
pub const SOLID_TEX_COORD: [f32; 2] = [0.5, 0.5];

/// 2D vertex with position, normalized 8-bit color and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [u8; 4]) -> Self {
        Self {
            position: [x, y, 0.0],
            color,
            tex_coord: SOLID_TEX_COORD,
        }
    }

    #[inline]
    pub fn at(pos: Vec2, color: [u8; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }

    /// Position in the z = 0 plane
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }
}

/// Unpack `0xRRGGBBAA`
pub const fn hex(rgba: u32) -> [u8; 4] {
    [
        (rgba >> 24) as u8,
        (rgba >> 16) as u8,
        (rgba >> 8) as u8,
        rgba as u8,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::hex;

    pub const BACKGROUND: [u8; 4] = hex(0x193b59ff);
    pub const FOREGROUND: [u8; 4] = hex(0xf2d2b6ff);
    pub const HEALTH: [u8; 4] = hex(0xf50303ff);
    pub const SHADOW: [u8; 4] = hex(0xf2ad94ff);
    pub const HEALTH_SHADOW: [u8; 4] = hex(0x920a1eff);
    /// Trail palette, newest first
    pub const TRAIL: [[u8; 4]; 3] = [hex(0xf2ad9488), hex(0xf2897288), hex(0xbacac088)];
}
