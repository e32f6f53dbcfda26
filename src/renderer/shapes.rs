//! Shape generation for 2D primitives
//!
//! Every shape appends plain triangles (three vertices each) to `out`.

use glam::{Affine2, Vec2};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::vertex::Vertex;

/// Axis-aligned rectangle as two CCW triangles
pub fn rectangle(out: &mut Vec<Vertex>, center: Vec2, radius: Vec2, color: [u8; 4]) {
    let bl = center - radius;
    let tr = center + radius;
    let br = Vec2::new(tr.x, bl.y);
    let tl = Vec2::new(bl.x, tr.y);
    quad(out, [bl, br, tr, tl], color);
}

/// Quad given as corners in CCW order (bottom-left first)
pub fn quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [u8; 4]) {
    let [bl, br, tr, tl] = corners;
    out.extend_from_slice(&[
        Vertex::at(bl, color),
        Vertex::at(br, color),
        Vertex::at(tr, color),
        Vertex::at(bl, color),
        Vertex::at(tr, color),
        Vertex::at(tl, color),
    ]);
}

/// Rectangle spanning `[min, max]` before being carried through `transform`
pub fn transformed_rectangle(
    out: &mut Vec<Vertex>,
    min: Vec2,
    max: Vec2,
    transform: &Affine2,
    color: [u8; 4],
) {
    let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
        .map(|p| transform.transform_point2(p));
    quad(out, corners, color);
}

/// Triangle fan covering the angles `[start, start + span]`
pub fn fan(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    start: f32,
    span: f32,
    segments: u32,
    color: [u8; 4],
) {
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        out.push(Vertex::at(center, color));
        out.push(Vertex::at(center + radius * Vec2::from_angle(theta1), color));
        out.push(Vertex::at(center + radius * Vec2::from_angle(theta2), color));
    }
}

/// Filled circle, one wedge per segment
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [u8; 4], segments: u32) {
    fan(out, center, radius, 0.0, TAU, segments, color);
}

/// Right half of a circle (facing +x)
pub fn half_disc(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [u8; 4], segments: u32) {
    fan(out, center, radius, -FRAC_PI_2, PI, segments, color);
}
