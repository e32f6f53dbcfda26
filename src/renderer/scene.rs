//! Scene building: game state to a flat list of colored triangles
//!
//! Draw order (back to front): shadows, trail, walls, paddles, cannon, ball,
//! health/score pips.

use std::collections::VecDeque;

use glam::{Affine2, Mat4, UVec2, Vec2};

use super::shapes::{circle, half_disc, rectangle, transformed_rectangle};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::geometry::{fit_court_to_clip, rotation_about};
use crate::settings::Settings;
use crate::sim::{Court, GameState, TrailSample};

/// Everything a render sink needs for one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub court_to_clip: Mat4,
    /// Inverse of `court_to_clip` in the z = 0 plane (for pointer mapping)
    pub clip_to_court: Affine2,
}

/// Build the frame for `state` at the given drawable size
pub fn build_scene(state: &GameState, drawable_size: UVec2, settings: &Settings) -> Scene {
    let mut vertices = Vec::new();

    draw_shadows(&mut vertices, state, settings);
    draw_trail(
        &mut vertices,
        state.trail.samples(),
        state.trail.duration(),
        state.ball.radius,
        settings,
    );
    draw_solids(&mut vertices, state, settings);
    draw_pips(&mut vertices, &state.court, state.status.health, state.status.score);

    let (scene_min, scene_max) = scene_bounds(&state.court);
    let (court_to_clip, clip_to_court) = fit_court_to_clip(scene_min, scene_max, drawable_size);

    Scene {
        vertices,
        court_to_clip,
        clip_to_court,
    }
}

/// Area that must stay visible: court, walls, padding and the pip row
pub fn scene_bounds(court: &Court) -> (Vec2, Vec2) {
    let r = court.radius;
    let min = Vec2::new(
        -r.x - 2.0 * WALL_RADIUS - PADDING,
        -r.y - 2.0 * WALL_RADIUS - PADDING,
    );
    let max = Vec2::new(
        r.x + 2.0 * WALL_RADIUS + PADDING,
        r.y + 2.0 * WALL_RADIUS + 3.0 * PIP_RADIUS + PADDING,
    );
    (min, max)
}

/// The four walls as (center, half extents)
fn walls(court: &Court) -> [(Vec2, Vec2); 4] {
    let r = court.radius;
    let side = Vec2::new(WALL_RADIUS, r.y + 2.0 * WALL_RADIUS);
    let cap = Vec2::new(r.x, WALL_RADIUS);
    [
        (Vec2::new(-r.x - WALL_RADIUS, 0.0), side),
        (Vec2::new(r.x + WALL_RADIUS, 0.0), side),
        (Vec2::new(0.0, -r.y - WALL_RADIUS), cap),
        (Vec2::new(0.0, r.y + WALL_RADIUS), cap),
    ]
}

fn draw_shadows(out: &mut Vec<Vertex>, state: &GameState, settings: &Settings) {
    let s = Vec2::new(0.0, -SHADOW_OFFSET);

    for (center, radius) in walls(&state.court) {
        rectangle(out, center + s, radius, colors::SHADOW);
    }
    let (left, right) = (&state.left_paddle, &state.right_paddle);
    rectangle(out, left.pos + s, left.radius, colors::SHADOW);
    rectangle(out, right.pos + s, right.radius, colors::HEALTH_SHADOW);
    circle(
        out,
        state.ball.pos + s,
        state.ball.radius,
        colors::SHADOW,
        settings.circle_segments,
    );
}

/// Draw the fading trail from oldest to newest.
///
/// `samples` run oldest first. Each of `settings.trail_steps` evenly spaced
/// times across `duration` is placed by interpolating the pair of samples
/// that brackets it; times the history does not reach are skipped.
pub fn draw_trail(
    out: &mut Vec<Vertex>,
    samples: &VecDeque<TrailSample>,
    duration: f32,
    ball_radius: f32,
    settings: &Settings,
) {
    if samples.len() < 2 {
        return;
    }
    let steps = settings.trail_steps;

    // Start at the second sample so there is always one before it
    let mut ti = 1;
    for step in (1..=steps).rev() {
        let t = step as f32 / steps as f32 * duration;

        while ti < samples.len() && samples[ti].age > t {
            ti += 1;
        }
        if ti == samples.len() {
            break;
        }

        let a = samples[ti - 1];
        let b = samples[ti];
        if a.age < t {
            continue;
        }
        let span = b.age - a.age;
        let at = if span.abs() > f32::EPSILON {
            a.pos + (t - a.age) / span * (b.pos - a.pos)
        } else {
            b.pos
        };

        circle(
            out,
            at,
            ball_radius,
            trail_color(step, steps),
            settings.circle_segments,
        );
    }
}

/// Palette color for trail step `step` of `steps` (1 = newest)
pub fn trail_color(step: u32, steps: u32) -> [u8; 4] {
    let palette = &colors::TRAIL;
    let last = palette.len() as i32 - 2;

    let c = (step as f32 - 1.0) / (steps.max(2) as f32 - 1.0) * palette.len() as f32;
    let mut ci = c.floor() as i32;
    let mut cf = c - ci as f32;
    if ci < 0 {
        ci = 0;
        cf = 0.0;
    }
    if ci > last {
        ci = last;
        cf = 1.0;
    }

    let (from, to) = (palette[ci as usize], palette[ci as usize + 1]);
    std::array::from_fn(|i| (from[i] as f32 + (to[i] as f32 - from[i] as f32) * cf) as u8)
}

fn draw_solids(out: &mut Vec<Vertex>, state: &GameState, settings: &Settings) {
    for (center, radius) in walls(&state.court) {
        rectangle(out, center, radius, colors::FOREGROUND);
    }

    let (left, right) = (&state.left_paddle, &state.right_paddle);
    rectangle(out, left.pos, left.radius, colors::FOREGROUND);
    rectangle(out, right.pos, right.radius, colors::HEALTH);

    let cannon = &state.cannon;
    half_disc(
        out,
        cannon.base,
        cannon.base_radius,
        colors::FOREGROUND,
        (settings.circle_segments / 2).max(1),
    );
    let barrel_start = cannon.base.x + CANNON_BARREL_OFFSET;
    transformed_rectangle(
        out,
        Vec2::new(barrel_start, cannon.base.y - cannon.barrel_radius),
        Vec2::new(barrel_start + cannon.barrel_length, cannon.base.y + cannon.barrel_radius),
        &rotation_about(cannon.base, cannon.angle),
        colors::FOREGROUND,
    );

    circle(
        out,
        state.ball.pos,
        state.ball.radius,
        colors::FOREGROUND,
        settings.circle_segments,
    );
}

/// One red pip per remaining health point, then one light pip per point scored
fn draw_pips(out: &mut Vec<Vertex>, court: &Court, health: i32, score: u32) {
    let pip = Vec2::splat(PIP_RADIUS);
    let y = court.radius.y + 2.0 * WALL_RADIUS + 2.0 * pip.y;
    let pip_center = |i: u32| Vec2::new(-court.radius.x + (2.0 + 3.0 * i as f32) * pip.x, y);

    let health_slots = MAX_HEALTH.max(0) as u32;
    for i in 0..health_slots {
        if (i as i32) < health {
            rectangle(out, pip_center(i), pip, colors::HEALTH);
        }
    }
    for i in health_slots..health_slots + score {
        rectangle(out, pip_center(i), pip, colors::FOREGROUND);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Trail;

    fn coarse() -> Settings {
        Settings {
            circle_segments: 8,
            trail_steps: 20,
        }
    }

    #[test]
    fn test_fresh_scene_vertex_count() {
        let state = GameState::new(1);
        let settings = Settings::default();
        let scene = build_scene(&state, UVec2::new(800, 600), &settings);

        let circle = 360 * 3;
        let rect = 6;
        let shadows = 6 * rect + circle;
        let trail = 20 * circle;
        let solids = 6 * rect + 180 * 3 + rect + circle;
        let pips = MAX_HEALTH as usize * rect;
        assert_eq!(scene.vertices.len(), shadows + trail + solids + pips);
        assert_eq!(scene.vertices.len() % 3, 0);
    }

    #[test]
    fn test_fresh_scene_draw_order() {
        let state = GameState::new(1);
        let settings = coarse();
        let scene = build_scene(&state, UVec2::new(800, 600), &settings);
        let v = &scene.vertices;
        let circle = 8 * 3;

        // Wall and paddle shadows, then the ball shadow
        assert!(v[..5 * 6].iter().all(|v| v.color == colors::SHADOW));
        assert!(v[5 * 6..6 * 6].iter().all(|v| v.color == colors::HEALTH_SHADOW));
        assert!(v[6 * 6..6 * 6 + circle].iter().all(|v| v.color == colors::SHADOW));

        // Trail next, oldest step first, all before the first solid
        let trail_start = 6 * 6 + circle;
        assert_eq!(v[trail_start].color, colors::TRAIL[2]);
        let first_solid = v.iter().position(|v| v.color == colors::FOREGROUND);
        assert_eq!(first_solid, Some(trail_start + 20 * circle));

        // Health pips close the frame
        let pips = MAX_HEALTH as usize * 6;
        assert!(v[v.len() - pips..].iter().all(|v| v.color == colors::HEALTH));
        // The defender paddle is the only earlier shape in the health color
        let defender = v[..v.len() - pips].iter().filter(|v| v.color == colors::HEALTH);
        assert_eq!(defender.count(), 6);
    }

    #[test]
    fn test_pips_track_health_and_score() {
        let court = Court::default();
        let mut out = Vec::new();
        draw_pips(&mut out, &court, 2, 3);
        assert_eq!(out.len(), 5 * 6);
        assert_eq!(out.iter().filter(|v| v.color == colors::HEALTH).count(), 2 * 6);
        assert_eq!(out.iter().filter(|v| v.color == colors::FOREGROUND).count(), 3 * 6);

        // Score pips start after the full health row, even when health is low
        let first_score = out[2 * 6].xy();
        let expected_x =
            -court.radius.x + (2.0 + 3.0 * MAX_HEALTH as f32) * PIP_RADIUS - PIP_RADIUS;
        assert!((first_score.x - expected_x).abs() < 1e-5);
    }

    #[test]
    fn test_no_pips_below_zero_health() {
        let mut out = Vec::new();
        draw_pips(&mut out, &Court::default(), -2, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_trail_interpolates_between_samples() {
        let mut trail = Trail::primed(Vec2::ZERO, 1.0);
        trail.advance(Vec2::new(1.0, 0.0), 1.0);
        let settings = Settings {
            circle_segments: 8,
            trail_steps: 2,
        };

        let mut out = Vec::new();
        draw_trail(&mut out, trail.samples(), 1.0, 0.2, &settings);

        assert_eq!(out.len(), 2 * 8 * 3);
        // Fan centers: oldest step first
        assert!(out[0].xy().abs_diff_eq(Vec2::ZERO, 1e-6));
        assert!(out[24].xy().abs_diff_eq(Vec2::new(0.5, 0.0), 1e-6));
        assert_eq!(out[0].color, colors::TRAIL[2]);
        assert_eq!(out[24].color, colors::TRAIL[0]);
    }

    #[test]
    fn test_trail_skips_times_history_does_not_reach() {
        // Only half a second of history but asked to draw 1.3 seconds
        let trail = Trail::primed(Vec2::ONE, 0.5);
        let mut out = Vec::new();
        draw_trail(&mut out, trail.samples(), 1.3, 0.2, &coarse());

        // step / 20 * 1.3 <= 0.5 holds for steps 1..=7
        assert_eq!(out.len(), 7 * 8 * 3);
    }

    #[test]
    fn test_trail_color_endpoints() {
        assert_eq!(trail_color(1, 20), colors::TRAIL[0]);
        assert_eq!(trail_color(20, 20), colors::TRAIL[2]);
        let mid = trail_color(10, 20);
        assert_ne!(mid, colors::TRAIL[0]);
        assert_eq!(mid[3], 0x88);
    }

    #[test]
    fn test_barrel_follows_cannon_angle() {
        let mut state = GameState::new(1);
        state.cannon.angle = MAX_ELEVATION;
        let mut out = Vec::new();
        draw_solids(&mut out, &state, &coarse());

        // walls + paddles, then the half disc, then the barrel
        let barrel_start = 6 * 6 + 4 * 3;
        let barrel = &out[barrel_start..barrel_start + 6];
        let tip = state.cannon.base
            + Vec2::from_angle(MAX_ELEVATION) * (CANNON_BARREL_OFFSET + state.cannon.barrel_length);
        let far_mid = 0.5 * (barrel[1].xy() + barrel[2].xy());
        assert!(far_mid.abs_diff_eq(tip, 1e-4), "{far_mid:?} vs {tip:?}");
    }

    #[test]
    fn test_wide_viewport_only_changes_x_scale() {
        let state = GameState::new(1);
        let square = build_scene(&state, UVec2::new(600, 600), &coarse());
        let wide = build_scene(&state, UVec2::new(1200, 600), &coarse());

        assert_eq!(square.court_to_clip.y_axis.y, wide.court_to_clip.y_axis.y);
        assert_eq!(square.court_to_clip.w_axis.y, wide.court_to_clip.w_axis.y);
        assert!((square.court_to_clip.x_axis.x - 2.0 * wide.court_to_clip.x_axis.x).abs() < 1e-6);
    }

    #[test]
    fn test_scene_fits_in_clip_space() {
        let state = GameState::new(1);
        let scene = build_scene(&state, UVec2::new(1024, 768), &coarse());
        for v in &scene.vertices {
            let clip = scene.court_to_clip.transform_point3(v.xy().extend(0.0));
            assert!(clip.x.abs() <= 1.0 + 1e-4 && clip.y.abs() <= 1.0 + 1e-4, "{clip:?}");
        }
    }

    #[test]
    fn test_inverse_maps_clip_back_to_court() {
        let state = GameState::new(1);
        let scene = build_scene(&state, UVec2::new(1280, 720), &coarse());
        let p = Vec2::new(2.0, -1.5);
        let clip = scene.court_to_clip.transform_point3(p.extend(0.0)).truncate();
        assert!(scene.clip_to_court.transform_point2(clip).abs_diff_eq(p, 1e-4));
    }
}
