//! 2D transform helpers shared by input mapping and scene building

use glam::{Affine2, Mat4, UVec2, Vec2, Vec4};

/// Rotation by `angle` (radians, CCW) about `center`.
///
/// Equivalent to translating `center` to the origin, rotating about z, then
/// translating back (rightmost applied first).
#[inline]
pub fn rotation_about(center: Vec2, angle: f32) -> Affine2 {
    Affine2::from_translation(center)
        * Affine2::from_angle(angle)
        * Affine2::from_translation(-center)
}

/// Convert window pixels (top-left origin, +y down) to clip space
/// ([-1,1]x[-1,1], +y up), sampling at pixel centers.
#[inline]
pub fn window_to_clip(px: f32, py: f32, window_size: UVec2) -> Vec2 {
    Vec2::new(
        (px + 0.5) / window_size.x as f32 * 2.0 - 1.0,
        (py + 0.5) / window_size.y as f32 * -2.0 + 1.0,
    )
}

/// Fit the box `[scene_min, scene_max]` into a viewport of `drawable_size`,
/// preserving aspect ratio.
///
/// Returns `(court_to_clip, clip_to_court)`. A zero-sized side (minimized
/// window) is treated as one pixel so both transforms stay finite.
pub fn fit_court_to_clip(
    scene_min: Vec2,
    scene_max: Vec2,
    drawable_size: UVec2,
) -> (Mat4, Affine2) {
    let size = drawable_size.max(UVec2::ONE);
    let aspect = size.x as f32 / size.y as f32;
    let extent = scene_max - scene_min;

    // x must fit in [-aspect, aspect], y in [-1, 1]
    let scale = (2.0 * aspect / extent.x).min(2.0 / extent.y);
    let center = 0.5 * (scene_max + scene_min);

    let court_to_clip = Mat4::from_cols(
        Vec4::new(scale / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, scale, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(-center.x * (scale / aspect), -center.y * scale, 0.0, 1.0),
    );

    let clip_to_court = Affine2::from_cols(
        Vec2::new(aspect / scale, 0.0),
        Vec2::new(0.0, 1.0 / scale),
        center,
    );

    (court_to_clip, clip_to_court)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_about_keeps_center_fixed() {
        let center = Vec2::new(-5.0, 1.0);
        let rot = rotation_about(center, 1.234);
        assert!(rot.transform_point2(center).abs_diff_eq(center, 1e-5));
    }

    #[test]
    fn test_rotation_about_quarter_turn() {
        let rot = rotation_about(Vec2::new(1.0, 0.0), FRAC_PI_2);
        let p = rot.transform_point2(Vec2::new(2.0, 0.0));
        assert!(p.abs_diff_eq(Vec2::new(1.0, 1.0), 1e-5), "got {p:?}");
    }

    #[test]
    fn test_window_to_clip_corners() {
        let size = UVec2::new(100, 50);
        let top_left = window_to_clip(-0.5, -0.5, size);
        assert!(top_left.abs_diff_eq(Vec2::new(-1.0, 1.0), 1e-6));
        let bottom_right = window_to_clip(99.5, 49.5, size);
        assert!(bottom_right.abs_diff_eq(Vec2::new(1.0, -1.0), 1e-6));
    }

    #[test]
    fn test_fit_transforms_are_inverse() {
        let (fwd, inv) = fit_court_to_clip(
            Vec2::new(-3.0, -2.0),
            Vec2::new(3.0, 4.0),
            UVec2::new(1280, 720),
        );
        let court = Vec2::new(1.5, -0.75);
        let clip = fwd.transform_point3(court.extend(0.0)).truncate();
        let back = inv.transform_point2(clip);
        assert!(back.abs_diff_eq(court, 1e-4), "got {back:?}");
    }

    #[test]
    fn test_fit_zero_sized_drawable_stays_finite() {
        let min = Vec2::new(-3.0, -2.0);
        let max = Vec2::new(3.0, 4.0);
        for size in [UVec2::new(0, 600), UVec2::new(800, 0), UVec2::ZERO] {
            let (fwd, inv) = fit_court_to_clip(min, max, size);
            assert!(fwd.is_finite(), "{size:?}: {fwd:?}");
            assert!(inv.is_finite(), "{size:?}: {inv:?}");
            let back = inv.transform_point2(fwd.transform_point3(Vec3::ONE).truncate());
            assert!(back.abs_diff_eq(Vec2::ONE, 1e-3), "{size:?}: {back:?}");
        }
    }

    #[test]
    fn test_fit_scene_stays_in_clip_space() {
        let min = Vec2::new(-3.0, -2.0);
        let max = Vec2::new(3.0, 4.0);
        for size in [UVec2::new(800, 800), UVec2::new(1600, 800), UVec2::new(400, 900)] {
            let (fwd, _) = fit_court_to_clip(min, max, size);
            for corner in [min, max] {
                let clip = fwd.transform_point3(corner.extend(0.0));
                assert!(clip.x.abs() <= 1.0 + 1e-5 && clip.y.abs() <= 1.0 + 1e-5);
            }
        }
    }
}
