use crate::geometry::bezier::{CubicBezier, QuadBezier};
use crate::geometry::tolerance::MAX_SAMPLE_STEPS;
use crate::model::Vec2;

// Fixed-step sampling at t = s / steps for s in 0..=steps. Drawing and
// hit-testing must both come through here so clicks line up with pixels.

/// Parameters `t = s / steps` for s in 0..=steps, with `steps` held to
/// `1..=MAX_SAMPLE_STEPS`.
pub fn sample_params(steps: u32) -> impl Iterator<Item = f32> {
    let steps = steps.clamp(1, MAX_SAMPLE_STEPS);
    (0..=steps).map(move |s| s as f32 / steps as f32)
}

pub fn sample_quad(points: &mut Vec<Vec2>, curve: &QuadBezier, steps: u32) {
    points.extend(sample_params(steps).map(|t| curve.eval(t)));
}

pub fn sample_cubic(points: &mut Vec<Vec2>, curve: &CubicBezier, steps: u32) {
    points.extend(sample_params(steps).map(|t| curve.eval(t)));
}
