use super::tolerance::{clamp01, EPS_LEN};
use crate::model::Vec2;

/// Squared distance from `p` to segment `a`-`b` and the clamped projection parameter.
pub fn seg_distance_sq(p: Vec2, a: Vec2, b: Vec2) -> (f32, f32) {
    let vx = b.x - a.x; let vy = b.y - a.y;
    let wx = p.x - a.x; let wy = p.y - a.y;
    let vv = vx*vx + vy*vy;
    let t = if vv > EPS_LEN * EPS_LEN { clamp01((wx*vx + wy*vy) / vv) } else { 0.0 };
    let projx = a.x + t * vx; let projy = a.y + t * vy;
    let dx = p.x - projx; let dy = p.y - projy;
    (dx*dx + dy*dy, t)
}

/// Distance from `p` to segment `a`-`b`. A zero-length segment is treated as the point `a`.
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    seg_distance_sq(p, a, b).0.sqrt()
}

/// Minimum distance from `p` to any sample. Infinite only for an empty slice.
pub fn distance_point_to_samples(p: Vec2, samples: &[Vec2]) -> f32 {
    let mut best_d2 = f32::INFINITY;
    for s in samples {
        let dx = p.x - s.x; let dy = p.y - s.y;
        let d2 = dx*dx + dy*dy;
        if d2 < best_d2 { best_d2 = d2; }
    }
    best_d2.sqrt()
}

pub fn quad_point(t: f32, p0: Vec2, c: Vec2, p1: Vec2) -> Vec2 {
    let u = 1.0 - t;
    let uu = u*u; let tt = t*t;
    Vec2 {
        x: uu*p0.x + 2.0*u*t*c.x + tt*p1.x,
        y: uu*p0.y + 2.0*u*t*c.y + tt*p1.y,
    }
}

pub fn cubic_point(t: f32, p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    let tt = t*t; let uu = u*u;
    let uuu = uu*u; let ttt = tt*t;
    Vec2 {
        x: uuu*p0.x + 3.0*uu*t*c1.x + 3.0*u*tt*c2.x + ttt*p3.x,
        y: uuu*p0.y + 3.0*uu*t*c1.y + 3.0*u*tt*c2.y + ttt*p3.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_distance_to_segment() {
        let d = distance_point_to_segment(Vec2::new(50.0, 10.0), Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        assert!((d - 10.0).abs() < 1e-5);
    }

    #[test]
    fn projection_clamps_past_endpoint() {
        let (d2, t) = seg_distance_sq(Vec2::new(130.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        assert_eq!(t, 1.0);
        assert!((d2.sqrt() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let a = Vec2::new(3.0, 4.0);
        let d = distance_point_to_segment(Vec2::new(0.0, 0.0), a, a);
        assert!((d - 5.0).abs() < 1e-5);
        assert!(d.is_finite());
    }

    #[test]
    fn samples_min_distance() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)];
        let d = distance_point_to_samples(Vec2::new(11.0, 2.0), &pts);
        assert!((d - (5.0f32).sqrt()).abs() < 1e-5);
        assert_eq!(distance_point_to_samples(Vec2::new(0.0, 0.0), &[]), f32::INFINITY);
    }
}
