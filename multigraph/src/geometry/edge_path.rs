//! Edge geometry: turns a pair's multiplicity into the path of every
//! parallel or loop instance, and measures point distance to those paths.
//!
//! The same builder feeds drawing and hit-testing; a click is only ever
//! compared against the exact curve that was painted.

use crate::geometry::bezier::{CubicBezier, QuadBezier};
use crate::geometry::math::distance_point_to_segment;
use crate::geometry::sampling::{sample_cubic, sample_params, sample_quad};
use crate::geometry::tolerance::{LOOP_RADIUS, LOOP_SPREAD, PARALLEL_STEP, SAMPLE_STEPS};
use crate::model::Vec2;
use serde::Serialize;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

/// Path of one edge instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EdgePath {
    /// Sole edge between two distinct vertices.
    Line(Segment),
    /// One of two or more edges between two distinct vertices.
    Parallel(QuadBezier),
    /// Self-edge; both endpoints sit on the vertex.
    Loop(CubicBezier),
}

impl EdgePath {
    pub fn kind_code(&self) -> u8 {
        match self {
            EdgePath::Line(_) => 0,
            EdgePath::Parallel(_) => 1,
            EdgePath::Loop(_) => 2,
        }
    }
}

/// Layout parameters for edge paths. Defaults match the drawing constants in
/// [`crate::geometry::tolerance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
    pub parallel_step: f32,
    pub loop_radius: f32,
    pub loop_spread: f32,
    pub sample_steps: u32,
}

impl Default for EdgeGeometry {
    fn default() -> Self {
        EdgeGeometry {
            parallel_step: PARALLEL_STEP,
            loop_radius: LOOP_RADIUS,
            loop_spread: LOOP_SPREAD,
            sample_steps: SAMPLE_STEPS,
        }
    }
}

/// Signed control offset of instance `k` in a bundle of `m` parallel edges.
/// Uses integer halving, so odd bundles keep a centred instance at offset 0.
pub fn parallel_offset(step: f32, m: u32, k: u32) -> f32 {
    step * (k as i64 - (m / 2) as i64) as f32
}

/// Centre angle of loop `k` out of `m`, evenly fanned around the vertex.
pub fn loop_angle(m: u32, k: u32) -> f32 {
    if m == 0 { return 0.0; }
    k as f32 * (TAU / m as f32)
}

impl EdgeGeometry {
    pub fn parallel_curve(&self, pi: Vec2, pj: Vec2, m: u32, k: u32) -> QuadBezier {
        let off = parallel_offset(self.parallel_step, m, k);
        let mid = pi.midpoint(pj);
        QuadBezier::new(pi, Vec2::new(mid.x + off, mid.y - off), pj)
    }

    pub fn loop_curve(&self, center: Vec2, m: u32, k: u32) -> CubicBezier {
        let theta = loop_angle(m, k);
        let left = theta - self.loop_spread;
        let right = theta + self.loop_spread;
        let c1 = Vec2::new(center.x + self.loop_radius * left.cos(), center.y + self.loop_radius * left.sin());
        let c2 = Vec2::new(center.x + self.loop_radius * right.cos(), center.y + self.loop_radius * right.sin());
        CubicBezier::new(center, c1, c2, center)
    }

    /// Path of instance `k` for a pair with multiplicity `m`; `None` when
    /// `m == 0` or `k >= m`.
    pub fn path(&self, pi: Vec2, pj: Vec2, is_loop: bool, m: u32, k: u32) -> Option<EdgePath> {
        if m == 0 || k >= m {
            return None;
        }
        Some(if is_loop {
            EdgePath::Loop(self.loop_curve(pi, m, k))
        } else if m == 1 {
            EdgePath::Line(Segment { a: pi, b: pj })
        } else {
            EdgePath::Parallel(self.parallel_curve(pi, pj, m, k))
        })
    }

    /// All `m` instance paths of a pair, in instance order.
    pub fn paths(&self, pi: Vec2, pj: Vec2, is_loop: bool, m: u32) -> Vec<EdgePath> {
        (0..m).filter_map(|k| self.path(pi, pj, is_loop, m, k)).collect()
    }

    /// Polyline for painting. A line is its two endpoints; curves are sampled.
    pub fn samples(&self, path: &EdgePath) -> Vec<Vec2> {
        let mut pts = Vec::new();
        match path {
            EdgePath::Line(s) => {
                pts.push(s.a);
                pts.push(s.b);
            }
            EdgePath::Parallel(q) => sample_quad(&mut pts, q, self.sample_steps),
            EdgePath::Loop(c) => sample_cubic(&mut pts, c, self.sample_steps),
        }
        pts
    }

    /// Distance from `p` to the path. Exact for lines; curves are measured
    /// at the same parameters `samples` paints, without building the polyline.
    pub fn distance(&self, path: &EdgePath, p: Vec2) -> f32 {
        let steps = sample_params(self.sample_steps);
        match path {
            EdgePath::Line(s) => distance_point_to_segment(p, s.a, s.b),
            EdgePath::Parallel(q) => steps.map(|t| q.eval(t).dist(p)).fold(f32::INFINITY, f32::min),
            EdgePath::Loop(c) => steps.map(|t| c.eval(t).dist(p)).fold(f32::INFINITY, f32::min),
        }
    }
}
