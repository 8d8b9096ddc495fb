//! Bézier curve types used for parallel edges and loops.
//!
//! Both curves are evaluated with the Bernstein form so that drawing and
//! hit-testing see exactly the same points for the same parameter.

use super::math::{cubic_point, quad_point};
use crate::model::Vec2;
use serde::Serialize;

/// Quadratic Bézier: one control point. Used to splay parallel edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QuadBezier {
    pub p0: Vec2, // Start point
    pub c: Vec2,  // Control point
    pub p1: Vec2, // End point
}

impl QuadBezier {
    pub fn new(p0: Vec2, c: Vec2, p1: Vec2) -> Self {
        Self { p0, c, p1 }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f32) -> Vec2 {
        quad_point(t, self.p0, self.c, self.p1)
    }
}

/// Control points of a cubic Bézier curve. Loops use `p0 == p3`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CubicBezier {
    pub p0: Vec2, // Start point
    pub p1: Vec2, // First control point
    pub p2: Vec2, // Second control point
    pub p3: Vec2, // End point
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f32) -> Vec2 {
        cubic_point(t, self.p0, self.p1, self.p2, self.p3)
    }

    /// Point reached at t = 0.5. For a loop this is its apex.
    pub fn apex(&self) -> Vec2 {
        self.eval(0.5)
    }
}
