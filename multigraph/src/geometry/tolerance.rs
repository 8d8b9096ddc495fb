// Centralized tolerances and sampling constants for edge geometry

pub const EPS_LEN: f32 = 1e-6;            // zero-length segment threshold

// Parametric sampling shared by drawing and hit-testing: t = s / SAMPLE_STEPS
pub const SAMPLE_STEPS: u32 = 1000;       // dt = 0.001, 1001 samples inclusive
pub const MAX_SAMPLE_STEPS: u32 = 10_000; // upper bound accepted from config

// Edge layout
pub const PARALLEL_STEP: f32 = 20.0;      // control offset between parallel edges (px)
pub const LOOP_RADIUS: f32 = 60.0;        // loop control point distance from vertex (px)
pub const LOOP_SPREAD: f32 = std::f32::consts::PI / 10.0; // half-angle between loop controls

// Hit-testing
pub const EDGE_HIT_THRESHOLD: f32 = 10.0;
pub const VERTEX_HIT_RADIUS: f32 = 15.0;

#[inline] pub fn clamp01(x: f32) -> f32 { x.max(0.0).min(1.0) }
