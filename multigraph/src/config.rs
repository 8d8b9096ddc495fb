use crate::geometry::edge_path::EdgeGeometry;
use crate::geometry::tolerance::{
    EDGE_HIT_THRESHOLD, LOOP_RADIUS, LOOP_SPREAD, MAX_SAMPLE_STEPS, PARALLEL_STEP, SAMPLE_STEPS,
    VERTEX_HIT_RADIUS,
};
use crate::model::{Color, DeletePolicy};
use serde::{Deserialize, Serialize};

/// Editor tuning. Every field is optional in JSON; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub directed: bool,
    pub vertex_hit_radius: f32,
    pub edge_hit_threshold: f32,
    pub parallel_step: f32,
    pub loop_radius: f32,
    pub loop_spread: f32,
    pub sample_steps: u32,
    pub delete_policy: DeletePolicy,
    pub vertex_color: Color,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            directed: false,
            vertex_hit_radius: VERTEX_HIT_RADIUS,
            edge_hit_threshold: EDGE_HIT_THRESHOLD,
            parallel_step: PARALLEL_STEP,
            loop_radius: LOOP_RADIUS,
            loop_spread: LOOP_SPREAD,
            sample_steps: SAMPLE_STEPS,
            delete_policy: DeletePolicy::Decrement,
            vertex_color: Color::RED,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let cfg: EditorConfig = serde_json::from_str(s)?;
        Ok(cfg.sanitized())
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<Self, serde_json::Error> {
        let cfg: EditorConfig = serde_json::from_value(v)?;
        Ok(cfg.sanitized())
    }

    // Non-finite or non-positive distances fall back to defaults. A zero step
    // count does too; larger counts are capped at MAX_SAMPLE_STEPS.
    fn sanitized(mut self) -> Self {
        let d = EditorConfig::default();
        let fix = |v: f32, dflt: f32| if v.is_finite() && v > 0.0 { v } else { dflt };
        self.vertex_hit_radius = fix(self.vertex_hit_radius, d.vertex_hit_radius);
        self.edge_hit_threshold = fix(self.edge_hit_threshold, d.edge_hit_threshold);
        self.parallel_step = fix(self.parallel_step, d.parallel_step);
        self.loop_radius = fix(self.loop_radius, d.loop_radius);
        if !self.loop_spread.is_finite() { self.loop_spread = d.loop_spread; }
        self.sample_steps = match self.sample_steps {
            0 => d.sample_steps,
            s => s.min(MAX_SAMPLE_STEPS),
        };
        self
    }

    pub fn geometry(&self) -> EdgeGeometry {
        EdgeGeometry {
            parallel_step: self.parallel_step,
            loop_radius: self.loop_radius,
            loop_spread: self.loop_spread,
            sample_steps: self.sample_steps,
        }
    }
}
