//! Click handling. The caller passes the active tool with every press, so
//! there is no ambient tool state; the editor only remembers selections
//! that span several presses, and it remembers them by stable id.

use crate::algorithms::picking::{pick_edge, pick_vertex};
use crate::config::EditorConfig;
use crate::geometry::edge_path::EdgeGeometry;
use crate::model::{Color, Vec2, VertexId};
use crate::report::GraphReport;
use crate::Graph;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "arg", rename_all = "snake_case")]
pub enum Tool {
    AddVertex,
    AddEdge,
    DeleteVertex,
    DeleteEdge,
    MoveVertex,
    ColorVertex(Color),
    NameVertex(String),
    PrintInfo,
}

/// What a single press did.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Nothing,
    VertexAdded(usize),
    EdgeStarted(usize),
    EdgeAdded { i: usize, j: usize },
    /// The pending edge start was deleted before the second press; the
    /// pending selection has been dropped.
    StaleSelection,
    VertexDeleted(usize),
    EdgeDeleted { i: usize, j: usize, k: u32 },
    Grabbed(usize),
    Recolored(usize),
    Renamed(usize),
    Report(GraphReport),
}

pub struct Editor {
    graph: Graph,
    config: EditorConfig,
    geometry: EdgeGeometry,
    edge_start: Option<VertexId>,
    moving: Option<VertexId>,
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let graph = Graph::new(config.directed);
        Editor::with_graph(graph, config)
    }

    pub fn with_graph(graph: Graph, config: EditorConfig) -> Self {
        let geometry = config.geometry();
        Editor { graph, config, geometry, edge_start: None, moving: None }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
    pub fn geometry(&self) -> &EdgeGeometry {
        &self.geometry
    }

    /// Replaces thresholds and layout. The graph keeps its directedness;
    /// `config.directed` only applies to graphs created afterwards.
    pub fn set_config(&mut self, config: EditorConfig) {
        self.geometry = config.geometry();
        self.config = config;
    }

    /// Live index of the first vertex of an edge being added.
    pub fn pending_edge_start(&self) -> Option<usize> {
        self.edge_start.and_then(|id| self.graph.index_of(id))
    }
    /// Live index of the vertex being dragged.
    pub fn moving_vertex(&self) -> Option<usize> {
        self.moving.and_then(|id| self.graph.index_of(id))
    }

    pub fn cancel(&mut self) {
        self.edge_start = None;
        self.moving = None;
    }

    pub fn report(&self) -> GraphReport {
        self.graph.report()
    }

    fn vertex_at(&self, p: Vec2) -> Option<usize> {
        pick_vertex(&self.graph, p, self.config.vertex_hit_radius)
    }

    pub fn press(&mut self, tool: &Tool, x: f32, y: f32) -> Outcome {
        let p = Vec2 { x, y };
        match tool {
            Tool::AddVertex => self.on_add_vertex(p),
            Tool::AddEdge => self.on_add_edge(p),
            Tool::DeleteVertex => self.on_delete_vertex(p),
            Tool::DeleteEdge => self.on_delete_edge(p),
            Tool::MoveVertex => self.on_move_vertex(p),
            Tool::ColorVertex(color) => self.on_color_vertex(p, *color),
            Tool::NameVertex(label) => self.on_name_vertex(p, label),
            Tool::PrintInfo => Outcome::Report(self.graph.report()),
        }
    }

    /// Moves the grabbed vertex, if it still exists.
    pub fn drag(&mut self, x: f32, y: f32) -> bool {
        match self.moving_vertex() {
            Some(index) => self.graph.move_vertex(index, x, y),
            None => {
                self.moving = None;
                false
            }
        }
    }

    pub fn release(&mut self) {
        self.moving = None;
    }

    fn on_add_vertex(&mut self, p: Vec2) -> Outcome {
        let label = format!("V{}", self.graph.vertex_count() + 1);
        match self.graph.add_vertex(p.x, p.y, label, self.config.vertex_color) {
            Some(index) => Outcome::VertexAdded(index),
            None => Outcome::Nothing,
        }
    }

    fn on_add_edge(&mut self, p: Vec2) -> Outcome {
        let Some(index) = self.vertex_at(p) else { return Outcome::Nothing };
        let Some(start_id) = self.edge_start.take() else {
            self.edge_start = self.graph.vertex_id(index);
            return Outcome::EdgeStarted(index);
        };
        match self.graph.index_of(start_id) {
            Some(start) => {
                self.graph.add_edge(start, index);
                Outcome::EdgeAdded { i: start, j: index }
            }
            None => {
                warn!("pending edge start {} was deleted; selection dropped", start_id.0);
                Outcome::StaleSelection
            }
        }
    }

    fn on_delete_vertex(&mut self, p: Vec2) -> Outcome {
        let Some(index) = self.vertex_at(p) else { return Outcome::Nothing };
        if self.graph.delete_vertex(index) { Outcome::VertexDeleted(index) } else { Outcome::Nothing }
    }

    fn on_delete_edge(&mut self, p: Vec2) -> Outcome {
        let Some(hit) = pick_edge(&self.graph, &self.geometry, p, self.config.edge_hit_threshold) else {
            return Outcome::Nothing;
        };
        if self.graph.delete_edge_with(hit.i, hit.j, self.config.delete_policy) {
            debug!("delete tool removed ({}, {}) k={} via {:?}", hit.i, hit.j, hit.k, self.config.delete_policy);
            Outcome::EdgeDeleted { i: hit.i, j: hit.j, k: hit.k }
        } else {
            Outcome::Nothing
        }
    }

    fn on_move_vertex(&mut self, p: Vec2) -> Outcome {
        let Some(index) = self.vertex_at(p) else { return Outcome::Nothing };
        self.moving = self.graph.vertex_id(index);
        self.graph.move_vertex(index, p.x, p.y);
        Outcome::Grabbed(index)
    }

    fn on_color_vertex(&mut self, p: Vec2, color: Color) -> Outcome {
        let Some(index) = self.vertex_at(p) else { return Outcome::Nothing };
        if self.graph.set_vertex_color(index, color) { Outcome::Recolored(index) } else { Outcome::Nothing }
    }

    fn on_name_vertex(&mut self, p: Vec2, label: &str) -> Outcome {
        let Some(index) = self.vertex_at(p) else { return Outcome::Nothing };
        if self.graph.set_vertex_label(index, label) { Outcome::Renamed(index) } else { Outcome::Nothing }
    }
}
