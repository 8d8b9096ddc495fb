pub mod model;
pub mod config;
pub mod editor;
pub mod report;
pub mod geometry {
    pub mod bezier;
    pub mod edge_path;
    pub mod math;
    pub mod sampling;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod picking;
}

use geometry::edge_path::{EdgeGeometry, EdgePath};
use log::debug;
use model::{Color, DeletePolicy, Vec2, Vertex, VertexId};
use serde::{Deserialize, Serialize};

pub use config::EditorConfig;
pub use editor::{Editor, Outcome, Tool};
pub use report::GraphReport;

/// Vertices plus an N×N multiplicity matrix. Entry (i, j) counts edges from
/// i to j. Undirected graphs keep the matrix symmetric off the diagonal; a
/// loop is stored once on the diagonal in both modes.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) matrix: Vec<Vec<u32>>, // row i, column j
    pub(crate) directed: bool,
    pub(crate) next_id: u32,
    pub(crate) version: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pick {
    #[serde(rename = "vertex")]
    Vertex { index: usize, dist: f32 },
    #[serde(rename = "edge")]
    Edge { i: usize, j: usize, k: u32, dist: f32 },
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new(false)
    }
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            vertices: Vec::new(),
            matrix: Vec::new(),
            directed,
            next_id: 0,
            version: 1,
        }
    }
    pub fn undirected() -> Self {
        Graph::new(false)
    }
    pub fn directed() -> Self {
        Graph::new(true)
    }
    pub fn is_directed(&self) -> bool {
        self.directed
    }
    /// Monotonic version; increments on every successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }
    fn bump(&mut self) {
        self.version += 1;
    }
    fn in_range(&self, i: usize) -> bool {
        i < self.vertices.len()
    }

    // Vertices
    /// Appends a vertex and returns its index, or `None` for a non-finite
    /// position.
    pub fn add_vertex(&mut self, x: f32, y: f32, label: impl Into<String>, color: Color) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let index = self.vertices.len();
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.vertices.push(Vertex { id, pos: Vec2 { x, y }, label: label.into(), color });
        for row in self.matrix.iter_mut() {
            row.push(0);
        }
        self.matrix.push(vec![0; index + 1]);
        debug!("add_vertex index={} id={} at ({}, {})", index, id.0, x, y);
        self.bump();
        Some(index)
    }
    /// Removes the vertex at `index` with every incident edge. Later indices
    /// shift down by one; stable ids of other vertices are unaffected.
    pub fn delete_vertex(&mut self, index: usize) -> bool {
        if !self.in_range(index) {
            return false;
        }
        let v = self.vertices.remove(index);
        self.matrix.remove(index);
        for row in self.matrix.iter_mut() {
            row.remove(index);
        }
        debug!("delete_vertex index={} id={} label={:?}", index, v.id.0, v.label);
        self.bump();
        true
    }
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }
    pub fn vertex_id(&self, index: usize) -> Option<VertexId> {
        self.vertices.get(index).map(|v| v.id)
    }
    /// Current index of a stable id, or `None` once that vertex is gone.
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }
    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.vertices.get(index).map(|v| v.pos)
    }
    pub fn move_vertex(&mut self, index: usize, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        match self.vertices.get_mut(index) {
            Some(v) => v.pos = Vec2 { x, y },
            None => return false,
        }
        self.bump();
        true
    }
    pub fn set_vertex_color(&mut self, index: usize, color: Color) -> bool {
        match self.vertices.get_mut(index) {
            Some(v) => v.color = color,
            None => return false,
        }
        self.bump();
        true
    }
    pub fn set_vertex_label(&mut self, index: usize, label: impl Into<String>) -> bool {
        match self.vertices.get_mut(index) {
            Some(v) => v.label = label.into(),
            None => return false,
        }
        self.bump();
        true
    }

    // Edges
    /// Adds one edge i→j. Undirected non-loops mirror to (j, i); a loop
    /// increments (i, i) exactly once in either mode.
    pub fn add_edge(&mut self, i: usize, j: usize) -> bool {
        if !self.in_range(i) || !self.in_range(j) {
            return false;
        }
        self.matrix[i][j] += 1;
        if i != j && !self.directed {
            self.matrix[j][i] += 1;
        }
        debug!("add_edge ({}, {}) multiplicity={}", i, j, self.matrix[i][j]);
        self.bump();
        true
    }
    /// Removes one unit of multiplicity from (i, j), mirrored for undirected
    /// non-loops. Returns false when out of range or no such edge exists.
    pub fn delete_edge(&mut self, i: usize, j: usize) -> bool {
        if !self.in_range(i) || !self.in_range(j) || self.matrix[i][j] == 0 {
            return false;
        }
        self.matrix[i][j] -= 1;
        if i != j && !self.directed {
            self.matrix[j][i] = self.matrix[j][i].saturating_sub(1);
        }
        debug!("delete_edge ({}, {}) multiplicity={}", i, j, self.matrix[i][j]);
        self.bump();
        true
    }
    /// Zeroes (i, j), mirrored for undirected non-loops. Returns how many
    /// edges were removed.
    pub fn clear_edges(&mut self, i: usize, j: usize) -> u32 {
        if !self.in_range(i) || !self.in_range(j) {
            return 0;
        }
        let removed = std::mem::take(&mut self.matrix[i][j]);
        if i != j && !self.directed {
            self.matrix[j][i] = 0;
        }
        if removed > 0 {
            debug!("clear_edges ({}, {}) removed={}", i, j, removed);
            self.bump();
        }
        removed
    }
    pub fn delete_edge_with(&mut self, i: usize, j: usize, policy: DeletePolicy) -> bool {
        match policy {
            DeletePolicy::Decrement => self.delete_edge(i, j),
            DeletePolicy::ZeroOut => self.clear_edges(i, j) > 0,
        }
    }
    pub fn multiplicity(&self, i: usize, j: usize) -> u32 {
        self.matrix.get(i).and_then(|row| row.get(j)).copied().unwrap_or(0)
    }
    pub fn matrix(&self) -> &[Vec<u32>] {
        &self.matrix
    }
    /// Row sum of `i`: out-degree when directed. A loop counts once.
    pub fn degree(&self, i: usize) -> u32 {
        self.matrix.get(i).map_or(0, |row| row.iter().sum())
    }
    /// Column sum of `i`; equal to [`Graph::degree`] for undirected graphs.
    pub fn in_degree(&self, i: usize) -> u32 {
        if !self.in_range(i) {
            return 0;
        }
        self.matrix.iter().map(|row| row[i]).sum()
    }
    /// Number of edges, counting each undirected edge and each loop once.
    pub fn edge_count(&self) -> u32 {
        let mut total = 0;
        for (i, row) in self.matrix.iter().enumerate() {
            for (j, &m) in row.iter().enumerate() {
                if self.directed || i <= j {
                    total += m;
                }
            }
        }
        total
    }
    /// Pairs carrying at least one edge, in the order drawing and picking
    /// visit them: non-loop pairs first (i < j when undirected, every
    /// ordered pair when directed, row-major), then loops by vertex.
    pub fn edge_pairs(&self) -> Vec<(usize, usize, u32)> {
        let n = self.vertices.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if i == j || (!self.directed && j < i) {
                    continue;
                }
                let m = self.matrix[i][j];
                if m > 0 {
                    pairs.push((i, j, m));
                }
            }
        }
        for i in 0..n {
            let m = self.matrix[i][i];
            if m > 0 {
                pairs.push((i, i, m));
            }
        }
        pairs
    }

    // Geometry
    /// Paths of every instance of pair (i, j). Empty when out of range or
    /// the pair has no edge.
    pub fn edge_paths(&self, geometry: &EdgeGeometry, i: usize, j: usize) -> Vec<EdgePath> {
        match (self.position(i), self.position(j)) {
            (Some(pi), Some(pj)) => geometry.paths(pi, pj, i == j, self.multiplicity(i, j)),
            _ => Vec::new(),
        }
    }
    /// Every instance path in the graph, tagged with its pair and index.
    pub fn all_edge_paths(&self, geometry: &EdgeGeometry) -> Vec<(usize, usize, u32, EdgePath)> {
        let mut out = Vec::new();
        for (i, j, _) in self.edge_pairs() {
            for (k, path) in self.edge_paths(geometry, i, j).into_iter().enumerate() {
                out.push((i, j, k as u32, path));
            }
        }
        out
    }

    // Picking
    pub fn pick(&self, geometry: &EdgeGeometry, x: f32, y: f32, vertex_radius: f32, edge_threshold: f32) -> Option<Pick> {
        algorithms::picking::pick_impl(self, geometry, Vec2 { x, y }, vertex_radius, edge_threshold)
    }

    // Report
    pub fn report(&self) -> GraphReport {
        GraphReport::from_graph(self)
    }

    // Clear
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.matrix.clear();
        self.bump();
    }
}
