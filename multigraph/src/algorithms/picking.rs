use crate::geometry::edge_path::EdgeGeometry;
use crate::model::Vec2;
use crate::{Graph, Pick};
use log::trace;

/// Edge instance under a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeHit {
    pub i: usize,
    pub j: usize,
    pub k: u32,
    pub dist: f32,
}

/// First vertex (lowest index) whose centre lies strictly within `radius` of `p`.
pub fn pick_vertex(g: &Graph, p: Vec2, radius: f32) -> Option<usize> {
    g.vertices.iter().position(|v| v.pos.dist(p) < radius)
}

/// First edge instance strictly within `threshold` of `p`, scanning pairs in
/// [`Graph::edge_pairs`] order and instances in index order. Stops at the
/// first hit even if a later instance is closer.
pub fn pick_edge(g: &Graph, geometry: &EdgeGeometry, p: Vec2, threshold: f32) -> Option<EdgeHit> {
    for (i, j, m) in g.edge_pairs() {
        let pi = g.vertices[i].pos;
        let pj = g.vertices[j].pos;
        for k in 0..m {
            let Some(path) = geometry.path(pi, pj, i == j, m, k) else { continue };
            let dist = geometry.distance(&path, p);
            if dist < threshold {
                trace!("pick_edge hit ({}, {}) k={} dist={}", i, j, k, dist);
                return Some(EdgeHit { i, j, k, dist });
            }
        }
    }
    None
}

/// Smallest distance from `p` to any instance of pair (i, j).
pub fn distance_to_pair(g: &Graph, geometry: &EdgeGeometry, i: usize, j: usize, p: Vec2) -> Option<f32> {
    g.edge_paths(geometry, i, j)
        .iter()
        .map(|path| geometry.distance(path, p))
        .reduce(f32::min)
}

pub fn pick_impl(g: &Graph, geometry: &EdgeGeometry, p: Vec2, vertex_radius: f32, edge_threshold: f32) -> Option<Pick> {
    // Vertices first
    if let Some(index) = pick_vertex(g, p, vertex_radius) {
        let dist = g.vertices[index].pos.dist(p);
        return Some(Pick::Vertex { index, dist });
    }
    pick_edge(g, geometry, p, edge_threshold).map(|h| Pick::Edge { i: h.i, j: h.j, k: h.k, dist: h.dist })
}
