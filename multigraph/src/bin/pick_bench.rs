use multigraph::algorithms::picking::pick_edge;
use multigraph::geometry::edge_path::EdgeGeometry;
use multigraph::model::{Color, Vec2};
use multigraph::Graph;
use std::time::Instant;

fn build_ring_graph(vertices: usize, bundle: usize) -> Graph {
    let mut g = Graph::undirected();
    // Vertices on a circle; each neighbour pair gets `bundle` parallel edges plus one loop
    let r = 20.0 * vertices as f32;
    for i in 0..vertices {
        let a = i as f32 / vertices as f32 * std::f32::consts::TAU;
        g.add_vertex(r + r * a.cos(), r + r * a.sin(), format!("V{}", i + 1), Color::RED);
    }
    for i in 0..vertices {
        let j = (i + 1) % vertices;
        for _ in 0..bundle { g.add_edge(i, j); }
        g.add_edge(i, i);
    }
    g
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut vertices = 40usize;
    let mut bundle = 3usize;
    let mut picks = 500usize;
    let mut tol = 10.0f32;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--vertices=") { if let Ok(v)=val.parse() { vertices=v; } }
        else if let Some(val)=a.strip_prefix("--bundle=") { if let Ok(v)=val.parse() { bundle=v; } }
        else if let Some(val)=a.strip_prefix("--picks=") { if let Ok(v)=val.parse() { picks=v; } }
        else if let Some(val)=a.strip_prefix("--tol=") { if let Ok(v)=val.parse() { tol=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }
    let vertices = vertices.max(2);

    let g = build_ring_graph(vertices, bundle);
    let geometry = EdgeGeometry::default();
    let span = 40.0 * vertices as f32;

    let mut times_ms: Vec<f64> = Vec::with_capacity(picks);
    let start_all = Instant::now();
    let mut hits = 0usize;
    for k in 0..picks {
        let p = Vec2::new((k % 97) as f32 / 97.0 * span, ((k / 97) % 89) as f32 / 89.0 * span);
        let t0 = Instant::now();
        if pick_edge(&g, &geometry, p, tol).is_some() { hits += 1; }
        let dt = t0.elapsed().as_secs_f64() * 1000.0;
        times_ms.push(dt);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("vertices={} edges={} picks={} tol={} hits={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", vertices, g.edge_count(), picks, tol, hits, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
