use multigraph::model::{Color, DeletePolicy};
use multigraph::Graph;

fn two_vertices(directed: bool) -> Graph {
    let mut g = Graph::new(directed);
    g.add_vertex(0.0, 0.0, "V1", Color::RED);
    g.add_vertex(100.0, 0.0, "V2", Color::RED);
    g
}

#[test]
fn add_vertex_grows_matrix_with_zeros() {
    let mut g = Graph::undirected();
    assert_eq!(g.add_vertex(1.0, 2.0, "V1", Color::RED), Some(0));
    assert_eq!(g.add_vertex(3.0, 4.0, "V2", Color::GREEN), Some(1));
    assert_eq!(g.add_vertex(5.0, 6.0, "V3", Color::RED), Some(2));
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.matrix().len(), 3);
    for row in g.matrix() {
        assert_eq!(row, &vec![0, 0, 0]);
    }
    let v = g.vertex(1).unwrap();
    assert_eq!(v.label, "V2");
    assert_eq!(v.color, Color::GREEN);
    assert_eq!((v.pos.x, v.pos.y), (3.0, 4.0));
}

#[test]
fn undirected_parallel_edges_scenario() {
    let mut g = two_vertices(false);
    assert!(g.add_edge(0, 1));
    assert!(g.add_edge(0, 1));
    assert_eq!(g.multiplicity(0, 1), 2);
    assert_eq!(g.multiplicity(1, 0), 2);
    assert_eq!(g.edge_count(), 2, "undirected edges must not be double counted");
    assert_eq!(g.degree(0), 2);
    assert_eq!(g.degree(1), 2);
}

#[test]
fn loop_is_never_doubled() {
    for directed in [false, true] {
        let mut g = two_vertices(directed);
        assert!(g.add_edge(1, 1));
        assert_eq!(g.multiplicity(1, 1), 1, "directed={}", directed);
        assert_eq!(g.degree(1), 1);
        assert_eq!(g.edge_count(), 1);
        assert!(g.add_edge(1, 1));
        assert_eq!(g.multiplicity(1, 1), 2);
        assert_eq!(g.edge_count(), 2);
    }
}

#[test]
fn directed_counts_are_independent() {
    let mut g = two_vertices(true);
    assert!(g.add_edge(0, 1));
    assert_eq!(g.multiplicity(0, 1), 1);
    assert_eq!(g.multiplicity(1, 0), 0);
    assert!(g.add_edge(1, 0));
    assert!(g.add_edge(1, 0));
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.degree(0), 1);
    assert_eq!(g.degree(1), 2);
    assert_eq!(g.in_degree(0), 2);
    assert_eq!(g.in_degree(1), 1);
    assert!(g.delete_edge(1, 0));
    assert_eq!(g.multiplicity(1, 0), 1);
    assert_eq!(g.multiplicity(0, 1), 1);
}

#[test]
fn add_then_delete_round_trips_with_both_policies() {
    for policy in [DeletePolicy::Decrement, DeletePolicy::ZeroOut] {
        let mut g = two_vertices(false);
        g.add_edge(0, 1);
        let before: Vec<Vec<u32>> = g.matrix().to_vec();
        assert!(g.add_edge(0, 1));
        assert!(g.delete_edge_with(0, 1, DeletePolicy::Decrement));
        assert_eq!(g.matrix(), &before[..], "decrement undoes one add");
        assert!(g.delete_edge_with(1, 0, policy));
        assert_eq!(g.multiplicity(0, 1), 0);
        assert_eq!(g.multiplicity(1, 0), 0);
    }
}

#[test]
fn zero_out_clears_mirrored_entries() {
    let mut g = two_vertices(false);
    for _ in 0..3 {
        g.add_edge(0, 1);
    }
    assert_eq!(g.clear_edges(1, 0), 3);
    assert_eq!(g.multiplicity(0, 1), 0);
    assert_eq!(g.multiplicity(1, 0), 0);
    assert_eq!(g.clear_edges(1, 0), 0);
}

#[test]
fn delete_never_goes_negative() {
    let mut g = two_vertices(false);
    let ver = g.version();
    assert!(!g.delete_edge(0, 1));
    assert!(!g.delete_edge(0, 0));
    assert_eq!(g.multiplicity(0, 1), 0);
    assert_eq!(g.version(), ver, "no-op delete must not mutate");
}

#[test]
fn out_of_range_indices_are_silent_noops() {
    let mut g = two_vertices(false);
    g.add_edge(0, 1);
    let ver = g.version();
    let before = g.matrix().to_vec();
    assert!(!g.add_edge(0, 2));
    assert!(!g.add_edge(5, 5));
    assert!(!g.delete_edge(2, 0));
    assert_eq!(g.clear_edges(0, 9), 0);
    assert!(!g.delete_vertex(2));
    assert!(!g.move_vertex(7, 0.0, 0.0));
    assert!(!g.set_vertex_label(7, "x"));
    assert!(!g.set_vertex_color(7, Color::GREEN));
    assert_eq!(g.degree(9), 0);
    assert_eq!(g.in_degree(9), 0);
    assert_eq!(g.multiplicity(0, 9), 0);
    assert_eq!(g.matrix(), &before[..]);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.version(), ver);
}

#[test]
fn delete_vertex_drops_incident_edges_and_shifts() {
    let mut g = Graph::undirected();
    for i in 0..4 {
        g.add_vertex(i as f32 * 10.0, 0.0, format!("V{}", i + 1), Color::RED);
    }
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(3, 3);
    g.add_edge(0, 3);
    assert!(g.delete_vertex(1));
    assert_eq!(g.vertex_count(), 3);
    let labels: Vec<&str> = g.vertices().iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["V1", "V3", "V4"]);
    // (2,3) -> (1,2), (3,3) -> (2,2), (0,3) -> (0,2)
    assert_eq!(g.multiplicity(1, 2), 1);
    assert_eq!(g.multiplicity(2, 2), 1);
    assert_eq!(g.multiplicity(0, 2), 1);
    assert_eq!(g.multiplicity(0, 1), 0);
    assert_eq!(g.edge_count(), 3);
    for row in g.matrix() {
        assert_eq!(row.len(), 3);
    }
}

#[test]
fn stable_ids_survive_index_shift() {
    let mut g = Graph::undirected();
    g.add_vertex(0.0, 0.0, "V1", Color::RED);
    g.add_vertex(1.0, 0.0, "V2", Color::RED);
    g.add_vertex(2.0, 0.0, "V3", Color::RED);
    let gone = g.vertex_id(0).unwrap();
    let third = g.vertex_id(2).unwrap();
    assert!(g.delete_vertex(0));
    assert_eq!(g.index_of(gone), None);
    assert_eq!(g.index_of(third), Some(1));
    // New vertices never reuse an old id
    g.add_vertex(3.0, 0.0, "V4", Color::RED);
    assert_ne!(g.vertex_id(2), Some(gone));
}

#[test]
fn edge_pairs_visit_each_undirected_pair_once() {
    let mut g = Graph::undirected();
    for i in 0..3 {
        g.add_vertex(i as f32, 0.0, format!("V{}", i + 1), Color::RED);
    }
    g.add_edge(2, 0);
    g.add_edge(1, 1);
    g.add_edge(0, 1);
    g.add_edge(0, 1);
    assert_eq!(g.edge_pairs(), vec![(0, 1, 2), (0, 2, 1), (1, 1, 1)]);

    let mut d = Graph::directed();
    for i in 0..2 {
        d.add_vertex(i as f32, 0.0, format!("V{}", i + 1), Color::RED);
    }
    d.add_edge(1, 0);
    d.add_edge(0, 1);
    d.add_edge(0, 0);
    assert_eq!(d.edge_pairs(), vec![(0, 1, 1), (1, 0, 1), (0, 0, 1)]);
}

#[test]
fn attribute_edits() {
    let mut g = two_vertices(false);
    assert!(g.move_vertex(1, 50.0, 60.0));
    assert!(!g.move_vertex(1, f32::NAN, 0.0));
    assert_eq!(g.position(1).map(|p| (p.x, p.y)), Some((50.0, 60.0)));
    assert!(g.set_vertex_label(0, "hub"));
    assert!(g.set_vertex_color(0, Color::GREEN));
    assert_eq!(g.vertex(0).unwrap().label, "hub");
    assert_eq!(g.vertex(0).unwrap().color, Color::GREEN);
    g.clear();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn non_finite_vertex_is_rejected() {
    let mut g = two_vertices(false);
    let ver = g.version();
    assert_eq!(g.add_vertex(f32::NAN, 0.0, "V3", Color::RED), None);
    assert_eq!(g.add_vertex(0.0, f32::NEG_INFINITY, "V3", Color::RED), None);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.matrix().len(), 2);
    assert_eq!(g.version(), ver);
}
