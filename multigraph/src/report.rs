//! Text and JSON dump of the graph: labelled multiplicity matrix, counts and
//! per-vertex degree.

use crate::Graph;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DegreeRow {
    pub index: usize,
    pub label: String,
    pub degree: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphReport {
    pub directed: bool,
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<u32>>,
    pub vertex_count: usize,
    pub edge_count: u32,
    pub degrees: Vec<DegreeRow>,
}

impl GraphReport {
    pub fn from_graph(g: &Graph) -> Self {
        let labels: Vec<String> = g.vertices.iter().map(|v| v.label.clone()).collect();
        let degrees = labels
            .iter()
            .enumerate()
            .map(|(index, label)| DegreeRow { index, label: label.clone(), degree: g.degree(index) })
            .collect();
        GraphReport {
            directed: g.directed,
            labels,
            matrix: g.matrix.clone(),
            vertex_count: g.vertex_count(),
            edge_count: g.edge_count(),
            degrees,
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency Matrix:")?;
        write!(f, "{:10}", "")?;
        for label in &self.labels {
            write!(f, "{:<10}", label)?;
        }
        writeln!(f)?;
        for (label, row) in self.labels.iter().zip(&self.matrix) {
            write!(f, "{:<10}", label)?;
            for m in row {
                write!(f, "{:<10}", m)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "# vertices: {}", self.vertex_count)?;
        writeln!(f, "# edges: {}", self.edge_count)?;
        for d in &self.degrees {
            writeln!(f, "deg(V{} \"{}\"): {}", d.index, d.label, d.degree)?;
        }
        Ok(())
    }
}
