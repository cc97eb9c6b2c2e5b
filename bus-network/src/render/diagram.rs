//! Visualization description of the network.
//!
//! The diagram carries everything a plotting tool needs: the stops, the
//! weighted edges, and each bus's route edges with its display color. It can
//! be serialized as JSON or rendered as Graphviz DOT.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Bus, Minutes, Stop};
use crate::graph::Graph;

/// Error from writing a rendered diagram.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize diagram: {0}")]
    Json(#[from] serde_json::Error),
}

/// A weighted edge in the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramEdge {
    pub from: Stop,
    pub to: Stop,
    pub weight: Minutes,
}

/// One bus's route, highlighted in its color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusOverlay {
    pub name: String,
    pub color: String,
    pub edges: Vec<(Stop, Stop)>,
}

/// Node-and-edge layout input for a plotting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagram {
    pub title: String,
    pub nodes: Vec<Stop>,
    pub edges: Vec<DiagramEdge>,
    pub buses: Vec<BusOverlay>,
}

impl Diagram {
    /// Default title for the Detroit network.
    pub const DEFAULT_TITLE: &'static str = "Detroit Bus Network with Bus Assignments";

    /// Collect nodes, edges and bus overlays.
    ///
    /// Route legs that are not edges in the graph are left out of the
    /// overlay.
    pub fn from_graph(graph: &Graph, buses: &[Bus]) -> Self {
        let edges = graph
            .edges()
            .map(|(from, to, weight)| DiagramEdge {
                from: from.clone(),
                to: to.clone(),
                weight,
            })
            .collect();

        let buses = buses
            .iter()
            .map(|bus| {
                let edges = bus
                    .legs()
                    .filter(|(from, to)| {
                        let exists = graph.edge_weight(from.as_str(), to.as_str()).is_ok();
                        if !exists {
                            warn!(bus = %bus.name, %from, %to, "Route leg is not an edge, not drawn");
                        }
                        exists
                    })
                    .map(|(from, to)| (from.clone(), to.clone()))
                    .collect();

                BusOverlay {
                    name: bus.name.clone(),
                    color: bus.color.clone(),
                    edges,
                }
            })
            .collect();

        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            nodes: graph.stops().to_vec(),
            edges,
            buses,
        }
    }

    /// Replace the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Colors of every bus whose route uses `from -> to`, in bus order.
    pub fn edge_colors(&self, from: &Stop, to: &Stop) -> Vec<&str> {
        self.buses
            .iter()
            .filter(|bus| bus.edges.iter().any(|(f, t)| f == from && t == to))
            .map(|bus| bus.color.as_str())
            .collect()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Graphviz DOT source.
    ///
    /// Edges are labelled with their weight. Edges on a bus route take the
    /// bus color (several buses give a multi-color edge).
    pub fn to_dot(&self) -> String {
        let title = quote(&self.title);
        let mut dot = format!("digraph {title} {{\n    label={title};\n");
        dot.push_str(
            "    node [style=filled, fillcolor=lightblue, fontname=\"Helvetica-Bold\"];\n",
        );

        for node in &self.nodes {
            dot.push_str(&format!("    {};\n", quote(node.as_str())));
        }

        for edge in &self.edges {
            let colors = self.edge_colors(&edge.from, &edge.to);
            let style = if colors.is_empty() {
                String::new()
            } else {
                format!(", color={}, penwidth=2.0", quote(&colors.join(":")))
            };
            dot.push_str(&format!(
                "    {} -> {} [label=\"{}\"{}];\n",
                quote(edge.from.as_str()),
                quote(edge.to.as_str()),
                edge.weight,
                style
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Write DOT source to a file for an external renderer.
    pub fn write_dot(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_dot()).map_err(|source| RenderError::Io {
            path: path.display().to_string(),
            source,
        })?;

        debug!(path = %path.display(), nodes = self.nodes.len(), "Wrote diagram");
        Ok(())
    }
}

/// Quote a DOT identifier.
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
