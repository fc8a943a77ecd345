//! Graph data structure built by the assembler
//!
//! A [`Graph`] owns its edges in an arena addressed by [`EdgeId`]; vertex
//! incidence lists hold ids, so an undirected edge listed under both of its
//! endpoints is one shared edge.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::edge::{Edge, EdgeKind};
use crate::error::UnknownVertex;

/// Position of an edge in the graph's insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Immutable graph of `V` vertices and `E`-attributed edges
///
/// Degree convention: in an undirected graph a self-loop is listed twice in its
/// vertex's incident edges and therefore counts twice toward its degree. In a
/// directed graph incident edges are the outgoing edges; incoming edges are
/// indexed separately.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    kind: EdgeKind,
    vertices: Vec<V>,
    index: BTreeMap<V, usize>,
    edges: Vec<Edge<V, E>>,
    incident: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
}

impl<V, E> Graph<V, E> {
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Vertices in first-seen order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Edges in insertion order; each undirected edge appears once
    pub fn edges(&self) -> &[Edge<V, E>] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<V, E>> {
        self.edges.get(id.0)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V, E> Graph<V, E>
where
    V: Ord + Clone + fmt::Debug,
{
    pub(crate) fn empty(kind: EdgeKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            index: BTreeMap::new(),
            edges: Vec::new(),
            incident: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Insert a vertex if absent and return its slot
    pub(crate) fn insert_vertex(&mut self, vertex: &V) -> usize {
        if let Some(&slot) = self.index.get(vertex) {
            return slot;
        }
        let slot = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.index.insert(vertex.clone(), slot);
        self.incident.push(Vec::new());
        self.incoming.push(Vec::new());
        slot
    }

    /// Append an edge, registering its endpoints and incidence
    pub(crate) fn insert_edge(&mut self, edge: Edge<V, E>) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let (from, to) = edge.endpoints();
        let from = self.insert_vertex(from);
        let to = self.insert_vertex(to);

        match edge {
            Edge::Undirected(_) => {
                self.incident[from].push(id);
                self.incident[to].push(id);
            }
            Edge::Directed(_) => {
                self.incident[from].push(id);
                self.incoming[to].push(id);
            }
        }

        self.edges.push(edge);
        id
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn slot(&self, vertex: &V) -> Result<usize, UnknownVertex> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| UnknownVertex::of(vertex))
    }

    fn resolve(&self, ids: &[EdgeId]) -> Vec<&Edge<V, E>> {
        ids.iter().map(|id| &self.edges[id.0]).collect()
    }

    /// Edge ids incident to `vertex` (outgoing for directed graphs)
    pub fn incident_edge_ids(&self, vertex: &V) -> Result<&[EdgeId], UnknownVertex> {
        let slot = self.slot(vertex)?;
        Ok(&self.incident[slot])
    }

    /// Edges incident to `vertex` (outgoing for directed graphs)
    pub fn incident_edges(&self, vertex: &V) -> Result<Vec<&Edge<V, E>>, UnknownVertex> {
        Ok(self.resolve(self.incident_edge_ids(vertex)?))
    }

    /// Number of incident edges; equals `incident_edges(vertex).len()`
    pub fn degree(&self, vertex: &V) -> Result<usize, UnknownVertex> {
        Ok(self.incident_edge_ids(vertex)?.len())
    }

    /// Edges arriving at `vertex`. For undirected graphs this is the incident set.
    pub fn incoming_edges(&self, vertex: &V) -> Result<Vec<&Edge<V, E>>, UnknownVertex> {
        let slot = self.slot(vertex)?;
        match self.kind {
            EdgeKind::Directed => Ok(self.resolve(&self.incoming[slot])),
            EdgeKind::Undirected => Ok(self.resolve(&self.incident[slot])),
        }
    }

    pub fn in_degree(&self, vertex: &V) -> Result<usize, UnknownVertex> {
        let slot = self.slot(vertex)?;
        match self.kind {
            EdgeKind::Directed => Ok(self.incoming[slot].len()),
            EdgeKind::Undirected => Ok(self.incident[slot].len()),
        }
    }

    /// Opposite endpoints of the incident edges, in incidence order
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<&V>, UnknownVertex> {
        let edges = self.incident_edges(vertex)?;
        Ok(edges.into_iter().filter_map(|edge| edge.other(vertex)).collect())
    }

    /// Serializable view of the graph with per-vertex degrees
    pub fn summary(&self) -> GraphSummary<'_, V, E> {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(slot, vertex)| VertexSummary {
                vertex,
                degree: self.incident[slot].len(),
                in_degree: match self.kind {
                    EdgeKind::Directed => self.incoming[slot].len(),
                    EdgeKind::Undirected => self.incident[slot].len(),
                },
            })
            .collect();

        GraphSummary {
            kind: self.kind,
            vertex_count: self.vertices.len(),
            edge_count: self.edges.len(),
            vertices,
            edges: &self.edges,
        }
    }
}

/// Per-vertex entry of a [`GraphSummary`]
#[derive(Debug, Clone, Serialize)]
pub struct VertexSummary<'a, V> {
    pub vertex: &'a V,
    pub degree: usize,
    pub in_degree: usize,
}

/// Borrowed, serializable snapshot of a [`Graph`]
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary<'a, V, E> {
    pub kind: EdgeKind,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<VertexSummary<'a, V>>,
    pub edges: &'a [Edge<V, E>],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(edges: &[(&'static str, &'static str, i32)]) -> Graph<&'static str, i32> {
        let mut graph = Graph::empty(EdgeKind::Undirected);
        for &(a, b, w) in edges {
            graph.insert_edge(Edge::undirected(a, b, w));
        }
        graph
    }

    #[test]
    fn test_vertices_in_first_seen_order() {
        let graph = undirected(&[("B", "A", 1), ("C", "A", 2), ("D", "C", 3)]);
        assert_eq!(graph.vertices(), &["B", "A", "C", "D"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_undirected_edge_shared_by_both_endpoints() {
        let graph = undirected(&[("A", "B", 5)]);
        assert_eq!(graph.incident_edge_ids(&"A").unwrap(), &[EdgeId(0)]);
        assert_eq!(graph.incident_edge_ids(&"B").unwrap(), &[EdgeId(0)]);
        assert_eq!(graph.neighbors(&"A").unwrap(), vec![&"B"]);
        assert_eq!(graph.neighbors(&"B").unwrap(), vec![&"A"]);
    }

    #[test]
    fn test_self_loop_counts_twice_when_undirected() {
        let graph = undirected(&[("A", "A", 1), ("A", "B", 2)]);
        assert_eq!(graph.degree(&"A").unwrap(), 3);
        assert_eq!(graph.incident_edges(&"A").unwrap().len(), 3);
        assert_eq!(graph.degree(&"B").unwrap(), 1);
    }

    #[test]
    fn test_directed_incidence_split() {
        let mut graph = Graph::empty(EdgeKind::Directed);
        graph.insert_edge(Edge::directed(1, 2, ()));
        graph.insert_edge(Edge::directed(3, 2, ()));
        graph.insert_edge(Edge::directed(2, 1, ()));

        assert_eq!(graph.degree(&2).unwrap(), 1);
        assert_eq!(graph.in_degree(&2).unwrap(), 2);
        assert_eq!(graph.neighbors(&2).unwrap(), vec![&1]);
        let incoming: Vec<_> = graph
            .incoming_edges(&2)
            .unwrap()
            .into_iter()
            .map(|e| *e.endpoints().0)
            .collect();
        assert_eq!(incoming, vec![1, 3]);
    }

    #[test]
    fn test_unknown_vertex() {
        let graph = undirected(&[("A", "B", 5)]);
        assert!(!graph.contains_vertex(&"Z"));
        assert_eq!(
            graph.degree(&"Z").unwrap_err(),
            UnknownVertex("\"Z\"".to_string())
        );
        assert!(graph.incident_edges(&"Z").is_err());
        assert!(graph.neighbors(&"Z").is_err());
    }

    #[test]
    fn test_summary_serializes_degrees() {
        let graph = undirected(&[("A", "B", 5), ("B", "C", 3)]);
        let json = serde_json::to_value(graph.summary()).unwrap();

        assert_eq!(json["kind"], "undirected");
        assert_eq!(json["vertex_count"], 3);
        assert_eq!(json["vertices"][1]["vertex"], "B");
        assert_eq!(json["vertices"][1]["degree"], 2);
        assert_eq!(json["edges"][1]["attribute"], 3);
    }
}
