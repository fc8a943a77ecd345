//! Graph assembler: folds an ordered edge list into a [`Graph`]

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::edge::{Edge, EdgeKind};
use crate::edge_list::OrderedEdgeList;
use crate::error::AssemblyError;
use crate::graph::Graph;

/// What to do with an edge whose canonical identity was already inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`AssemblyError::DuplicateEdge`]
    Reject,
    /// Keep the first occurrence, skip later ones
    Deduplicate,
    /// Keep every occurrence as a parallel edge
    Multigraph,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Deduplicate => write!(f, "deduplicate"),
            Self::Multigraph => write!(f, "multigraph"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "deduplicate" | "dedupe" => Ok(Self::Deduplicate),
            "multigraph" | "allow" => Ok(Self::Multigraph),
            other => Err(format!(
                "Unknown duplicate policy '{}' (expected reject, deduplicate or multigraph)",
                other
            )),
        }
    }
}

/// Whether edges from a vertex to itself are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfLoopPolicy {
    #[default]
    Allow,
    Reject,
}

impl fmt::Display for SelfLoopPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for SelfLoopPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "Unknown self-loop policy '{}' (expected allow or reject)",
                other
            )),
        }
    }
}

/// Builds a [`Graph`] in one fail-fast pass over an [`OrderedEdgeList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphAssembler {
    kind: EdgeKind,
    duplicates: DuplicatePolicy,
    self_loops: SelfLoopPolicy,
}

impl GraphAssembler {
    /// The duplicate policy has no default and must be chosen here
    pub fn new(kind: EdgeKind, duplicates: DuplicatePolicy) -> Self {
        Self {
            kind,
            duplicates,
            self_loops: SelfLoopPolicy::default(),
        }
    }

    pub fn with_self_loops(mut self, self_loops: SelfLoopPolicy) -> Self {
        self.self_loops = self_loops;
        self
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn self_loops(&self) -> SelfLoopPolicy {
        self.self_loops
    }

    pub fn assemble<V, E>(&self, list: &OrderedEdgeList<V, E>) -> Result<Graph<V, E>, AssemblyError>
    where
        V: Ord + Clone + fmt::Debug,
        E: Ord + Clone + fmt::Debug,
    {
        let mut graph = Graph::empty(self.kind);
        let mut seen: BTreeSet<&Edge<V, E>> = BTreeSet::new();
        let mut dropped = 0usize;

        for (index, edge) in list.iter().enumerate() {
            if edge.kind() != self.kind {
                return Err(AssemblyError::KindMismatch {
                    index,
                    expected: self.kind,
                    found: edge.kind(),
                });
            }

            if self.self_loops == SelfLoopPolicy::Reject && edge.is_self_loop() {
                return Err(AssemblyError::SelfLoop {
                    index,
                    vertex: format!("{:?}", edge.link().from),
                });
            }

            if self.duplicates != DuplicatePolicy::Multigraph && !seen.insert(edge) {
                if self.duplicates == DuplicatePolicy::Reject {
                    return Err(AssemblyError::DuplicateEdge {
                        index,
                        edge: format!("{:?}", edge.canonical()),
                    });
                }
                tracing::debug!(index, "Dropping duplicate edge {:?}", edge.canonical());
                dropped += 1;
                continue;
            }

            graph.insert_edge(edge.clone());
        }

        tracing::debug!(
            "Assembled {} graph: {} vertices, {} edges ({} duplicates dropped)",
            self.kind,
            graph.vertex_count(),
            graph.edge_count(),
            dropped
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(kind: EdgeKind, edges: &[(char, char, u8)]) -> OrderedEdgeList<char, u8> {
        OrderedEdgeList::from_edges(
            kind,
            edges
                .iter()
                .map(|&(a, b, w)| Edge::new(kind, a, b, w))
                .collect(),
        )
    }

    #[test]
    fn test_assemble_undirected() {
        let edges = list(EdgeKind::Undirected, &[('A', 'B', 5), ('B', 'C', 3)]);
        let graph = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Reject)
            .assemble(&edges)
            .unwrap();

        assert_eq!(graph.vertices(), &['A', 'B', 'C']);
        assert_eq!(graph.edges(), edges.edges());
        assert_eq!(graph.degree(&'B').unwrap(), 2);
        assert_eq!(graph.degree(&'A').unwrap(), 1);
    }

    #[test]
    fn test_reject_duplicate_in_reverse_orientation() {
        let edges = list(EdgeKind::Undirected, &[('A', 'B', 5), ('B', 'A', 5)]);
        let err = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Reject)
            .assemble(&edges)
            .unwrap_err();

        assert!(matches!(err, AssemblyError::DuplicateEdge { index: 1, .. }));
    }

    #[test]
    fn test_reverse_orientation_is_distinct_when_directed() {
        let edges = list(EdgeKind::Directed, &[('A', 'B', 5), ('B', 'A', 5)]);
        let graph = GraphAssembler::new(EdgeKind::Directed, DuplicatePolicy::Reject)
            .assemble(&edges)
            .unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_deduplicate_keeps_first() {
        let edges = list(
            EdgeKind::Undirected,
            &[('A', 'B', 5), ('B', 'C', 1), ('B', 'A', 5)],
        );
        let graph = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Deduplicate)
            .assemble(&edges)
            .unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges()[0].endpoints(), (&'A', &'B'));
        assert_eq!(graph.degree(&'A').unwrap(), 1);
    }

    #[test]
    fn test_multigraph_keeps_parallel_edges() {
        let edges = list(EdgeKind::Undirected, &[('A', 'B', 5), ('A', 'B', 5)]);
        let graph = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Multigraph)
            .assemble(&edges)
            .unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(&'A').unwrap(), 2);
        assert_eq!(graph.degree(&'B').unwrap(), 2);
    }

    #[test]
    fn test_same_endpoints_different_attribute_are_distinct() {
        let edges = list(EdgeKind::Undirected, &[('A', 'B', 5), ('A', 'B', 6)]);
        let graph = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Reject)
            .assemble(&edges)
            .unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_kind_mismatch() {
        let edges = list(EdgeKind::Directed, &[('A', 'B', 1)]);
        let err = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Reject)
            .assemble(&edges)
            .unwrap_err();

        assert_eq!(
            err,
            AssemblyError::KindMismatch {
                index: 0,
                expected: EdgeKind::Undirected,
                found: EdgeKind::Directed,
            }
        );
    }

    #[test]
    fn test_self_loop_policy() {
        let edges = list(EdgeKind::Undirected, &[('A', 'B', 1), ('C', 'C', 1)]);

        let graph = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Reject)
            .assemble(&edges)
            .unwrap();
        assert_eq!(graph.degree(&'C').unwrap(), 2);

        let err = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Reject)
            .with_self_loops(SelfLoopPolicy::Reject)
            .assemble(&edges)
            .unwrap_err();
        assert!(matches!(err, AssemblyError::SelfLoop { index: 1, .. }));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("dedupe".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Deduplicate));
        assert_eq!("Multigraph".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Multigraph));
        assert!("maybe".parse::<DuplicatePolicy>().is_err());
        assert_eq!("reject".parse::<SelfLoopPolicy>(), Ok(SelfLoopPolicy::Reject));
    }
}
