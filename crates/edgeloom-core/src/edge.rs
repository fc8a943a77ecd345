//! Edge types: directed and undirected links between two vertices

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Whether edges run one way or both ways
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Directed,
    Undirected,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => write!(f, "directed"),
            Self::Undirected => write!(f, "undirected"),
        }
    }
}

impl FromStr for EdgeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(Self::Directed),
            "undirected" => Ok(Self::Undirected),
            other => Err(format!(
                "Unknown edge kind '{}' (expected directed or undirected)",
                other
            )),
        }
    }
}

/// The payload of an edge: two endpoints and an attribute
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Link<V, E> {
    pub from: V,
    pub to: V,
    pub attribute: E,
}

impl<V, E> Link<V, E> {
    pub fn new(from: V, to: V, attribute: E) -> Self {
        Self { from, to, attribute }
    }
}

/// An edge between two vertices
///
/// Equality, ordering and hashing go through [`Edge::canonical`], so the
/// undirected edges `(a, b)` and `(b, a)` with the same attribute are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Edge<V, E> {
    Directed(Link<V, E>),
    Undirected(Link<V, E>),
}

impl<V, E> Edge<V, E> {
    /// Create an edge of the given kind
    pub fn new(kind: EdgeKind, from: V, to: V, attribute: E) -> Self {
        let link = Link::new(from, to, attribute);
        match kind {
            EdgeKind::Directed => Self::Directed(link),
            EdgeKind::Undirected => Self::Undirected(link),
        }
    }

    pub fn directed(from: V, to: V, attribute: E) -> Self {
        Self::new(EdgeKind::Directed, from, to, attribute)
    }

    pub fn undirected(from: V, to: V, attribute: E) -> Self {
        Self::new(EdgeKind::Undirected, from, to, attribute)
    }

    pub fn kind(&self) -> EdgeKind {
        match self {
            Self::Directed(_) => EdgeKind::Directed,
            Self::Undirected(_) => EdgeKind::Undirected,
        }
    }

    pub fn link(&self) -> &Link<V, E> {
        match self {
            Self::Directed(link) | Self::Undirected(link) => link,
        }
    }

    pub fn into_link(self) -> Link<V, E> {
        match self {
            Self::Directed(link) | Self::Undirected(link) => link,
        }
    }

    /// Endpoints in declared order
    pub fn endpoints(&self) -> (&V, &V) {
        let link = self.link();
        (&link.from, &link.to)
    }

    pub fn attribute(&self) -> &E {
        &self.link().attribute
    }
}

impl<V: Ord, E> Edge<V, E> {
    /// Endpoints in canonical order: smaller first for undirected edges,
    /// declared order for directed ones.
    pub fn canonical_endpoints(&self) -> (&V, &V) {
        match self {
            Self::Directed(link) => (&link.from, &link.to),
            Self::Undirected(link) if link.to < link.from => (&link.to, &link.from),
            Self::Undirected(link) => (&link.from, &link.to),
        }
    }

    /// Identity of the edge for comparison and duplicate detection
    pub fn canonical(&self) -> (EdgeKind, &V, &V, &E) {
        let (lo, hi) = self.canonical_endpoints();
        (self.kind(), lo, hi, self.attribute())
    }

    pub fn is_self_loop(&self) -> bool {
        let (from, to) = self.endpoints();
        from == to
    }

    pub fn touches(&self, vertex: &V) -> bool {
        let (from, to) = self.endpoints();
        from == vertex || to == vertex
    }

    /// The endpoint opposite `vertex`, or `None` if the edge does not touch it
    pub fn other(&self, vertex: &V) -> Option<&V> {
        let (from, to) = self.endpoints();
        if from == vertex {
            Some(to)
        } else if to == vertex {
            Some(from)
        } else {
            None
        }
    }
}

impl<V: Ord, E: Ord> PartialEq for Edge<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl<V: Ord, E: Ord> Eq for Edge<V, E> {}

impl<V: Ord, E: Ord> PartialOrd for Edge<V, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, E: Ord> Ord for Edge<V, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl<V: Ord + Hash, E: Hash> Hash for Edge<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (kind, lo, hi, attribute) = self.canonical();
        kind.hash(state);
        lo.hash(state);
        hi.hash(state);
        attribute.hash(state);
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Edge<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self {
            Self::Directed(_) => "->",
            Self::Undirected(_) => "--",
        };
        let link = self.link();
        let attribute = link.attribute.to_string();
        if attribute.is_empty() {
            write!(f, "{} {} {}", link.from, arrow, link.to)
        } else {
            write!(f, "{} {} {} [{}]", link.from, arrow, link.to, attribute)
        }
    }
}
