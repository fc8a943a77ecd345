//! Entry point composing loading, edge list building and graph assembly
//!
//! [`GraphBuilder`] offers two tiers: the diagnostic methods return the full
//! [`Error`](crate::Error), the `create_*` methods collapse any failure into
//! `None` for callers that only need success or failure.

use std::fmt;
use std::marker::PhantomData;

use crate::assembler::{DuplicatePolicy, GraphAssembler, SelfLoopPolicy};
use crate::edge::EdgeKind;
use crate::edge_list::{EdgeListBuilder, OrderedEdgeList};
use crate::error::{BoxError, Result, TokenRole, ValueParseFailure};
use crate::graph::Graph;
use crate::record::GrammarConfig;
use crate::resource::ResourceLoader;
use crate::value::ValueParser;

/// Lends a parser owned by the builder to a per-call [`EdgeListBuilder`]
struct Borrowed<'a, P>(&'a P);

impl<T, P: ValueParser<T>> ValueParser<T> for Borrowed<'_, P> {
    fn parse_value(&self, token: &str) -> std::result::Result<T, BoxError> {
        self.0.parse_value(token)
    }
}

/// Builds graphs of `V` vertices and `E` attributes from named resources
pub struct GraphBuilder<V, E, PV, PE, L> {
    loader: L,
    vertex_parser: PV,
    attribute_parser: PE,
    default_attribute: Option<E>,
    grammar: GrammarConfig,
    duplicates: DuplicatePolicy,
    self_loops: SelfLoopPolicy,
    _vertex: PhantomData<fn() -> V>,
}

impl<V, E, PV, PE, L> GraphBuilder<V, E, PV, PE, L>
where
    V: Ord + Clone + fmt::Debug,
    E: Ord + Clone + fmt::Debug,
    PV: ValueParser<V>,
    PE: ValueParser<E>,
    L: ResourceLoader,
{
    pub fn new(
        loader: L,
        vertex_parser: PV,
        attribute_parser: PE,
        duplicates: DuplicatePolicy,
    ) -> Self {
        Self {
            loader,
            vertex_parser,
            attribute_parser,
            default_attribute: None,
            grammar: GrammarConfig::default(),
            duplicates,
            self_loops: SelfLoopPolicy::default(),
            _vertex: PhantomData,
        }
    }

    pub fn with_default_attribute(mut self, attribute: E) -> Self {
        self.default_attribute = Some(attribute);
        self
    }

    pub fn with_grammar(mut self, grammar: GrammarConfig) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn with_self_loops(mut self, self_loops: SelfLoopPolicy) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Parse a standalone vertex token, e.g. one named in a query
    pub fn parse_vertex(&self, token: &str) -> std::result::Result<V, ValueParseFailure> {
        self.vertex_parser
            .parse_value(token)
            .map_err(|reason| ValueParseFailure {
                role: TokenRole::Vertex,
                token: token.to_string(),
                reason,
            })
    }

    fn edge_list_builder(
        &self,
        kind: EdgeKind,
    ) -> EdgeListBuilder<V, E, Borrowed<'_, PV>, Borrowed<'_, PE>> {
        let builder = EdgeListBuilder::new(
            kind,
            Borrowed(&self.vertex_parser),
            Borrowed(&self.attribute_parser),
        )
        .with_grammar(self.grammar.clone());
        match &self.default_attribute {
            Some(attribute) => builder.with_default_attribute(attribute.clone()),
            None => builder,
        }
    }

    fn assembler(&self, kind: EdgeKind) -> GraphAssembler {
        GraphAssembler::new(kind, self.duplicates).with_self_loops(self.self_loops)
    }

    /// Parse already-loaded lines into an edge list
    pub fn parse_lines<I, S>(&self, lines: I, kind: EdgeKind) -> Result<OrderedEdgeList<V, E>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.edge_list_builder(kind).build(lines)?)
    }

    /// Load a resource and parse it into an edge list
    pub fn load_edge_list(&self, resource: &str, kind: EdgeKind) -> Result<OrderedEdgeList<V, E>> {
        let lines = self.loader.load_lines(resource)?;
        tracing::debug!("Loaded {} lines from {}", lines.len(), resource);
        self.parse_lines(lines, kind)
    }

    /// Assemble a graph of the list's kind
    pub fn assemble(&self, list: &OrderedEdgeList<V, E>) -> Result<Graph<V, E>> {
        Ok(self.assembler(list.kind()).assemble(list)?)
    }

    /// Load, parse and assemble in one call
    pub fn build(&self, resource: &str, kind: EdgeKind) -> Result<Graph<V, E>> {
        let list = self.load_edge_list(resource, kind)?;
        self.assemble(&list)
    }

    /// Like [`load_edge_list`](Self::load_edge_list), with failures collapsed to `None`
    pub fn create_edge_list(&self, resource: &str, kind: EdgeKind) -> Option<OrderedEdgeList<V, E>> {
        self.load_edge_list(resource, kind)
            .map_err(|e| tracing::warn!("Cannot build edge list from {}: {}", resource, e))
            .ok()
    }

    pub fn create_undirected_edge_list(&self, resource: &str) -> Option<OrderedEdgeList<V, E>> {
        self.create_edge_list(resource, EdgeKind::Undirected)
    }

    pub fn create_directed_edge_list(&self, resource: &str) -> Option<OrderedEdgeList<V, E>> {
        self.create_edge_list(resource, EdgeKind::Directed)
    }

    /// Assemble a graph from an optional edge list; absent in, absent out
    pub fn create_graph(&self, list: Option<OrderedEdgeList<V, E>>) -> Option<Graph<V, E>> {
        let list = list?;
        self.assemble(&list)
            .map_err(|e| tracing::warn!("Cannot assemble graph: {}", e))
            .ok()
    }
}
