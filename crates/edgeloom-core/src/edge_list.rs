//! Edge list builder: resource lines to an ordered, typed edge list

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::edge::{Edge, EdgeKind};
use crate::error::{EdgeParseFailure, LineFailure, TokenRole, ValueParseFailure};
use crate::record::{EdgeRecord, GrammarConfig, RecordParser};
use crate::value::ValueParser;

/// Edges in resource line order, all of one kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderedEdgeList<V, E> {
    kind: EdgeKind,
    edges: Vec<Edge<V, E>>,
}

impl<V, E> OrderedEdgeList<V, E> {
    pub fn new(kind: EdgeKind) -> Self {
        Self {
            kind,
            edges: Vec::new(),
        }
    }

    /// Wrap edges built elsewhere.
    ///
    /// Edges whose kind differs from `kind` are rejected later by the assembler.
    pub fn from_edges(kind: EdgeKind, edges: Vec<Edge<V, E>>) -> Self {
        Self { kind, edges }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn edges(&self) -> &[Edge<V, E>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<V, E>> {
        self.edges.iter()
    }

    pub fn into_edges(self) -> Vec<Edge<V, E>> {
        self.edges
    }

    fn push(&mut self, edge: Edge<V, E>) {
        self.edges.push(edge);
    }
}

impl<V: Ord, E: Ord> PartialEq for OrderedEdgeList<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.edges == other.edges
    }
}

impl<V: Ord, E: Ord> Eq for OrderedEdgeList<V, E> {}

impl<'a, V, E> IntoIterator for &'a OrderedEdgeList<V, E> {
    type Item = &'a Edge<V, E>;
    type IntoIter = std::slice::Iter<'a, Edge<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Builds an [`OrderedEdgeList`] from resource lines using injected value parsers.
///
/// The build is all-or-nothing: the first failing line (in line order) aborts
/// the whole pass and no partial list is returned.
pub struct EdgeListBuilder<V, E, PV, PE> {
    kind: EdgeKind,
    vertex_parser: PV,
    attribute_parser: PE,
    default_attribute: Option<E>,
    records: RecordParser,
    _vertex: PhantomData<fn() -> V>,
}

impl<V, E, PV, PE> EdgeListBuilder<V, E, PV, PE>
where
    E: Clone,
    PV: ValueParser<V>,
    PE: ValueParser<E>,
{
    pub fn new(kind: EdgeKind, vertex_parser: PV, attribute_parser: PE) -> Self {
        Self {
            kind,
            vertex_parser,
            attribute_parser,
            default_attribute: None,
            records: RecordParser::default(),
            _vertex: PhantomData,
        }
    }

    /// Attribute used for records with only two tokens
    pub fn with_default_attribute(mut self, attribute: E) -> Self {
        self.default_attribute = Some(attribute);
        self
    }

    pub fn with_grammar(mut self, grammar: GrammarConfig) -> Self {
        self.records = RecordParser::new(grammar);
        self
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Build the edge list from lines in resource order
    pub fn build<I, S>(&self, lines: I) -> Result<OrderedEdgeList<V, E>, EdgeParseFailure>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = OrderedEdgeList::new(self.kind);
        let mut skipped = 0usize;

        for (index, line) in lines.into_iter().enumerate() {
            let line_no = index + 1;
            let record = match self.records.parse_line(line.as_ref()) {
                Ok(Some(record)) => record,
                Ok(None) => {
                    tracing::trace!(line = line_no, "Skipping blank or comment line");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(EdgeParseFailure::new(line_no, e)),
            };

            let edge = self
                .edge_from_record(record)
                .map_err(|cause| EdgeParseFailure::new(line_no, cause))?;
            list.push(edge);
        }

        tracing::debug!(
            "Built {} edge list: {} edges, {} lines skipped",
            self.kind,
            list.len(),
            skipped
        );
        Ok(list)
    }

    /// Build the edge list from a block of text
    pub fn build_text(&self, text: &str) -> Result<OrderedEdgeList<V, E>, EdgeParseFailure> {
        self.build(crate::resource::split_lines(text))
    }

    fn edge_from_record(&self, record: EdgeRecord) -> Result<Edge<V, E>, LineFailure> {
        let from = parse_token(&self.vertex_parser, TokenRole::From, record.from)?;
        let to = parse_token(&self.vertex_parser, TokenRole::To, record.to)?;
        let attribute = match record.attribute {
            Some(token) => parse_token(&self.attribute_parser, TokenRole::Attribute, token)?,
            None => self
                .default_attribute
                .clone()
                .ok_or(LineFailure::MissingAttribute)?,
        };
        Ok(Edge::new(self.kind, from, to, attribute))
    }
}

fn parse_token<T, P: ValueParser<T>>(
    parser: &P,
    role: TokenRole,
    token: String,
) -> Result<T, ValueParseFailure> {
    parser
        .parse_value(&token)
        .map_err(|reason| ValueParseFailure {
            role,
            token,
            reason,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::record::Delimiter;
    use crate::value::{from_str, text, unit};

    #[test]
    fn test_build_preserves_line_order() {
        let builder = EdgeListBuilder::new(EdgeKind::Undirected, text(), from_str::<i64>());
        let list = builder.build(["A B 5", "", "# comment", "B C 3"]).unwrap();

        assert_eq!(list.kind(), EdgeKind::Undirected);
        assert_eq!(
            list.edges(),
            &[
                Edge::undirected("A".to_string(), "B".to_string(), 5),
                Edge::undirected("B".to_string(), "C".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_missing_attribute_uses_default() {
        let builder = EdgeListBuilder::new(EdgeKind::Directed, from_str::<u32>(), from_str::<u32>())
            .with_default_attribute(1);
        let list = builder.build_text("1 2\n2 3 7").unwrap();

        assert_eq!(list.edges()[0].attribute(), &1);
        assert_eq!(list.edges()[1].attribute(), &7);
    }

    #[test]
    fn test_missing_attribute_without_default_fails() {
        let builder = EdgeListBuilder::new(EdgeKind::Directed, text(), from_str::<u32>());
        let err = builder.build(["A B 1", "B C"]).unwrap_err();

        assert_eq!(err.line, 2);
        assert!(matches!(err.cause, LineFailure::MissingAttribute));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let builder = EdgeListBuilder::new(EdgeKind::Undirected, text(), unit())
            .with_default_attribute(());
        let err = builder.build(["A B", "# skipped", "C"]).unwrap_err();

        assert_eq!(err.line, 3);
        assert!(matches!(
            err.cause,
            LineFailure::Malformed(RecordError::TooFewTokens { found: 1, .. })
        ));
    }

    #[test]
    fn test_value_failure_names_role_and_token() {
        let builder = EdgeListBuilder::new(EdgeKind::Undirected, from_str::<i32>(), from_str::<i32>());
        let err = builder.build(["1 2 3", "4 x 6"]).unwrap_err();

        assert_eq!(err.line, 2);
        match err.cause {
            LineFailure::Value(failure) => {
                assert_eq!(failure.role, TokenRole::To);
                assert_eq!(failure.token, "x");
            }
            other => panic!("unexpected cause: {:?}", other),
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let builder = EdgeListBuilder::new(EdgeKind::Undirected, text(), from_str::<i32>());
        let err = builder
            .build(["A B 1", "B C 2", "oops", "C D 3", "D E 4", "E F 5", "F G bad"])
            .unwrap_err();
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_grammar_is_applied() {
        let grammar = GrammarConfig::default().with_delimiter(Delimiter::Char(';'));
        let builder = EdgeListBuilder::new(EdgeKind::Undirected, text(), text()).with_grammar(grammar);
        let list = builder.build(["Los Angeles;San Diego;I-5"]).unwrap();

        assert_eq!(list.edges()[0].endpoints(), (&"Los Angeles".to_string(), &"San Diego".to_string()));
        assert_eq!(list.edges()[0].attribute(), "I-5");
    }

    #[test]
    fn test_byte_order_mark_does_not_change_vertex_identity() {
        let builder = EdgeListBuilder::new(EdgeKind::Undirected, text(), from_str::<i64>());
        let list = builder.build_text("\u{feff}A B 5\nB A 5").unwrap();

        assert_eq!(list.edges()[0].endpoints().0, "A");
        assert_eq!(list.edges()[0], list.edges()[1]);
    }

    #[test]
    fn test_long_comment_line_is_skipped() {
        let builder = EdgeListBuilder::new(EdgeKind::Undirected, text(), from_str::<i64>());
        let comment = format!("# {}", "x".repeat(70_000));
        let list = builder.build([comment.as_str(), "A B 1"]).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_empty_resource_gives_empty_list() {
        let builder = EdgeListBuilder::new(EdgeKind::Undirected, text(), text());
        let list = builder.build(["", "   ", "# only comments"]).unwrap();
        assert!(list.is_empty());
    }
}
