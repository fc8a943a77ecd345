//! End-to-end construction properties: resource text to edge list to graph

use std::collections::BTreeSet;

use edgeloom_core::value::{from_str, text};
use edgeloom_core::{
    DuplicatePolicy, Edge, EdgeKind, EdgeListBuilder, Error, GraphAssembler, GraphBuilder,
    InMemoryLoader, LineFailure, RecordError,
};

const WEIGHTED: &str = "\
# tiny weighted graph
A B 5
B C 3

C D 7
D A 1
";

fn undirected_builder() -> GraphBuilder<
    String,
    i64,
    impl edgeloom_core::ValueParser<String>,
    impl edgeloom_core::ValueParser<i64>,
    InMemoryLoader,
> {
    let loader = InMemoryLoader::new()
        .with_resource("/weighted.graph", WEIGHTED)
        .with_resource("/scenario.graph", "A B 5\nB C 3\n")
        .with_resource("/single.graph", "A\n")
        .with_resource("/empty.graph", "\n   \n# nothing here\n// nor here\n")
        .with_resource(
            "/late-failures.graph",
            "A B 1\nB C 2\nC\nC D 4\nD E 5\nE F 6\nF G x\n",
        );
    GraphBuilder::new(loader, text(), from_str::<i64>(), DuplicatePolicy::Reject)
}

#[test]
fn test_scenario_two_weighted_edges() {
    let builder = undirected_builder();
    let graph = builder.build("/scenario.graph", EdgeKind::Undirected).unwrap();

    assert_eq!(graph.vertices(), &["A", "B", "C"]);
    assert_eq!(
        graph.edges(),
        &[
            Edge::undirected("A".to_string(), "B".to_string(), 5),
            Edge::undirected("B".to_string(), "C".to_string(), 3),
        ]
    );
    assert_eq!(graph.degree(&"B".to_string()).unwrap(), 2);
}

#[test]
fn test_scenario_single_token_line() {
    let builder = undirected_builder();

    let err = builder
        .load_edge_list("/single.graph", EdgeKind::Undirected)
        .unwrap_err();
    match err {
        Error::EdgeParse(failure) => {
            assert_eq!(failure.line, 1);
            assert!(matches!(
                failure.cause,
                LineFailure::Malformed(RecordError::TooFewTokens { found: 1, .. })
            ));
        }
        other => panic!("unexpected error: {}", other),
    }

    let graph = builder.create_graph(builder.create_undirected_edge_list("/single.graph"));
    assert!(graph.is_none());
}

#[test]
fn test_scenario_empty_resource() {
    let builder = undirected_builder();
    let list = builder
        .load_edge_list("/empty.graph", EdgeKind::Undirected)
        .unwrap();
    assert!(list.is_empty());

    let graph = builder.assemble(&list).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_empty());
}

#[test]
fn test_every_accepted_line_maps_to_one_edge() {
    let builder = undirected_builder();
    let list = builder
        .load_edge_list("/weighted.graph", EdgeKind::Undirected)
        .unwrap();
    let graph = builder.assemble(&list).unwrap();

    assert_eq!(list.len(), 4);
    assert_eq!(graph.edges(), list.edges());
}

#[test]
fn test_vertex_count_matches_distinct_tokens() {
    let builder = undirected_builder();
    let graph = builder.build("/weighted.graph", EdgeKind::Undirected).unwrap();

    let distinct: BTreeSet<&str> = WEIGHTED
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().take(2))
        .collect();
    assert_eq!(graph.vertex_count(), distinct.len());
}

#[test]
fn test_undirected_symmetry() {
    let builder = undirected_builder();
    let graph = builder.build("/weighted.graph", EdgeKind::Undirected).unwrap();

    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        let at_a = graph.incident_edges(a).unwrap().contains(&edge);
        let at_b = graph.incident_edges(b).unwrap().contains(&edge);
        assert!(at_a && at_b, "edge {} missing from an endpoint", edge);
    }
}

#[test]
fn test_parsing_is_deterministic() {
    let builder = EdgeListBuilder::new(EdgeKind::Undirected, text(), from_str::<i64>());
    let first = builder.build_text(WEIGHTED).unwrap();
    let second = builder.build_text(WEIGHTED).unwrap();

    assert_eq!(first, second);
    let order = |list: &edgeloom_core::OrderedEdgeList<String, i64>| {
        list.iter()
            .map(|edge| edge.endpoints().0.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(order(&first), order(&second));
}

#[test]
fn test_first_failure_in_line_order_is_reported() {
    let builder = undirected_builder();
    let err = builder
        .load_edge_list("/late-failures.graph", EdgeKind::Undirected)
        .unwrap_err();

    match err {
        Error::EdgeParse(failure) => assert_eq!(failure.line, 3),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_directed_graph_from_same_resource() {
    let builder = undirected_builder();
    let graph = builder.build("/weighted.graph", EdgeKind::Directed).unwrap();

    let a = "A".to_string();
    assert_eq!(graph.kind(), EdgeKind::Directed);
    assert_eq!(graph.degree(&a).unwrap(), 1);
    assert_eq!(graph.in_degree(&a).unwrap(), 1);
    assert_eq!(graph.neighbors(&a).unwrap(), vec![&"B".to_string()]);
}

#[test]
fn test_assembler_kind_must_match_list() {
    let list = EdgeListBuilder::new(EdgeKind::Directed, text(), from_str::<i64>())
        .build(["A B 1"])
        .unwrap();
    let result = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Multigraph).assemble(&list);
    assert!(result.is_err());
}
