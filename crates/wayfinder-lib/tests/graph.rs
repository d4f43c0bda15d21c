mod common;

use serde_json::json;
use wayfinder_lib::{build_graph, find_path, EdgeRecord, Graph, GraphDocument, Node};

#[test]
fn edges_to_missing_nodes_are_dropped_without_failing() {
    let graph = build_graph(
        vec![Node::new("a", 0.0, 0.0), Node::new("b", 2.0, 0.0)],
        &[
            EdgeRecord::new("a", "b"),
            EdgeRecord::new("a", "deleted"),
            EdgeRecord::new("deleted", "b"),
        ],
    );

    assert_eq!(graph.edge_count(), 1);
    for id in ["a", "b"] {
        assert!(graph
            .neighbours(id)
            .iter()
            .all(|edge| graph.node_at(edge.target).id != "deleted"));
    }
    assert!(graph.neighbours("deleted").is_empty());
    assert!(!graph.contains("deleted"));
}

#[test]
fn building_twice_gives_identical_routes() {
    let document = common::connectors_document();
    let first = Graph::from_document(&document);
    let second = Graph::from_document(&document);

    assert_eq!(first.nodes(), second.nodes());
    for a in first.nodes() {
        for b in first.nodes() {
            assert_eq!(
                find_path(&first, &a.id, &b.id),
                find_path(&second, &a.id, &b.id),
                "{} -> {}",
                a.id,
                b.id
            );
        }
    }
}

#[test]
fn fixture_connector_graph_shape() {
    let graph = Graph::from_document(&common::connectors_document());
    assert_eq!(graph.len(), 8);
    assert_eq!(graph.edge_count(), 7);

    let stairs = graph
        .neighbours("c2")
        .iter()
        .find(|edge| graph.node_at(edge.target).id == "c5")
        .expect("c2-c5 edge");
    assert_eq!(stairs.cost, 75.0);

    let corridor = graph
        .neighbours("c1")
        .iter()
        .find(|edge| graph.node_at(edge.target).id == "c2")
        .expect("c1-c2 edge");
    assert_eq!(corridor.cost, 50.0);
}

#[test]
fn feature_document_keeps_elevation() {
    let graph = Graph::from_document(&common::features_document());
    assert_eq!(graph.node("f-observatory").and_then(|n| n.z), Some(12.0));
    assert_eq!(graph.node("f-library").and_then(|n| n.z), None);
}

#[test]
fn document_with_weight_null_uses_distance() {
    let document: GraphDocument = serde_json::from_value(json!({
        "nodes": [
            { "id": "a", "x": 0, "y": 0 },
            { "id": "b", "x": 6, "y": 8 }
        ],
        "edges": [["a", "b", null]]
    }))
    .expect("document parses");

    let graph = Graph::from_document(&document);
    assert_eq!(graph.neighbours("a")[0].cost, 10.0);
}
