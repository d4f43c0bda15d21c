mod common;

use common::ids;
use wayfinder_lib::{build_graph, Graph, Node, Router};

fn poi_features() -> Graph {
    build_graph(
        vec![Node::new("P1", 0.0, 0.0), Node::new("P2", 100.0, 0.0)],
        &[],
    )
}

fn campus_router() -> Router {
    Router::new(
        Graph::from_document(&common::features_document()),
        Graph::from_document(&common::connectors_document()),
    )
}

#[test]
fn lone_connector_is_shared_by_both_ends() {
    let connectors = build_graph(vec![Node::new("X", 50.0, 0.0)], &[]);
    let router = Router::new(poi_features(), connectors);

    let route = router.find_path("P1", "P2").expect("route exists");
    assert_eq!(ids(&route), vec!["P1", "X", "P2"]);
    assert_eq!(route[1], Node::new("X", 50.0, 0.0));
}

#[test]
fn absent_connector_graph_returns_direct_segment() {
    let router = Router::features_only(poi_features());
    let route = router.find_path("P1", "P2").expect("route exists");
    assert_eq!(route, vec![Node::new("P1", 0.0, 0.0), Node::new("P2", 100.0, 0.0)]);
}

#[test]
fn library_to_cafe_follows_corridor() {
    let route = campus_router()
        .find_path("f-library", "f-cafe")
        .expect("route exists");
    assert_eq!(ids(&route), vec!["f-library", "c1", "c2", "c3", "f-cafe"]);
}

#[test]
fn expensive_stairs_are_avoided() {
    let route = campus_router()
        .find_path("f-library", "f-gym")
        .expect("route exists");
    assert_eq!(
        ids(&route),
        vec!["f-library", "c1", "c2", "c3", "c4", "f-gym"]
    );
}

#[test]
fn stairs_are_taken_when_shorter() {
    let route = campus_router()
        .find_path("f-library", "f-lab")
        .expect("route exists");
    assert_eq!(ids(&route), vec!["f-library", "c1", "c2", "c5", "c6", "f-lab"]);
}

#[test]
fn disconnected_island_has_no_route() {
    let router = campus_router();
    assert!(router.find_path("f-library", "f-observatory").is_none());
    assert_eq!(
        router.snap("f-observatory").map(|n| n.id.as_str()),
        Some("i1"),
        "equidistant connectors resolve to the first in the document"
    );
}

#[test]
fn routes_always_start_and_end_at_features() {
    let router = campus_router();
    let features = ["f-library", "f-cafe", "f-gym", "f-lab"];
    for origin in features {
        for destination in features {
            let route = router.find_path(origin, destination).expect("route exists");
            assert!(route.len() >= 3);
            assert_eq!(route.first().map(|n| n.id.as_str()), Some(origin));
            assert_eq!(route.last().map(|n| n.id.as_str()), Some(destination));
        }
    }
}

#[test]
fn connector_ids_are_not_valid_endpoints() {
    let router = campus_router();
    assert!(router.find_path("c1", "f-cafe").is_none());
    assert!(router.find_path("f-cafe", "c3").is_none());
}

#[test]
fn router_is_shareable_across_threads() {
    let router = std::sync::Arc::new(campus_router());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let router = std::sync::Arc::clone(&router);
            std::thread::spawn(move || router.find_path("f-library", "f-gym").map(|r| r.len()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), Some(6));
    }
}
