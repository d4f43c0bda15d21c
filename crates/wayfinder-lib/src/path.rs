use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::geometry::distance;
use crate::graph::{Graph, NodeIndex};

/// Find the cheapest path between two node ids using A* search.
///
/// The heuristic is the straight-line distance to the goal. Returns `None`
/// when either id is missing or when no edges connect them, and `[start]`
/// when `start == goal`. When two frontier entries share the same priority
/// the one with the lexicographically smaller id is expanded first, so
/// results are reproducible across runs.
pub fn find_path(graph: &Graph, start: &str, goal: &str) -> Option<Vec<String>> {
    let start = graph.index_of(start)?;
    let goal = graph.index_of(goal)?;
    let route = find_path_indices(graph, start, goal)?;
    Some(
        route
            .into_iter()
            .map(|index| graph.node_at(index).id.clone())
            .collect(),
    )
}

/// Sum the cheapest edge cost of every hop in `ids`.
///
/// Returns `None` if any consecutive pair is not joined by an edge.
pub fn path_cost<S: AsRef<str>>(graph: &Graph, ids: &[S]) -> Option<f64> {
    let mut total = 0.0;
    for pair in ids.windows(2) {
        let target = graph.index_of(pair[1].as_ref())?;
        let cheapest = graph
            .neighbours(pair[0].as_ref())
            .iter()
            .filter(|edge| edge.target == target)
            .map(|edge| edge.cost)
            .min_by(|a, b| a.total_cmp(b))?;
        total += cheapest;
    }
    Some(total)
}

pub(crate) fn find_path_indices(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    if start == goal {
        return Some(vec![start]);
    }

    let goal_node = graph.node_at(goal);
    let mut g_score = vec![f64::INFINITY; graph.len()];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; graph.len()];
    let mut queue = BinaryHeap::new();

    g_score[start] = 0.0;
    let start_node = graph.node_at(start);
    queue.push(AStarEntry::new(
        start,
        &start_node.id,
        0.0,
        distance(start_node, goal_node),
    ));

    while let Some(entry) = queue.pop() {
        let current_score = g_score[entry.node];
        if entry.cost.0 > current_score {
            // Superseded by a cheaper relaxation pushed later.
            continue;
        }

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.edges_at(entry.node) {
            let next = edge.target;
            let tentative_g = current_score + edge.cost;
            if tentative_g < g_score[next] {
                g_score[next] = tentative_g;
                parents[next] = Some(entry.node);
                let next_node = graph.node_at(next);
                let heuristic = distance(next_node, goal_node);
                queue.push(AStarEntry::new(next, &next_node.id, tentative_g, heuristic));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &[Option<NodeIndex>],
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry<'a> {
    node: NodeIndex,
    id: &'a str,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl<'a> AStarEntry<'a> {
    fn new(node: NodeIndex, id: &'a str, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            id,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate,
        // then by id.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.id.cmp(self.id))
    }
}

impl PartialOrd for AStarEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{EdgeRecord, Node};
    use crate::graph::build_graph;

    #[test]
    fn heap_pops_lowest_estimate_then_lowest_id() {
        let mut heap = BinaryHeap::new();
        heap.push(AStarEntry::new(0, "b", 0.0, 5.0));
        heap.push(AStarEntry::new(1, "a", 0.0, 5.0));
        heap.push(AStarEntry::new(2, "c", 0.0, 1.0));

        let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|e| e.id)).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn equal_cost_routes_resolve_through_smaller_id() {
        // Diamond with two equally short detours: s -> {m1, m2} -> t.
        let graph = build_graph(
            vec![
                Node::new("s", 0.0, 0.0),
                Node::new("m2", 1.0, 1.0),
                Node::new("m1", 1.0, -1.0),
                Node::new("t", 2.0, 0.0),
            ],
            &[
                EdgeRecord::new("s", "m2"),
                EdgeRecord::new("s", "m1"),
                EdgeRecord::new("m2", "t"),
                EdgeRecord::new("m1", "t"),
            ],
        );

        let first = find_path(&graph, "s", "t").expect("route exists");
        assert_eq!(first, vec!["s", "m1", "t"]);
        for _ in 0..5 {
            assert_eq!(find_path(&graph, "s", "t").as_ref(), Some(&first));
        }
    }

    #[test]
    fn path_cost_rejects_non_adjacent_hops() {
        let graph = build_graph(
            vec![
                Node::new("a", 0.0, 0.0),
                Node::new("b", 1.0, 0.0),
                Node::new("c", 2.0, 0.0),
            ],
            &[EdgeRecord::new("a", "b"), EdgeRecord::weighted("a", "b", 0.5)],
        );
        assert_eq!(path_cost(&graph, &["a", "b"]), Some(0.5));
        assert_eq!(path_cost(&graph, &["a", "c"]), None);
        assert_eq!(path_cost(&graph, &["a"]), Some(0.0));
    }
}
