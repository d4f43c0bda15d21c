use crate::document::Node;

/// Euclidean distance between two nodes.
///
/// Nodes without an elevation sit on `z = 0`, so purely planar maps get the
/// plain 2D distance. Straight-line distance never exceeds the cost of any
/// walkable path, which is what makes it usable as the A* heuristic.
pub fn distance(a: &Node, b: &Node) -> f64 {
    squared_distance(&a.position(), &b.position()).sqrt()
}

pub(crate) fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Total length of the polyline through `nodes`.
pub fn path_length(nodes: &[Node]) -> f64 {
    nodes.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum()
}

/// Index of the node closest to `target`, ties going to the earliest node.
///
/// This is the reference snapping rule; [`crate::spatial::ConnectorIndex`]
/// answers the same question faster and must agree with it.
pub fn nearest_node<'a, I>(nodes: I, target: &Node) -> Option<usize>
where
    I: IntoIterator<Item = &'a Node>,
{
    let point = target.position();
    let mut best: Option<(usize, f64)> = None;
    for (index, node) in nodes.into_iter().enumerate() {
        let candidate = squared_distance(&node.position(), &point);
        match best {
            Some((_, current)) if candidate >= current => {}
            _ => best = Some((index, candidate)),
        }
    }
    best.map(|(index, _)| index)
}
