use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use wayfinder_lib::{build_graph, find_path, EdgeRecord, Graph, Node, Router};

const GRID_SIZE: usize = 120;
const GRID_SPACING: f64 = 2.5;

fn grid_mesh() -> Graph {
    let mut nodes = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    let mut edges = Vec::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let id = format!("c{row}-{col}");
            nodes.push(Node::new(
                id.clone(),
                col as f64 * GRID_SPACING,
                row as f64 * GRID_SPACING,
            ));
            if col + 1 < GRID_SIZE {
                edges.push(EdgeRecord::new(id.clone(), format!("c{row}-{}", col + 1)));
            }
            if row + 1 < GRID_SIZE {
                edges.push(EdgeRecord::new(id, format!("c{}-{col}", row + 1)));
            }
        }
    }
    build_graph(nodes, &edges)
}

fn features() -> Graph {
    let far = (GRID_SIZE - 1) as f64 * GRID_SPACING;
    build_graph(
        vec![
            Node::new("gate", -3.0, -3.0),
            Node::new("hall", far + 3.0, far + 3.0),
            Node::new("quad", far / 2.0 + 1.0, far / 2.0),
        ],
        &[],
    )
}

static MESH: Lazy<Graph> = Lazy::new(grid_mesh);
static ROUTER: Lazy<Router> = Lazy::new(|| Router::new(features(), grid_mesh()));

fn benchmark_pathfinding(c: &mut Criterion) {
    let far = format!("c{}-{}", GRID_SIZE - 1, GRID_SIZE - 1);

    c.bench_function("astar_grid_corner_to_corner", |b| {
        let mesh = &*MESH;
        b.iter(|| {
            let route = find_path(mesh, "c0-0", &far).expect("route exists");
            black_box(route.len())
        });
    });

    c.bench_function("router_gate_to_hall", |b| {
        let router = &*ROUTER;
        b.iter(|| {
            let route = router.find_path("gate", "hall").expect("route exists");
            black_box(route.len())
        });
    });

    c.bench_function("router_gate_to_quad", |b| {
        let router = &*ROUTER;
        b.iter(|| {
            let route = router.find_path("gate", "quad").expect("route exists");
            black_box(route.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
