use cayleygraph::{algorithm::*, graph::*, prufer::*};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("2000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, undirected, directed, prufer);
criterion_main!(benches);

fn undirected(c: &mut Criterion) {
    cases::<Undirected>(c, "undirected");
}

fn directed(c: &mut Criterion) {
    cases::<Directed>(c, "directed");
}

fn random_graph<O: Orientation>(vertex_size: usize, edge_size: usize) -> Graph<O> {
    let mut g = Graph::new(vertex_size);
    for _ in 0..edge_size {
        let a = rand::thread_rng().gen::<usize>() % vertex_size;
        let b = rand::thread_rng().gen::<usize>() % vertex_size;
        g.connect(VertexId::new(a), VertexId::new(b));
    }
    g
}

fn cases<O: Orientation>(c: &mut Criterion, prefix: &str) {
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    c.bench_function(&(prefix.to_string() + "/connect"), |b| {
        b.iter(|| random_graph::<O>(vertex_size, edge_size))
    });

    let g = random_graph::<O>(vertex_size, edge_size);
    c.bench_function(&(prefix.to_string() + "/bfs"), |b| {
        b.iter(|| black_box(g.bfs(&VertexId::MIN)))
    });
    c.bench_function(&(prefix.to_string() + "/dfs"), |b| {
        b.iter(|| black_box(g.dfs(&VertexId::MIN)))
    });
    c.bench_function(&(prefix.to_string() + "/connected_components"), |b| {
        b.iter(|| black_box(g.connected_components()))
    });
    c.bench_function(&(prefix.to_string() + "/is_cyclic"), |b| {
        b.iter(|| black_box(g.is_cyclic()))
    });
}

fn prufer(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    let seq: PruferSequence = (0..vertex_size - 2)
        .map(|_| VertexId::new(rand::thread_rng().gen::<usize>() % vertex_size))
        .collect();
    c.bench_function("prufer/decode", |b| b.iter(|| black_box(seq.decode())));
    let tree = seq.decode().unwrap();
    c.bench_function("prufer/encode", |b| {
        b.iter(|| black_box(prufer_encode(&tree)))
    });
}
