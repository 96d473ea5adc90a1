use std::collections::HashSet;
use std::fs;

use component_gen::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn generator(max_num_nodes: usize, max_num_edges: usize, max_size: usize, seed: u64) -> Generator {
    init_logging();

    GeneratorBuilder::new()
        .max_num_nodes(max_num_nodes)
        .max_num_edges(max_num_edges)
        .max_size(max_size)
        .seed(seed)
        .build()
        .unwrap()
}

#[test]
fn end_to_end_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");

    let generation = generator(20, 50, 6, 42).generate::<usize>().unwrap();
    generation.graph().write_to_path(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines = content.lines().collect::<Vec<_>>();

    let header = lines[0]
        .split(' ')
        .map(|n| n.parse::<usize>().unwrap())
        .collect::<Vec<_>>();
    let (node_count, edge_count) = (header[0], header[1]);

    assert!(node_count <= 20);
    assert!(edge_count <= 50);
    assert!(node_count > 0);
    assert_eq!(lines.len(), 1 + edge_count + node_count);

    let graph = GeneratedGraph::<usize>::read_from_path(&path).unwrap();
    assert_eq!(&graph, generation.graph());
}

#[test]
fn same_seed_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    generator(20, 50, 6, 42)
        .generate::<u32>()
        .unwrap()
        .graph()
        .write_to_path(&first)
        .unwrap();
    generator(20, 50, 6, 42)
        .generate::<u32>()
        .unwrap()
        .graph()
        .write_to_path(&second)
        .unwrap();

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn different_seeds_differ() {
    let a = generator(10_000, 100_000, 100, 1).generate::<u32>().unwrap();
    let b = generator(10_000, 100_000, 100, 2).generate::<u32>().unwrap();

    assert_ne!(a.graph(), b.graph());
}

#[test]
fn minimum_budgets() {
    for seed in 0..32 {
        for max_size in [5, 6, 10, 100] {
            let generation = generator(10, 8, max_size, seed).generate::<u32>().unwrap();
            let graph = generation.graph();

            assert!(graph.node_count() > 0, "seed {seed}, max_size {max_size}");
            assert!(graph.node_count() <= 10);
            assert!(graph.edge_count() <= 8);
            assert_eq!(graph.mapping().len(), graph.node_count());
        }
    }
}

#[test]
fn graph_invariants() {
    for seed in 0..10 {
        let generation = generator(5_000, 20_000, 64, seed)
            .generate::<usize>()
            .unwrap();
        let graph = generation.graph();
        let n = graph.node_count();

        assert!(n <= 5_000);
        assert!(graph.edge_count() <= 20_000);
        assert_eq!(graph.edges().len(), graph.edge_count());

        for &(u, v) in graph.edges() {
            assert!((1..=n).contains(&u));
            assert!((1..=n).contains(&v));
        }

        let counts = generation.counts();
        assert_eq!(counts.total(), generation.spans().len());

        let covered = generation
            .spans()
            .iter()
            .map(|span| span.node_count)
            .sum::<usize>();
        assert_eq!(covered, n);

        let mapped = graph
            .mapping()
            .iter()
            .map(|&(_, mapped)| mapped)
            .collect::<HashSet<_>>();
        assert_eq!(mapped.len(), n);
        assert!(mapped.iter().all(|id| (1..=n).contains(id)));
    }
}

#[test]
fn large_size_ceiling_at_full_budgets() {
    for seed in 0..8 {
        let generation = generator(100_000, 1_000_000, 100_000, seed)
            .generate::<u32>()
            .unwrap();
        let graph = generation.graph();

        assert!(graph.node_count() > 0, "seed {seed}");
        assert!(graph.node_count() <= 100_000);
        assert!(graph.edge_count() <= 1_000_000);
        assert_eq!(graph.edges().len(), graph.edge_count());
    }
}

#[test]
fn trees_are_never_paths() {
    init_logging();

    let generation = GeneratorBuilder::new()
        .max_num_nodes(50_000)
        .max_num_edges(1_000_000)
        .max_size(7)
        .seed(3)
        .build()
        .unwrap()
        .generate::<usize>()
        .unwrap();

    let graph = generation.graph();
    let mut degrees = vec![0_usize; graph.node_count() + 1];
    for &(u, v) in graph.edges() {
        degrees[u] += 1;
        degrees[v] += 1;
    }

    for span in generation.spans() {
        let max_degree = span.ids().map(|id| degrees[id]).max().unwrap_or(0);
        match span.shape {
            Shape::Tree => assert!(max_degree > 2),
            Shape::Path | Shape::Cycle => assert_eq!(max_degree, 2),
            Shape::Bipartite => assert!(max_degree >= 3),
        }
    }

    assert!(generation.counts().tree > 0);
    assert!(generation.counts().path > 0);
}

#[test]
fn identity_mapping() {
    let generation = GeneratorBuilder::new()
        .max_num_nodes(1_000)
        .max_num_edges(10_000)
        .max_size(20)
        .mapping(MappingKind::Identity)
        .build()
        .unwrap()
        .generate::<u64>()
        .unwrap();

    let mapping = generation.graph().mapping();
    assert_eq!(mapping.len(), generation.graph().node_count());
    assert!(mapping.iter().all(|(a, b)| a == b));
}

#[test]
fn component_wise_mapping() {
    let generation = GeneratorBuilder::new()
        .max_num_nodes(1_000)
        .max_num_edges(10_000)
        .max_size(20)
        .mapping(MappingKind::ComponentWise)
        .build()
        .unwrap()
        .generate::<u64>()
        .unwrap();

    let mapping = generation.graph().mapping();
    for span in generation.spans() {
        for id in span.ids() {
            let (original, mapped) = mapping[id - 1];
            assert_eq!(original as usize, id);
            assert!(span.ids().contains(&(mapped as usize)));
        }
    }
}

#[test]
fn budget_fraction_stops_early() {
    let full = GeneratorBuilder::new()
        .max_num_nodes(10_000)
        .max_num_edges(1_000_000)
        .max_size(5)
        .build()
        .unwrap()
        .generate::<u32>()
        .unwrap();
    let gated = GeneratorBuilder::new()
        .max_num_nodes(10_000)
        .max_num_edges(1_000_000)
        .max_size(5)
        .budget_fraction(0.9)
        .build()
        .unwrap()
        .generate::<u32>()
        .unwrap();

    assert_eq!(full.graph().node_count(), 10_000);
    assert_eq!(gated.graph().node_count(), 9_000);
}
