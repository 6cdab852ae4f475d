use fsgm::{
    data_graph::{read_graph, DataGraph},
    miner::{Miner, MiningOptions},
};

const GRAPH: &str = "\
v 0 person
v 1 person
v 2 person
v 3 account
e 0 1 e
e 1 0 e
e 1 2 e
e 2 1 e
e 2 3 owns
";

fn create_data_graph() -> DataGraph {
    read_graph(GRAPH)
}

fn options(min_support: f64, max_pattern_size: usize) -> MiningOptions {
    MiningOptions {
        min_support,
        directed: false,
        approximate: false,
        approx_error: 0.0,
        max_pattern_size,
        max_distance: 0,
    }
}

#[test]
fn test_mine_singletons() {
    let data_graph = create_data_graph();
    let miner = Miner::new(&data_graph, options(0.5, 1));
    let results = miner.mine_frequent_subgraphs();
    // one seed per person vertex survives (support 3/4); the account seed
    // scores 1/4 and is pruned
    assert_eq!(results.len(), 3);
    assert!(results
        .iter()
        .all(|p| p.vertices()[0].label == "person" && p.vertex_count() == 1));
    for pattern in &results {
        assert_eq!(pattern.calculate_support(&data_graph), 0.75);
    }
}

#[test]
fn test_mine_two_vertex_extensions() {
    let data_graph = create_data_graph();
    let miner = Miner::new(&data_graph, options(0.5, 2));
    let results = miner.mine_frequent_subgraphs();
    // the person-person pair via "e" arcs occurs four times (0-1, 1-0,
    // 1-2, 2-1), support 1.0; each person seed contributes the singleton
    // plus four duplicate children, one per target vertex label match
    let pairs: Vec<_> = results.iter().filter(|p| p.vertex_count() == 2).collect();
    assert_eq!(results.iter().filter(|p| p.vertex_count() == 1).count(), 3);
    assert_eq!(pairs.len(), 9);
    for pattern in pairs {
        assert_eq!(pattern.calculate_support(&data_graph), 1.0);
        assert_eq!(pattern.edge_count(), 2);
    }
}

#[test]
fn test_mine_respects_size_bound() {
    let data_graph = create_data_graph();
    let miner = Miner::new(&data_graph, options(0.0, 2));
    for pattern in miner.mine_frequent_subgraphs() {
        assert!(pattern.vertex_count() <= 2);
        assert!(pattern.is_valid());
    }
}

#[test]
fn test_pattern_mining_returns_valid_patterns() {
    let data_graph = create_data_graph();
    let miner = Miner::new(&data_graph, options(0.7, 2));
    for pattern in miner.mine_frequent_patterns() {
        assert!(pattern.is_valid());
        assert!(pattern.calculate_support(&data_graph) >= 0.7);
    }
}

#[test]
fn test_approximate_mode_is_superset_of_exact() {
    let data_graph = create_data_graph();
    let exact = Miner::new(&data_graph, options(0.8, 2))
        .mine_frequent_subgraphs()
        .len();
    let mut approx_options = options(0.8, 2);
    approx_options.approximate = true;
    approx_options.approx_error = 0.4;
    let approx = Miner::new(&data_graph, approx_options)
        .mine_frequent_subgraphs()
        .len();
    assert!(approx >= exact);
}
