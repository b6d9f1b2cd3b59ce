use chain_engine::{
    braid_cover_graph, cox_to_nums, poset_edges, poset_nodes, BraidCoverGraph, Inversion,
    InversionSeq, SubchainFilter, SubchainSet, Word,
};

fn inversions(pairs: &[(usize, usize)]) -> InversionSeq {
    pairs.iter().map(|&(a, b)| Inversion(a, b)).collect()
}

/// Subset of the maximal chains of the chain cover poset of P4.
fn k1() -> SubchainSet {
    [
        inversions(&[(1, 2), (1, 3), (2, 3), (1, 4), (2, 4), (3, 4)]),
        inversions(&[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]),
        inversions(&[(2, 3), (2, 4), (3, 4), (1, 4), (1, 3), (1, 2)]),
        inversions(&[(2, 3), (1, 3), (2, 4), (1, 4), (3, 4), (1, 2)]),
    ]
    .into_iter()
    .collect()
}

/// The remaining two chains of the chain cover poset of P4.
fn k2() -> SubchainSet {
    [
        inversions(&[(3, 4), (1, 2), (1, 4), (1, 3), (2, 4), (2, 3)]),
        inversions(&[(3, 4), (2, 4), (1, 4), (1, 2), (1, 3), (2, 3)]),
    ]
    .into_iter()
    .collect()
}

/// Integration test for the P4 braid cover graph of the chain 121321.
///
/// Verifies:
/// 1. The graph has the expected size and reaches all six chains
/// 2. Every edge joins two chains of the longest element
/// 3. The chains span the expected part of the weak order
#[test]
fn test_p4_braid_cover_graph() {
    const DIM: usize = 4;
    let seed = Word::from([1, 2, 1, 3, 2, 1]);

    let graph = BraidCoverGraph::build(&seed);
    assert!(!graph.is_empty());
    assert_eq!(graph.len(), 14, "P4 graph should have 14 edges");

    let expected_nodes: Vec<Word> = vec![
        Word::from([1, 2, 1, 3, 2, 1]),
        Word::from([1, 2, 3, 1, 2, 1]),
        Word::from([2, 1, 3, 2, 1, 3]),
        Word::from([2, 3, 2, 1, 2, 3]),
        Word::from([3, 1, 2, 3, 1, 2]),
        Word::from([3, 2, 1, 2, 3, 2]),
    ];
    assert_eq!(graph.nodes().into_iter().collect::<Vec<_>>(), expected_nodes);

    let top = vec![4, 3, 2, 1];
    for edge in graph.edges() {
        assert_eq!(edge.source.len(), seed.len());
        assert_eq!(edge.target.len(), seed.len());
        let source_chain = cox_to_nums(&edge.source, DIM).unwrap();
        let target_chain = cox_to_nums(&edge.target, DIM).unwrap();
        assert_eq!(source_chain.last(), Some(&top));
        assert_eq!(target_chain.last(), Some(&top));
    }
    graph.verify(DIM).unwrap();

    let relations = poset_edges(&graph, DIM).unwrap();
    assert_eq!(relations.len(), 28);
    assert_eq!(poset_nodes(&relations).len(), 24);
}

/// The two restricted graphs for P5 and their union.
#[test]
fn test_p5_restricted_graphs() {
    const DIM: usize = 5;
    let w1 = Word::from([1, 2, 1, 3, 2, 1, 4, 3, 2, 1]);
    let w2 = Word::from([3, 2, 1, 2, 3, 4, 3, 2, 1, 3]);

    let filter1 = SubchainFilter::new(DIM, k1()).unwrap();
    let filter2 = SubchainFilter::new(DIM, k2()).unwrap();

    let mut graph = BraidCoverGraph::build_restricted(&w1, &filter1).unwrap();
    let second = BraidCoverGraph::build_restricted(&w2, &filter2).unwrap();
    assert_eq!(graph.len(), 46);
    assert_eq!(second.len(), 42);

    for edge in graph.edges() {
        assert!(filter1.admits(&edge.target).unwrap());
    }
    for edge in second.edges() {
        assert!(filter2.admits(&edge.target).unwrap());
    }

    graph.extend(second);
    assert_eq!(graph.len(), 88);
    assert_eq!(graph.nodes().len(), 33);
    graph.verify(DIM).unwrap();
    assert_eq!(poset_edges(&graph, DIM).unwrap().len(), 157);
}

#[test]
fn test_restricted_with_empty_set_has_no_successors() {
    let seed = Word::from([1, 2, 1, 3, 2, 1, 4, 3, 2, 1]);
    let filter = SubchainFilter::new(5, SubchainSet::new()).unwrap();
    let edges = braid_cover_graph(&seed, Some(&filter)).unwrap();
    assert!(edges.is_empty());
}

#[test]
fn test_graph_is_deterministic() {
    let seed = Word::from([1, 2, 1, 3, 2, 1, 4, 3, 2, 1]);
    let first = braid_cover_graph(&seed, None).unwrap();
    let second = braid_cover_graph(&seed, None).unwrap();
    assert_eq!(first.len(), 1032);
    assert_eq!(first, second);

    let nodes: std::collections::BTreeSet<&Word> = first.iter().map(|e| &e.target).collect();
    assert_eq!(nodes.len(), 352);
}
