use crate::error::Result;
use crate::graph::BraidCoverGraph;
use crate::mapping::cox_to_nums;
use crate::types::Permutation;
use serde::Serialize;
use std::collections::BTreeSet;

/// A cover relation `lower < upper` of the weak order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CoverRelation {
    pub upper: Permutation,
    pub lower: Permutation,
}

/// Hasse diagram of the poset spanned by the chains of a braid cover graph.
///
/// Every word on either end of an edge is expanded with [`cox_to_nums`] and
/// each consecutive pair of its chain contributes one cover relation.
pub fn poset_edges(graph: &BraidCoverGraph, dim: usize) -> Result<BTreeSet<CoverRelation>> {
    let mut relations = BTreeSet::new();
    for word in graph.nodes() {
        let chain = cox_to_nums(&word, dim)?;
        for pair in chain.windows(2).rev() {
            relations.insert(CoverRelation {
                upper: pair[1].clone(),
                lower: pair[0].clone(),
            });
        }
    }
    Ok(relations)
}

/// The permutations appearing in [`poset_edges`].
pub fn poset_nodes(relations: &BTreeSet<CoverRelation>) -> BTreeSet<Permutation> {
    relations
        .iter()
        .flat_map(|rel| [rel.upper.clone(), rel.lower.clone()])
        .collect()
}
