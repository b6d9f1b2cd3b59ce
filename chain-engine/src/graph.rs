use crate::cover::get_braid_cover;
use crate::error::{ChainError, Result};
use crate::invariants::ChainFingerprint;
use crate::mapping::{coxeter_to_seq, subchain};
use crate::types::{Edge, InversionSeq, Word};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet, VecDeque};
use tracing::{debug, info, info_span};

/// A set of allowed subchains (inversion sequences with the top rank removed).
pub type SubchainSet = HashSet<InversionSeq>;

/// Membership filter for the restricted braid cover graph.
///
/// A word passes when the subchain of its inversion sequence in dimension
/// `dim` belongs to the allowed set.
#[derive(Debug, Clone)]
pub struct SubchainFilter {
    dim: usize,
    allowed: SubchainSet,
}

impl SubchainFilter {
    pub fn new(dim: usize, allowed: SubchainSet) -> Result<Self> {
        if dim < 2 {
            return Err(ChainError::DimensionTooSmall(dim));
        }
        Ok(SubchainFilter { dim, allowed })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Returns true if the subchain of `w` is an allowed one.
    pub fn admits(&self, w: &Word) -> Result<bool> {
        let seq = coxeter_to_seq(w, self.dim)?;
        Ok(self.allowed.contains(&subchain(&seq, self.dim)))
    }
}

/// The braid cover graph grown from a seed chain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BraidCoverGraph {
    edges: Vec<Edge>,
}

impl BraidCoverGraph {
    /// Builds the unrestricted graph from `seed`.
    pub fn build(seed: &Word) -> Self {
        let mut graph = BraidCoverGraph::default();
        match graph.grow(seed, |_| Ok(true)) {
            Ok(()) => graph,
            Err(err) => unreachable!("unfiltered growth failed: {}", err),
        }
    }

    /// Builds the graph from `seed`, keeping only successors admitted by `filter`.
    pub fn build_restricted(seed: &Word, filter: &SubchainFilter) -> Result<Self> {
        seed.check_dim(filter.dim())?;
        let mut graph = BraidCoverGraph::default();
        graph.grow(seed, |s| filter.admits(s))?;
        Ok(graph)
    }

    /// Breadth-first traversal over chains, appending edges to `self`.
    ///
    /// Every kept successor gets an edge, even if it was reached before; only
    /// first arrivals are queued for expansion. The seed itself starts outside
    /// the visited set, so it is expanded a second time if some chain leads
    /// back to it.
    fn grow<F>(&mut self, seed: &Word, keep: F) -> Result<()>
    where
        F: Fn(&Word) -> Result<bool>,
    {
        let span = info_span!("braid_cover_graph", seed = %seed);
        let _enter = span.enter();

        let mut queue = VecDeque::new();
        queue.push_back(seed.clone());
        let mut visited: HashSet<Word> = HashSet::new();
        let params = seed.len() / 2 + 1;

        while let Some(current) = queue.pop_front() {
            // One independent search per disjointness parameter
            let successor_sets: Vec<BTreeSet<Word>> = (0..params)
                .into_par_iter()
                .map(|p| get_braid_cover(&current, p))
                .collect();

            let mut kept = 0;
            for successor in successor_sets.into_iter().flatten() {
                if !keep(&successor)? {
                    continue;
                }
                kept += 1;
                if visited.insert(successor.clone()) {
                    queue.push_back(successor.clone());
                }
                self.edges.push(Edge::new(current.clone(), successor));
            }
            debug!(word = %current, kept, queued = queue.len(), "expanded chain");
        }

        info!(
            edges = self.edges.len(),
            chains = visited.len(),
            "braid cover graph complete"
        );
        Ok(())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every chain appearing as a source or target, in sorted order.
    pub fn nodes(&self) -> BTreeSet<Word> {
        self.edges
            .iter()
            .flat_map(|edge| [edge.source.clone(), edge.target.clone()])
            .collect()
    }

    /// Appends the edges of `other`, keeping duplicates.
    pub fn extend(&mut self, other: BraidCoverGraph) {
        self.edges.extend(other.edges);
    }

    /// Checks that every edge joins two chains of the same element.
    pub fn verify(&self, dim: usize) -> Result<()> {
        for edge in &self.edges {
            let source = ChainFingerprint::of_word(&edge.source, dim)?;
            let target = ChainFingerprint::of_word(&edge.target, dim)?;
            if !source.matches(&target) {
                return Err(ChainError::EdgeMismatch {
                    source_word: edge.source.to_string(),
                    target_word: edge.target.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl IntoIterator for BraidCoverGraph {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Returns the edge list of the braid cover graph of `w`.
///
/// With a filter, only successors whose subchain is allowed are kept
/// (restricted mode). An empty allowed set therefore yields no edges.
pub fn braid_cover_graph(w: &Word, filter: Option<&SubchainFilter>) -> Result<Vec<Edge>> {
    let graph = match filter {
        Some(filter) => BraidCoverGraph::build_restricted(w, filter)?,
        None => BraidCoverGraph::build(w),
    };
    Ok(graph.edges)
}
