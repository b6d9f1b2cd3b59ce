pub mod cover;
pub mod error;
pub mod graph;
pub mod invariants;
pub mod mapping;
pub mod moves;
pub mod poset;
pub mod types;
pub mod union_find;

pub use cover::get_braid_cover;
pub use error::{ChainError, Result};
pub use graph::{braid_cover_graph, BraidCoverGraph, SubchainFilter, SubchainSet};
pub use invariants::{same_element, ChainFingerprint, FingerprintSummary, IncrementalUpdate};
pub use mapping::{cox_to_nums, coxeter_to_seq, seq_to_coxeter, subchain, top_permutation};
pub use moves::{do_braid_move, do_comm_move, is_braid_move, is_comm_move};
pub use poset::{poset_edges, poset_nodes, CoverRelation};
pub use types::{Edge, Inversion, InversionSeq, Permutation, Word};
pub use union_find::PersistentUnionFind;
