use crate::error::Result;
use crate::types::{Permutation, Word};
use nalgebra::DMatrix;
use num_complex::Complex;
use serde::Serialize;

/// Relative tolerance used when comparing Burau matrices.
pub const BURAU_TOLERANCE: f64 = 1e-9;

/// Trait for incremental updates to fingerprint state.
/// This allows streaming updates as generators are processed.
pub trait IncrementalUpdate {
    /// Updates the state with a new generator (1-based).
    fn update(&mut self, generator: usize);
}

/// Fingerprint of a word, invariant under braid and commutation moves.
///
/// Two reduced words for the same element must agree on every field, so the
/// fingerprint is used to check the edges produced by the graph builder:
/// - the permutation matrix records which element the word denotes
/// - the positive Burau matrix records the braid the word spells, which braid
///   and commutation moves preserve
#[derive(Debug, Clone)]
pub struct ChainFingerprint {
    /// Number of generators consumed (the rank of the top element).
    pub length: usize,
    /// `permutation_matrix[(v - 1, pos)] == 1` iff value `v` sits at `pos`.
    pub permutation_matrix: DMatrix<i32>,
    /// Burau matrix (dim x dim) of the positive braid spelled by the word
    pub burau_matrix: DMatrix<Complex<f64>>,
    /// Complex parameter t for the Burau representation, `e^(i * 1.0)`
    pub t_param: Complex<f64>,
    dimension: usize,
}

/// Serializable summary of a fingerprint for CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct FingerprintSummary {
    pub length: usize,
    pub top: Permutation,
    pub burau_trace_magnitude: f64,
}

impl ChainFingerprint {
    /// Creates the fingerprint of the empty word.
    pub fn new(dimension: usize) -> Self {
        let t_param = Complex::new(1.0_f64.cos(), 1.0_f64.sin());

        ChainFingerprint {
            length: 0,
            permutation_matrix: DMatrix::identity(dimension, dimension),
            burau_matrix: DMatrix::identity(dimension, dimension),
            t_param,
            dimension,
        }
    }

    /// Fingerprints a whole word after checking its generators against `dim`.
    pub fn of_word(w: &Word, dim: usize) -> Result<Self> {
        w.check_dim(dim)?;
        let mut fingerprint = ChainFingerprint::new(dim);
        for &generator in w.iter() {
            fingerprint.update(generator);
        }
        Ok(fingerprint)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Reads the permutation at the top of the chain off the permutation matrix.
    pub fn top_permutation(&self) -> Permutation {
        (0..self.dimension)
            .map(|pos| {
                (0..self.dimension)
                    .find(|&v| self.permutation_matrix[(v, pos)] == 1)
                    .map_or(0, |v| v + 1)
            })
            .collect()
    }

    /// Magnitude of the trace of the Burau matrix.
    pub fn burau_trace_magnitude(&self) -> f64 {
        let trace = self.burau_matrix.diagonal().iter().sum::<Complex<f64>>();
        trace.norm()
    }

    /// Returns true if both fingerprints describe the same element and braid.
    pub fn matches(&self, other: &ChainFingerprint) -> bool {
        if self.dimension != other.dimension
            || self.length != other.length
            || self.permutation_matrix != other.permutation_matrix
        {
            return false;
        }
        let scale = self
            .burau_matrix
            .iter()
            .map(|c| c.norm())
            .fold(1.0, f64::max);
        let diff = &self.burau_matrix - &other.burau_matrix;
        let max_diff = diff.iter().map(|c| c.norm()).fold(0.0, f64::max);
        max_diff <= BURAU_TOLERANCE * scale
    }

    pub fn summary(&self) -> FingerprintSummary {
        FingerprintSummary {
            length: self.length,
            top: self.top_permutation(),
            burau_trace_magnitude: self.burau_trace_magnitude(),
        }
    }

    /// Applies the generator matrix U_k for σ_k to the Burau matrix.
    ///
    /// U_k is the identity matrix except for the 2x2 block at indices (k-1, k):
    /// [1-t  t ]
    /// [1    0 ]
    fn apply_burau(&mut self, k: usize) {
        let mut u_k = DMatrix::identity(self.dimension, self.dimension);
        let (i, j) = (k - 1, k);

        u_k[(i, i)] = Complex::new(1.0, 0.0) - self.t_param;
        u_k[(i, j)] = self.t_param;
        u_k[(j, i)] = Complex::new(1.0, 0.0);
        u_k[(j, j)] = Complex::new(0.0, 0.0);

        self.burau_matrix = &self.burau_matrix * &u_k;
    }
}

impl IncrementalUpdate for ChainFingerprint {
    /// Updates:
    /// - length: incremented by 1
    /// - permutation matrix: columns k-1 and k swapped
    /// - Burau matrix: multiplied by U_k
    ///
    /// Generators outside `[1, dim-1]` are ignored.
    fn update(&mut self, generator: usize) {
        if generator == 0 || generator >= self.dimension {
            return;
        }
        self.permutation_matrix.swap_columns(generator - 1, generator);
        self.apply_burau(generator);
        self.length += 1;
    }
}

/// Returns true if `u` and `v` denote the same element of the symmetric group.
pub fn same_element(u: &Word, v: &Word, dim: usize) -> Result<bool> {
    let left = ChainFingerprint::of_word(u, dim)?;
    let right = ChainFingerprint::of_word(v, dim)?;
    Ok(left.matches(&right))
}
