use crate::error::{ChainError, Result};
use crate::types::{Inversion, InversionSeq, Permutation, Word};

/// The identity permutation `(1, 2, ..., dim)`.
fn identity(dim: usize) -> Permutation {
    (1..=dim).collect()
}

/// Expands a word into its chain of permutations.
///
/// Starts at the identity `(1..dim)` and applies each generator `k` as the
/// transposition of positions `k-1` and `k`. The result holds `len(w) + 1`
/// permutations; the last one is the element the word denotes.
///
/// # Example
/// ```
/// use chain_engine::{cox_to_nums, Word};
///
/// let chain = cox_to_nums(&Word::from([1, 2, 1]), 3).unwrap();
/// assert_eq!(chain.first(), Some(&vec![1, 2, 3]));
/// assert_eq!(chain.last(), Some(&vec![3, 2, 1]));
/// ```
pub fn cox_to_nums(w: &Word, dim: usize) -> Result<Vec<Permutation>> {
    w.check_dim(dim)?;

    let mut current = identity(dim);
    let mut chain = Vec::with_capacity(w.len() + 1);
    chain.push(current.clone());
    for &k in w.iter() {
        current.swap(k - 1, k);
        chain.push(current.clone());
    }
    Ok(chain)
}

/// The permutation at the top of the chain of `w`.
pub fn top_permutation(w: &Word, dim: usize) -> Result<Permutation> {
    w.check_dim(dim)?;

    let mut current = identity(dim);
    for &k in w.iter() {
        current.swap(k - 1, k);
    }
    Ok(current)
}

/// Converts a word into the sequence of value pairs its generators swap.
///
/// Generator `k` records the pair `(n[k-1], n[k])` of the current arrangement
/// before swapping them.
pub fn coxeter_to_seq(w: &Word, dim: usize) -> Result<InversionSeq> {
    w.check_dim(dim)?;

    let mut current = identity(dim);
    let mut seq = Vec::with_capacity(w.len());
    for &k in w.iter() {
        seq.push(Inversion(current[k - 1], current[k]));
        current.swap(k - 1, k);
    }
    Ok(seq)
}

/// Converts an inversion sequence back into a word.
///
/// Each inversion `(a, b)` must have `a` immediately followed by `b` in the
/// current arrangement; otherwise it does not correspond to a generator.
pub fn seq_to_coxeter(s: &[Inversion], dim: usize) -> Result<Word> {
    if dim < 2 {
        return Err(ChainError::DimensionTooSmall(dim));
    }

    let mut current = identity(dim);
    let mut generators = Vec::with_capacity(s.len());
    for (step, inv) in s.iter().enumerate() {
        let not_adjacent = ChainError::NotAdjacent {
            step,
            a: inv.0,
            b: inv.1,
        };
        let j = current
            .iter()
            .position(|&v| v == inv.0)
            .ok_or_else(|| not_adjacent.clone())?;
        if j + 1 >= dim || current[j + 1] != inv.1 {
            return Err(not_adjacent);
        }
        generators.push(j + 1);
        current.swap(j, j + 1);
    }
    Ok(Word::from_generators(generators))
}

/// Drops every inversion whose larger entry is the top rank `dim`.
///
/// What remains is the chain of the parabolic subgroup on `1..dim-1`
/// traced out by the full chain.
pub fn subchain(s: &[Inversion], dim: usize) -> InversionSeq {
    s.iter().copied().filter(|inv| inv.1 != dim).collect()
}
