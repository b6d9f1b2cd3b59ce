use crate::error::{ChainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A permutation of `1..=dim`, one state along a maximal chain.
pub type Permutation = Vec<usize>;

/// The inversions swapped by consecutive generators of a word.
pub type InversionSeq = Vec<Inversion>;

/// A transposed pair of values `(a, b)`.
/// For a reduced word the smaller value always comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Inversion(pub usize, pub usize);

impl Inversion {
    pub fn new(a: usize, b: usize) -> Self {
        Inversion(a, b)
    }

    /// Returns true if either value of the pair equals `value`.
    pub fn touches(&self, value: usize) -> bool {
        self.0 == value || self.1 == value
    }
}

impl fmt::Display for Inversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

/// A word in the adjacent transpositions s_1, ..., s_{dim-1}.
/// Generators are 1-based: generator `k` swaps positions `k-1` and `k`.
///
/// A maximal chain of the weak order is a reduced word for the longest
/// element. Reducedness is never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word {
    generators: Vec<usize>,
}

impl Word {
    /// Creates an empty word.
    pub fn new() -> Self {
        Word {
            generators: Vec::new(),
        }
    }

    /// Creates a word from raw generator indices without any range check.
    pub fn from_generators(generators: Vec<usize>) -> Self {
        Word { generators }
    }

    /// Creates a word whose generators all lie in `[1, dim-1]`.
    pub fn with_dim(generators: Vec<usize>, dim: usize) -> Result<Self> {
        let word = Word { generators };
        word.check_dim(dim)?;
        Ok(word)
    }

    /// Fails unless every generator lies in `[1, dim-1]`.
    pub fn check_dim(&self, dim: usize) -> Result<()> {
        if dim < 2 {
            return Err(ChainError::DimensionTooSmall(dim));
        }
        for (position, &generator) in self.generators.iter().enumerate() {
            if generator == 0 || generator >= dim {
                return Err(ChainError::GeneratorOutOfRange {
                    position,
                    generator,
                    max: dim - 1,
                });
            }
        }
        Ok(())
    }

    /// The smallest `dim` this word can live in (`max generator + 1`).
    pub fn min_dim(&self) -> usize {
        self.generators.iter().copied().max().unwrap_or(1) + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.generators.iter()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.generators
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Returns the generator multiset as a sorted vector.
    pub fn content(&self) -> Vec<usize> {
        let mut sorted = self.generators.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Used internally by the move functions.
    pub(crate) fn generators_mut(&mut self) -> &mut [usize] {
        &mut self.generators
    }
}

impl Default for Word {
    fn default() -> Self {
        Word::new()
    }
}

impl From<Vec<usize>> for Word {
    fn from(generators: Vec<usize>) -> Self {
        Word::from_generators(generators)
    }
}

impl<const N: usize> From<[usize; N]> for Word {
    fn from(generators: [usize; N]) -> Self {
        Word::from_generators(generators.to_vec())
    }
}

impl Index<usize> for Word {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.generators[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generators.iter().all(|&g| g < 10) {
            for g in &self.generators {
                write!(f, "{}", g)?;
            }
            Ok(())
        } else {
            let parts: Vec<String> = self.generators.iter().map(|g| g.to_string()).collect();
            write!(f, "{}", parts.join(","))
        }
    }
}

/// A directed edge of a braid cover graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub source: Word,
    pub target: Word,
}

impl Edge {
    pub fn new(source: Word, target: Word) -> Self {
        Edge { source, target }
    }
}
