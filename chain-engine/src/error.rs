use thiserror::Error;

/// Precondition violations detected at the checked entry points of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("dimension must be at least 2, got {0}")]
    DimensionTooSmall(usize),

    #[error("generator {generator} at position {position} is outside [1, {max}]")]
    GeneratorOutOfRange {
        position: usize,
        generator: usize,
        max: usize,
    },

    #[error("inversion ({a},{b}) at step {step} does not swap adjacent values")]
    NotAdjacent { step: usize, a: usize, b: usize },

    #[error("edge {source_word} -> {target_word} joins chains of different elements")]
    EdgeMismatch {
        source_word: String,
        target_word: String,
    },
}

pub type Result<T> = std::result::Result<T, ChainError>;
