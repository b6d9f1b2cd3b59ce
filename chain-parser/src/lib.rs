use chain_engine::{ChainError, Inversion, InversionSeq, Word};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub mod subchains;

pub use subchains::{load_subchains, load_subchains_from_path};

/// Errors raised while reading words, inversions and subchain files.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("malformed word '{0}'")]
    MalformedWord(String),
    #[error("generator 0 at position {0}; generators are 1-based")]
    ZeroGenerator(usize),
    #[error("number '{0}' is out of range")]
    NumberOutOfRange(String),
    #[error("malformed inversion '{0}'")]
    MalformedInversion(String),
    #[error("unexpected text '{0}' in inversion sequence")]
    UnexpectedText(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Chain(#[from] ChainError),
}

pub type Result<T> = std::result::Result<T, ParseError>;

// Words are written as a tuple "(1, 2, 1)", a list "1,2,1" / "1 2 1",
// or compactly as "121" when every generator is a single digit.
// Inversions are written "(1,2)" or "1-2".
lazy_static! {
    static ref WORD_REGEX: Regex =
        Regex::new(r"^\(?\s*(?P<body>\d+(?:\s*[,\s]\s*\d+)*)\s*,?\s*\)?$")
            .expect("Invalid word regex pattern");
    static ref SEPARATOR_REGEX: Regex = Regex::new(r"[,\s]+").expect("Invalid separator regex");
    static ref INVERSION_REGEX: Regex =
        Regex::new(r"\(\s*(?P<pa>\d+)\s*,\s*(?P<pb>\d+)\s*\)|(?P<da>\d+)\s*-\s*(?P<db>\d+)")
            .expect("Invalid inversion regex pattern");
    static ref GAP_REGEX: Regex = Regex::new(r"^[\s,;()]*$").expect("Invalid gap regex");
}

fn parse_number(token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| ParseError::NumberOutOfRange(token.to_string()))
}

/// Parses a word in any of the accepted notations.
///
/// # Example
/// ```
/// use chain_parser::parse_word;
/// use chain_engine::Word;
///
/// assert_eq!(parse_word("121321").unwrap(), Word::from([1, 2, 1, 3, 2, 1]));
/// assert_eq!(parse_word("(1, 2, 1)").unwrap(), Word::from([1, 2, 1]));
/// ```
pub fn parse_word(text: &str) -> Result<Word> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let caps = WORD_REGEX
        .captures(text)
        .ok_or_else(|| ParseError::MalformedWord(text.to_string()))?;
    let body = caps
        .name("body")
        .map(|m| m.as_str())
        .ok_or_else(|| ParseError::MalformedWord(text.to_string()))?;

    let tokens: Vec<&str> = SEPARATOR_REGEX.split(body).collect();
    let generators = if tokens.len() == 1 {
        // Compact form: one generator per digit
        body.chars()
            .map(|c| c.to_digit(10).map(|d| d as usize))
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(|| ParseError::MalformedWord(text.to_string()))?
    } else {
        tokens
            .iter()
            .map(|token| parse_number(token))
            .collect::<Result<Vec<usize>>>()?
    };

    if let Some(position) = generators.iter().position(|&g| g == 0) {
        return Err(ParseError::ZeroGenerator(position));
    }
    Ok(Word::from_generators(generators))
}

/// Parses a word and checks its generators against `dim`.
pub fn parse_word_with_dim(text: &str, dim: usize) -> Result<Word> {
    let word = parse_word(text)?;
    word.check_dim(dim)?;
    Ok(word)
}

/// Parses a single inversion such as `(1,2)` or `1-2`.
pub fn parse_inversion(text: &str) -> Result<Inversion> {
    let text = text.trim();
    let seq = parse_inversion_seq(text)?;
    match seq.as_slice() {
        [single] => Ok(*single),
        _ => Err(ParseError::MalformedInversion(text.to_string())),
    }
}

/// Parses a sequence of inversions separated by whitespace, commas or semicolons.
///
/// # Example
/// ```
/// use chain_parser::parse_inversion_seq;
/// use chain_engine::Inversion;
///
/// let seq = parse_inversion_seq("(1,2) (1,3); 2-3").unwrap();
/// assert_eq!(seq, vec![Inversion(1, 2), Inversion(1, 3), Inversion(2, 3)]);
/// ```
pub fn parse_inversion_seq(text: &str) -> Result<InversionSeq> {
    let mut seq = Vec::new();
    let mut last_end = 0;

    for caps in INVERSION_REGEX.captures_iter(text) {
        let whole = caps.get(0).ok_or(ParseError::Empty)?;
        check_gap(&text[last_end..whole.start()])?;
        last_end = whole.end();

        let (a, b) = match (caps.name("pa"), caps.name("pb")) {
            (Some(a), Some(b)) => (a.as_str(), b.as_str()),
            _ => match (caps.name("da"), caps.name("db")) {
                (Some(a), Some(b)) => (a.as_str(), b.as_str()),
                _ => return Err(ParseError::MalformedInversion(whole.as_str().to_string())),
            },
        };
        seq.push(Inversion(parse_number(a)?, parse_number(b)?));
    }
    check_gap(&text[last_end..])?;

    Ok(seq)
}

fn check_gap(gap: &str) -> Result<()> {
    if GAP_REGEX.is_match(gap) {
        Ok(())
    } else {
        Err(ParseError::UnexpectedText(gap.trim().to_string()))
    }
}
