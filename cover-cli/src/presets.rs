use anyhow::{Context, Result};
use chain_engine::{SubchainFilter, Word};
use chain_parser::{load_subchains, parse_word};
use clap::ValueEnum;

/// Built-in experiments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Full braid cover graph of 121321 in P4
    P4,
    /// Union of the two restricted braid cover graphs in P5
    P5,
}

/// One graph to build as part of a preset.
#[derive(Debug, Clone)]
pub struct PresetRun {
    pub label: &'static str,
    pub seed: Word,
    pub filter: Option<SubchainFilter>,
}

// Part of the maximal chains of the chain cover poset of P4
const P5_K1: &str = "\
1-2,1-3,2-3,1-4,2-4,3-4
1-2,1-3,1-4,2-3,2-4,3-4
2-3,2-4,3-4,1-4,1-3,1-2
2-3,1-3,2-4,1-4,3-4,1-2
";

// The two remaining chains of the chain cover poset of P4
const P5_K2: &str = "\
3-4,1-2,1-4,1-3,2-4,2-3
3-4,2-4,1-4,1-2,1-3,2-3
";

fn restricted(label: &'static str, word: &str, dim: usize, k: &str) -> Result<PresetRun> {
    let seed = parse_word(word).with_context(|| format!("preset seed {}", word))?;
    let allowed = load_subchains(k.as_bytes()).with_context(|| format!("preset K for {}", label))?;
    Ok(PresetRun {
        label,
        seed,
        filter: Some(SubchainFilter::new(dim, allowed)?),
    })
}

impl Preset {
    /// The graphs making up this preset; their edge lists are concatenated.
    pub fn runs(self) -> Result<Vec<PresetRun>> {
        match self {
            Preset::P4 => Ok(vec![PresetRun {
                label: "BCG(121321)",
                seed: parse_word("121321")?,
                filter: None,
            }]),
            Preset::P5 => Ok(vec![
                restricted("restricted BCG(1213214321)", "1213214321", 5, P5_K1)?,
                restricted("restricted BCG(3212343213)", "3212343213", 5, P5_K2)?,
            ]),
        }
    }

    pub fn dim(self) -> usize {
        match self {
            Preset::P4 => 4,
            Preset::P5 => 5,
        }
    }
}
