use crate::presets::Preset;
use anyhow::{Context, Result};
use chain_engine::{
    get_braid_cover, poset_edges, BraidCoverGraph, ChainFingerprint, Edge, FingerprintSummary,
    Permutation, SubchainFilter, Word,
};
use chain_parser::{load_subchains_from_path, parse_word_with_dim};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// JSON output structure for each edge
#[derive(Serialize)]
struct EdgeOutput<'a> {
    step: usize,
    source: &'a Word,
    target: &'a Word,
}

/// Closing line of a graph run
#[derive(Serialize)]
struct GraphSummary {
    label: String,
    edges: usize,
    chains: usize,
    dim: usize,
    verified: bool,
    fingerprint: FingerprintSummary,
}

/// JSON output structure for each cover relation of the poset
#[derive(Serialize)]
struct RelationOutput<'a> {
    upper: &'a Permutation,
    lower: &'a Permutation,
}

#[derive(Serialize)]
struct CoverOutput {
    word: Word,
    p: usize,
    covers: Vec<Word>,
}

/// Parses the seed and settles its dimension.
fn seed_and_dim(text: &str, dim: Option<usize>) -> Result<(Word, usize)> {
    let dim = match dim {
        Some(dim) => dim,
        None => chain_parser::parse_word(text)
            .with_context(|| format!("invalid word '{}'", text))?
            .min_dim(),
    };
    let word = parse_word_with_dim(text, dim).with_context(|| format!("invalid word '{}'", text))?;
    Ok((word, dim))
}

fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_edges<W: Write>(edges: &[Edge], first_step: usize, out: &mut W) -> Result<()> {
    for (offset, edge) in edges.iter().enumerate() {
        write_line(
            out,
            &EdgeOutput {
                step: first_step + offset,
                source: &edge.source,
                target: &edge.target,
            },
        )?;
    }
    Ok(())
}

fn summarize(
    label: String,
    graph: &BraidCoverGraph,
    seed: &Word,
    dim: usize,
    check: bool,
) -> Result<GraphSummary> {
    if check {
        graph
            .verify(dim)
            .context("braid cover graph failed the invariant check")?;
    }
    Ok(GraphSummary {
        label,
        edges: graph.len(),
        chains: graph.nodes().len(),
        dim,
        verified: check,
        fingerprint: ChainFingerprint::of_word(seed, dim)?.summary(),
    })
}

/// Builds a braid cover graph and prints one line per edge plus a summary.
pub fn run_graph<W: Write>(
    text: &str,
    dim: Option<usize>,
    restricted_csv: Option<&Path>,
    check: bool,
    out: &mut W,
) -> Result<()> {
    let (seed, dim) = seed_and_dim(text, dim)?;

    let graph = match restricted_csv {
        Some(path) => {
            let allowed = load_subchains_from_path(path)
                .with_context(|| format!("reading subchains from {}", path.display()))?;
            info!(subchains = allowed.len(), dim, "restricted mode");
            let filter = SubchainFilter::new(dim, allowed)?;
            BraidCoverGraph::build_restricted(&seed, &filter)?
        }
        None => BraidCoverGraph::build(&seed),
    };

    write_edges(graph.edges(), 1, out)?;
    let summary = summarize(format!("BCG({})", seed), &graph, &seed, dim, check)?;
    write_line(out, &summary)
}

/// Prints the Hasse diagram of the poset spanned by the graph of `text`.
pub fn run_poset<W: Write>(text: &str, dim: Option<usize>, out: &mut W) -> Result<()> {
    let (seed, dim) = seed_and_dim(text, dim)?;
    let graph = BraidCoverGraph::build(&seed);
    let relations = poset_edges(&graph, dim)?;
    for relation in &relations {
        write_line(
            out,
            &RelationOutput {
                upper: &relation.upper,
                lower: &relation.lower,
            },
        )?;
    }
    info!(relations = relations.len(), "poset written");
    Ok(())
}

/// Prints the result of a single braid-cover search.
pub fn run_cover<W: Write>(text: &str, p: usize, out: &mut W) -> Result<()> {
    let (word, _) = seed_and_dim(text, None)?;
    let covers = get_braid_cover(&word, p).into_iter().collect();
    write_line(out, &CoverOutput { word, p, covers })
}

/// Runs a built-in experiment, concatenating the edge lists of its graphs.
pub fn run_preset<W: Write>(preset: Preset, check: bool, out: &mut W) -> Result<()> {
    let mut combined = BraidCoverGraph::default();
    let mut step = 1;
    let mut first_seed = None;

    for run in preset.runs()? {
        let graph = match &run.filter {
            Some(filter) => BraidCoverGraph::build_restricted(&run.seed, filter)?,
            None => BraidCoverGraph::build(&run.seed),
        };
        info!(label = run.label, edges = graph.len(), "preset graph built");
        write_edges(graph.edges(), step, out)?;
        step += graph.len();
        first_seed.get_or_insert(run.seed);
        combined.extend(graph);
    }

    let seed = first_seed.context("preset has no graphs")?;
    let summary = summarize(format!("{:?}", preset), &combined, &seed, preset.dim(), check)?;
    write_line(out, &summary)
}
