use crate::{parse_inversion_seq, Result};
use chain_engine::{InversionSeq, SubchainSet};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One record of a subchain file.
///
/// Each field holds one inversion (`1-2`) or several (`"(1,2) (1,3)"`);
/// the fields of a record are concatenated into one inversion sequence.
/// Lines starting with `#` are comments.
#[derive(Debug, Deserialize)]
pub struct SubchainRecord(pub Vec<String>);

impl SubchainRecord {
    /// Parses the record into an inversion sequence.
    pub fn to_inversions(&self) -> Result<InversionSeq> {
        let mut seq = Vec::new();
        for field in &self.0 {
            seq.extend(parse_inversion_seq(field)?);
        }
        Ok(seq)
    }

    fn is_blank(&self) -> bool {
        self.0.iter().all(|field| field.trim().is_empty())
    }
}

/// Reads an allowed-subchain set `K` from CSV.
///
/// # Example
/// ```
/// use chain_parser::load_subchains;
///
/// let data = "1-2,1-3,2-3\n# comment\n2-3,1-3,1-2\n";
/// let set = load_subchains(data.as_bytes()).unwrap();
/// assert_eq!(set.len(), 2);
/// ```
pub fn load_subchains<R: Read>(reader: R) -> Result<SubchainSet> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut set = SubchainSet::new();
    for result in csv_reader.deserialize::<SubchainRecord>() {
        let record = result?;
        if record.is_blank() {
            continue;
        }
        set.insert(record.to_inversions()?);
    }
    Ok(set)
}

/// Reads an allowed-subchain set `K` from a CSV file.
pub fn load_subchains_from_path<P: AsRef<Path>>(path: P) -> Result<SubchainSet> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    load_subchains(std::io::BufReader::new(file))
}
