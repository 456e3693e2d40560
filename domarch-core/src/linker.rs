//! Linker extraction between two adjacent target domains.
//!
//! When exactly two target models are requested and the filtered hit list
//! contains them adjacently in position order, the residue span strictly
//! between the two envelopes can be cut out of a caller-supplied sequence
//! alignment.

use bio::io::fasta;
use std::fs::File;
use std::path::Path;

use crate::types::DomarchError;

/// One named sequence loaded from the alignment file.
#[derive(Debug, Clone)]
pub struct AlignedSequence {
    /// Full FASTA header (id plus description, if any).
    pub name: String,
    /// Residues, gaps included as stored in the file.
    pub sequence: Vec<u8>,
}

/// Read-only lookup of alignment sequences by whole-token name match.
///
/// Headers are commonly of the form `db|accession|ID description`; a query
/// id matches a sequence when it equals one complete `|`- or
/// whitespace-delimited token of the header, never a substring.
#[derive(Debug, Default)]
pub struct AlignmentLookup {
    sequences: Vec<AlignedSequence>,
}

impl AlignmentLookup {
    /// Loads all sequences from a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns [`DomarchError::Io`] if the file cannot be opened and
    /// [`DomarchError::Alignment`] on malformed FASTA content.
    pub fn from_fasta_file<P: AsRef<Path>>(path: P) -> Result<Self, DomarchError> {
        let file = File::open(path)?;
        let reader = fasta::Reader::new(file);
        let mut sequences = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| DomarchError::Alignment(e.to_string()))?;
            let name = match record.desc() {
                Some(desc) => format!("{} {}", record.id(), desc),
                None => record.id().to_string(),
            };
            sequences.push(AlignedSequence {
                name,
                sequence: record.seq().to_vec(),
            });
        }
        Ok(Self { sequences })
    }

    /// Builds a lookup from in-memory sequences.
    pub fn from_sequences(sequences: Vec<AlignedSequence>) -> Self {
        Self { sequences }
    }

    /// Number of sequences held.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether the lookup holds no sequences.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Finds the first sequence whose header contains `query` as a whole
    /// token.
    pub fn find(&self, query: &str) -> Option<&AlignedSequence> {
        self.sequences.iter().find(|seq| {
            seq.name
                .split(|c: char| c.is_whitespace() || c == '|')
                .any(|token| token == query)
        })
    }
}

/// Extracts the residue span strictly between two adjacent domains.
///
/// `first_env_to` and `second_env_from` are 1-based envelope coordinates of
/// the left and right domain; the extracted span covers 1-based positions
/// `first_env_to ..= second_env_from - 1` of the sequence matching `query`.
///
/// Returns `None` when the gap is empty or negative, when no sequence
/// matches the query, or when the span runs past the end of the matched
/// sequence. All of these are quiet per-protein misses, not errors.
///
/// # Examples
///
/// ```rust
/// use domarch_core::linker::{AlignedSequence, AlignmentLookup, extract_linker};
///
/// let lookup = AlignmentLookup::from_sequences(vec![AlignedSequence {
///     name: "sp|P00001|P1".to_string(),
///     sequence: b"MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ".to_vec(),
/// }]);
/// let linker = extract_linker(5, 10, "P1", &lookup).unwrap();
/// assert_eq!(linker, "YIAKQ");
/// ```
pub fn extract_linker(
    first_env_to: u64,
    second_env_from: u64,
    query: &str,
    alignment: &AlignmentLookup,
) -> Option<String> {
    if first_env_to == 0 || second_env_from <= first_env_to {
        return None;
    }
    let sequence = alignment.find(query)?;
    let start = (first_env_to - 1) as usize;
    let end = (second_env_from - 1) as usize;
    let span = sequence.sequence.get(start..end)?;
    Some(String::from_utf8_lossy(span).into_owned())
}
