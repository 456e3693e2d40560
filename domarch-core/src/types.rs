use thiserror::Error;

/// One domain hit from a hmmscan run: a single profile match against a
/// region of a query protein.
///
/// Records are immutable once parsed. All records sharing a `query` value
/// form one protein's hit set and must agree on `qlen`; a disagreement is
/// a fatal consistency error ([`DomarchError::InconsistentInput`]).
///
/// # Examples
///
/// ```rust
/// use domarch_core::types::HitRecord;
///
/// let hit = HitRecord {
///     model: "PAS".to_string(),
///     query: "KIN28_HUMAN".to_string(),
///     qlen: 540,
///     env_from: 12,
///     env_to: 118,
///     i_e_value: 3.2e-21,
///     fs_e_value: 1.1e-24,
/// };
/// assert!(hit.env_from <= hit.env_to);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    /// Name of the matched domain/profile (hmmscan target).
    pub model: String,
    /// Identifier of the scanned protein (hmmscan query).
    pub query: String,
    /// Full length of the query sequence in residues.
    pub qlen: u64,
    /// Envelope start on the query, 1-based inclusive.
    pub env_from: u64,
    /// Envelope end on the query, 1-based inclusive; `env_from <= env_to <= qlen`.
    pub env_to: u64,
    /// Independent (per-domain) e-value.
    pub i_e_value: f64,
    /// Full-sequence e-value of the model against the whole query.
    pub fs_e_value: f64,
}

/// All hits for one protein, in input encounter order.
///
/// Produced by [`crate::grouper::ProteinGrouper`] and consumed by
/// [`crate::filter::filter_protein`]; discarded after filtering.
pub type ProteinBatch = Vec<HitRecord>;

/// Error types that can occur while summarizing hmmscan output
#[derive(Error, Debug)]
pub enum DomarchError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A domtblout line could not be parsed
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the input file
        line: usize,
        /// What went wrong on that line
        message: String,
    },
    /// Error reading the alignment FASTA file
    #[error("alignment error: {0}")]
    Alignment(String),
    /// Hits for one protein disagree on query id or sequence length;
    /// the upstream input is malformed and the run must stop
    #[error("inconsistent input for query '{query}': {message}")]
    InconsistentInput {
        /// Query id of the offending protein
        query: String,
        /// Description of the disagreement
        message: String,
    },
}
