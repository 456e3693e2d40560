//! Streaming group-by-adjacency over hmmscan hit records.
//!
//! hmmscan emits all domain hits for one query contiguously (though not
//! sorted by position). [`ProteinGrouper`] walks that stream with an
//! explicit accumulator, flushing one [`ProteinBatch`] whenever the query
//! id changes and once more at end of input.

use std::collections::HashSet;
use std::iter::Peekable;

use crate::types::{HitRecord, ProteinBatch};

/// Iterator adapter yielding one batch of hits per protein.
///
/// The source must keep hits for the same query adjacent; the grouper only
/// detects boundaries, it does not re-sort. An optional exclusion set drops
/// records by model name before they are accumulated.
///
/// # Examples
///
/// ```rust
/// use domarch_core::grouper::ProteinGrouper;
/// use domarch_core::types::HitRecord;
///
/// # fn hit(query: &str, model: &str) -> HitRecord {
/// #     HitRecord { model: model.into(), query: query.into(), qlen: 100,
/// #         env_from: 1, env_to: 10, i_e_value: 0.0, fs_e_value: 0.0 }
/// # }
/// let records = vec![hit("P1", "A"), hit("P1", "B"), hit("P2", "A")];
/// let batches: Vec<_> = ProteinGrouper::new(records.into_iter()).collect();
/// assert_eq!(batches.len(), 2);
/// assert_eq!(batches[0].len(), 2);
/// ```
pub struct ProteinGrouper<I: Iterator<Item = HitRecord>> {
    source: Peekable<I>,
    excluded_models: HashSet<String>,
}

impl<I: Iterator<Item = HitRecord>> ProteinGrouper<I> {
    /// Creates a grouper with no model exclusions.
    pub fn new(source: I) -> Self {
        Self {
            source: source.peekable(),
            excluded_models: HashSet::new(),
        }
    }

    /// Creates a grouper that drops records whose model is in `excluded`.
    pub fn with_exclusions<S: Into<String>>(
        source: I,
        excluded: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            source: source.peekable(),
            excluded_models: excluded.into_iter().map(Into::into).collect(),
        }
    }
}

impl<I: Iterator<Item = HitRecord>> Iterator for ProteinGrouper<I> {
    type Item = ProteinBatch;

    fn next(&mut self) -> Option<ProteinBatch> {
        // States: empty (no current query) and accumulating(query). A batch
        // is complete when the upcoming record's query differs, or the
        // source runs dry with a non-empty accumulator. The outer loop skips
        // fully excluded proteins without growing the stack.
        loop {
            let mut batch: ProteinBatch = Vec::new();
            let mut current_query: Option<String> = None;

            while let Some(record) = self.source.peek() {
                match &current_query {
                    Some(query) if *query != record.query => break,
                    Some(_) => {}
                    None => current_query = Some(record.query.clone()),
                }
                let record = self.source.next().expect("peeked record");
                if !self.excluded_models.contains(&record.model) {
                    batch.push(record);
                }
            }

            if !batch.is_empty() {
                return Some(batch);
            }
            // A fully excluded protein yields nothing; move on to the next.
            current_query?;
        }
    }
}
