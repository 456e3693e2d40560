//! Per-protein significance filtering and architecture ordering.
//!
//! Decides whether a protein batch is reportable and, if so, produces the
//! position-sorted hit list plus the first matching hit for each required
//! target model.

use std::collections::HashSet;

use crate::types::{DomarchError, HitRecord, ProteinBatch};

/// A protein that survived all filter gates.
#[derive(Debug, Clone)]
pub struct FilteredProtein {
    /// Query id shared by every hit.
    pub query: String,
    /// Query sequence length shared by every hit.
    pub qlen: u64,
    /// Hits that passed the independent-e-value filter, stable-sorted by
    /// ascending `env_from`.
    pub hits: Vec<HitRecord>,
    /// For each target model, in caller order, the first hit in `hits`
    /// with that model. Supplies the per-target e-value report columns.
    pub owns: Vec<HitRecord>,
}

/// Filters one protein batch against the significance gates.
///
/// Gates, in order:
/// 1. If a full-sequence threshold is set, any target-model hit in the
///    *unfiltered* batch with `fs_e_value` above it suppresses the protein.
/// 2. Hits with `i_e_value` at or below the independent threshold (or all
///    hits when disabled) are retained; each target model is marked matched
///    on its first retained hit.
/// 3. The protein is suppressed unless every target matched and at least
///    one hit was retained.
///
/// Surviving hits are stable-sorted by envelope start, and the first hit
/// per target (in target order) is collected as the owns list.
///
/// Returns `Ok(None)` when the protein is suppressed (a normal, silent
/// outcome; an empty target list suppresses everything) and
/// [`DomarchError::InconsistentInput`] when the owns hits
/// disagree on query id or query length, which signals malformed input and
/// must abort the run.
pub fn filter_protein(
    batch: ProteinBatch,
    target_models: &[String],
    i_e_value_threshold: Option<f64>,
    fs_e_value_threshold: Option<f64>,
) -> Result<Option<FilteredProtein>, DomarchError> {
    // A report is meaningless without at least one required domain; an
    // empty target list quietly suppresses every protein.
    if target_models.is_empty() {
        return Ok(None);
    }

    // Gate 1: full-sequence e-value abort, checked against every hit of
    // the unfiltered batch.
    if let Some(threshold) = fs_e_value_threshold {
        for record in &batch {
            if target_models.contains(&record.model) && record.fs_e_value > threshold {
                return Ok(None);
            }
        }
    }

    // Gate 2: independent-e-value retention, tracking which targets found
    // at least one surviving hit.
    let mut filtered: Vec<HitRecord> = Vec::new();
    let mut matched: HashSet<&str> = HashSet::new();
    for record in batch {
        let keep = match i_e_value_threshold {
            Some(threshold) => record.i_e_value <= threshold,
            None => true,
        };
        if keep {
            if let Some(target) = target_models.iter().find(|t| **t == record.model) {
                matched.insert(target.as_str());
            }
            filtered.push(record);
        }
    }

    // Gate 3: every target present, and something left to render.
    if matched.len() < target_models.len() || filtered.is_empty() {
        return Ok(None);
    }

    filtered.sort_by_key(|record| record.env_from);

    // First filtered hit per target, in the caller's target order.
    let owns: Vec<HitRecord> = target_models
        .iter()
        .filter_map(|target| {
            filtered
                .iter()
                .find(|record| record.model == *target)
                .cloned()
        })
        .collect();

    let (query, qlen) = check_consistency(&owns)?;

    Ok(Some(FilteredProtein {
        query,
        qlen,
        hits: filtered,
        owns,
    }))
}

/// Verifies that all owns hits agree on one query id and one query length.
fn check_consistency(owns: &[HitRecord]) -> Result<(String, u64), DomarchError> {
    let first = owns.first().expect("owns is non-empty after presence gate");
    for own in &owns[1..] {
        if own.query != first.query {
            return Err(DomarchError::InconsistentInput {
                query: first.query.clone(),
                message: format!("hit for model '{}' has query '{}'", own.model, own.query),
            });
        }
        if own.qlen != first.qlen {
            return Err(DomarchError::InconsistentInput {
                query: first.query.clone(),
                message: format!(
                    "hit for model '{}' has qlen {} (expected {})",
                    own.model, own.qlen, first.qlen
                ),
            });
        }
    }
    Ok((first.query.clone(), first.qlen))
}
