//! Textual rendering of a protein's domain architecture.
//!
//! Two renderings are produced from the same position-sorted hit list: a
//! compact overview (model names joined by closeness glyphs) and a detailed
//! form annotating each domain with its envelope and independent e-value,
//! with inter-domain gaps banded into dash runs.

use crate::constants::{
    CLOSE_DOMAIN_LIMIT, CLOSE_SEPARATOR, DISTANT_SEPARATOR, E_VALUE_SCIENTIFIC_CUTOFF,
    GAP_BAND_WIDTH, LONG_GAP_BANDS, LONG_GAP_MARKER,
};
use crate::types::HitRecord;

/// Formats an e-value for report output.
///
/// Values below [`E_VALUE_SCIENTIFIC_CUTOFF`] render in scientific
/// notation (`1.1e-24`), everything else in plain decimal form (`0.01`),
/// matching how hmmscan itself prints these magnitudes.
///
/// # Examples
///
/// ```rust
/// use domarch_core::render::format_e_value;
///
/// assert_eq!(format_e_value(0.01), "0.01");
/// assert_eq!(format_e_value(1.1e-24), "1.1e-24");
/// ```
pub fn format_e_value(value: f64) -> String {
    if value > 0.0 && value < E_VALUE_SCIENTIFIC_CUTOFF {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Renders a gap of `d` residues as an inter-domain sequence marker.
///
/// The gap is divided into bands of [`GAP_BAND_WIDTH`] residues: at
/// [`LONG_GAP_BANDS`] or more bands the marker collapses to
/// [`LONG_GAP_MARKER`], otherwise one dash is emitted per full band. Gaps
/// under one band render as `~` when `mark_short` is set and as nothing
/// otherwise. Negative gaps (overlapping envelopes) band like short ones.
pub fn interdomain_marker(d: i64, mark_short: bool) -> String {
    let bands = d / GAP_BAND_WIDTH;
    if bands >= LONG_GAP_BANDS {
        LONG_GAP_MARKER.to_string()
    } else if bands >= 1 {
        "-".repeat(bands as usize)
    } else if mark_short {
        CLOSE_SEPARATOR.to_string()
    } else {
        String::new()
    }
}

/// Residues strictly between two consecutive hits.
fn gap_between(previous: &HitRecord, next: &HitRecord) -> i64 {
    next.env_from as i64 - previous.env_to as i64 - 1
}

/// Renders the compact overview architecture string.
///
/// Model names are concatenated left to right; consecutive domains at most
/// [`CLOSE_DOMAIN_LIMIT`] residues apart are joined by `~`, more distant
/// ones by `----`.
///
/// # Examples
///
/// ```rust
/// use domarch_core::render::overview_architecture;
/// use domarch_core::types::HitRecord;
///
/// # fn hit(model: &str, from: u64, to: u64) -> HitRecord {
/// #     HitRecord { model: model.into(), query: "P1".into(), qlen: 200,
/// #         env_from: from, env_to: to, i_e_value: 0.01, fs_e_value: 0.001 }
/// # }
/// let hits = vec![hit("A", 10, 30), hit("B", 50, 70), hit("C", 150, 180)];
/// assert_eq!(overview_architecture(&hits), "A~B----C");
/// ```
pub fn overview_architecture(hits: &[HitRecord]) -> String {
    let mut overview = String::new();
    let mut previous: Option<&HitRecord> = None;
    for hit in hits {
        if let Some(prev) = previous {
            if gap_between(prev, hit) <= CLOSE_DOMAIN_LIMIT {
                overview.push_str(CLOSE_SEPARATOR);
            } else {
                overview.push_str(DISTANT_SEPARATOR);
            }
        }
        overview.push_str(&hit.model);
        previous = Some(hit);
    }
    overview
}

/// Renders the detailed architecture string.
///
/// Each hit becomes `model[env_from-env_to i_e_value]`, preceded by the
/// banded marker for the gap since the previous hit. The leading marker is
/// banded from `env_from` of the first hit and the trailing marker from
/// `qlen - env_to` of the last hit, both without short-gap marking.
pub fn detailed_architecture(hits: &[HitRecord], qlen: u64) -> String {
    let mut detailed = String::new();
    let mut previous: Option<&HitRecord> = None;
    for hit in hits {
        let marker = match previous {
            Some(prev) => interdomain_marker(gap_between(prev, hit), true),
            None => interdomain_marker(hit.env_from as i64, false),
        };
        detailed.push_str(&marker);
        detailed.push_str(&hit.model);
        detailed.push('[');
        detailed.push_str(&format!(
            "{}-{} {}",
            hit.env_from,
            hit.env_to,
            format_e_value(hit.i_e_value)
        ));
        detailed.push(']');
        previous = Some(hit);
    }
    if let Some(last) = previous {
        detailed.push_str(&interdomain_marker(
            qlen as i64 - last.env_to as i64,
            false,
        ));
    }
    detailed
}
