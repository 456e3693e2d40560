use crate::render::format_e_value;

/// Summary of one reportable protein's domain architecture.
///
/// Assembled by the analyzer from the filtered hit list and the rendered
/// architecture strings; written out as one tab-separated report line.
///
/// # Examples
///
/// ```rust
/// use domarch_core::results::ProteinSummary;
///
/// let summary = ProteinSummary {
///     query: "P1".to_string(),
///     species: "HUMAN".to_string(),
///     target_e_values: vec![0.001, 0.002],
///     qlen: 100,
///     hit_count: 2,
///     models: vec!["A".to_string(), "B".to_string()],
///     overview: "A~B".to_string(),
///     detailed: "A[10-30 0.01]~B[50-70 0.02]-".to_string(),
///     linker: None,
/// };
/// assert!(summary.report_line().starts_with("P1\tHUMAN\t"));
/// ```
#[derive(Debug, Clone)]
pub struct ProteinSummary {
    /// Query protein identifier.
    pub query: String,
    /// Species label from the configuration, passed through verbatim.
    pub species: String,
    /// Full-sequence e-value of the first matching hit per target model,
    /// in target order.
    pub target_e_values: Vec<f64>,
    /// Length of the query protein in residues.
    pub qlen: u64,
    /// Number of hits that survived filtering.
    pub hit_count: usize,
    /// Model names of the surviving hits, in position order.
    pub models: Vec<String>,
    /// Compact overview architecture string.
    pub overview: String,
    /// Detailed architecture string with envelopes and e-values.
    pub detailed: String,
    /// Residue span between the two target domains, when linker extraction
    /// was active and found one.
    pub linker: Option<Linker>,
}

/// An extracted inter-domain linker with its position on the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Linker {
    /// First residue of the linker, 1-based inclusive.
    pub from: u64,
    /// Last residue of the linker, 1-based inclusive.
    pub to: u64,
    /// The linker residues.
    pub residues: String,
}

impl ProteinSummary {
    /// Assembles the tab-separated report line (without trailing newline).
    ///
    /// Fields: query, species, one e-value per target, protein length, hit
    /// count, space-separated model list, overview, detailed.
    pub fn report_line(&self) -> String {
        let mut line = String::new();
        line.push_str(&self.query);
        line.push('\t');
        line.push_str(&self.species);
        line.push('\t');
        for e_value in &self.target_e_values {
            line.push_str(&format_e_value(*e_value));
            line.push('\t');
        }
        line.push_str(&format!("{}\t", self.qlen));
        line.push_str(&format!("{}\t", self.hit_count));
        for model in &self.models {
            line.push_str(model);
            line.push(' ');
        }
        line.push('\t');
        line.push_str(&self.overview);
        line.push('\t');
        line.push_str(&self.detailed);
        line
    }
}

/// Counters for one summarization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    /// Distinct proteins seen in the input stream.
    pub proteins_seen: usize,
    /// Proteins that passed all gates and produced a report line.
    pub proteins_reported: usize,
    /// Linkers extracted (at most one per reported protein).
    pub linkers_extracted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_field_order() {
        let summary = ProteinSummary {
            query: "P1".to_string(),
            species: "HUMAN".to_string(),
            target_e_values: vec![0.001, 0.002],
            qlen: 100,
            hit_count: 2,
            models: vec!["A".to_string(), "B".to_string()],
            overview: "A~B".to_string(),
            detailed: "A[10-30 0.01]~B[50-70 0.02]-".to_string(),
            linker: None,
        };
        assert_eq!(
            summary.report_line(),
            "P1\tHUMAN\t0.001\t0.002\t100\t2\tA B \tA~B\tA[10-30 0.01]~B[50-70 0.02]-"
        );
    }

    #[test]
    fn test_report_line_scientific_e_value_columns() {
        let summary = ProteinSummary {
            query: "P1".to_string(),
            species: "HUMAN".to_string(),
            target_e_values: vec![1.1e-24],
            qlen: 540,
            hit_count: 1,
            models: vec!["PAS".to_string()],
            overview: "PAS".to_string(),
            detailed: "PAS[10-110 3.2e-21]----//----".to_string(),
            linker: None,
        };
        assert_eq!(
            summary.report_line(),
            "P1\tHUMAN\t1.1e-24\t540\t1\tPAS \tPAS\tPAS[10-110 3.2e-21]----//----"
        );
    }

    #[test]
    fn test_report_line_single_target() {
        let summary = ProteinSummary {
            query: "Q8".to_string(),
            species: "MOUSE".to_string(),
            target_e_values: vec![1.5e-30],
            qlen: 250,
            hit_count: 1,
            models: vec!["PAS".to_string()],
            overview: "PAS".to_string(),
            detailed: "PAS[5-120 0.5]------".to_string(),
            linker: None,
        };
        let line = summary.report_line();
        assert_eq!(line.matches('\t').count(), 7);
        assert!(line.contains("\tPAS \t"));
    }
}
