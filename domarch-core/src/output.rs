//! Report output for domain-architecture summaries.
//!
//! One tab-separated line per reportable protein, plus an optional FASTA
//! side-output for extracted linker sequences.

use std::io::Write;

use crate::results::ProteinSummary;
use crate::types::DomarchError;

/// Writes one protein summary as a tab-separated report line.
///
/// # Errors
///
/// Returns [`DomarchError::Io`] if writing fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &ProteinSummary,
) -> Result<(), DomarchError> {
    writeln!(writer, "{}", summary.report_line())?;
    Ok(())
}

/// Writes an extracted linker as one FASTA record.
///
/// The header is `>query/from-to` where `from` and `to` are the 1-based
/// bounds of the linker span on the query sequence.
pub fn write_linker_fasta<W: Write>(
    writer: &mut W,
    query: &str,
    from: u64,
    to: u64,
    linker: &str,
) -> Result<(), DomarchError> {
    writeln!(writer, ">{}/{}-{}", query, from, to)?;
    writeln!(writer, "{}", linker)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn test_summary() -> ProteinSummary {
        ProteinSummary {
            query: "P1".to_string(),
            species: "HUMAN".to_string(),
            target_e_values: vec![0.001],
            qlen: 100,
            hit_count: 1,
            models: vec!["A".to_string()],
            overview: "A".to_string(),
            detailed: "A[10-30 0.01]---".to_string(),
            linker: None,
        }
    }

    #[test]
    fn test_write_summary_appends_newline() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        write_summary(&mut cursor, &test_summary()).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("P1\tHUMAN\t"));
    }

    #[test]
    fn test_write_linker_fasta_record() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        write_linker_fasta(&mut cursor, "P1", 30, 49, "LLLLL").unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, ">P1/30-49\nLLLLL\n");
    }
}
