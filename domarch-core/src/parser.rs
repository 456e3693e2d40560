//! Parser for the hmmscan `--domtblout` per-domain table format.
//!
//! Each data line is one domain hit; comment lines start with `#`. Columns
//! are whitespace-delimited with a free-text description after the last
//! fixed column. Only the columns needed for architecture summarization
//! are retained (model, query, qlen, envelope coordinates, e-values).

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::constants::DOMTBLOUT_MIN_COLUMNS;
use crate::types::{DomarchError, HitRecord};

// Fixed column positions in --domtblout output (HMMER 3.x).
const COL_MODEL: usize = 0;
const COL_QUERY: usize = 3;
const COL_QLEN: usize = 5;
const COL_FS_E_VALUE: usize = 6;
const COL_I_E_VALUE: usize = 12;
const COL_ENV_FROM: usize = 19;
const COL_ENV_TO: usize = 20;

/// Strips a UniProt-style database prefix from a query identifier.
///
/// Headers of the form `sp|ACCESSION|NAME` or `tr|ACCESSION|NAME` are
/// reduced to `NAME`; anything else is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use domarch_core::parser::normalize_query_id;
///
/// assert_eq!(normalize_query_id("sp|P04637|P53_HUMAN"), "P53_HUMAN");
/// assert_eq!(normalize_query_id("P53_HUMAN"), "P53_HUMAN");
/// ```
pub fn normalize_query_id(id: &str) -> &str {
    let mut tokens = id.split('|');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some("sp") | Some("tr"), Some(_accession), Some(name)) if !name.is_empty() => name,
        _ => id,
    }
}

/// Streaming iterator over the records of a hmmscan `--domtblout` source.
///
/// Comment lines (`#`) and blank lines are skipped. One record is parsed
/// per step, so memory stays bounded by a single line no matter how large
/// the scan output is. Records come out in file order, which keeps hits
/// for one query contiguous as hmmscan emits them.
///
/// Each item is a [`Result`]: parse failures carry the 1-based line number
/// ([`DomarchError::Parse`]) and read failures surface as
/// [`DomarchError::Io`].
pub struct DomtbloutRecords<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> DomtbloutRecords<R> {
    /// Creates a record iterator over a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for DomtbloutRecords<R> {
    type Item = Result<HitRecord, DomarchError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(error) => return Some(Err(error.into())),
            };
            self.line_number += 1;
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(parse_line(trimmed, self.line_number));
        }
    }
}

/// Parses hmmscan `--domtblout` output from any buffered reader into a
/// vector, stopping at the first invalid line.
///
/// # Errors
///
/// Returns [`DomarchError::Parse`] with the 1-based line number for lines
/// with too few columns or non-numeric coordinate/e-value fields, and
/// [`DomarchError::Io`] if reading fails.
pub fn read_domtblout<R: BufRead>(reader: R) -> Result<Vec<HitRecord>, DomarchError> {
    DomtbloutRecords::new(reader).collect()
}

/// Parses a hmmscan `--domtblout` file by path.
pub fn read_domtblout_file<P: AsRef<Path>>(path: P) -> Result<Vec<HitRecord>, DomarchError> {
    let file = File::open(path)?;
    read_domtblout(BufReader::new(file))
}

fn parse_line(line: &str, line_number: usize) -> Result<HitRecord, DomarchError> {
    let columns: Vec<&str> = line.split_ascii_whitespace().collect();
    if columns.len() < DOMTBLOUT_MIN_COLUMNS {
        return Err(DomarchError::Parse {
            line: line_number,
            message: format!(
                "expected at least {} columns, found {}",
                DOMTBLOUT_MIN_COLUMNS,
                columns.len()
            ),
        });
    }

    let record = HitRecord {
        model: columns[COL_MODEL].to_string(),
        query: normalize_query_id(columns[COL_QUERY]).to_string(),
        qlen: parse_field(columns[COL_QLEN], "qlen", line_number)?,
        env_from: parse_field(columns[COL_ENV_FROM], "env_from", line_number)?,
        env_to: parse_field(columns[COL_ENV_TO], "env_to", line_number)?,
        i_e_value: parse_field(columns[COL_I_E_VALUE], "i-E-value", line_number)?,
        fs_e_value: parse_field(columns[COL_FS_E_VALUE], "E-value", line_number)?,
    };

    if record.env_from > record.env_to || record.env_to > record.qlen {
        return Err(DomarchError::Parse {
            line: line_number,
            message: format!(
                "envelope {}-{} outside query of length {}",
                record.env_from, record.env_to, record.qlen
            ),
        });
    }

    Ok(record)
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    field: &str,
    line_number: usize,
) -> Result<T, DomarchError> {
    value.parse().map_err(|_| DomarchError::Parse {
        line: line_number,
        message: format!("invalid {} value '{}'", field, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // One realistic domtblout data line (columns past env_to are ignored).
    const LINE: &str = "PAS                  PF00989.27   113 sp|P79811|KIN1_YEAST -            540   1.1e-24   86.0   0.1   1   2   4.4e-23   3.2e-21   75.3   0.0     2   110    12   115    10   118 0.92 PAS fold";

    #[test]
    fn test_parse_single_line() {
        let records = read_domtblout(LINE.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.model, "PAS");
        assert_eq!(r.query, "KIN1_YEAST");
        assert_eq!(r.qlen, 540);
        assert_eq!(r.env_from, 10);
        assert_eq!(r.env_to, 118);
        assert_eq!(r.fs_e_value, 1.1e-24);
        assert_eq!(r.i_e_value, 3.2e-21);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let input = format!("# hmmscan :: search\n#\n\n{}\n# [ok]\n", LINE);
        let records = read_domtblout(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_too_few_columns_reports_line_number() {
        let input = format!("{}\nPAS PF00989 113\n", LINE);
        let err = read_domtblout(input.as_bytes()).unwrap_err();
        match err {
            DomarchError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_numeric_field() {
        let bad = LINE.replace("   540   ", "   xxx   ");
        let err = read_domtblout(bad.as_bytes()).unwrap_err();
        match err {
            DomarchError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("qlen"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_outside_query_rejected() {
        // env_to beyond qlen
        let bad = LINE.replace("   10   118 ", "   10   600 ");
        assert!(read_domtblout(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_normalize_query_id_variants() {
        assert_eq!(normalize_query_id("sp|P04637|P53_HUMAN"), "P53_HUMAN");
        assert_eq!(normalize_query_id("tr|A0A024|Q9_HUMAN"), "Q9_HUMAN");
        assert_eq!(normalize_query_id("pdb|1ABC|X"), "pdb|1ABC|X");
        assert_eq!(normalize_query_id("sp|P04637|"), "sp|P04637|");
        assert_eq!(normalize_query_id("plain_id"), "plain_id");
    }

    #[test]
    fn test_records_iterator_reports_errors_in_place() {
        let input = format!("{}\nnot a record\n", LINE);
        let mut records = DomtbloutRecords::new(input.as_bytes());
        let first = records.next().unwrap().unwrap();
        assert_eq!(first.query, "KIN1_YEAST");
        match records.next().unwrap() {
            Err(DomarchError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(records.next().is_none());
    }

    #[test]
    fn test_read_domtblout_file_not_found() {
        let result = read_domtblout_file("no_such_file.domtblout");
        match result {
            Err(DomarchError::Io(_)) => {}
            _ => panic!("expected IO error for missing file"),
        }
    }

    #[test]
    fn test_read_domtblout_file_roundtrip() {
        use std::io::Write;
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "# comment").unwrap();
        writeln!(tmp, "{}", LINE).unwrap();
        let records = read_domtblout_file(tmp.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].query, "KIN1_YEAST");
    }
}
