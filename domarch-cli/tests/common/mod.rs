#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Builds one hmmscan --domtblout data line with plausible filler in the
/// columns the summarizer ignores.
pub fn domtblout_line(
    model: &str,
    query: &str,
    qlen: u64,
    fs_e_value: f64,
    i_e_value: f64,
    env_from: u64,
    env_to: u64,
) -> String {
    format!(
        "{model} PF00000.1 {tlen} {query} - {qlen} {fs} 55.2 0.1 1 1 1.0e-10 {ie} 50.1 0.0 1 {tlen} {ali_from} {ali_to} {env_from} {env_to} 0.95 test domain",
        model = model,
        tlen = env_to - env_from + 1,
        query = query,
        qlen = qlen,
        fs = fs_e_value,
        ie = i_e_value,
        ali_from = env_from,
        ali_to = env_to,
        env_from = env_from,
        env_to = env_to,
    )
}

/// Writes domtblout lines (with a hmmscan-style comment header) to a
/// temporary file and returns its handle.
pub fn write_domtblout(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# hmmscan :: search sequence(s) against a profile database").unwrap();
    writeln!(file, "#").unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Writes a FASTA file with the given (header, sequence) records.
pub fn write_fasta(records: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (header, sequence) in records {
        writeln!(file, ">{}", header).unwrap();
        writeln!(file, "{}", sequence).unwrap();
    }
    file.flush().unwrap();
    file
}
