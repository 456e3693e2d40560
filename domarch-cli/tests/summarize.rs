mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

use crate::common::{domtblout_line, write_domtblout, write_fasta};

fn domarch() -> Command {
    Command::cargo_bin("domarch").unwrap()
}

#[test]
fn reports_protein_with_all_targets() {
    let input = write_domtblout(&[
        domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30),
        domtblout_line("B", "P1", 100, 0.002, 0.02, 50, 70),
    ]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "A/B", "-q"])
        .assert()
        .success()
        .stdout("P1\tHUMAN\t0.001\t0.002\t100\t2\tA B \tA~B\tA[10-30 0.01]~B[50-70 0.02]-\n");
}

#[test]
fn protein_missing_a_target_is_suppressed() {
    let input = write_domtblout(&[
        domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30),
        domtblout_line("A", "P2", 100, 0.001, 0.01, 10, 30),
        domtblout_line("B", "P2", 100, 0.002, 0.02, 50, 70),
    ]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "A/B", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P2\t").and(predicate::str::contains("P1\t").not()));
}

#[test]
fn independent_threshold_drops_weak_hits() {
    let input = write_domtblout(&[
        domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30),
        domtblout_line("Weak", "P1", 100, 0.001, 5.0, 40, 45),
    ]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "A", "--ie", "0.5", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t1\tA \t").and(predicate::str::contains("Weak").not()));
}

#[test]
fn full_sequence_threshold_suppresses_protein() {
    let input = write_domtblout(&[domtblout_line("A", "P1", 100, 10.0, 0.01, 10, 30)]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "A", "--pe", "1.0", "-q"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn negative_threshold_is_rejected() {
    let input = write_domtblout(&[domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30)]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "A", "--ie", "-1.0", "-q"])
        .assert()
        .failure();
}

#[test]
fn missing_models_option_is_rejected() {
    let input = write_domtblout(&[domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30)]);

    domarch().arg("-i").arg(input.path()).assert().failure();
}

#[test]
fn empty_models_option_is_rejected() {
    let input = write_domtblout(&[domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30)]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target model"));
}

#[test]
fn linkers_written_as_fasta() {
    let input = write_domtblout(&[
        domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30),
        domtblout_line("B", "P1", 100, 0.002, 0.02, 50, 70),
    ]);
    let residues: String = (1..=100u64)
        .map(|p| if (30..=49).contains(&p) { 'L' } else { 'x' })
        .collect();
    let fasta = write_fasta(&[("sp|P00001|P1 test protein", &residues)]);
    let linkers = NamedTempFile::new().unwrap();

    domarch()
        .arg("-i")
        .arg(input.path())
        .arg("-a")
        .arg(fasta.path())
        .arg("-l")
        .arg(linkers.path())
        .args(["-m", "A/B", "-q"])
        .assert()
        .success();

    let written = std::fs::read_to_string(linkers.path()).unwrap();
    assert_eq!(written, format!(">P1/30-49\n{}\n", "L".repeat(20)));
}

#[test]
fn inconsistent_qlen_aborts_with_diagnostic() {
    let input = write_domtblout(&[
        domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30),
        domtblout_line("B", "P1", 200, 0.002, 0.02, 50, 70),
    ]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "A/B", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inconsistent input"));
}

#[test]
fn excluded_models_do_not_reach_the_report() {
    let input = write_domtblout(&[
        domtblout_line("RRM_1", "P1", 100, 0.001, 0.01, 5, 8),
        domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30),
    ]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "A", "--exclude", "RRM_1", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RRM_1").not());
}

#[test]
fn species_label_is_passed_through() {
    let input = write_domtblout(&[domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30)]);

    domarch()
        .arg("-i")
        .arg(input.path())
        .args(["-m", "A", "-s", "YEAST", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("P1\tYEAST\t"));
}

#[test]
fn missing_input_file_fails() {
    domarch()
        .args(["-i", "no_such_file.domtblout", "-m", "A", "-q"])
        .assert()
        .failure();
}

#[test]
fn report_written_to_output_file() {
    let input = write_domtblout(&[domtblout_line("A", "P1", 100, 0.001, 0.01, 10, 30)]);
    let output = NamedTempFile::new().unwrap();

    domarch()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .args(["-m", "A", "-q"])
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(output.path()).unwrap();
    assert!(written.starts_with("P1\tHUMAN\t"));
}
