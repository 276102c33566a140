use crate::export::QC_HEADERS;
use crate::qc::*;
use crate::{utils, Table};
use std::path::Path;
use tempfile::tempdir;

fn write_fasta(dir: &Path) -> PathBuf {
    let path = dir.join("plasmids.fasta");
    let contents = format!(">g10\n{}\n>balanced test sequence\nACGTACGTAC\n", "G".repeat(10));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn run_writes_reports_and_summary() {
    let dir = tempdir().unwrap();
    let output_dir = dir.path().join("output");
    let args = QcArgs { input: write_fasta(dir.path()), output_dir: output_dir.clone(), threads: 2, ..Default::default() };

    let reports = run(&args).unwrap();
    let ids: Vec<_> = reports.iter().map(|r| r.sample_id.as_str()).collect();
    assert_eq!(ids, vec!["g10", "balanced"]);
    assert!((reports[0].qc.synthesis_risk - 0.40).abs() < 1e-9);

    let json: serde_json::Value = utils::read_json(&output_dir.join("qc").join("g10.json")).unwrap();
    assert_eq!(json["sample_id"], "g10");
    assert_eq!(json["length"], 10);
    assert_eq!(json["gc_content"], 1.0);
    assert_eq!(json["homopolymers"]["max_length"], 10);
    assert_eq!(json["synthesis_risk_reasons"][1], "Long homopolymer (10 bp)");

    let table = Table::read(&output_dir.join("qc.tsv"), None).unwrap();
    assert_eq!(table.headers, QC_HEADERS);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(
        table.get("synthesis_risk_reasons", 0).unwrap(),
        "High GC content (100.0%);Long homopolymer (10 bp)"
    );
    assert_eq!(table.get("gc_content", 1).unwrap(), "0.5");
    assert_eq!(table.get("homopolymers.max_length", 1).unwrap(), "0");
}

#[test]
fn run_with_partial_params() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("params.json");
    std::fs::write(&params, r#"{ "homopolymer_min_length": 20 }"#).unwrap();

    let args = QcArgs {
        input: write_fasta(dir.path()),
        output_dir: dir.path().join("output"),
        params: Some(params),
        ..Default::default()
    };
    let reports = run(&args).unwrap();

    // only the GC penalty is left
    assert_eq!(reports[0].qc.homopolymers.count, 0);
    assert!((reports[0].qc.synthesis_risk - 0.15).abs() < 1e-9);
}

#[test]
fn write_default_params() {
    let dir = tempdir().unwrap();
    let args = ParamsArgs { output: dir.path().join("params").join("qc.json") };
    write_params(&args).unwrap();

    let params: QcParams = utils::read_json(&args.output).unwrap();
    assert_eq!(params, QcParams::default());
}

#[test]
fn run_missing_input() {
    let dir = tempdir().unwrap();
    let args = QcArgs { input: dir.path().join("missing.fasta"), output_dir: dir.path().to_path_buf(), ..Default::default() };
    assert!(run(&args).is_err());
}

#[test]
fn run_keeps_duplicate_ids_and_skips_invalid_records() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plasmids.fasta");
    std::fs::write(&input, b">p1\nACGT\n>bad\nAC\xFFGT\n>p1\nGGGG\n").unwrap();
    let output_dir = dir.path().join("output");
    let args = QcArgs { input, output_dir: output_dir.clone(), ..Default::default() };

    let reports = run(&args).unwrap();
    assert_eq!(reports.len(), 2);

    let first: serde_json::Value = utils::read_json(&output_dir.join("qc").join("p1.json")).unwrap();
    let second: serde_json::Value = utils::read_json(&output_dir.join("qc").join("p1_2.json")).unwrap();
    assert_eq!(first["gc_content"], 0.5);
    assert_eq!(second["gc_content"], 1.0);
}
