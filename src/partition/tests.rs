use crate::export::PARTITION_HEADERS;
use crate::partition::*;
use crate::{utils, Table};
use plasmid_core::classify::CopyNumber;
use std::path::Path;
use tempfile::tempdir;

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let fasta = dir.join("plasmids.fasta");
    let sequence = "ACGT".repeat(250);
    std::fs::write(&fasta, format!(">p1\n{sequence}\n>p2\n{sequence}\n")).unwrap();

    let features = dir.join("features.tsv");
    std::fs::write(
        &features,
        "sample_id\tid\ttype\tstart\tend\n\
         p1\tpUC ori\trep_origin\t0\t400\n\
         ghost\tAmpR\tmarker\t0\t10\n",
    )
    .unwrap();

    (fasta, features)
}

#[test]
fn run_writes_reports_and_summary() {
    let dir = tempdir().unwrap();
    let (input, features) = write_inputs(dir.path());
    let output_dir = dir.path().join("output");
    let args = PartitionArgs { input, features, output_dir: output_dir.clone(), threads: 2, ..Default::default() };

    let reports = run(&args).unwrap();
    assert_eq!(reports.len(), 2);

    let p1 = &reports[0];
    assert_eq!(p1.insert_regions.len(), 1);
    assert_eq!((p1.insert_regions[0].start, p1.insert_regions[0].end), (400, 1000));
    assert_eq!(p1.annotated_sequence, format!("{}<INSERT_1>", &"ACGT".repeat(100)));
    assert_eq!(p1.insert_sequence.len(), 600);
    assert!(p1.has_identifiable_insert);
    assert_eq!(p1.insert_detection_method, Method::BackboneGap);
    assert_eq!(p1.annotation_confidence, 0.8);
    assert_eq!(p1.classification.classification, Kind::Engineered);
    assert_eq!(p1.classification.copy_number, Some(CopyNumber::High));

    let p2 = &reports[1];
    assert!(p2.insert_regions.is_empty());
    assert_eq!(p2.backbone_regions.len(), 1);
    assert_eq!(p2.insert_detection_method, Method::NoBackbone);
    assert_eq!(p2.classification.classification, Kind::Natural);
    assert_eq!(p2.annotated_sequence.len(), 1000);

    let json: serde_json::Value = utils::read_json(&output_dir.join("partition").join("p1.json")).unwrap();
    assert_eq!(json["classification"], "Engineered");
    assert_eq!(json["evidence"], "Origins: pUC ori");
    assert_eq!(json["insert_detection_method"], "backbone_gap");
    assert_eq!(json["insert_regions"][0]["insert_type"], "gap_in_backbone");
    assert_eq!(json["backbone_regions"][0]["type"], "backbone");
    assert_eq!(json["insert_length"], 600);
    assert_eq!(json["backbone_length"], 400);

    let table = Table::read(&output_dir.join("partition.tsv"), None).unwrap();
    assert_eq!(table.headers, PARTITION_HEADERS);
    let row: Vec<_> = table.get_row(0).unwrap().iter().map(String::as_str).collect();
    assert_eq!(
        row,
        vec!["p1", "1000", "Engineered", "backbone_gap", "0.8", "1", "600", "400", "pUC ori", ""]
    );
    assert_eq!(table.get("insert_detection_method", 1).unwrap(), "no_backbone");
}

#[test]
fn min_gap_size_is_respected() {
    let dir = tempdir().unwrap();
    let (input, features) = write_inputs(dir.path());
    let args = PartitionArgs { input, features, output_dir: dir.path().join("output"), min_gap_size: 700, ..Default::default() };

    let reports = run(&args).unwrap();
    let p1 = &reports[0];
    assert!(!p1.has_identifiable_insert);
    assert_eq!(p1.insert_detection_method, Method::BackboneGap);
    assert_eq!(p1.annotation_confidence, 0.8);
    assert_eq!(p1.insert_sequence, "");
    assert_eq!(p1.backbone_length, 1000);
}

#[test]
fn run_missing_features() {
    let dir = tempdir().unwrap();
    let (input, _) = write_inputs(dir.path());
    let args = PartitionArgs {
        input,
        features: dir.path().join("missing.tsv"),
        output_dir: dir.path().join("output"),
        ..Default::default()
    };
    assert!(run(&args).is_err());
}
