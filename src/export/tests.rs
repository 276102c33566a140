use crate::export::*;
use crate::partition::PartitionReport;
use crate::qc::QcReport;
use crate::sequence::Record;
use plasmid_core::{FeatureInterval, FeatureType, PartitionParams, QcParams};

fn record(id: &str, sequence: &str) -> Record {
    Record { id: id.to_string(), sequence: sequence.to_string() }
}

#[test]
fn qc_table_one_row_per_report() {
    let reports = vec![
        QcReport::new(&record("empty", ""), &QcParams::default()),
        QcReport::new(&record("ca", "GGCACACACATT"), &QcParams::default()),
    ];
    let table = qc_table(&reports).unwrap();

    assert_eq!(table.headers.len(), QC_HEADERS.len());
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.get("length", 0).unwrap(), "0");
    assert_eq!(table.get("synthesis_risk_reasons", 0).unwrap(), "");
    assert_eq!(table.get("tandem_repeats.count", 1).unwrap(), "1");
    assert_eq!(table.get("length", 1).unwrap(), "12");
}

#[test]
fn partition_table_lists_are_joined() {
    let features = vec![
        FeatureInterval { id: "ColE1".to_string(), ..FeatureInterval::new(FeatureType::Origin, 0, 500) },
        FeatureInterval { id: "AmpR".to_string(), ..FeatureInterval::new(FeatureType::Marker, 500, 1000) },
        FeatureInterval { id: "KanR".to_string(), ..FeatureInterval::new(FeatureType::Marker, 1400, 1500) },
    ];
    let report = PartitionReport::new(&record("p", &"ACGT".repeat(500)), &features, &PartitionParams::default());
    let table = partition_table(&[report]).unwrap();

    assert_eq!(table.get("origins", 0).unwrap(), "ColE1");
    assert_eq!(table.get("markers", 0).unwrap(), "AmpR;KanR");
    // gaps [1000, 1400) and [1500, 2000)
    assert_eq!(table.get("insert_count", 0).unwrap(), "2");
    assert_eq!(table.get("insert_length", 0).unwrap(), "900");
    assert_eq!(table.get("backbone_length", 0).unwrap(), "1100");
}
