use crate::classify::*;
use crate::feature::{FeatureInterval, FeatureType};

fn feature(feature_type: FeatureType, id: &str) -> FeatureInterval {
    FeatureInterval { id: id.to_string(), ..FeatureInterval::new(feature_type, 0, 100) }
}

#[test]
fn origins_only() {
    let features = vec![feature(FeatureType::Origin, "ColE1"), feature(FeatureType::Origin, "f1 ori")];
    let classification = classify(&features);

    assert_eq!(classification.classification, Kind::Engineered);
    assert_eq!(classification.evidence, "Origins: ColE1, f1 ori");
    assert!(classification.markers.is_empty());
    // first origin decides
    assert_eq!(classification.copy_number, Some(CopyNumber::High));
}

#[test]
fn markers_only() {
    let features = vec![feature(FeatureType::Marker, "KanR"), feature(FeatureType::Promoter, "lac")];
    let classification = classify(&features);

    assert_eq!(classification.classification, Kind::Engineered);
    assert_eq!(classification.evidence, "Markers: KanR");
    assert_eq!(classification.copy_number, None);
    assert_eq!(classification.feature_count, 2);
}

#[test]
fn promoters_and_terminators_are_natural() {
    let features = vec![
        feature(FeatureType::Promoter, "T7"),
        feature(FeatureType::Terminator, "rrnB"),
        feature(FeatureType::Other, "lacZ"),
    ];
    let classification = classify(&features);

    assert_eq!(classification.classification, Kind::Natural);
    assert_eq!(classification.evidence, "");
    assert_eq!(classification.feature_count, 3);
}

#[test]
fn copy_number_low_and_unknown() {
    assert_eq!(CopyNumber::predict(&["pSC101 ori"]), Some(CopyNumber::Low));
    assert_eq!(CopyNumber::predict(&["oriV"]), None);
}

#[test]
fn serialized_values() {
    let classification = classify(&[feature(FeatureType::Origin, "p15A")]);
    let json = serde_json::to_value(&classification).unwrap();

    assert_eq!(json["classification"], "Engineered");
    assert_eq!(json["copy_number"], "medium");
    assert_eq!(json["origins"][0], "p15A");
    assert_eq!(Kind::Natural.to_string(), "Natural");
    assert_eq!(CopyNumber::Medium.to_string(), "medium");
}
