use crate::feature::{FeatureInterval, FeatureType};
use crate::region::*;

fn feature(feature_type: FeatureType, start: usize, end: usize) -> FeatureInterval {
    FeatureInterval::new(feature_type, start, end)
}

/// Check that inserts and backbone tile [0, length) exactly.
fn assert_tiles(partition: &Partition, length: usize) {
    let mut ranges = partition
        .insert_regions
        .iter()
        .map(|r| r.range())
        .chain(partition.backbone_regions.iter().map(|r| r.range()))
        .collect::<Vec<_>>();
    ranges.sort_by_key(|r| r.start);

    let mut cursor = 0;
    for range in ranges {
        assert_eq!(range.start, cursor, "gap or overlap at {cursor}");
        assert!(range.end > range.start);
        cursor = range.end;
    }
    assert_eq!(cursor, length);
    assert_eq!(partition.insert_length() + partition.backbone_length(), length);
}

#[test]
fn empty_sequence() {
    let partition = partition_regions("", &[]);
    assert!(partition.insert_regions.is_empty());
    assert!(partition.backbone_regions.is_empty());
    assert_eq!(partition.masked_sequence, "");
    assert_eq!(partition.method, Method::Empty);
    assert_eq!(partition.confidence, 0.0);
}

#[test]
fn no_backbone() {
    let sequence = "ACGT".repeat(500);
    let features = vec![feature(FeatureType::Other, 0, 100)];
    let partition = partition_regions(&sequence, &features);

    assert!(partition.insert_regions.is_empty());
    assert_eq!(partition.method, Method::NoBackbone);
    assert_eq!(partition.confidence, 0.0);
    assert_eq!(partition.masked_sequence, sequence);
    assert_eq!(partition.backbone_regions, vec![BackboneRegion::new(0, 2000)]);
    assert_tiles(&partition, 2000);
}

#[test]
fn trailing_gap() {
    let (inserts, confidence, method) =
        find_insert_regions(1000, &[feature(FeatureType::Origin, 0, 400)], MIN_GAP_SIZE);

    assert_eq!(inserts.len(), 1);
    assert_eq!(inserts[0].start, 400);
    assert_eq!(inserts[0].end, 1000);
    assert_eq!(inserts[0].length, 600);
    assert_eq!(inserts[0].insert_type, "gap_in_backbone");
    assert_eq!(inserts[0].confidence, 0.7);
    assert_eq!(inserts[0].features_included, vec!["unknown_cargo"]);
    assert_eq!(confidence, 0.8);
    assert_eq!(method, Method::BackboneGap);
}

#[test]
fn leading_and_inner_gaps() {
    let features = vec![
        feature(FeatureType::Marker, 500, 1300),
        feature(FeatureType::Promoter, 1700, 1800),
        feature(FeatureType::Origin, 1800, 2400),
    ];
    let (inserts, _, _) = find_insert_regions(2500, &features, MIN_GAP_SIZE);
    let ranges: Vec<_> = inserts.iter().map(|r| r.range()).collect();

    // 2400..2500 is only 100 bases, too short
    assert_eq!(ranges, vec![0..500, 1300..1700]);
}

#[test]
fn gap_exactly_min_size() {
    let features = vec![feature(FeatureType::Origin, 0, 100), feature(FeatureType::Marker, 400, 500)];
    let (inserts, _, _) = find_insert_regions(500, &features, 300);
    assert_eq!(inserts.len(), 1);
    assert_eq!(inserts[0].length, 300);

    // backbone evidence without a long enough gap keeps the partition confidence
    let (inserts, confidence, method) = find_insert_regions(500, &features, 301);
    assert!(inserts.is_empty());
    assert_eq!(confidence, PARTITION_CONFIDENCE);
    assert_eq!(method, Method::BackboneGap);
}

#[test]
fn backbone_without_gap_keeps_confidence() {
    let features = vec![feature(FeatureType::Origin, 0, 450)];
    let (inserts, confidence, method) = find_insert_regions(500, &features, MIN_GAP_SIZE);
    assert!(inserts.is_empty());
    assert_eq!(confidence, 0.8);
    assert_eq!(method, Method::BackboneGap);

    let partition = partition_regions(&"A".repeat(500), &features);
    assert!(!partition.has_identifiable_insert());
    assert_eq!(partition.confidence, 0.8);
    assert_eq!(partition.backbone_regions, vec![BackboneRegion::new(0, 500)]);
}

#[test]
fn overlapping_features_are_idempotent() {
    let single = vec![feature(FeatureType::Origin, 100, 600)];
    let overlapping = vec![
        feature(FeatureType::Origin, 100, 400),
        feature(FeatureType::Terminator, 300, 600),
        feature(FeatureType::Promoter, 150, 200),
        feature(FeatureType::Origin, 100, 400),
    ];
    let a = find_insert_regions(1500, &single, MIN_GAP_SIZE);
    let b = find_insert_regions(1500, &overlapping, MIN_GAP_SIZE);
    assert_eq!(a, b);
}

#[test]
fn unsorted_and_out_of_bounds_features() {
    let features = vec![
        feature(FeatureType::Marker, 1200, 5000),
        feature(FeatureType::Origin, 700, 300),
        feature(FeatureType::Origin, 0, 200),
        feature(FeatureType::Promoter, 9000, 9500),
    ];
    let sequence = "GATTACA".repeat(200);
    let partition = partition_regions(&sequence, &features);
    let ranges: Vec<_> = partition.insert_regions.iter().map(|r| r.range()).collect();

    assert_eq!(ranges, vec![200..1200]);
    assert_tiles(&partition, sequence.len());
}

#[test]
fn circular_wrap_is_not_joined() {
    // uncovered ends are 200 bases each, together 400, but they are not adjacent on a linear scan
    let features = vec![feature(FeatureType::Origin, 200, 1800)];
    let (inserts, _, _) = find_insert_regions(2000, &features, MIN_GAP_SIZE);
    assert!(inserts.is_empty());
}

#[test]
fn regions_cover_sequence() {
    let sequence = "ACGTTGCA".repeat(1000);
    let feature_sets = vec![
        vec![],
        vec![feature(FeatureType::Origin, 0, 8000)],
        vec![feature(FeatureType::Origin, 3000, 3500)],
        vec![feature(FeatureType::Marker, 10, 20), feature(FeatureType::Promoter, 7990, 8000)],
        vec![
            feature(FeatureType::Marker, 1000, 2000),
            feature(FeatureType::Terminator, 2100, 2200),
            feature(FeatureType::Other, 4000, 6000),
            feature(FeatureType::Origin, 5000, 5200),
        ],
    ];

    for features in feature_sets {
        let partition = partition_regions(&sequence, &features);
        assert_tiles(&partition, sequence.len());

        let sorted = partition.insert_regions.windows(2).all(|w| w[0].end <= w[1].start);
        assert!(sorted);
        assert!(partition.insert_regions.iter().all(|r| r.length >= MIN_GAP_SIZE));
    }
}

#[test]
fn masked_sequence_round_trip() {
    let sequence = format!("{}{}{}", "A".repeat(300), "CGTAGGCT".repeat(100), "T".repeat(300));
    let features = vec![feature(FeatureType::Origin, 0, 300), feature(FeatureType::Marker, 1100, 1400)];
    let partition = partition_regions(&sequence, &features);

    assert_eq!(partition.insert_regions.len(), 1);
    let insert = &partition.insert_regions[0];
    assert_eq!(insert.range(), 300..1100);
    assert_eq!(partition.insert_sequence(&sequence), &sequence[300..1100]);

    let restored = partition.masked_sequence.replace("<INSERT_1>", &sequence[insert.range()]);
    assert_eq!(restored, sequence);
}

#[test]
fn masked_tokens_descend() {
    let sequence = "C".repeat(3000);
    let features = vec![
        feature(FeatureType::Origin, 400, 500),
        feature(FeatureType::Marker, 1500, 1600),
    ];
    let partition = partition_regions(&sequence, &features);
    assert_eq!(partition.insert_regions.len(), 3);

    let expected = format!(
        "<INSERT_3>{}<INSERT_2>{}<INSERT_1>",
        "C".repeat(100),
        "C".repeat(100)
    );
    assert_eq!(partition.masked_sequence, expected);
}

#[test]
fn repeated_calls_are_identical() {
    let sequence = "ATGC".repeat(700);
    let features = vec![feature(FeatureType::Origin, 100, 900), feature(FeatureType::Marker, 2000, 2100)];
    assert_eq!(partition_regions(&sequence, &features), partition_regions(&sequence, &features));
}

#[test]
fn custom_min_gap_size() {
    let sequence = "ATGC".repeat(100);
    let features = vec![feature(FeatureType::Origin, 0, 300)];
    let params = PartitionParams { min_gap_size: 50 };
    let partition = partition_regions_with(&sequence, &features, &params);
    assert_eq!(partition.insert_regions.len(), 1);
    assert_eq!(partition.insert_regions[0].range(), 300..400);
    assert!(partition.has_identifiable_insert());
}

#[test]
fn serialized_field_names() {
    let partition = partition_regions(&"A".repeat(1000), &[feature(FeatureType::Origin, 0, 400)]);
    let json = serde_json::to_value(&partition).unwrap();
    assert_eq!(json["method"], "backbone_gap");
    assert_eq!(json["backbone_regions"][0]["type"], "backbone");
    assert_eq!(json["insert_regions"][0]["insert_type"], "gap_in_backbone");
}
