//! Annotated features on a plasmid sequence.


use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fmt::{Display, Formatter};
use std::ops::Range;
use strum::{EnumIter, EnumProperty};

// ----------------------------------------------------------------------------
// Feature Type
// ----------------------------------------------------------------------------

/// The biological role of an annotated [`FeatureInterval`].
///
/// Origins, markers, promoters and terminators make up the vector backbone.
/// Everything else is [`FeatureType::Other`] and never counts as backbone.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    EnumIter,
    EnumProperty,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub enum FeatureType {
    /// Origin of replication.
    #[serde(rename = "origin")]
    #[strum(props(backbone = "true"))]
    Origin,
    /// Selection marker, usually an antibiotic resistance gene.
    #[serde(rename = "marker")]
    #[strum(props(backbone = "true"))]
    Marker,
    #[serde(rename = "promoter")]
    #[strum(props(backbone = "true"))]
    Promoter,
    #[serde(rename = "terminator")]
    #[strum(props(backbone = "true"))]
    Terminator,
    /// Any feature that is not part of the backbone.
    #[default]
    #[serde(rename = "other")]
    #[strum(props(backbone = "false"))]
    Other,
}

impl FeatureType {
    /// Returns true if this feature type contributes to backbone coverage.
    ///
    /// ```rust
    /// use plasmid_core::FeatureType;
    /// assert!(FeatureType::Origin.is_backbone());
    /// assert!(FeatureType::Terminator.is_backbone());
    /// assert!(!FeatureType::Other.is_backbone());
    /// ```
    pub fn is_backbone(&self) -> bool {
        self.get_str("backbone") == Some("true")
    }
}

impl Display for FeatureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FeatureType::Origin => "origin",
            FeatureType::Marker => "marker",
            FeatureType::Promoter => "promoter",
            FeatureType::Terminator => "terminator",
            FeatureType::Other => "other",
        };
        write!(f, "{name}")
    }
}

impl From<&str> for FeatureType {
    /// Map a type label from an annotation engine to a [`FeatureType`].
    ///
    /// Unknown labels become [`FeatureType::Other`] rather than an error.
    ///
    /// ```rust
    /// use plasmid_core::FeatureType;
    /// assert_eq!(FeatureType::from("rep_origin"), FeatureType::Origin);
    /// assert_eq!(FeatureType::from("cds_resistance"), FeatureType::Marker);
    /// assert_eq!(FeatureType::from("Promoter"), FeatureType::Promoter);
    /// assert_eq!(FeatureType::from("CDS"), FeatureType::Other);
    /// ```
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "rep_origin" | "origin" | "ori" | "oriv" | "orit" => FeatureType::Origin,
            "marker" | "resistance" | "cds_resistance" => FeatureType::Marker,
            "promoter" => FeatureType::Promoter,
            "terminator" => FeatureType::Terminator,
            _ => FeatureType::Other,
        }
    }
}

// ----------------------------------------------------------------------------
// Strand
// ----------------------------------------------------------------------------

/// Parse a strand label into `+1` or `-1`.
///
/// Accepts `+`, `1`, `+1`, `-`, `-1`. An empty label or `.` means no strand.
///
/// ```rust
/// use plasmid_core::feature::parse_strand;
/// assert_eq!(parse_strand("+")?, Some(1));
/// assert_eq!(parse_strand("-1")?, Some(-1));
/// assert_eq!(parse_strand(".")?, None);
/// assert!(parse_strand("up").is_err());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn parse_strand(label: &str) -> Result<Option<i8>, Report> {
    let strand = match label.trim() {
        "" | "." => None,
        "+" | "1" | "+1" => Some(1),
        "-" | "-1" => Some(-1),
        _ => Err(eyre!("Unknown strand: {label:?}")).suggestion("Options: +, -, 1, -1, or .")?,
    };
    Ok(strand)
}

// ----------------------------------------------------------------------------
// Feature Interval
// ----------------------------------------------------------------------------

/// One annotated feature, as a half-open interval `[start, end)` of 0-based offsets.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct FeatureInterval {
    /// Feature name reported by the annotation source (ex. `pUC ori`, `AmpR`).
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub start: usize,
    pub end: usize,
    /// `+1` or `-1` when known.
    #[serde(default)]
    pub strand: Option<i8>,
}

impl FeatureInterval {
    pub fn new(feature_type: FeatureType, start: usize, end: usize) -> Self {
        FeatureInterval { id: String::new(), feature_type, start, end, strand: None }
    }

    /// Returns the interval clipped to `[0, sequence_length)`, or [`None`] if nothing is left.
    ///
    /// ```rust
    /// use plasmid_core::{FeatureInterval, FeatureType};
    ///
    /// let feature = FeatureInterval::new(FeatureType::Marker, 900, 1200);
    /// assert_eq!(feature.clip(1000), Some(900..1000));
    ///
    /// let feature = FeatureInterval::new(FeatureType::Marker, 50, 10);
    /// assert_eq!(feature.clip(1000), None);
    /// ```
    pub fn clip(&self, sequence_length: usize) -> Option<Range<usize>> {
        let start = self.start.min(sequence_length);
        let end = self.end.min(sequence_length);
        (start < end).then_some(start..end)
    }

    pub fn is_backbone(&self) -> bool {
        self.feature_type.is_backbone()
    }
}
