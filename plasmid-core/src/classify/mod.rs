//! Engineered versus natural classification from backbone features.

#[cfg(test)]
mod tests;

use crate::feature::{FeatureInterval, FeatureType};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fmt::{Display, Formatter};
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

// ----------------------------------------------------------------------------
// Kind
// ----------------------------------------------------------------------------

/// Whether a plasmid carries signs of laboratory engineering.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Kind {
    /// At least one origin of replication or selection marker was found.
    Engineered,
    #[default]
    Natural,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Kind::Engineered => "Engineered",
            Kind::Natural => "Natural",
        };
        write!(f, "{kind}")
    }
}

// ----------------------------------------------------------------------------
// Copy Number
// ----------------------------------------------------------------------------

/// Expected plasmid copy number, inferred from the origin of replication.
#[derive(Clone, Copy, Debug, Deserialize, EnumIter, EnumProperty, Eq, PartialEq, Serialize)]
pub enum CopyNumber {
    #[serde(rename = "high")]
    #[strum(props(origins = "cole1,colei,puc,pmb1,pbr322"))]
    High,
    #[serde(rename = "medium")]
    #[strum(props(origins = "p15a,pbb1,psa"))]
    Medium,
    #[serde(rename = "low")]
    #[strum(props(origins = "psc101,f_plasmid,f1,p1,rk2"))]
    Low,
}

impl CopyNumber {
    /// Predict copy number from origin names.
    ///
    /// Origins are checked in order, and the first one that contains a known
    /// origin family (case-insensitive) decides.
    ///
    /// ```rust
    /// use plasmid_core::classify::CopyNumber;
    ///
    /// assert_eq!(CopyNumber::predict(&["pUC ori"]), Some(CopyNumber::High));
    /// assert_eq!(CopyNumber::predict(&["unknown", "p15A ori"]), Some(CopyNumber::Medium));
    /// assert_eq!(CopyNumber::predict::<&str>(&[]), None);
    /// ```
    pub fn predict<S: AsRef<str>>(origins: &[S]) -> Option<CopyNumber> {
        origins.iter().find_map(|origin| {
            let origin = origin.as_ref().to_lowercase();
            CopyNumber::iter().find(|copy_number| {
                copy_number
                    .get_str("origins")
                    .unwrap_or_default()
                    .split(',')
                    .any(|family| origin.contains(family))
            })
        })
    }
}

impl Display for CopyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let copy_number = match self {
            CopyNumber::High => "high",
            CopyNumber::Medium => "medium",
            CopyNumber::Low => "low",
        };
        write!(f, "{copy_number}")
    }
}

// ----------------------------------------------------------------------------
// Classification
// ----------------------------------------------------------------------------

/// The classification of one plasmid, with the features it was based on.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Classification {
    pub classification: Kind,
    /// ex. `Origins: pUC ori; Markers: AmpR`
    pub evidence: String,
    pub origins: Vec<String>,
    pub markers: Vec<String>,
    pub copy_number: Option<CopyNumber>,
    pub feature_count: usize,
}

/// Classify a plasmid from its annotated features.
///
/// A plasmid is [`Kind::Engineered`] if any feature is an origin of
/// replication or a selection marker.
///
/// ```rust
/// use plasmid_core::{classify, FeatureInterval, FeatureType};
/// use plasmid_core::classify::Kind;
///
/// let mut ori = FeatureInterval::new(FeatureType::Origin, 0, 589);
/// ori.id = "pUC ori".to_string();
/// let mut amp = FeatureInterval::new(FeatureType::Marker, 700, 1561);
/// amp.id = "AmpR".to_string();
///
/// let classification = classify(&[ori, amp]);
/// assert_eq!(classification.classification, Kind::Engineered);
/// assert_eq!(classification.evidence, "Origins: pUC ori; Markers: AmpR");
///
/// let classification = classify(&[]);
/// assert_eq!(classification.classification, Kind::Natural);
/// assert_eq!(classification.evidence, "");
/// ```
pub fn classify(features: &[FeatureInterval]) -> Classification {
    let names = |feature_type: FeatureType| {
        features.iter().filter(|f| f.feature_type == feature_type).map(|f| f.id.clone()).collect_vec()
    };
    let origins = names(FeatureType::Origin);
    let markers = names(FeatureType::Marker);

    let mut evidence = Vec::new();
    if !origins.is_empty() {
        evidence.push(format!("Origins: {}", origins.join(", ")));
    }
    if !markers.is_empty() {
        evidence.push(format!("Markers: {}", markers.join(", ")));
    }

    let classification = match evidence.is_empty() {
        true => Kind::Natural,
        false => Kind::Engineered,
    };

    Classification {
        classification,
        evidence: evidence.join("; "),
        copy_number: CopyNumber::predict(origins.as_slice()),
        origins,
        markers,
        feature_count: features.len(),
    }
}
