#![doc = include_str!("../README.md")]

pub mod classify;
pub mod feature;
pub mod qc;
pub mod region;

#[doc(inline)]
pub use classify::{classify, Classification};
#[doc(inline)]
pub use feature::{FeatureInterval, FeatureType};
#[doc(inline)]
pub use qc::{score_sequence, score_sequence_with, QcParams, SequenceQCResult};
#[doc(inline)]
pub use region::{partition_regions, partition_regions_with, Partition, PartitionParams};
