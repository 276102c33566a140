//! Read plasmid sequence records from FASTA files.


use color_eyre::eyre::{Report, Result, WrapErr};
use color_eyre::Help;
use log::{debug, warn};
use noodles::fasta;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// ----------------------------------------------------------------------------
// Record
// ----------------------------------------------------------------------------

/// A named plasmid sequence.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    /// Sample identifier, the first word of the FASTA definition line.
    pub id: String,
    pub sequence: String,
}

impl Record {
    /// Create a [`Record`] from a [`noodles`] [`fasta::Record`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use noodles::fasta;
    /// use plasmid_prep::sequence::Record;
    ///
    /// let definition = fasta::record::Definition::new("pUC19", None);
    /// let sequence = fasta::record::Sequence::from(b"acgt".to_vec());
    /// let record = Record::from_noodles(fasta::Record::new(definition, sequence))?;
    ///
    /// assert_eq!(record.id, "pUC19");
    /// assert_eq!(record.sequence, "acgt");
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn from_noodles(record: fasta::Record) -> Result<Self, Report> {
        let id = record.name().to_string();
        let sequence = std::str::from_utf8(record.sequence().as_ref())
            .wrap_err_with(|| format!("Sequence of {id} is not valid UTF-8."))?
            .to_string();
        Ok(Record { id, sequence })
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Read all sequence records from a FASTA file.
///
/// Sequences are returned as written, case is preserved. A record whose
/// sequence is not valid UTF-8 is skipped with a warning.
pub fn read_records<P>(path: &P) -> Result<Vec<Record>, Report>
where
    P: AsRef<Path> + std::fmt::Debug,
{
    let mut reader = File::open(path)
        .map(BufReader::new)
        .map(fasta::Reader::new)
        .wrap_err_with(|| format!("Failed to read: {path:?}"))?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result
            .wrap_err_with(|| format!("Failed to parse fasta record {} in {path:?}", i + 1))
            .suggestion("Does every record start with a '>' definition line?")?;
        match Record::from_noodles(record) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping fasta record {} in {path:?}: {e}", i + 1),
        }
    }

    debug!("Read {} sequence records from {path:?}", records.len());
    Ok(records)
}
