//! Create, read, and write the row-based [Table].


use crate::utils;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// A row-based table of generic data.
///
/// # Examples
///
/// ```
/// use plasmid_prep::Table;
///
/// let mut table = Table::new();
/// table.headers = vec!["sample_id", "length"];
/// table.add_row(vec!["pUC19", "2686"])?;
///
/// assert_eq!(table.get("length", 0)?, &"2686");
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Table<T> {
    /// Names of the table columns.
    pub headers: Vec<T>,
    /// Rows of table values.
    pub rows: Vec<Vec<T>>,
    /// Optional file path for where the table was read from.
    pub path: Option<PathBuf>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T> {
    /// Create a new table with empty headers and rows.
    pub fn new() -> Self {
        Table { headers: Vec::new(), rows: Vec::new(), path: None }
    }
}

/// Methods for when the table data can be viewed and displayed as a string.
impl<T> Table<T>
where
    T: AsRef<str> + Display,
{
    /// Add a new row to the table.
    ///
    /// The row must have one value per header.
    ///
    /// ```
    /// use plasmid_prep::Table;
    ///
    /// let mut table = Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(vec!["A", "B", "C"])?;
    /// assert!(table.add_row(vec!["D", "E"]).is_err());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn add_row(&mut self, row: Vec<T>) -> Result<(), Report> {
        let (new, ex) = (row.len(), self.headers.len());
        if ex != new {
            return Err(eyre!("New row size ({new}) does not match the table headers ({ex})."));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Get the column index (0-based) corresponding to the header.
    pub fn get_header_index(&self, header: &str) -> Result<usize, Report> {
        self.headers
            .iter()
            .position(|h| h.as_ref() == header)
            .ok_or_else(|| eyre!("Column '{header}' was not found in table: {:?}.", self.path))
    }

    /// Return a vector of table values in a row.
    pub fn get_row(&self, i: usize) -> Result<&[T], Report> {
        self.rows.get(i).map(Vec::as_slice).ok_or_else(|| eyre!("Row ({i}) does not exist in the table."))
    }

    /// Get table value at a particular column and row index.
    pub fn get(&self, header: &str, row: usize) -> Result<&T, Report> {
        let header_i = self.get_header_index(header)?;
        self.get_row(row)?
            .get(header_i)
            .ok_or_else(|| eyre!("Row ({row}) is missing column '{header}'."))
    }

    /// Write table to file.
    ///
    /// # Arguments
    ///
    /// * `path` - File path, parent directories are created if needed.
    /// * `delim` - Optional delimiter. Otherwise, will be identified based on path suffix (.tsv or .csv).
    pub fn write<P>(&self, path: &P, delim: Option<char>) -> Result<(), Report>
    where
        P: AsRef<Path> + std::fmt::Debug,
    {
        // if not provided, lookup delimiter from file extension
        let delim = match delim {
            Some(c) => c,
            None => utils::get_delimiter(path)?,
        };

        utils::create_parent_dir(path)?;
        let mut file =
            File::create(path).wrap_err_with(|| format!("Unable to create file: {path:?}"))?;

        // write headers
        let line = format!("{}\n", self.headers.iter().join(delim.to_string().as_str()));
        file.write_all(line.as_bytes())
            .wrap_err_with(|| format!("Unable to write table headers: {line}"))?;

        // write regular rows
        for row in &self.rows {
            let line = format!("{}\n", row.iter().join(delim.to_string().as_str()));
            file.write_all(line.as_bytes())
                .wrap_err_with(|| format!("Unable to write table rows: {line}"))?;
        }

        Ok(())
    }

    /// Convert table to markdown format.
    ///
    /// # Examples
    ///
    /// ```
    /// use plasmid_prep::Table;
    ///
    /// let mut table = Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(vec!["A", "B", "C"])?;
    ///
    /// let expected = "| 1 | 2 | 3 |\n|---|---|---|\n| A | B | C |\n";
    /// assert_eq!(table.to_markdown(), expected);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn to_markdown(&self) -> String {
        // maximum width of each column, +2 to add space on either side
        let col_widths = self
            .headers
            .iter()
            .enumerate()
            .map(|(col_i, header)| {
                let cells = self.rows.iter().filter_map(|row| row.get(col_i));
                let width = cells.map(|cell| cell.as_ref().len()).max().unwrap_or(0);
                width.max(header.as_ref().len()) + 2
            })
            .collect_vec();

        let mut markdown = String::from("|");
        // frame in between headers and rows
        let mut header_frame = String::from("|");

        for (header, col_width) in self.headers.iter().zip(col_widths.iter()) {
            markdown.push_str(&format!("{:^width$}|", header.as_ref(), width = col_width));
            header_frame.push_str(&format!("{}|", "-".repeat(*col_width)));
        }
        markdown.push('\n');
        markdown.push_str(&header_frame);
        markdown.push('\n');

        for row in &self.rows {
            markdown.push('|');
            for (cell, col_width) in row.iter().zip(col_widths.iter()) {
                markdown.push_str(&format!("{:^width$}|", cell.as_ref(), width = col_width));
            }
            markdown.push('\n');
        }

        markdown
    }
}

impl Table<String> {
    /// Read a TSV or CSV file into a Table.
    ///
    /// Blank lines are skipped and Windows line endings are removed.
    ///
    /// # Arguments
    ///
    /// * `path` - File path.
    /// * `delim` - Optional delimiter. Otherwise, will be identified based on path suffix (.tsv or .csv).
    pub fn read<P>(path: &P, delim: Option<char>) -> Result<Table<String>, Report>
    where
        P: AsRef<Path> + std::fmt::Debug,
    {
        let mut table = Table::new();

        // if not provided, lookup delimiter from file extension
        let delim = match delim {
            Some(c) => c,
            None => utils::get_delimiter(path)?,
        };

        // attempt to open the file path
        let file = File::open(path).wrap_err_with(|| format!("Failed to read file: {path:?}"))?;

        // read and parse lines
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line.wrap_err_with(|| format!("Failed to read line {} of {path:?}", i + 1))?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let row = line.split(delim).map(|v| v.trim().to_string()).collect_vec();
            // the first line holds the headers
            match table.headers.is_empty() {
                true => table.headers = row,
                false => table.rows.push(row),
            }
        }

        table.path = Some(path.as_ref().to_path_buf());

        Ok(table)
    }
}
