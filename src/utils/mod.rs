//! Miscellaneous file and path helpers.

pub mod verbosity;


use color_eyre::eyre::{eyre, ContextCompat, Report, Result, WrapErr};
use color_eyre::Help;
use indicatif::{style::ProgressStyle, ParallelProgressIterator, ProgressBar};
use log::warn;
use rayon::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Returns the table delimiter based on the file extension.
///
/// ## Examples
///
/// ```rust
/// use plasmid_prep::utils::get_delimiter;
///
/// assert_eq!(get_delimiter(&"features.tsv")?, '\t');
/// assert_eq!(get_delimiter(&"features.csv")?, ',');
/// assert!(get_delimiter(&"features.gb").is_err());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn get_delimiter<P>(path: &P) -> Result<char, Report>
where
    P: AsRef<Path> + Debug,
{
    let ext = path
        .as_ref()
        .extension()
        .wrap_err_with(|| format!("Failed to get file extension: {path:?}"))?
        .to_str()
        .wrap_err_with(|| format!("Failed to convert file extension to str: {path:?}"))?;
    // convert extension to the expected delimiter
    match ext {
        "tsv" | "txt" => Ok('\t'),
        "csv" => Ok(','),
        _ext => Err(eyre!("Unknown file extension: {_ext:?}").suggestion("Options: tsv, csv, or txt")),
    }
}

/// Create the parent directory of a file path, if it does not exist.
pub fn create_parent_dir<P>(path: &P) -> Result<(), Report>
where
    P: AsRef<Path> + Debug,
{
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create parent directory: {parent:?}"))?;
        }
    }
    Ok(())
}

/// Returns a file path in `dir` named after a sample.
///
/// Characters that are not safe in file names are replaced with `_`.
///
/// ## Examples
///
/// ```rust
/// use plasmid_prep::utils::sample_path;
/// use std::path::PathBuf;
///
/// let path = sample_path(&"output/qc", "pUC19 | Addgene/50005", "json");
/// assert_eq!(path, PathBuf::from("output/qc/pUC19___Addgene_50005.json"));
/// ```
pub fn sample_path<P>(dir: &P, sample_id: &str, ext: &str) -> PathBuf
where
    P: AsRef<Path>,
{
    dir.as_ref().join(format!("{}.{ext}", file_stem(sample_id)))
}

/// Returns one file path in `dir` per sample, in the same order.
///
/// Samples whose names collide (duplicate ids, or ids that only differ in
/// unsafe characters) get a `_2`, `_3`, ... suffix and a warning.
///
/// ## Examples
///
/// ```rust
/// use plasmid_prep::utils::sample_paths;
/// use std::path::PathBuf;
///
/// let paths = sample_paths(&"qc", &["pUC19", "pUC19", "a/b", "a_b"], "json");
/// assert_eq!(paths[0], PathBuf::from("qc/pUC19.json"));
/// assert_eq!(paths[1], PathBuf::from("qc/pUC19_2.json"));
/// assert_eq!(paths[2], PathBuf::from("qc/a_b.json"));
/// assert_eq!(paths[3], PathBuf::from("qc/a_b_2.json"));
/// ```
pub fn sample_paths<P, S>(dir: &P, sample_ids: &[S], ext: &str) -> Vec<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut taken = HashSet::new();
    sample_ids
        .iter()
        .map(|sample_id| {
            let sample_id = sample_id.as_ref();
            let stem = file_stem(sample_id);
            let mut name = stem.clone();
            let mut n = 1;
            while !taken.insert(name.clone()) {
                n += 1;
                name = format!("{stem}_{n}");
            }
            if n > 1 {
                warn!("Output name of sample {sample_id:?} is already used, writing {name}.{ext}");
            }
            dir.as_ref().join(format!("{name}.{ext}"))
        })
        .collect()
}

/// Replace characters that are not safe in file names with `_`.
fn file_stem(sample_id: &str) -> String {
    sample_id
        .chars()
        .map(|c| match c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            true => c,
            false => '_',
        })
        .collect()
}

/// Reads a JSON file into `T`.
pub fn read_json<T, P>(path: &P) -> Result<T, Report>
where
    T: DeserializeOwned,
    P: AsRef<Path> + Debug,
{
    let input =
        std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read file: {path:?}."))?;
    let value = serde_json::from_str(&input)
        .wrap_err_with(|| format!("Failed to deserialize JSON: {path:?}"))?;
    Ok(value)
}

/// Writes `value` to a pretty JSON file, creating parent directories as needed.
pub fn write_json<T, P>(value: &T, path: &P) -> Result<(), Report>
where
    T: Serialize,
    P: AsRef<Path> + Debug,
{
    create_parent_dir(path)?;
    let output = serde_json::to_string_pretty(value)
        .wrap_err_with(|| format!("Failed to serialize JSON for: {path:?}"))?;
    std::fs::write(path, output).wrap_err_with(|| format!("Failed to write file: {path:?}"))?;
    Ok(())
}

/// Returns a progress bar for `len` sequence records.
pub fn progress_bar(len: usize) -> Result<ProgressBar, Report> {
    let style = ProgressStyle::with_template(
        "{bar:40} {pos}/{len} ({percent}%) | Sequences / Second: {per_sec} | Elapsed: {elapsed_precise}",
    )
    .wrap_err("Failed to create progress bar from template.")?;
    Ok(ProgressBar::new(len as u64).with_style(style))
}

/// Apply `f` to every item on a pool of `threads` workers, with a progress bar.
///
/// Results are in the same order as `items`. A `threads` of 0 uses one worker per CPU.
///
/// ## Examples
///
/// ```rust
/// use plasmid_prep::utils::par_map;
///
/// let lengths = par_map(2, &["ACGT", "", "GG"], |s| s.len())?;
/// assert_eq!(lengths, vec![4, 0, 2]);
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn par_map<T, U, F>(threads: usize, items: &[T], f: F) -> Result<Vec<U>, Report>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .wrap_err_with(|| format!("Failed to build a thread pool with {threads} threads."))?;

    let progress_bar = progress_bar(items.len())?;
    let results: Vec<U> = pool.install(|| items.par_iter().progress_with(progress_bar.clone()).map(f).collect());
    progress_bar.finish();

    Ok(results)
}
