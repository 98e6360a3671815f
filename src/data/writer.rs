use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::model::Dataset;

/// How an existing output file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Create or truncate the file.
    #[default]
    Truncate,
    /// Create the file or append to its end.
    Append,
}

/// Serialize a dataset, one point per line.
///
/// Text files get single-space separated coordinates; `.csv` files get
/// comma-separated records without a header. Every line ends with `\n`.
pub fn write_dataset(dataset: &Dataset, path: &Path, mode: WriteMode) -> Result<()> {
    let file = open(path, mode).with_context(|| format!("opening {} for writing", path.display()))?;

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let written = if is_csv {
        write_csv(dataset, file)
    } else {
        write_text(dataset, file)
    };
    written.with_context(|| format!("writing {}", path.display()))?;

    log::info!(
        "wrote {} points ({}D) to {} ({:?})",
        dataset.len(),
        dataset.dimension(),
        path.display(),
        mode
    );
    Ok(())
}

fn open(path: &Path, mode: WriteMode) -> std::io::Result<File> {
    match mode {
        WriteMode::Truncate => File::create(path),
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
    }
}

fn write_text(dataset: &Dataset, file: File) -> Result<()> {
    let mut out = BufWriter::new(file);
    for point in dataset.points() {
        let mut coords = point.iter();
        if let Some(first) = coords.next() {
            write!(out, "{first}")?;
        }
        for v in coords {
            write!(out, " {v}")?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_csv(dataset: &Dataset, file: File) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    for point in dataset.points() {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load_file, read_xy};

    fn sample() -> Dataset {
        Dataset::from_points(vec![vec![0.5, -1.25], vec![3.0, 1e-7]]).unwrap()
    }

    #[test]
    fn text_format_is_space_separated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_dataset(&sample(), &path, WriteMode::Truncate).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "0.5 -1.25\n3 0.0000001\n");
    }

    #[test]
    fn append_extends_and_truncate_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_dataset(&sample(), &path, WriteMode::Truncate).unwrap();
        write_dataset(&sample(), &path, WriteMode::Append).unwrap();
        assert_eq!(read_xy(&path).unwrap().0.len(), 4);

        write_dataset(&sample(), &path, WriteMode::Truncate).unwrap();
        assert_eq!(read_xy(&path).unwrap().0.len(), 2);
    }

    #[test]
    fn csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_dataset(&sample(), &path, WriteMode::Truncate).unwrap();
        assert_eq!(load_file(&path).unwrap(), sample());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(write_dataset(&sample(), &path, WriteMode::Truncate).is_err());
    }
}
