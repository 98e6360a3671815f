use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;
use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an n-dimensional dataset.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – one point per record, comma-separated coordinates, no header
/// * anything else – one point per line, whitespace-separated coordinates
///
/// The dimension is taken from the first non-blank line and every later
/// line must match it.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let rows = read_rows(path)?;
    let dimension = rows.first().map_or(0, |(_, row)| row.len());

    let mut dataset = Dataset::with_capacity(dimension, rows.len());
    for (line, row) in rows {
        let found = row.len();
        dataset
            .push(row)
            .map_err(|_| DatasetError::Parse {
                line,
                reason: format!("expected {dimension} coordinates, found {found}"),
            })
            .with_context(|| format!("reading {}", path.display()))?;
    }

    log::debug!(
        "loaded {} points ({}D) from {}",
        dataset.len(),
        dataset.dimension(),
        path.display()
    );
    Ok(dataset)
}

/// Load a 2D dataset as two parallel coordinate sequences.
///
/// Only the first two coordinates of each line are used, so a file with
/// more columns is read as its 2D projection. A line with fewer than two
/// coordinates is a parse error.
pub fn read_xy(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let rows = read_rows(path)?;
    let mut xs = Vec::with_capacity(rows.len());
    let mut ys = Vec::with_capacity(rows.len());

    for (line, row) in rows {
        match *row.as_slice() {
            [x, y, ..] => {
                xs.push(x);
                ys.push(y);
            }
            _ => {
                return Err(DatasetError::Parse {
                    line,
                    reason: format!("expected at least 2 coordinates, found {}", row.len()),
                })
                .with_context(|| format!("reading {}", path.display()));
            }
        }
    }

    Ok((xs, ys))
}

/// Load a 2D dataset as a [`Dataset`] (see [`read_xy`]).
pub fn load_xy(path: &Path) -> Result<Dataset> {
    let (xs, ys) = read_xy(path)?;
    Ok(Dataset::from_xy(&xs, &ys)?)
}

// ---------------------------------------------------------------------------
// Row readers
// ---------------------------------------------------------------------------

/// Parsed rows with their 1-based line numbers. Blank lines are skipped.
type Rows = Vec<(usize, Vec<f64>)>;

fn read_rows(path: &Path) -> Result<Rows> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows = match ext.as_str() {
        "csv" => read_csv_rows(path),
        _ => read_text_rows(path),
    };
    rows.with_context(|| format!("reading {}", path.display()))
}

fn read_text_rows(path: &Path) -> Result<Rows> {
    let text = std::fs::read_to_string(path).context("opening dataset file")?;
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_tokens(line.split_whitespace(), i + 1)?;
        rows.push((i + 1, row));
    }
    Ok(rows)
}

/// CSV layout: no header row, one point per record.
fn read_csv_rows(path: &Path) -> Result<Rows> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV record {}", i + 1))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        // the reader skips blank lines, so the record index is not the line
        let line = record.position().map_or(i + 1, |p| p.line() as usize);
        let row = parse_tokens(record.iter(), line)?;
        rows.push((line, row));
    }
    Ok(rows)
}

fn parse_tokens<'a>(tokens: impl Iterator<Item = &'a str>, line: usize) -> Result<Vec<f64>> {
    let row = tokens
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|_| DatasetError::Parse {
                line,
                reason: format!("coordinate {j}: '{tok}' is not a number"),
            })
        })
        .collect::<Result<Vec<f64>, DatasetError>>()?;
    Ok(row)
}
