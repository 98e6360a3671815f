use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;

use crate::data::loader::load_xy;
use crate::data::model::Dataset;
use crate::data::writer::{write_dataset, WriteMode};
use crate::error::DatasetError;

/// Draw `n` points from `source` uniformly, with replacement.
pub fn sample_points<R: Rng + ?Sized>(
    source: &Dataset,
    n: usize,
    rng: &mut R,
) -> Result<Dataset, DatasetError> {
    if n > 0 && source.is_empty() {
        return Err(DatasetError::Empty(format!("cannot draw {n} samples from no points")));
    }
    let points = (0..n)
        .map(|_| source.points()[rng.gen_range(0..source.len())].clone())
        .collect();
    Ok(Dataset::from_raw(source.dimension(), points))
}

/// Sample `n` points from the 2D dataset at `source` and write them to `dest`.
pub fn sample_data<R: Rng + ?Sized>(
    n: usize,
    source: &Path,
    dest: &Path,
    rng: &mut R,
) -> Result<Dataset> {
    let original = load_xy(source)?;
    let sampled = sample_points(&original, n, rng)
        .with_context(|| format!("sampling {}", source.display()))?;
    log::debug!("sampled {n} of {} points", original.len());
    write_dataset(&sampled, dest, WriteMode::Truncate)?;
    Ok(sampled)
}
