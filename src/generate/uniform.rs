use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;

use crate::data::model::Dataset;
use crate::data::writer::{write_dataset, WriteMode};
use crate::error::DatasetError;

/// Share of `n` turned into outliers when outliers are requested.
pub const OUTLIER_FRACTION: f64 = 0.02;

/// Widest range a coordinate may be drawn from. The sampler divides the
/// width by a factor just below 1, so `f64::MAX` itself would overflow.
const MAX_SPAN: f64 = f64::MAX / 2.0;

fn span_ok(lo: f64, hi: f64) -> bool {
    hi - lo <= MAX_SPAN
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Parameters of a uniform (optionally clustered) point set.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformParams {
    /// Total number of points, outliers included.
    pub n: usize,
    pub dimension: usize,
    pub minval: f64,
    pub maxval: f64,
    /// Number of contiguous groups sharing one offset; 0 disables clustering.
    pub clusters: usize,
    /// Upper bound of the per-group offset, drawn from `[0, cluster_offset]`.
    pub cluster_offset: f64,
    /// Replace 2% of the points with far-away outliers.
    pub outliers: bool,
}

impl UniformParams {
    pub fn new(n: usize, dimension: usize, minval: f64, maxval: f64) -> Self {
        UniformParams {
            n,
            dimension,
            minval,
            maxval,
            clusters: 0,
            cluster_offset: 0.0,
            outliers: false,
        }
    }

    pub fn clustered(mut self, clusters: usize, cluster_offset: f64) -> Self {
        self.clusters = clusters;
        self.cluster_offset = cluster_offset;
        self
    }

    pub fn with_outliers(mut self) -> Self {
        self.outliers = true;
        self
    }

    /// Number of trailing outlier points.
    pub fn outlier_count(&self) -> usize {
        if self.outliers {
            outlier_count(self.n)
        } else {
            0
        }
    }

    /// Range outlier coordinates are drawn from.
    pub fn outlier_range(&self) -> (f64, f64) {
        let m = self.maxval.abs();
        (self.maxval + m, self.maxval + 2.0 * m)
    }

    fn validate(&self) -> Result<(), DatasetError> {
        if self.dimension == 0 {
            return Err(DatasetError::InvalidRange("dimension must be at least 1".into()));
        }
        if !(self.minval.is_finite() && self.maxval.is_finite()) || self.minval > self.maxval {
            return Err(DatasetError::InvalidRange(format!(
                "[{}, {}] is not a finite, non-empty range",
                self.minval, self.maxval
            )));
        }
        if !span_ok(self.minval, self.maxval) {
            return Err(DatasetError::InvalidRange(format!(
                "[{}, {}] is wider than {MAX_SPAN:e}",
                self.minval, self.maxval
            )));
        }
        if self.clusters > 0
            && !(self.cluster_offset >= 0.0
                && span_ok(0.0, self.cluster_offset)
                && (self.maxval + self.cluster_offset).is_finite()
                && span_ok(self.minval + self.cluster_offset, self.maxval + self.cluster_offset))
        {
            return Err(DatasetError::InvalidRange(format!(
                "cluster offset {} must be finite and non-negative",
                self.cluster_offset
            )));
        }
        let (out_lo, out_hi) = self.outlier_range();
        if self.outliers && !(out_hi.is_finite() && span_ok(out_lo, out_hi)) {
            return Err(DatasetError::InvalidRange(format!(
                "outlier range above {} overflows",
                self.maxval
            )));
        }
        Ok(())
    }
}

/// `round(0.02 * n)` with ties to even.
pub fn outlier_count(n: usize) -> usize {
    (n as f64 * OUTLIER_FRACTION).round_ties_even() as usize
}

/// Group index of point `index` when `total` points are split into
/// `clusters` contiguous groups.
///
/// Groups hold `total / clusters` points (at least one); the remainder
/// joins the last group.
pub fn cluster_group(index: usize, total: usize, clusters: usize) -> usize {
    if clusters == 0 {
        return 0;
    }
    let size = (total / clusters).max(1);
    (index / size).min(clusters - 1)
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the point set described by `params`.
///
/// The first `n - outlier_count` points are regular; outliers follow.
pub fn generate<R: Rng + ?Sized>(params: &UniformParams, rng: &mut R) -> Result<Dataset, DatasetError> {
    params.validate()?;

    let outs = params.outlier_count();
    let main = params.n - outs;
    if params.clusters > main && main > 0 {
        log::warn!(
            "{} clusters requested for {} points; only {} groups will be formed",
            params.clusters,
            main,
            main
        );
    }

    let mut dataset = Dataset::with_capacity(params.dimension, params.n);
    let mut offset = 0.0;
    let mut group = None;

    for i in 0..main {
        if params.clusters > 0 {
            let g = cluster_group(i, main, params.clusters);
            if group != Some(g) {
                offset = rng.gen_range(0.0..=params.cluster_offset);
                group = Some(g);
                log::trace!("cluster {g} starts at point {i}, offset {offset}");
            }
        }
        let (lo, hi) = (params.minval + offset, params.maxval + offset);
        dataset.push((0..params.dimension).map(|_| rng.gen_range(lo..=hi)).collect())?;
    }

    let (lo, hi) = params.outlier_range();
    for _ in 0..outs {
        dataset.push((0..params.dimension).map(|_| rng.gen_range(lo..=hi)).collect())?;
    }

    log::debug!(
        "generated {} uniform points ({} outliers) in {}D",
        dataset.len(),
        outs,
        params.dimension
    );
    Ok(dataset)
}

/// Generate a uniform point set and write it to `path`.
pub fn generate_rand_uniform<R: Rng + ?Sized>(
    params: &UniformParams,
    path: &Path,
    mode: WriteMode,
    rng: &mut R,
) -> Result<Dataset> {
    let dataset = generate(params, rng).context("generating uniform dataset")?;
    write_dataset(&dataset, path, mode)?;
    Ok(dataset)
}
