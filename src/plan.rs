//! Batch generation from a JSON plan file.
//!
//! ```json
//! {
//!   "seed": 42,
//!   "jobs": [
//!     { "kind": "uniform", "path": "uniform.txt", "n": 30, "dimension": 2, "minval": 0, "maxval": 30 },
//!     { "kind": "normal", "path": "normal.txt", "n": 50 },
//!     { "kind": "sample", "from": "normal.txt", "path": "sampled.txt", "n": 20 },
//!     { "kind": "augment", "from": "normal.txt", "path": "augmented.txt", "extra": 3 }
//!   ]
//! }
//! ```
//!
//! Jobs run in order and share one random source, so a later job may read
//! the output of an earlier one. Relative paths are resolved against the
//! working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::writer::WriteMode;
use crate::generate::{
    generate_normal_cluster, generate_rand_uniform, increase_dimensions, sample_data, UniformParams,
};

/// A list of generation jobs plus an optional seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    #[serde(default)]
    pub seed: Option<u64>,
    pub jobs: Vec<Job>,
}

/// One generator invocation. Unknown keys are rejected so a misspelled
/// parameter fails the plan instead of falling back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum Job {
    Uniform {
        path: PathBuf,
        #[serde(default)]
        mode: WriteMode,
        n: usize,
        dimension: usize,
        minval: f64,
        maxval: f64,
        #[serde(default)]
        clusters: usize,
        #[serde(default, alias = "clusteroff")]
        cluster_offset: f64,
        #[serde(default)]
        outliers: bool,
    },
    Normal {
        path: PathBuf,
        n: usize,
    },
    Sample {
        from: PathBuf,
        path: PathBuf,
        n: usize,
    },
    Augment {
        from: PathBuf,
        path: PathBuf,
        extra: usize,
    },
}

/// What a finished job produced.
#[derive(Debug, Clone, PartialEq)]
pub struct JobReport {
    pub path: PathBuf,
    pub points: usize,
    pub dimension: usize,
}

impl Plan {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading plan {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing plan {}", path.display()))
    }

    /// Run every job in order, stopping at the first failure.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<JobReport>> {
        self.jobs
            .iter()
            .enumerate()
            .map(|(i, job)| job.run(&mut *rng).with_context(|| format!("job {i} ({})", job.kind())))
            .collect()
    }
}

impl Job {
    pub fn kind(&self) -> &'static str {
        match self {
            Job::Uniform { .. } => "uniform",
            Job::Normal { .. } => "normal",
            Job::Sample { .. } => "sample",
            Job::Augment { .. } => "augment",
        }
    }

    pub fn output(&self) -> &Path {
        match self {
            Job::Uniform { path, .. }
            | Job::Normal { path, .. }
            | Job::Sample { path, .. }
            | Job::Augment { path, .. } => path,
        }
    }

    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<JobReport> {
        let (points, dimension) = match *self {
            Job::Uniform {
                ref path,
                mode,
                n,
                dimension,
                minval,
                maxval,
                clusters,
                cluster_offset,
                outliers,
            } => {
                let params = UniformParams {
                    n,
                    dimension,
                    minval,
                    maxval,
                    clusters,
                    cluster_offset,
                    outliers,
                };
                let ds = generate_rand_uniform(&params, path, mode, rng)?;
                (ds.len(), ds.dimension())
            }
            Job::Normal { ref path, n } => {
                let (xs, _) = generate_normal_cluster(n, path, rng)?;
                (xs.len(), 2)
            }
            Job::Sample { ref from, ref path, n } => {
                let ds = sample_data(n, from, path, rng)?;
                (ds.len(), ds.dimension())
            }
            Job::Augment { ref from, ref path, extra } => {
                let ds = increase_dimensions(extra, from, path, rng)?;
                (ds.len(), ds.dimension())
            }
        };
        Ok(JobReport {
            path: self.output().to_path_buf(),
            points,
            dimension,
        })
    }
}
