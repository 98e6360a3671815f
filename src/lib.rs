//! Synthetic point-set generation for stress-testing k-center clustering.
//!
//! Datasets are plain text, one point per line, coordinates separated by
//! single spaces. Generators:
//!
//! - [`generate_rand_uniform`]: uniform points, optionally in offset
//!   clusters and with 2% far-away outliers
//! - [`generate_normal_cluster`]: standard bivariate normal (Box-Muller)
//! - [`sample_data`]: resample an existing 2D dataset with replacement
//! - [`increase_dimensions`]: lift a 2D dataset into more dimensions
//!
//! All of them take the random source explicitly; see [`rng::make_rng`].
//!
//! ```no_run
//! use std::path::Path;
//! use kcenter_datagen::{generate_rand_uniform, rng::make_rng, UniformParams, WriteMode};
//!
//! let mut rng = make_rng(Some(42));
//! let params = UniformParams::new(30, 10, 0.0, 20.0).clustered(3, 100.0);
//! generate_rand_uniform(&params, Path::new("clustered.txt"), WriteMode::Truncate, &mut rng)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod data;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod plan;
pub mod rng;

pub use data::loader::{load_file, read_xy};
pub use data::model::{Dataset, Point};
pub use data::writer::{write_dataset, WriteMode};
pub use error::DatasetError;
pub use generate::{
    generate_normal_cluster, generate_rand_uniform, increase_dimensions, sample_data, UniformParams,
};
pub use geometry::{distance, max_pairwise_distance};
pub use plan::Plan;
