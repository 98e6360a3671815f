//! Point-set generators.
//!
//! Each generator has an in-memory form taking a [`Dataset`] or parameters
//! and a random source, and a file form that reads/writes the text format.
//!
//! [`Dataset`]: crate::data::model::Dataset

pub mod augment;
pub mod normal;
pub mod sample;
pub mod uniform;

pub use augment::increase_dimensions;
pub use normal::generate_normal_cluster;
pub use sample::sample_data;
pub use uniform::{generate_rand_uniform, UniformParams};
