use std::f64::consts::PI;
use std::path::Path;

use anyhow::Result;
use rand::distributions::OpenClosed01;
use rand::Rng;

use crate::data::model::Dataset;
use crate::data::writer::{write_dataset, WriteMode};

/// Box-Muller transform of two uniform seeds into two standard normals.
///
/// `x` must lie in `(0, 1]`.
pub fn box_muller(x: f64, y: f64) -> (f64, f64) {
    let radius = (-2.0 * x.ln()).sqrt();
    let angle = 2.0 * PI * y;
    (radius * angle.cos(), radius * angle.sin())
}

/// Draw `n` points from a standard bivariate normal distribution.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Dataset {
    let points = (0..n)
        .map(|_| {
            // (0, 1] keeps ln() finite
            let x: f64 = rng.sample(OpenClosed01);
            let y: f64 = rng.gen();
            let (px, py) = box_muller(x, y);
            vec![px, py]
        })
        .collect();
    log::debug!("generated {n} normal points");
    Dataset::from_raw(2, points)
}

/// Generate a normal cluster, write it to `path` and return its X and Y
/// coordinates.
pub fn generate_normal_cluster<R: Rng + ?Sized>(
    n: usize,
    path: &Path,
    rng: &mut R,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let dataset = generate(n, rng);
    write_dataset(&dataset, path, WriteMode::Truncate)?;
    Ok((dataset.axis(0), dataset.axis(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn box_muller_known_values() {
        let (a, b) = box_muller(1.0, 0.3);
        assert_eq!((a, b), (0.0, 0.0));

        let (a, b) = box_muller((-0.5_f64).exp(), 0.0);
        assert!((a - 1.0).abs() < 1e-12);
        assert!(b.abs() < 1e-12);

        let (a, b) = box_muller((-2.0_f64).exp(), 0.25);
        assert!(a.abs() < 1e-12);
        assert!((b - 2.0).abs() < 1e-12);
    }

    #[test]
    fn sample_moments_are_standard() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let ds = generate(20_000, &mut rng);
        assert_eq!(ds.dimension(), 2);
        for k in 0..2 {
            let axis = ds.axis(k);
            let n = axis.len() as f64;
            let mean = axis.iter().sum::<f64>() / n;
            let var = axis.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
            assert!(mean.abs() < 0.05, "mean {mean}");
            assert!((var - 1.0).abs() < 0.05, "variance {var}");
        }
        assert!(ds.points().iter().flatten().all(|v| v.is_finite()));
    }
}
