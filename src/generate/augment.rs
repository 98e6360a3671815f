use std::path::Path;

use anyhow::Result;
use rand::Rng;

use crate::data::loader::load_xy;
use crate::data::model::Dataset;
use crate::data::writer::{write_dataset, WriteMode};
use crate::geometry::max_pairwise_distance;

/// Value of the structured third coordinate for point `i` of `n`: a ramp
/// from `width` down towards 0.
pub fn ramp(width: f64, n: usize, i: usize) -> f64 {
    width - (width / n as f64) * i as f64
}

/// Append `extra` coordinates to every point of a dataset.
///
/// The first new coordinate follows [`ramp`] over the point index; the
/// rest are uniform noise in `[0, width]`, where `width` is the largest
/// pairwise distance of the input.
pub fn augment<R: Rng + ?Sized>(source: &Dataset, extra: usize, rng: &mut R) -> Dataset {
    let n = source.len();
    let width = max_pairwise_distance(source.points());
    log::debug!("augmenting {n} points by {extra} dimensions, width {width}");

    let points = source
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut point = Vec::with_capacity(p.len() + extra);
            point.extend_from_slice(p);
            if extra > 0 {
                point.push(ramp(width, n, i));
            }
            point.extend((1..extra).map(|_| rng.gen_range(0.0..=width)));
            point
        })
        .collect();

    Dataset::from_raw(source.dimension() + extra, points)
}

/// Read the 2D dataset at `source`, add `extra` dimensions and write the
/// result to `dest`.
pub fn increase_dimensions<R: Rng + ?Sized>(
    extra: usize,
    source: &Path,
    dest: &Path,
    rng: &mut R,
) -> Result<Dataset> {
    let original = load_xy(source)?;
    let augmented = augment(&original, extra, rng);
    write_dataset(&augmented, dest, WriteMode::Truncate)?;
    Ok(augmented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn square() -> Dataset {
        Dataset::from_points(vec![
            vec![0.0, 0.0],
            vec![3.0, 0.0],
            vec![0.0, 4.0],
            vec![3.0, 4.0],
        ])
        .unwrap()
    }

    #[test]
    fn ramp_runs_from_width_down() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let out = augment(&square(), 3, &mut rng);
        assert_eq!(out.dimension(), 5);
        assert_eq!(out.axis(2), vec![5.0, 3.75, 2.5, 1.25]);
    }

    #[test]
    fn noise_stays_within_width() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let out = augment(&square(), 6, &mut rng);
        for p in out.points() {
            assert!(p[3..].iter().all(|v| (0.0..=5.0).contains(v)));
        }
    }

    #[test]
    fn original_coordinates_are_kept() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let out = augment(&square(), 2, &mut rng);
        for (a, b) in out.points().iter().zip(square().points()) {
            assert_eq!(&a[..2], &b[..]);
        }
    }

    #[test]
    fn zero_extra_is_a_copy() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        assert_eq!(augment(&square(), 0, &mut rng), square());
    }

    #[test]
    fn single_point_has_zero_width() {
        let source = Dataset::from_points(vec![vec![1.0, 1.0]]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let out = augment(&source, 3, &mut rng);
        assert_eq!(out.points()[0], vec![1.0, 1.0, 0.0, 0.0, 0.0]);
    }
}
