use crate::data::model::Point;

/// Euclidean distance between two points of equal dimension.
pub fn distance(p1: &[f64], p2: &[f64]) -> f64 {
    debug_assert_eq!(p1.len(), p2.len(), "distance between points of different dimension");
    p1.iter()
        .zip(p2)
        .map(|(a, b)| (b - a) * (b - a))
        .sum::<f64>()
        .sqrt()
}

/// Largest distance between any two points, 0 for fewer than two points.
pub fn max_pairwise_distance(points: &[Point]) -> f64 {
    let mut max = 0.0_f64;
    for (i, p1) in points.iter().enumerate() {
        for p2 in &points[i + 1..] {
            max = max.max(distance(p1, p2));
        }
    }
    max
}

/// Largest `|xs[i] - ys[j]|` over `i < j`.
///
/// This compares the X sequence against the Y sequence rather than point
/// against point. Older datasets in circulation had their augmentation
/// width computed this way; it is kept so such files can be checked, not
/// used by the generators.
pub fn max_cross_axis_distance(xs: &[f64], ys: &[f64]) -> f64 {
    let mut max = 0.0_f64;
    for (i, x) in xs.iter().enumerate() {
        for y in ys.iter().skip(i + 1) {
            max = max.max(distance(&[*x], &[*y]));
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(distance(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(distance(&[-1.0], &[2.0]), 3.0);
    }

    #[test]
    fn max_pairwise_picks_farthest_pair() {
        let points = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![6.0, 8.0], vec![3.0, 0.0]];
        assert_eq!(max_pairwise_distance(&points), 10.0);
    }

    #[test]
    fn max_pairwise_degenerate_inputs() {
        assert_eq!(max_pairwise_distance(&[]), 0.0);
        assert_eq!(max_pairwise_distance(&[vec![5.0, 5.0]]), 0.0);
    }

    #[test]
    fn cross_axis_differs_from_pairwise() {
        // points (0, 10) and (1, 0)
        let xs = [0.0, 1.0];
        let ys = [10.0, 0.0];
        // only i=0, j=1 is compared: |0 - 0|
        assert_eq!(max_cross_axis_distance(&xs, &ys), 0.0);
        let points = vec![vec![0.0, 10.0], vec![1.0, 0.0]];
        assert!((max_pairwise_distance(&points) - 101.0_f64.sqrt()).abs() < 1e-12);
    }
}
