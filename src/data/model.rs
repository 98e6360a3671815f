use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// Point – one row of a dataset file
// ---------------------------------------------------------------------------

/// A single point: one coordinate per dimension.
pub type Point = Vec<f64>;

// ---------------------------------------------------------------------------
// Dataset – a point set sharing one dimensionality
// ---------------------------------------------------------------------------

/// An ordered collection of points with an explicit dimension count.
///
/// Every point in `points` has exactly `dimension` coordinates; the
/// constructors and [`Dataset::push`] enforce this.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    dimension: usize,
    points: Vec<Point>,
}

impl Dataset {
    /// Empty dataset with a declared dimension.
    pub fn new(dimension: usize) -> Self {
        Dataset {
            dimension,
            points: Vec::new(),
        }
    }

    /// Empty dataset with room for `capacity` points.
    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        Dataset {
            dimension,
            points: Vec::with_capacity(capacity),
        }
    }

    /// Build a dataset from raw points, inferring the dimension from the
    /// first one. An empty input yields a zero-dimensional dataset.
    pub fn from_points(points: Vec<Point>) -> Result<Self, DatasetError> {
        let dimension = points.first().map_or(0, Vec::len);
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() != dimension)
        {
            return Err(DatasetError::DimensionMismatch {
                index,
                expected: dimension,
                found: p.len(),
            });
        }
        Ok(Dataset { dimension, points })
    }

    /// Wrap points a generator built with a known dimension.
    pub(crate) fn from_raw(dimension: usize, points: Vec<Point>) -> Self {
        debug_assert!(points.iter().all(|p| p.len() == dimension));
        Dataset { dimension, points }
    }

    /// Zip two coordinate sequences into a 2D dataset.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, DatasetError> {
        if xs.len() != ys.len() {
            return Err(DatasetError::DimensionMismatch {
                index: xs.len().min(ys.len()),
                expected: 2,
                found: 1,
            });
        }
        Ok(Dataset {
            dimension: 2,
            points: xs.iter().zip(ys).map(|(&x, &y)| vec![x, y]).collect(),
        })
    }

    /// Append a point, rejecting it if its length differs from the dimension.
    pub fn push(&mut self, point: Point) -> Result<(), DatasetError> {
        if point.len() != self.dimension {
            return Err(DatasetError::DimensionMismatch {
                index: self.points.len(),
                expected: self.dimension,
                found: point.len(),
            });
        }
        self.points.push(point);
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All values of coordinate `k`, in point order.
    ///
    /// Returns an empty vector if `k` is out of range.
    pub fn axis(&self, k: usize) -> Vec<f64> {
        if k >= self.dimension {
            return Vec::new();
        }
        self.points.iter().map(|p| p[k]).collect()
    }
}
