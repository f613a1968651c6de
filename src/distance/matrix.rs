//! Dense symmetric distance matrix.

use crate::models::Location;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new("A", 0.0, 0.0),
///     Location::new("B", 3.0, 4.0),
///     Location::new("C", 0.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.tour_cost(&[0, 1, 2]) - 18.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix from location coordinates.
    pub fn from_locations(locations: &[Location]) -> Self {
        let size = locations.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = locations[i].distance_to(&locations[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Cost between locations `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.data[a * self.size + b]
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cyclic cost: consecutive edges plus the closing edge back to
    /// the first location.
    ///
    /// A single location is a self-loop with cost 0; an empty tour also
    /// costs 0.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        let (first, last) = match (tour.first(), tour.last()) {
            (Some(&f), Some(&l)) => (f, l),
            _ => return 0.0,
        };
        let open: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(last, first)
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
