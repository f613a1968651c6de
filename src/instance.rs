//! Problem instance: the fixed location set and its cost model.

use std::collections::HashMap;

use crate::batch::TOUR_DELIMITER;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Location;

/// A validated set of uniquely named locations with precomputed costs.
///
/// Locations are addressed by index internally; ids are only resolved at
/// the boundary.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::TspInstance;
///
/// let instance = TspInstance::new(vec![
///     Location::new("A", 0.0, 0.0),
///     Location::new("B", 10.0, 0.0),
///     Location::new("C", 10.0, 10.0),
///     Location::new("D", 0.0, 10.0),
/// ])?;
///
/// assert_eq!(instance.pair_cost_by_id("A", "B")?, 10.0);
/// assert!((instance.tour_cost_by_ids(&["A", "B", "C", "D"])? - 40.0).abs() < 1e-10);
/// # Ok::<(), u_tsp::TspError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    distances: DistanceMatrix,
}

impl TspInstance {
    /// Builds an instance, rejecting empty sets, duplicate ids, and
    /// non-finite coordinates.
    ///
    /// Ids must be non-empty and must not contain `->`, so that a tour
    /// joined with [`TOUR_DELIMITER`] splits back into the same ids.
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        if locations.is_empty() {
            return Err(TspError::NoLocations);
        }

        let mut index = HashMap::with_capacity(locations.len());
        for (i, loc) in locations.iter().enumerate() {
            if !is_valid_id(loc.id()) {
                return Err(TspError::InvalidLocationId(loc.id().to_string()));
            }
            if !loc.is_finite() {
                return Err(TspError::NonFiniteCoordinate(loc.id().to_string()));
            }
            if index.insert(loc.id().to_string(), i).is_some() {
                return Err(TspError::DuplicateLocation(loc.id().to_string()));
            }
        }

        let distances = DistanceMatrix::from_locations(&locations);
        Ok(Self {
            locations,
            index,
            distances,
        })
    }

    /// Builds an instance from parallel name and coordinate lists.
    pub fn from_coordinates<S: AsRef<str>>(names: &[S], coordinates: &[(f64, f64)]) -> Result<Self> {
        if names.len() != coordinates.len() {
            return Err(TspError::LengthMismatch {
                names: names.len(),
                coordinates: coordinates.len(),
            });
        }
        let locations = names
            .iter()
            .zip(coordinates)
            .map(|(name, &(x, y))| Location::new(name.as_ref(), x, y))
            .collect();
        Self::new(locations)
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Precomputed pairwise costs.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Index of the location with the given id.
    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| TspError::UnknownLocation(id.to_string()))
    }

    /// Cost between two locations by index.
    pub fn pair_cost(&self, a: usize, b: usize) -> f64 {
        self.distances.get(a, b)
    }

    /// Total cyclic cost of a tour given as indices.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        self.distances.tour_cost(tour)
    }

    /// Cost between two locations by id.
    pub fn pair_cost_by_id(&self, a: &str, b: &str) -> Result<f64> {
        Ok(self.pair_cost(self.index_of(a)?, self.index_of(b)?))
    }

    /// Total cyclic cost of a tour given as ids.
    pub fn tour_cost_by_ids<S: AsRef<str>>(&self, tour: &[S]) -> Result<f64> {
        let order = tour
            .iter()
            .map(|id| self.index_of(id.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.tour_cost(&order))
    }

    /// Resolves a tour of indices into location ids.
    pub fn tour_ids(&self, tour: &[usize]) -> Vec<String> {
        tour.iter()
            .map(|&i| self.locations[i].id().to_string())
            .collect()
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(TOUR_DELIMITER.trim())
}
