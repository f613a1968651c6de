//! Tour chromosome.

/// A closed tour: a permutation of location indices with its cached cost.
///
/// Each tour owns its order; operators always build fresh vectors, so
/// editing one population slot never affects another.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]);
/// assert_eq!(tour.order(), &[2, 0, 1]);
/// assert_eq!(tour.cost(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates an unevaluated tour.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            cost: f64::INFINITY,
        }
    }

    /// Creates a tour with a known cost.
    pub fn with_cost(order: Vec<usize>, cost: f64) -> Self {
        Self { order, cost }
    }

    /// Visiting order as location indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Cached total cyclic cost. `INFINITY` until evaluated.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Stores an evaluated cost.
    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    /// Number of locations visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for a tour over no locations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Returns `true` if `order` contains every index in `0..n` exactly once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_new() {
        let tour = Tour::new(vec![1, 2, 0]);
        assert_eq!(tour.order(), &[1, 2, 0]);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
        assert_eq!(tour.cost(), f64::INFINITY);
    }

    #[test]
    fn test_tour_set_cost() {
        let mut tour = Tour::new(vec![0, 1]);
        tour.set_cost(12.5);
        assert_eq!(tour.cost(), 12.5);
        assert_eq!(Tour::with_cost(vec![0], 0.0).cost(), 0.0);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Tour::new(vec![0, 1, 2]);
        let mut copy = original.clone();
        copy.set_cost(1.0);
        let mut order = copy.into_order();
        order.swap(0, 2);
        assert_eq!(original.order(), &[0, 1, 2]);
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }
}
