//! Parent selection strategies.
//!
//! Selection determines which tours are chosen as parents for crossover.
//! Both strategies assume **minimization** (lower cost = better).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

use crate::models::Tour;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Selection;
///
/// // Fitness-proportionate over the normalized weights
/// let sel = Selection::Roulette;
///
/// // Best of 3 distinct random tours
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection over the weights
    /// produced by [`selection_weights`](super::selection_weights).
    ///
    /// # Complexity
    /// O(n) to build the wheel, O(log n) per spin
    Roulette,

    /// Tournament selection: sample `k` distinct tours, keep the cheapest.
    ///
    /// Higher `k` = stronger selection pressure. `k` equal to the
    /// population size always returns the global best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Roulette
    }
}

impl Selection {
    /// Selects one parent index.
    ///
    /// `weights` is only read by [`Selection::Roulette`].
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Tour], weights: &[f64], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Roulette => RouletteWheel::new(weights).spin(rng),
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }

    /// Selects `count` parent indices with independent draws (with
    /// replacement across the call).
    ///
    /// The roulette wheel is built once and spun `count` times.
    ///
    /// # Panics
    /// Panics if `population` is empty and `count > 0`.
    pub fn select_parents<R: Rng>(
        &self,
        population: &[Tour],
        weights: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        if count == 0 {
            return Vec::new();
        }
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Roulette => {
                let wheel = RouletteWheel::new(weights);
                (0..count).map(|_| wheel.spin(rng)).collect()
            }
            Selection::Tournament(k) => (0..count)
                .map(|_| tournament(population, *k, rng))
                .collect(),
        }
    }
}

/// Cumulative weight table for roulette selection.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::RouletteWheel;
/// use u_tsp::random::create_rng;
///
/// let wheel = RouletteWheel::new(&[0.0, 1.0, 0.0]);
/// let mut rng = create_rng(1);
/// assert_eq!(wheel.spin(&mut rng), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    cumulative: Vec<f64>,
}

impl RouletteWheel {
    /// Builds the wheel from a weight distribution.
    pub fn new(weights: &[f64]) -> Self {
        let cumulative = weights
            .iter()
            .scan(0.0, |acc, &w| {
                *acc += w;
                Some(*acc)
            })
            .collect();
        Self { cumulative }
    }

    /// Draws `u` uniformly from [0, 1) and returns the first index whose
    /// cumulative weight is at least `u`.
    ///
    /// If floating-point drift leaves the total below `u`, the last index
    /// is returned. A single-slot wheel returns 0 without drawing.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let n = self.cumulative.len();
        if n <= 1 {
            return 0;
        }
        let draw: f64 = rng.random_range(0.0..1.0);
        self.index_for(draw)
    }

    fn index_for(&self, draw: f64) -> usize {
        let last = self.cumulative.len().saturating_sub(1);
        self.cumulative.partition_point(|&c| c < draw).min(last)
    }
}

/// Tournament selection: sample `k` distinct indices, return the cheapest.
///
/// `k` is clamped to `[1, population.len()]`.
fn tournament<R: Rng>(population: &[Tour], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let k = k.clamp(1, n);

    index::sample(rng, n, k)
        .iter()
        .min_by(|&a, &b| population[a].cost().total_cmp(&population[b].cost()))
        .unwrap_or(0)
}
