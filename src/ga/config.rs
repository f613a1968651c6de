//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::init::permutation_count;
use super::selection::Selection;
use crate::error::{Result, TspError};

/// Configuration for the tour-search genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 250);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.selection, Selection::Roulette);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_tournament_size(5)
///     .with_crossover_rate(0.6)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert_eq!(config.selection, Selection::Tournament(5));
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals kept after every generation.
    ///
    /// Must not exceed the number of distinct tours (`n!`).
    pub population_size: usize,

    /// Number of generations to run. Zero returns the best initial tour.
    pub generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Fraction of `population_size` drawn as parents each generation
    /// (0.0–1.0). The pool holds `floor(rate × population_size)` parents.
    pub crossover_rate: f64,

    /// Probability of a swap mutation on each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate tour costs in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Evaluation draws no
    /// randomness, so results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 250,
            generations: 200,
            selection: Selection::default(),
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for tournament selection.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover rate, clamped to [0, 1].
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents drawn per generation.
    pub fn parent_pool_size(&self) -> usize {
        (self.crossover_rate * self.population_size as f64).floor() as usize
    }

    /// Validates the configuration against an instance with
    /// `location_count` locations.
    pub fn validate_for(&self, location_count: usize) -> Result<()> {
        if location_count == 0 {
            return Err(TspError::NoLocations);
        }
        if location_count < 2 {
            return Err(TspError::DegenerateInput {
                locations: location_count,
            });
        }
        if self.population_size == 0 {
            return Err(TspError::ZeroPopulation);
        }
        if let Some(permutations) = permutation_count(location_count) {
            if self.population_size > permutations {
                return Err(TspError::PopulationExceedsPermutations {
                    population_size: self.population_size,
                    permutations,
                });
            }
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if let Selection::Tournament(k) = self.selection {
            if k == 0 || k > self.population_size {
                return Err(TspError::InvalidTournamentSize {
                    size: k,
                    population_size: self.population_size,
                });
            }
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TspError::RateOutOfRange { name, value })
    }
}
