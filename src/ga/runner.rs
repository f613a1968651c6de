//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! merge → truncation → repeat.
//!
//! Survivor selection is elitist: offspring are appended to the current
//! population, the union is sorted by cost, and only the best
//! `population_size` tours survive. The best cost therefore never gets
//! worse from one generation to the next.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use tracing::instrument;

use super::config::GaConfig;
use super::fitness::{evaluate_population, selection_weights};
use super::init::initial_population;
use super::operators::{prefix_crossover, swap_mutation};
use crate::error::{Result, TspError};
use crate::instance::TspInstance;
use crate::models::Tour;
use crate::random::rng_from_seed;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour in the final population, as location ids.
    pub best_tour: Vec<String>,

    /// The best tour as location indices.
    pub best_order: Vec<usize>,

    /// Total cyclic cost of the best tour.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost of the initial population, then after each generation.
    pub cost_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tsp::ga::{GaConfig, GaRunner};
/// use u_tsp::TspInstance;
///
/// let instance = TspInstance::from_coordinates(
///     &["A", "B", "C", "D"],
///     &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
/// )?;
/// let config = GaConfig::default()
///     .with_population_size(24)
///     .with_generations(20)
///     .with_seed(42);
///
/// let result = GaRunner::run(&instance, &config)?;
/// assert!((result.best_cost - 40.0).abs() < 1e-9);
/// # Ok::<(), u_tsp::TspError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed` (or entropy).
    ///
    /// # Errors
    /// Returns a configuration error before any work if `config` is
    /// invalid for `instance`.
    pub fn run(instance: &TspInstance, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best tour so far.
    pub fn run_with_cancel(
        instance: &TspInstance,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, config, &mut rng, cancel)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random source.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            locations = instance.len(),
            population_size = config.population_size,
            generations = config.generations,
            selection = ?config.selection,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        instance: &TspInstance,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate_for(instance.len())?;
        tracing::info!("Starting tour search");

        // 1. Initialize and evaluate
        let mut population: Vec<Tour> =
            initial_population(instance.len(), config.population_size, rng)?
                .into_iter()
                .map(Tour::new)
                .collect();
        evaluate_population(instance, &mut population, config.parallel);
        sort_by_cost(&mut population);

        let mut cost_history = Vec::with_capacity(config.generations.min(4096) + 1);
        cost_history.push(best_cost(&population)?);

        let mut cancelled = false;
        let mut executed = 0usize;

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let offspring_count = next_generation(instance, config, &mut population, rng);

            let best = best_cost(&population)?;
            cost_history.push(best);
            executed = gen + 1;

            tracing::debug!(
                generation = executed,
                offspring = offspring_count,
                best_cost = best,
                "generation complete"
            );
        }

        let best = population
            .first()
            .ok_or(TspError::ZeroPopulation)?
            .clone();
        let best_cost = best.cost();
        let best_tour = instance.tour_ids(best.order());

        tracing::info!(
            best_cost,
            generations = executed,
            cancelled,
            "Tour search finished"
        );

        Ok(GaResult {
            best_tour,
            best_order: best.into_order(),
            best_cost,
            generations: executed,
            cancelled,
            cost_history,
        })
    }
}

/// Advances `population` by one generation and returns the number of
/// offspring produced.
///
/// `population` must be sorted by cost on entry and is sorted and back at
/// `config.population_size` on return.
fn next_generation<R: Rng>(
    instance: &TspInstance,
    config: &GaConfig,
    population: &mut Vec<Tour>,
    rng: &mut R,
) -> usize {
    let costs: Vec<f64> = population.iter().map(Tour::cost).collect();
    let weights = selection_weights(&costs);

    let parents = config
        .selection
        .select_parents(population, &weights, config.parent_pool_size(), rng);

    let mut offspring = breed(population, &parents, config.mutation_rate, rng);
    evaluate_population(instance, &mut offspring, config.parallel);

    let offspring_count = offspring.len();
    population.extend(offspring);
    sort_by_cost(population);
    population.truncate(config.population_size);
    offspring_count
}

/// Crosses consecutive parent pairs and mutates each child with
/// probability `mutation_rate`. A trailing unpaired parent is dropped.
///
/// Children are returned unevaluated.
fn breed<R: Rng>(
    population: &[Tour],
    parents: &[usize],
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Tour> {
    let mut offspring = Vec::with_capacity(parents.len());
    for pair in parents.chunks_exact(2) {
        let (c1, c2) = prefix_crossover(
            population[pair[0]].order(),
            population[pair[1]].order(),
            rng,
        );
        for mut child in [c1, c2] {
            if rng.random_range(0.0..1.0) < mutation_rate {
                swap_mutation(&mut child, rng);
            }
            offspring.push(Tour::new(child));
        }
    }
    offspring
}

/// Stable ascending sort by cached cost.
fn sort_by_cost(population: &mut [Tour]) {
    population.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
}

/// Cost of the first tour of a sorted population.
fn best_cost(population: &[Tour]) -> Result<f64> {
    population
        .first()
        .map(Tour::cost)
        .ok_or(TspError::ZeroPopulation)
}

// ============================================================================
// Tests
// ============================================================================
