//! Parameter-grid batch runner.

use std::io::Write;

use tracing::instrument;

use super::record::{RunRecord, TOUR_DELIMITER};
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner, Selection};
use crate::instance::TspInstance;

/// The parameter combinations of a batch experiment.
///
/// Combinations are visited in nested order: population size, crossover
/// rate, mutation rate, generations. Each combination is run
/// `runs_per_config` times.
///
/// # Examples
///
/// ```
/// use u_tsp::batch::ParameterGrid;
///
/// let grid = ParameterGrid::default()
///     .with_population_sizes(vec![10, 20])
///     .with_generations(vec![5])
///     .with_runs_per_config(2)
///     .with_base_seed(7);
/// assert_eq!(grid.total_runs(), 2 * 2 * 2 * 1 * 2);
/// ```
#[derive(Debug, Clone)]
pub struct ParameterGrid {
    pub population_sizes: Vec<usize>,
    pub crossover_rates: Vec<f64>,
    pub mutation_rates: Vec<f64>,
    pub generations: Vec<usize>,

    /// Repetitions per combination.
    pub runs_per_config: usize,

    /// Selection strategy shared by every run.
    pub selection: Selection,

    /// When set, run `i` (0-based across the whole batch) uses seed
    /// `base_seed + i`. Otherwise every run is seeded from entropy.
    pub base_seed: Option<u64>,
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            population_sizes: vec![100, 250, 500],
            crossover_rates: vec![0.6, 0.8],
            mutation_rates: vec![0.1, 0.2],
            generations: vec![100, 200, 300],
            runs_per_config: 30,
            selection: Selection::Roulette,
            base_seed: None,
        }
    }
}

impl ParameterGrid {
    pub fn with_population_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.population_sizes = sizes;
        self
    }

    pub fn with_crossover_rates(mut self, rates: Vec<f64>) -> Self {
        self.crossover_rates = rates;
        self
    }

    pub fn with_mutation_rates(mut self, rates: Vec<f64>) -> Self {
        self.mutation_rates = rates;
        self
    }

    pub fn with_generations(mut self, generations: Vec<usize>) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_runs_per_config(mut self, runs: usize) -> Self {
        self.runs_per_config = runs;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Total number of GA runs in the batch.
    pub fn total_runs(&self) -> usize {
        self.configs().len() * self.runs_per_config
    }

    /// Every parameter combination, in visiting order, without seeds.
    pub fn configs(&self) -> Vec<GaConfig> {
        let mut configs = Vec::new();
        for &population_size in &self.population_sizes {
            for &crossover_rate in &self.crossover_rates {
                for &mutation_rate in &self.mutation_rates {
                    for &generations in &self.generations {
                        configs.push(GaConfig {
                            population_size,
                            generations,
                            selection: self.selection,
                            crossover_rate,
                            mutation_rate,
                            ..GaConfig::default()
                        });
                    }
                }
            }
        }
        configs
    }
}

/// Runs every combination of a [`ParameterGrid`] against one instance.
pub struct BatchRunner;

impl BatchRunner {
    /// Runs the whole grid and returns one record per run.
    ///
    /// Every combination is validated before the first run starts.
    #[instrument(level = "debug", skip_all, fields(locations = instance.len(), total = grid.total_runs()))]
    pub fn run(instance: &TspInstance, grid: &ParameterGrid) -> Result<Vec<RunRecord>> {
        let mut records = Vec::with_capacity(grid.total_runs());
        Self::for_each_run(instance, grid, |record| {
            records.push(record);
            Ok(())
        })?;
        Ok(records)
    }

    /// Runs the whole grid, writing each record as CSV as soon as its run
    /// finishes. Returns the number of records written.
    ///
    /// Rows are flushed one by one, so a failure partway through keeps
    /// every row completed before it.
    #[instrument(level = "debug", skip_all, fields(locations = instance.len(), total = grid.total_runs()))]
    pub fn run_to_writer<W: Write>(
        instance: &TspInstance,
        grid: &ParameterGrid,
        writer: W,
    ) -> Result<usize> {
        let mut csv = csv::Writer::from_writer(writer);
        let mut written = 0usize;
        Self::for_each_run(instance, grid, |record| {
            csv.serialize(&record)?;
            csv.flush()?;
            written += 1;
            Ok(())
        })?;
        Ok(written)
    }

    fn for_each_run<F>(instance: &TspInstance, grid: &ParameterGrid, mut sink: F) -> Result<()>
    where
        F: FnMut(RunRecord) -> Result<()>,
    {
        let configs = grid.configs();
        for config in &configs {
            config.validate_for(instance.len())?;
        }

        let total = configs.len() * grid.runs_per_config;
        let mut index = 0usize;

        for config in &configs {
            for run in 0..grid.runs_per_config {
                let mut config = config.clone();
                config.seed = grid.base_seed.map(|base| base.wrapping_add(index as u64));
                index += 1;
                tracing::info!(run = index, total, "batch progress");

                let result = GaRunner::run(instance, &config)?;
                sink(RunRecord {
                    run: run + 1,
                    population_size: config.population_size,
                    crossover_rate: config.crossover_rate,
                    mutation_rate: config.mutation_rate,
                    generations: config.generations,
                    best_cost: result.best_cost,
                    best_tour: result.best_tour.join(TOUR_DELIMITER),
                })?;
            }
        }

        Ok(())
    }
}
