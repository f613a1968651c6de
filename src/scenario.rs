//! JSON run configuration.
//!
//! A scenario bundles the location set with the GA parameters using the
//! external option names:
//!
//! ```json
//! {
//!   "locations": [["A", 0, 0], ["B", 10, 0], ["C", 10, 10], ["D", 0, 10]],
//!   "populationSize": 24,
//!   "crossoverRate": 0.8,
//!   "mutationRate": 0.2,
//!   "generations": 20,
//!   "selectionStrategy": "tournament",
//!   "tournamentSize": 3,
//!   "randomSeed": 42
//! }
//! ```
//!
//! Every key except `locations` is optional; omitted keys take the
//! [`GaConfig::default`] values (tournament size 3).

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ga::{GaConfig, GaResult, GaRunner, Selection};
use crate::instance::TspInstance;
use crate::models::Location;

/// Selection strategy name as written in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStrategy {
    #[default]
    Roulette,
    Tournament,
}

/// A complete run description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scenario {
    pub locations: Vec<Location>,

    #[serde(default = "defaults::population_size")]
    pub population_size: usize,

    #[serde(default = "defaults::crossover_rate")]
    pub crossover_rate: f64,

    #[serde(default = "defaults::mutation_rate")]
    pub mutation_rate: f64,

    #[serde(default = "defaults::generations")]
    pub generations: usize,

    #[serde(default)]
    pub selection_strategy: SelectionStrategy,

    /// Only read when `selection_strategy` is `tournament`.
    #[serde(default = "defaults::tournament_size")]
    pub tournament_size: usize,

    #[serde(default)]
    pub random_seed: Option<u64>,
}

mod defaults {
    use crate::ga::GaConfig;

    pub fn population_size() -> usize {
        GaConfig::default().population_size
    }

    pub fn crossover_rate() -> f64 {
        GaConfig::default().crossover_rate
    }

    pub fn mutation_rate() -> f64 {
        GaConfig::default().mutation_rate
    }

    pub fn generations() -> usize {
        GaConfig::default().generations
    }

    pub fn tournament_size() -> usize {
        3
    }
}

impl Scenario {
    /// Parses a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a scenario from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// GA parameters of this scenario.
    ///
    /// Rates are taken as written (not clamped) so that
    /// [`GaConfig::validate_for`] reports out-of-range values.
    pub fn config(&self) -> GaConfig {
        let selection = match self.selection_strategy {
            SelectionStrategy::Roulette => Selection::Roulette,
            SelectionStrategy::Tournament => Selection::Tournament(self.tournament_size),
        };
        GaConfig {
            population_size: self.population_size,
            generations: self.generations,
            selection,
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            seed: self.random_seed,
            ..GaConfig::default()
        }
    }

    /// Validates the scenario into an instance and a configuration.
    pub fn build(&self) -> Result<(TspInstance, GaConfig)> {
        let instance = TspInstance::new(self.locations.clone())?;
        let config = self.config();
        config.validate_for(instance.len())?;
        Ok((instance, config))
    }

    /// Validates and runs the scenario.
    pub fn run(&self) -> Result<GaResult> {
        let (instance, config) = self.build()?;
        GaRunner::run(&instance, &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;

    const SQUARE: &str = r#"{
        "locations": [["A", 0, 0], ["B", 10, 0], ["C", 10, 10], ["D", 0, 10]],
        "populationSize": 24,
        "crossoverRate": 0.8,
        "mutationRate": 0.2,
        "generations": 20,
        "selectionStrategy": "tournament",
        "tournamentSize": 3,
        "randomSeed": 42
    }"#;

    #[test]
    fn test_parse_full_scenario() {
        let scenario = Scenario::from_json(SQUARE).unwrap();
        assert_eq!(scenario.locations.len(), 4);
        let config = scenario.config();
        assert_eq!(config.population_size, 24);
        assert_eq!(config.generations, 20);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_defaults() {
        let scenario = Scenario::from_json(r#"{"locations": [{"id": "A", "x": 0, "y": 0}]}"#).unwrap();
        let config = scenario.config();
        assert_eq!(config.population_size, 250);
        assert_eq!(config.generations, 200);
        assert_eq!(config.selection, Selection::Roulette);
        assert!((config.crossover_rate - 0.8).abs() < 1e-12);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert_eq!(scenario.tournament_size, 3);
    }

    #[test]
    fn test_run_square() {
        let result = Scenario::from_json(SQUARE).unwrap().run().unwrap();
        assert!((result.best_cost - 40.0).abs() < 1e-9);
        assert_eq!(result.best_tour.len(), 4);
    }

    #[test]
    fn test_rejects_negative_generations() {
        let json = r#"{"locations": [["A", 0, 0]], "generations": -1}"#;
        assert!(matches!(Scenario::from_json(json), Err(TspError::Scenario(_))));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let json = r#"{"locations": [["A", 0, 0]], "elitism": true}"#;
        assert!(matches!(Scenario::from_json(json), Err(TspError::Scenario(_))));
    }

    #[test]
    fn test_build_reports_out_of_range_rate() {
        let json = r#"{"locations": [["A", 0, 0], ["B", 1, 1], ["C", 2, 0]],
                       "populationSize": 4, "mutationRate": 1.5}"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert!(matches!(
            scenario.build(),
            Err(TspError::RateOutOfRange { name: "mutation_rate", .. })
        ));
    }

    #[test]
    fn test_build_reports_oversized_population() {
        let json = r#"{"locations": [["A", 0, 0], ["B", 1, 1], ["C", 2, 0]]}"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert!(matches!(
            scenario.build(),
            Err(TspError::PopulationExceedsPermutations { permutations: 6, .. })
        ));
    }

    #[test]
    fn test_from_reader() {
        let scenario = Scenario::from_reader(SQUARE.as_bytes()).unwrap();
        assert_eq!(scenario.selection_strategy, SelectionStrategy::Tournament);
    }
}
