//! Genetic Algorithm for closed-tour search.
//!
//! Individuals are permutations of location indices ([`Tour`](crate::models::Tour)).
//! Each generation evaluates fitness, draws a parent pool, recombines
//! consecutive parent pairs, and keeps the best `population_size` tours of
//! the merged parent + offspring pool.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, selection)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour, cost, and per-generation history
//! - [`Selection`]: Roulette-wheel or tournament parent selection
//!
//! # Submodules
//!
//! - [`operators`]: One-point order crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
mod init;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use fitness::{evaluate_population, selection_weights};
pub use init::{initial_population, permutation_count};
pub use runner::{GaResult, GaRunner};
pub use selection::{RouletteWheel, Selection};
