//! Genetic-algorithm search for short closed tours over named 2D locations.
//!
//! Given a fixed set of uniquely named locations, the crate evolves a
//! population of candidate tours (permutations of all locations) and
//! reports the cheapest closed tour it found. Tour cost is the sum of
//! Euclidean distances between consecutive locations plus the edge that
//! returns to the start.
//!
//! - **Instance**: [`TspInstance`] owns the locations and a precomputed
//!   [`distance::DistanceMatrix`]; everything else refers to locations
//!   by index.
//! - **GA**: [`ga::GaRunner`] runs the evolutionary loop with roulette or
//!   tournament selection, one-point order crossover, swap mutation and
//!   elitist truncation. Runs are reproducible from a seed.
//! - **Scenario**: [`scenario::Scenario`] reads a run description from
//!   JSON.
//! - **Batch**: [`batch::BatchRunner`] sweeps a parameter grid, writes
//!   one CSV row per run, and [`batch::BatchSummary`] aggregates the rows.
//!
//! # Example
//!
//! ```
//! use u_tsp::ga::{GaConfig, GaRunner, Selection};
//! use u_tsp::TspInstance;
//!
//! let instance = TspInstance::from_coordinates(
//!     &["Gliwice", "Cairo", "Rome", "Krakow", "Paris"],
//!     &[(0.0, 1.0), (3.0, 2.0), (6.0, 1.0), (7.0, 4.5), (15.0, -1.0)],
//! )?;
//! let config = GaConfig::default()
//!     .with_population_size(60)
//!     .with_generations(50)
//!     .with_selection(Selection::Tournament(3))
//!     .with_seed(7);
//!
//! let result = GaRunner::run(&instance, &config)?;
//! assert_eq!(result.best_tour.len(), 5);
//! # Ok::<(), u_tsp::TspError>(())
//! ```
//!
//! The library emits `tracing` events and never installs a subscriber.

pub mod batch;
pub mod distance;
pub mod error;
pub mod ga;
pub mod instance;
pub mod models;
pub mod random;
pub mod scenario;

pub use error::{Result, TspError};
pub use instance::TspInstance;
