//! Crate-wide error type.

/// Errors returned by instance construction, configuration validation,
/// the evolutionary run, and the batch/analysis surface.
///
/// Configuration problems are always reported before any generation runs.
#[derive(Debug, thiserror::Error)]
pub enum TspError {
    #[error("instance has no locations")]
    NoLocations,

    #[error("duplicate location id: {0}")]
    DuplicateLocation(String),

    #[error("location {0} has a non-finite coordinate")]
    NonFiniteCoordinate(String),

    #[error("location id {0:?} is empty or contains \"->\"")]
    InvalidLocationId(String),

    #[error("unknown location id: {0}")]
    UnknownLocation(String),

    #[error("a closed tour needs at least 2 locations, got {locations}")]
    DegenerateInput { locations: usize },

    #[error("population_size must be at least 1")]
    ZeroPopulation,

    #[error(
        "population_size {population_size} exceeds the {permutations} distinct tours of this instance"
    )]
    PopulationExceedsPermutations {
        population_size: usize,
        permutations: usize,
    },

    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("tournament size {size} must lie in [1, {population_size}]")]
    InvalidTournamentSize {
        size: usize,
        population_size: usize,
    },

    #[error("{names} location names but {coordinates} coordinates")]
    LengthMismatch { names: usize, coordinates: usize },

    #[error("invalid scenario: {0}")]
    Scenario(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
