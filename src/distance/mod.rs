//! Pairwise and cyclic tour costs.

mod matrix;

pub use matrix::DistanceMatrix;
