//! Domain types: locations and tours.

mod location;
mod tour;

pub use location::Location;
pub use tour::{is_permutation, Tour};
