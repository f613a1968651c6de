//! Cost evaluation and fitness-proportionate selection weights.
//!
//! Fitness inverts cost relative to the worst tour in the population:
//! `fitness_i = max_cost - cost_i`, normalized to sum to 1. The worst tour
//! therefore has weight 0. When every tour has the same cost the
//! normalizer is 0 and the weights fall back to uniform `1/n`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::instance::TspInstance;
use crate::models::Tour;

/// Computes and caches the cyclic cost of every tour.
///
/// `parallel` only takes effect with the `parallel` feature.
pub fn evaluate_population(instance: &TspInstance, population: &mut [Tour], parallel: bool) {
    if parallel {
        evaluate_parallel(instance, population);
    } else {
        evaluate_sequential(instance, population);
    }
}

fn evaluate_sequential(instance: &TspInstance, population: &mut [Tour]) {
    for tour in population.iter_mut() {
        let cost = instance.tour_cost(tour.order());
        tour.set_cost(cost);
    }
}

#[cfg(feature = "parallel")]
fn evaluate_parallel(instance: &TspInstance, population: &mut [Tour]) {
    population.par_iter_mut().for_each(|tour| {
        let cost = instance.tour_cost(tour.order());
        tour.set_cost(cost);
    });
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel(instance: &TspInstance, population: &mut [Tour]) {
    evaluate_sequential(instance, population);
}

/// Maps costs to a selection-probability distribution.
///
/// Lower cost gets higher weight. The result has the same length as
/// `costs`, is non-negative, and sums to 1 within floating-point drift.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::selection_weights;
///
/// let w = selection_weights(&[10.0, 20.0, 30.0]);
/// assert!((w[0] - 2.0 / 3.0).abs() < 1e-12);
/// assert!((w[1] - 1.0 / 3.0).abs() < 1e-12);
/// assert_eq!(w[2], 0.0);
///
/// // Homogeneous population: uniform fallback.
/// assert_eq!(selection_weights(&[5.0, 5.0]), vec![0.5, 0.5]);
/// ```
pub fn selection_weights(costs: &[f64]) -> Vec<f64> {
    let n = costs.len();
    if n == 0 {
        return Vec::new();
    }

    let max_cost = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let fitness: Vec<f64> = costs.iter().map(|&c| max_cost - c).collect();
    let total: f64 = fitness.iter().sum();

    if total > 0.0 {
        fitness.into_iter().map(|f| f / total).collect()
    } else {
        vec![1.0 / n as f64; n]
    }
}
