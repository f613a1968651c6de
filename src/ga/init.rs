//! Initial population sampling.
//!
//! The initial population holds distinct tours drawn uniformly from all
//! `n!` orderings, without ever enumerating them:
//!
//! - Small instances (`n!` fits in `u32`, i.e. `n <= 12`): distinct
//!   permutation ranks are sampled without replacement and decoded through
//!   the factorial number system. Uniqueness is exact.
//! - Larger instances: Fisher-Yates shuffles filtered through a seen-set.
//!   Collisions are astronomically rare; after
//!   `MAX_ATTEMPTS_PER_INDIVIDUAL × population_size` draws the seen-set check
//!   is dropped for the remaining slots.

use std::collections::HashSet;

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::error::{Result, TspError};

const MAX_ATTEMPTS_PER_INDIVIDUAL: usize = 64;

/// Number of distinct orderings of `n` locations, or `None` if `n!`
/// overflows `usize`.
///
/// ```
/// use u_tsp::ga::permutation_count;
///
/// assert_eq!(permutation_count(4), Some(24));
/// assert_eq!(permutation_count(0), Some(1));
/// assert_eq!(permutation_count(40), None);
/// ```
pub fn permutation_count(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Samples `size` distinct random permutations of `0..n`.
///
/// # Errors
///
/// - [`TspError::NoLocations`] if `n == 0`
/// - [`TspError::PopulationExceedsPermutations`] if `size > n!`
pub fn initial_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Result<Vec<Vec<usize>>> {
    if n == 0 {
        return Err(TspError::NoLocations);
    }
    match permutation_count(n) {
        Some(total) if size > total => Err(TspError::PopulationExceedsPermutations {
            population_size: size,
            permutations: total,
        }),
        Some(total) if total <= u32::MAX as usize => Ok(sample_by_rank(n, total, size, rng)),
        _ => Ok(sample_by_shuffle(n, size, rng)),
    }
}

fn sample_by_rank<R: Rng>(n: usize, total: usize, size: usize, rng: &mut R) -> Vec<Vec<usize>> {
    index::sample(rng, total, size)
        .iter()
        .map(|rank| decode_rank(n, rank))
        .collect()
}

/// Decodes `rank` in `0..n!` into the permutation at that lexicographic
/// position.
fn decode_rank(n: usize, mut rank: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..n).collect();
    let mut order = Vec::with_capacity(n);
    for remaining in (1..=n).rev() {
        let block = permutation_count(remaining - 1).unwrap_or(usize::MAX);
        let digit = rank / block;
        rank %= block;
        debug_assert!(digit < pool.len(), "rank out of range for n = {n}");
        order.push(pool.remove(digit));
    }
    order
}

fn sample_by_shuffle<R: Rng>(n: usize, size: usize, rng: &mut R) -> Vec<Vec<usize>> {
    let identity: Vec<usize> = (0..n).collect();
    let max_attempts = size.saturating_mul(MAX_ATTEMPTS_PER_INDIVIDUAL);
    let mut seen: HashSet<Vec<usize>> = HashSet::with_capacity(size);
    let mut population = Vec::with_capacity(size);
    let mut attempts = 0usize;
    let mut relaxed = false;

    while population.len() < size {
        let mut perm = identity.clone();
        perm.shuffle(rng);
        attempts += 1;

        if relaxed || seen.insert(perm.clone()) {
            population.push(perm);
        } else if attempts >= max_attempts {
            tracing::warn!(
                attempts,
                filled = population.len(),
                size,
                "initial population uniqueness relaxed"
            );
            relaxed = true;
            population.push(perm);
        }
    }
    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_permutation;
    use crate::random::create_rng;

    fn all_distinct(population: &[Vec<usize>]) -> bool {
        let set: HashSet<&Vec<usize>> = population.iter().collect();
        set.len() == population.len()
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutation_count(1), Some(1));
        assert_eq!(permutation_count(5), Some(120));
        assert_eq!(permutation_count(12), Some(479_001_600));
        assert_eq!(permutation_count(21), None);
    }

    #[test]
    fn test_decode_rank_lexicographic() {
        assert_eq!(decode_rank(3, 0), vec![0, 1, 2]);
        assert_eq!(decode_rank(3, 1), vec![0, 2, 1]);
        assert_eq!(decode_rank(3, 2), vec![1, 0, 2]);
        assert_eq!(decode_rank(3, 5), vec![2, 1, 0]);

        let decoded: Vec<Vec<usize>> = (0..24).map(|r| decode_rank(4, r)).collect();
        assert!(all_distinct(&decoded));
        assert!(decoded.iter().all(|p| is_permutation(p, 4)));
    }

    #[test]
    fn test_full_space_is_covered() {
        let mut rng = create_rng(42);
        let population = initial_population(4, 24, &mut rng).unwrap();
        assert_eq!(population.len(), 24);
        assert!(all_distinct(&population));
        assert!(population.iter().all(|p| is_permutation(p, 4)));
    }

    #[test]
    fn test_distinct_for_medium_instance() {
        let mut rng = create_rng(7);
        let population = initial_population(10, 250, &mut rng).unwrap();
        assert_eq!(population.len(), 250);
        assert!(all_distinct(&population));
        assert!(population.iter().all(|p| is_permutation(p, 10)));
    }

    #[test]
    fn test_distinct_for_large_instance() {
        let mut rng = create_rng(7);
        let population = initial_population(30, 200, &mut rng).unwrap();
        assert_eq!(population.len(), 200);
        assert!(all_distinct(&population));
        assert!(population.iter().all(|p| is_permutation(p, 30)));
    }

    #[test]
    fn test_rejects_oversized_population() {
        let mut rng = create_rng(1);
        assert!(matches!(
            initial_population(3, 7, &mut rng),
            Err(TspError::PopulationExceedsPermutations {
                population_size: 7,
                permutations: 6
            })
        ));
        assert!(matches!(
            initial_population(0, 1, &mut rng),
            Err(TspError::NoLocations)
        ));
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = initial_population(8, 50, &mut create_rng(99)).unwrap();
        let b = initial_population(8, 50, &mut create_rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_path_relaxes_uniqueness() {
        let mut rng = create_rng(3);
        let population = sample_by_shuffle(2, 5, &mut rng);
        assert_eq!(population.len(), 5);
        assert!(population.iter().all(|p| is_permutation(p, 2)));
    }
}
