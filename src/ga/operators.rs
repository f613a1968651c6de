//! Permutation crossover and mutation operators.
//!
//! These operate on `&[usize]` location-index vectors. Crossover always
//! returns freshly allocated children; mutation edits only the slice it is
//! given.
//!
//! # Crossover
//!
//! - [`prefix_crossover`]: one-point order crossover. Child A keeps
//!   parent1's prefix up to a random cut, then the rest of parent2's
//!   locations in parent2's order. Child B swaps the roles.
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct random positions, O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// One-point order crossover with a cut drawn uniformly from `[1, n-1]`.
///
/// For fewer than 2 locations there is no valid cut and the children are
/// copies of the parents.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn prefix_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    crossover_at(parent1, parent2, cut)
}

/// One-point order crossover at a fixed cut.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::operators::crossover_at;
///
/// let (a, b) = crossover_at(&[0, 1, 2, 3, 4], &[4, 2, 0, 3, 1], 2);
/// assert_eq!(a, vec![0, 1, 4, 2, 3]);
/// assert_eq!(b, vec![4, 2, 0, 1, 3]);
/// ```
///
/// # Panics
/// Panics if parents have different lengths or `cut > n`.
pub fn crossover_at(parent1: &[usize], parent2: &[usize], cut: usize) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(cut <= parent1.len(), "cut point out of range");

    (
        build_child(parent1, parent2, cut),
        build_child(parent2, parent1, cut),
    )
}

/// Copy `template[..cut]`, then append `donor` in order, skipping values
/// already in the prefix.
fn build_child(template: &[usize], donor: &[usize], cut: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = Vec::with_capacity(n);
    let mut in_prefix = vec![false; n];

    for &val in &template[..cut] {
        child.push(val);
        in_prefix[val] = true;
    }
    child.extend(donor.iter().copied().filter(|&val| !in_prefix[val]));

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange the occupants of two distinct random positions.
///
/// No-op for fewer than 2 elements.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    perm.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================
