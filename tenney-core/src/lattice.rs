//! # Lattice Distance Module
//!
//! Harmonic-distance helpers for the just-intonation lattice. A ratio is
//! represented by its prime-exponent vector (a "monzo"), and the distance
//! between two lattice nodes is the Tenney height of their exponent delta.
//!
//! ## Features
//! - Prime factorization of integers and ratios into exponent vectors
//! - Per-prime exponent delta between two nodes
//! - Tenney height of a delta, weighted by log2 of each prime

use crate::lissajous::reduce_ratio;
use std::collections::BTreeMap;

/// Maps a prime to a signed exponent.
///
/// Keys span the whole `u64` range so every factor of a `u64` ratio has an
/// axis. Deltas received from callers may still carry the invalid axes 0
/// and 1; those are skipped rather than rejected.
pub type PrimeExponents = BTreeMap<u64, i32>;

/// Computes the Tenney height of a prime-exponent delta.
///
/// Sums `|exponent| * log2(prime)` over all entries. Entries whose key is
/// below 2 or whose exponent is 0 contribute nothing.
///
/// # Arguments
/// * `delta` - Prime to exponent displacement between two lattice nodes
///
/// # Returns
/// * Harmonic distance in bits (0.0 for an empty delta)
pub fn tenney_height_delta(delta: &PrimeExponents) -> f64 {
    delta
        .iter()
        .filter(|&(&prime, &exponent)| prime >= 2 && exponent != 0)
        .map(|(&prime, &exponent)| f64::from(exponent.unsigned_abs()) * (prime as f64).log2())
        .sum()
}

/// Tenney height of the ratio `num/den` measured from 1/1.
///
/// In lowest terms this is `log2(num * den)`, so no factorization is needed.
/// A zero on either side is the unison and has height 0.
pub fn tenney_height(num: u64, den: u64) -> f64 {
    let (num, den) = reduce_ratio(num, den);
    (num as f64).log2() + (den as f64).log2()
}

/// Factorizes a positive integer into its prime exponents.
///
/// `0` and `1` have no prime factors and yield an empty map.
pub fn monzo(mut n: u64) -> PrimeExponents {
    let mut exponents = PrimeExponents::new();
    if n < 2 {
        return exponents;
    }
    let mut p = 2u64;
    while p.checked_mul(p).is_some_and(|square| square <= n) {
        while n % p == 0 {
            *exponents.entry(p).or_insert(0) += 1;
            n /= p;
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        *exponents.entry(n).or_insert(0) += 1;
    }
    exponents
}

/// Prime-exponent vector of the ratio `num/den`.
///
/// Shared factors cancel, so `6/4` and `3/2` give the same vector.
/// A zero on either side is treated as the unison 1/1.
pub fn ratio_monzo(num: u64, den: u64) -> PrimeExponents {
    if num == 0 || den == 0 {
        return PrimeExponents::new();
    }
    let upper = monzo(num);
    let lower = monzo(den);
    exponent_delta(&lower, &upper)
}

/// Per-prime difference `to - from`, with zero entries removed.
///
/// This is the displacement walked on the lattice when moving from the
/// node `from` to the node `to`.
pub fn exponent_delta(from: &PrimeExponents, to: &PrimeExponents) -> PrimeExponents {
    let mut delta = to.clone();
    for (&prime, &exponent) in from {
        *delta.entry(prime).or_insert(0) -= exponent;
    }
    delta.retain(|_, exponent| *exponent != 0);
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn delta(entries: &[(u64, i32)]) -> PrimeExponents {
        entries.iter().copied().collect()
    }

    #[test]
    fn empty_delta_has_zero_height() {
        assert_eq!(tenney_height_delta(&PrimeExponents::new()), 0.0);
    }

    #[test]
    fn single_fifth_is_log2_of_three() {
        let height = tenney_height_delta(&delta(&[(3, 1)]));
        assert!((height - 3f64.log2()).abs() < EPSILON);
        assert!((height - 1.585).abs() < 1e-3);
    }

    #[test]
    fn mixed_signs_use_magnitudes() {
        let height = tenney_height_delta(&delta(&[(3, -2), (5, 1)]));
        let expected = 2.0 * 3f64.log2() + 5f64.log2();
        assert!((height - expected).abs() < EPSILON);
        assert!((height - 5.49).abs() < 1e-2);
    }

    #[test]
    fn keys_below_two_are_ignored() {
        assert_eq!(tenney_height_delta(&delta(&[(1, 5), (0, 3)])), 0.0);
    }

    #[test]
    fn zero_exponents_are_ignored() {
        assert_eq!(tenney_height_delta(&delta(&[(7, 0)])), 0.0);
    }

    #[test]
    fn monzo_factorizes_composites() {
        assert_eq!(monzo(360), delta(&[(2, 3), (3, 2), (5, 1)]));
        assert_eq!(monzo(31), delta(&[(31, 1)]));
        assert!(monzo(1).is_empty());
        assert!(monzo(0).is_empty());
    }

    #[test]
    fn ratio_monzo_cancels_common_factors() {
        assert_eq!(ratio_monzo(6, 4), ratio_monzo(3, 2));
        assert_eq!(ratio_monzo(5, 4), delta(&[(2, -2), (5, 1)]));
    }

    #[test]
    fn delta_between_nodes_drops_shared_axes() {
        let fifth = ratio_monzo(3, 2);
        let major_third = ratio_monzo(5, 4);
        assert_eq!(
            exponent_delta(&fifth, &major_third),
            delta(&[(2, -1), (3, -1), (5, 1)])
        );
    }

    #[test]
    fn tenney_height_of_ratio_matches_product_formula() {
        // Tenney height of n/d in lowest terms is log2(n * d).
        assert!((tenney_height(5, 4) - 20f64.log2()).abs() < EPSILON);
        assert!((tenney_height(9, 8) - 72f64.log2()).abs() < EPSILON);
        assert_eq!(tenney_height(0, 7), 0.0);
    }

    #[test]
    fn primes_above_i64_range_keep_their_weight() {
        const LARGE_PRIME: u64 = (1 << 63) + 29;
        let height = tenney_height_delta(&delta(&[(LARGE_PRIME, 1)]));
        assert!((height - 63.0).abs() < 1e-6);
        assert!((tenney_height(LARGE_PRIME, 1) - 63.0).abs() < 1e-6);
        assert!((tenney_height(1, LARGE_PRIME) - 63.0).abs() < 1e-6);
    }

    #[test]
    fn monzo_handles_factors_near_the_top_of_u64() {
        // 2^64 - 1 = 3 * 5 * 17 * 257 * 641 * 65537 * 6700417
        assert_eq!(
            monzo(u64::MAX),
            delta(&[(3, 1), (5, 1), (17, 1), (257, 1), (641, 1), (65537, 1), (6700417, 1)])
        );
        // Cofactor above 2^32 stays a single axis.
        assert_eq!(monzo(2 * 4_294_967_311), delta(&[(2, 1), (4_294_967_311, 1)]));
    }
}
