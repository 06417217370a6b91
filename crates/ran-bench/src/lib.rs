//! Workloads for the ran benchmarks.
//!
//! Every generator takes a seed and is deterministic, so runs compare
//! like with like:
//!
//! - [`values`]: `n` pseudo-random `u64` payloads
//! - [`insert_positions`]: valid insert positions for a growing array
//! - [`well_conditioned_mat4s`]: invertible 4x4 matrices
//! - [`filled`]: an array of `n` elements under a chosen growth policy

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ran_array::{GrowableArray, GrowthPolicy};
use ran_math::{Mat4, Vec4};

/// `n` pseudo-random payloads.
pub fn values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64()).collect()
}

/// Positions for `n` successive inserts into an initially empty array:
/// the `i`-th position is in `0..=i`.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| (rng.next_u64() % (i as u64 + 1)) as usize)
        .collect()
}

/// `n` strictly diagonally dominant matrices, so every inverse exists.
pub fn well_conditioned_mat4s(n: usize, seed: u64) -> Vec<Mat4> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    // Uniform in [-1, 1).
    let mut unit = move || (rng.next_u32() >> 8) as f32 / (1u32 << 23) as f32 - 1.0;
    (0..n)
        .map(|_| {
            let mut cols = [Vec4::ZERO; 4];
            for (i, col) in cols.iter_mut().enumerate() {
                *col = Vec4::new(unit(), unit(), unit(), unit());
                col[i] = 8.0 + unit();
            }
            let [c1, c2, c3, c4] = cols;
            Mat4::from_cols(c1, c2, c3, c4)
        })
        .collect()
}

/// An array holding `0..n`, grown one push at a time under `G`.
pub fn filled<G: GrowthPolicy>(n: usize) -> GrowableArray<u64, G> {
    let mut arr = GrowableArray::new();
    for v in 0..n as u64 {
        arr.push_back(v);
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;
    use ran_array::{Linear, Logarithmic};

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(values(16, 7), values(16, 7));
        assert_ne!(values(16, 7), values(16, 8));
        assert_eq!(insert_positions(32, 1), insert_positions(32, 1));
    }

    #[test]
    fn insert_positions_stay_in_range() {
        for (i, pos) in insert_positions(500, 42).into_iter().enumerate() {
            assert!(pos <= i, "position {pos} past length {i}");
        }
    }

    #[test]
    fn matrices_are_invertible() {
        for m in well_conditioned_mat4s(64, 3) {
            assert!(m.try_inverse().is_some());
            assert!(m.determinant().abs() > 1.0);
        }
    }

    #[test]
    fn filled_respects_policy() {
        let lin: GrowableArray<u64, Linear> = filled(10);
        let log: GrowableArray<u64, Logarithmic> = filled(10);
        assert_eq!(lin.capacity(), 10);
        assert_eq!(log.capacity(), 16);
        assert_eq!(lin, log);
    }
}
