//! Random row sampling for report generation.
//!
//! Sampling is uniform with replacement, so the same row may back more
//! than one annotation. Indices are sorted before use, which keeps the
//! report in trace order regardless of draw order.

use rand::Rng;

/// Draw `count` row indices in `[0, row_count)`, sorted ascending.
///
/// `row_count` must be nonzero; callers reject empty traces before
/// sampling.
pub fn sample_indices<R: Rng>(rng: &mut R, row_count: usize, count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..count).map(|_| rng.gen_range(0..row_count)).collect();
    indices.sort_unstable();
    indices
}
