//! Genetic operators for the ATSP genetic algorithm.

use crate::config::MutationMethod;
use crate::tour::Tour;
use rand::Rng;

/// Implements the genetic operators (crossover, mutation).
pub struct Genetic;

impl Genetic {
    /// Perform ordered crossover (OX) between two parent tours.
    ///
    /// Both cut points are drawn uniformly from `0..n` and ordered so that the
    /// copied segment is `[start, end]`.
    pub fn crossover<R: Rng + ?Sized>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
        if parent1.is_empty() || parent2.is_empty() {
            return Tour::new(Vec::new());
        }

        let tour_size = parent1.len();
        let cut1 = rng.gen_range(0..tour_size);
        let cut2 = rng.gen_range(0..tour_size);

        let (start, end) = if cut1 <= cut2 {
            (cut1, cut2)
        } else {
            (cut2, cut1)
        };

        order_crossover(parent1, parent2, start, end)
    }

    /// Mutate a child once with the given method.
    ///
    /// Both positions are drawn independently and may coincide.
    pub fn mutate<R: Rng + ?Sized>(&self, tour: &mut Tour, method: MutationMethod, rng: &mut R) {
        if tour.is_empty() {
            return;
        }

        let i = rng.gen_range(0..tour.len());
        let j = rng.gen_range(0..tour.len());

        match method {
            MutationMethod::Swap => tour.swap(i, j),
            MutationMethod::Invert => tour.reverse_segment(i, j),
        }
    }
}

/// Order crossover with a fixed segment `[start, end]` of `parent1`.
///
/// The segment is copied in place. The remaining slots are filled with the
/// cities of `parent2` that are not yet in the child, in `parent2` order,
/// each going to the next free slot to the right of the previous insertion.
///
/// # Panics
///
/// Panics if the parents are not permutations of the same length or if
/// `start > end` or `end >= parent1.len()`.
pub fn order_crossover(parent1: &Tour, parent2: &Tour, start: usize, end: usize) -> Tour {
    debug_assert_eq!(parent1.len(), parent2.len());

    let mut child: Vec<Option<usize>> = vec![None; parent1.len()];
    for i in start..=end {
        child[i] = Some(parent1[i]);
    }

    // Never rewinds: free slots are consumed strictly left to right
    let mut cursor = 0;
    for &city in parent2.iter() {
        if !child.contains(&Some(city)) {
            while child[cursor].is_some() {
                cursor += 1;
            }
            child[cursor] = Some(city);
        }
    }

    Tour::new(child.into_iter().flatten().collect())
}
