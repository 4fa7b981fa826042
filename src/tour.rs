//! Tour representation for the ATSP.

use crate::problem::DistanceOracle;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A closed visiting order over all cities.
///
/// A valid tour is a permutation of `0..n`; the last city connects back to
/// the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    /// The sequence of city indices
    pub cities: Vec<usize>,
}

impl Tour {
    /// Create a tour from a city sequence.
    pub fn new(cities: Vec<usize>) -> Self {
        Tour { cities }
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Check if the tour is empty.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterate over the cities in visiting order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.cities.iter()
    }

    /// Total closed-loop cost of the tour.
    ///
    /// Sums `distance(tour[i], tour[i + 1])` along the sequence and adds the
    /// closing edge from the last city back to the first. Edges are taken in
    /// travel direction only.
    pub fn cost<D: DistanceOracle + ?Sized>(&self, problem: &D) -> u64 {
        let (first, last) = match (self.cities.first(), self.cities.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return 0,
        };

        let mut total: u64 = 0;
        for i in 0..self.cities.len() - 1 {
            total += u64::from(problem.distance(self.cities[i], self.cities[i + 1]));
        }
        total + u64::from(problem.distance(last, first))
    }

    /// Check that the tour visits every city of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.cities.len() != n {
            return false;
        }

        let mut seen = vec![false; n];
        for &city in &self.cities {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    /// Exchange the cities at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.cities.swap(i, j);
    }

    /// Reverse the segment between positions `i` and `j`, inclusive.
    ///
    /// The bounds may be given in either order.
    pub fn reverse_segment(&mut self, i: usize, j: usize) {
        let (start, end) = if i <= j { (i, j) } else { (j, i) };
        self.cities[start..=end].reverse();
    }
}

impl Index<usize> for Tour {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.cities[index]
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cities.iter().join(" -> "))
    }
}
