//! Population management and greedy seeding.

use crate::problem::DistanceOracle;
use crate::tour::Tour;
use itertools::Itertools;
use rand::Rng;

/// Build a nearest-neighbour tour starting at `start`.
///
/// From the current city every unvisited city is scanned and the one with the
/// strictly smallest directed distance is taken; ties go to the lowest index.
///
/// # Panics
///
/// Panics if `start >= problem.city_count()`.
pub fn greedy_tour<D: DistanceOracle + ?Sized>(problem: &D, start: usize) -> Tour {
    let n = problem.city_count();
    let mut cities = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    let mut current = start;
    cities.push(current);
    visited[current] = true;

    for _ in 1..n {
        let mut nearest: Option<(usize, u32)> = None;

        for next in 0..n {
            if visited[next] {
                continue;
            }
            let distance = problem.distance(current, next);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((next, distance));
            }
        }

        // There is always an unvisited city left inside this loop
        let Some((next, _)) = nearest else { break };
        cities.push(next);
        visited[next] = true;
        current = next;
    }

    Tour::new(cities)
}

/// The tours of one generation.
///
/// Order carries no meaning; it is only used for indexed selection.
#[derive(Debug, Clone, Default)]
pub struct Population {
    pub tours: Vec<Tour>,
}

impl Population {
    /// Create a population from existing tours.
    pub fn new(tours: Vec<Tour>) -> Self {
        Population { tours }
    }

    /// Seed `size` tours, each a greedy tour from a uniformly random start city.
    ///
    /// # Panics
    ///
    /// Panics if the problem has no cities and `size > 0`.
    pub fn initialize_greedy<D, R>(problem: &D, size: usize, rng: &mut R) -> Self
    where
        D: DistanceOracle + ?Sized,
        R: Rng + ?Sized,
    {
        let n = problem.city_count();
        let tours = (0..size)
            .map(|_| greedy_tour(problem, rng.gen_range(0..n)))
            .collect();

        Population { tours }
    }

    /// Get the population size.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Check if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Draw a parent uniformly at random, with replacement.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty.
    pub fn select_parent<R: Rng + ?Sized>(&self, rng: &mut R) -> &Tour {
        &self.tours[rng.gen_range(0..self.tours.len())]
    }

    /// Discard the current generation in favour of `tours`.
    pub fn replace(&mut self, tours: Vec<Tour>) {
        self.tours = tours;
    }

    /// The cheapest tour of the population together with its cost.
    ///
    /// The first of several equally cheap tours is returned.
    pub fn best<D: DistanceOracle + ?Sized>(&self, problem: &D) -> Option<(&Tour, u64)> {
        let costs: Vec<u64> = self.tours.iter().map(|t| t.cost(problem)).collect();
        costs
            .iter()
            .position_min()
            .map(|index| (&self.tours[index], costs[index]))
    }
}
