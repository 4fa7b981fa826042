//! # ATSP-GA
//!
//! A time-boxed genetic algorithm for the Asymmetric Traveling Salesman
//! Problem (ATSP).
//!
//! The population is seeded with randomized-start nearest-neighbour tours.
//! Every generation replaces the whole population with children built from
//! uniformly selected parents through order crossover (OX) and a single
//! swap or inversion mutation. The best tour ever produced is tracked
//! separately from the population together with the time it was found, and
//! the run stops once its wall-clock budget is spent.

pub mod config;
pub mod error;
pub mod genetic;
pub mod population;
pub mod problem;
pub mod solution;
pub mod tour;
pub mod utils;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::genetic::Genetic;
use crate::population::Population;
use crate::problem::DistanceOracle;
use crate::solution::{BestSolution, RunResult};

use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The main algorithm structure that orchestrates the evolutionary search.
///
/// The distance oracle is only borrowed, so independent runs may share one
/// instance.
pub struct GeneticAlgorithm<'a, D: DistanceOracle + ?Sized> {
    pub problem: &'a D,
    pub population: Population,
    pub config: Config,
    pub best_solution: Option<BestSolution>,
    pub generations: u64,
    pub run_time: Duration,
    pub genetic: Genetic,
    pub start_time: Instant,
    rng: ChaCha8Rng,
}

impl<'a, D: DistanceOracle + ?Sized> GeneticAlgorithm<'a, D> {
    /// Create a new instance for the given problem and configuration.
    ///
    /// Fails if the configuration is out of range or the problem has no
    /// cities.
    pub fn new(problem: &'a D, config: Config) -> Result<Self> {
        config.validate()?;
        if problem.city_count() == 0 {
            return Err(Error::EmptyProblem);
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(GeneticAlgorithm {
            problem,
            population: Population::default(),
            config,
            best_solution: None,
            generations: 0,
            run_time: Duration::from_secs(0),
            genetic: Genetic,
            start_time: Instant::now(),
            rng,
        })
    }

    /// Seed the population with greedy tours and reset the run state.
    ///
    /// The run clock starts once seeding is done.
    pub fn initialize(&mut self) {
        self.population = Population::initialize_greedy(
            self.problem,
            self.config.population_size,
            &mut self.rng,
        );
        self.best_solution = None;
        self.generations = 0;
        self.run_time = Duration::from_secs(0);
        self.start_time = Instant::now();
    }

    /// Seed the population and evolve until the time budget is spent.
    pub fn run(&mut self) -> RunResult {
        info!(
            "Starting run: {} cities, population {}, {} mutation, budget {:?}",
            self.problem.city_count(),
            self.config.population_size,
            self.config.mutation_method,
            self.config.stop_duration
        );

        self.initialize();
        self.evolve()
    }

    /// Evolve the current population until the time budget is spent.
    ///
    /// The budget is checked between generations only, so a run can overshoot
    /// it by up to one generation. A zero budget completes no generation and
    /// yields no best solution. Seeds the population first if
    /// [`initialize`](Self::initialize) has not been called yet.
    pub fn evolve(&mut self) -> RunResult {
        self.ensure_initialized();

        while self.start_time.elapsed() < self.config.stop_duration {
            self.evolve_generation();
        }

        self.run_time = self.start_time.elapsed();

        match &self.best_solution {
            Some(best) => info!(
                "Run finished after {} generations: best cost {} found after {:?}",
                self.generations, best.cost, best.found_after
            ),
            None => info!("Run finished without completing a generation"),
        }

        RunResult {
            best: self.best_solution.clone(),
            generations: self.generations,
            run_time: self.run_time,
        }
    }

    /// Build one full generation of children and replace the population.
    ///
    /// Every child is evaluated; a strictly cheaper child than the best so
    /// far becomes the new best. No individual is carried over.
    pub fn evolve_generation(&mut self) {
        self.ensure_initialized();

        let size = self.config.population_size;
        let mut offspring = Vec::with_capacity(size);

        for _ in 0..size {
            // Select parents
            let parent1 = self.population.select_parent(&mut self.rng);
            let parent2 = self.population.select_parent(&mut self.rng);

            // Recombine or copy the first parent
            let mut child = if self.rng.gen::<f64>() < self.config.crossover_rate {
                self.genetic.crossover(parent1, parent2, &mut self.rng)
            } else {
                parent1.clone()
            };

            if self.rng.gen::<f64>() < self.config.mutation_rate {
                self.genetic
                    .mutate(&mut child, self.config.mutation_method, &mut self.rng);
            }

            let cost = child.cost(self.problem);
            let improved = self
                .best_solution
                .as_ref()
                .map_or(true, |best| cost < best.cost);

            if improved {
                let found_after = self.start_time.elapsed();
                debug!(
                    "New best cost {} in generation {} after {:?}",
                    cost,
                    self.generations + 1,
                    found_after
                );
                self.best_solution = Some(BestSolution {
                    tour: child.clone(),
                    cost,
                    found_after,
                });
            }

            offspring.push(child);
        }

        self.population.replace(offspring);
        self.generations += 1;

        trace!(
            "Generation {} complete, best cost {:?}",
            self.generations,
            self.best_solution.as_ref().map(|b| b.cost)
        );
    }

    fn ensure_initialized(&mut self) {
        if self.population.is_empty() {
            self.initialize();
        }
    }
}
