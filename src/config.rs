//! Configuration parameters for the ATSP genetic algorithm.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Mutation operator applied to a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationMethod {
    /// Exchange the cities at two random positions.
    Swap,
    /// Reverse the segment between two random positions.
    Invert,
}

impl FromStr for MutationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swap" => Ok(MutationMethod::Swap),
            "invert" => Ok(MutationMethod::Invert),
            _ => Err(Error::UnknownMutationMethod(s.to_string())),
        }
    }
}

impl fmt::Display for MutationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationMethod::Swap => write!(f, "swap"),
            MutationMethod::Invert => write!(f, "invert"),
        }
    }
}

/// Parameter varied by a batch of runs over a fixed grid.
///
/// Each grid value is run once with every [`MutationMethod`], methods in the
/// outer loop. All other settings come from the base configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sweep {
    /// Population sizes 50, 100 and 200.
    Population,
    /// Mutation rates 0.02, 0.05 and 0.10.
    Mutation,
}

pub const SWEEP_POPULATION_SIZES: [usize; 3] = [50, 100, 200];
pub const SWEEP_MUTATION_RATES: [f64; 3] = [0.02, 0.05, 0.10];
const SWEEP_METHODS: [MutationMethod; 2] = [MutationMethod::Swap, MutationMethod::Invert];

impl Sweep {
    /// Expand `base` into the configurations of this sweep.
    pub fn configs(self, base: &Config) -> Vec<Config> {
        let mut configs = Vec::with_capacity(SWEEP_METHODS.len() * 3);
        for method in SWEEP_METHODS {
            let base = base.clone().with_mutation_method(method);
            match self {
                Sweep::Population => configs.extend(
                    SWEEP_POPULATION_SIZES
                        .iter()
                        .map(|&size| base.clone().with_population_size(size)),
                ),
                Sweep::Mutation => configs.extend(
                    SWEEP_MUTATION_RATES
                        .iter()
                        .map(|&rate| base.clone().with_mutation_rate(rate)),
                ),
            }
        }
        configs
    }
}

impl FromStr for Sweep {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "population" => Ok(Sweep::Population),
            "mutation" => Ok(Sweep::Mutation),
            _ => Err(Error::InvalidConfiguration(format!(
                "unknown sweep '{}', expected population or mutation",
                s
            ))),
        }
    }
}

/// Configuration settings for one run of the genetic algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of tours in every generation
    pub population_size: usize,
    /// Probability that a child is mutated once
    pub mutation_rate: f64,
    /// Probability that a child is produced by crossover instead of copying
    pub crossover_rate: f64,
    /// Wall-clock budget for the run
    pub stop_duration: Duration,
    /// Mutation operator
    pub mutation_method: MutationMethod,
    /// Seed for the run's random generator; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            population_size: 100,
            mutation_rate: 0.05,
            crossover_rate: 0.8,
            stop_duration: Duration::from_secs(60),
            mutation_method: MutationMethod::Swap,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Set the wall-clock budget.
    pub fn with_stop_duration(mut self, duration: Duration) -> Self {
        self.stop_duration = duration;
        self
    }

    /// Set the mutation operator.
    pub fn with_mutation_method(mut self, method: MutationMethod) -> Self {
        self.mutation_method = method;
        self
    }

    /// Seed the random generator for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "{} must be within [0, 1], got {}",
            name, rate
        )))
    }
}
