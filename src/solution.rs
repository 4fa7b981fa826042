//! Results produced by a run.

use crate::tour::Tour;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The best tour observed during a run.
#[derive(Clone, Serialize, Deserialize)]
pub struct BestSolution {
    /// The tour itself
    pub tour: Tour,
    /// Its total closed-loop cost
    pub cost: u64,
    /// Time from run start until this tour was first produced
    pub found_after: Duration,
}

/// Outcome of one run of the genetic algorithm.
#[derive(Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Best tour of the run, `None` if no generation completed
    pub best: Option<BestSolution>,
    /// Number of completed generations
    pub generations: u64,
    /// Time spent evolving, excluding seeding
    pub run_time: Duration,
}

impl RunResult {
    /// Cost of the best tour, if any.
    pub fn best_cost(&self) -> Option<u64> {
        self.best.as_ref().map(|b| b.cost)
    }
}

impl fmt::Debug for BestSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best Solution:")?;
        writeln!(f, "  Cost: {}", self.cost)?;
        writeln!(f, "  Found After: {} ns", self.found_after.as_nanos())?;
        writeln!(f, "  Tour: {}", self.tour)
    }
}

impl fmt::Debug for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Result:")?;
        writeln!(f, "  Generations: {}", self.generations)?;
        writeln!(f, "  Run Time: {} ns", self.run_time.as_nanos())?;

        match &self.best {
            Some(best) => write!(f, "{:?}", best),
            None => writeln!(f, "  No generation completed"),
        }
    }
}
