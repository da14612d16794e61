//! Contains heuristic solvers for the travelling salesman problem. Every solver is a pure function
//! of an initial tour and a random source: it never mutates the input and keeps no state between
//! invocations.

use crate::models::Tour;
use crate::utils::{GenericError, GenericResult, Random};
use std::fmt;
use std::str::FromStr;

mod construction;

mod greedy;
pub use self::greedy::NearestNeighbour;

mod two_opt;
pub use self::two_opt::TwoOptSearch;

mod annealing;
pub use self::annealing::SimulatedAnnealing;

mod genetic;
pub use self::genetic::GeneticAlgorithm;

mod ant_colony;
pub use self::ant_colony::AntColony;

/// A capability to improve (or construct) a tour.
pub trait Solver: Send + Sync {
    /// Returns a new tour built from the points of given one. Input tour is never modified.
    fn solve(&self, tour: &Tour, random: &dyn Random) -> GenericResult<Tour>;
}

/// Specifies parameters of all solvers.
#[derive(Clone, Debug, Default)]
pub struct SolverConfig {
    /// 2-opt local search parameters.
    pub two_opt: TwoOptSearch,
    /// Simulated annealing parameters.
    pub annealing: SimulatedAnnealing,
    /// Genetic algorithm parameters.
    pub genetic: GeneticAlgorithm,
    /// Ant colony parameters.
    pub ant_colony: AntColony,
}

impl SolverConfig {
    /// Validates parameters of all solvers returning all found issues.
    pub fn validate(&self) -> Vec<GenericError> {
        [self.two_opt.validate(), self.annealing.validate(), self.genetic.validate(), self.ant_colony.validate()]
            .into_iter()
            .filter_map(|result| result.err())
            .collect()
    }
}

/// Specifies a closed set of benchmarked algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Multi-start nearest neighbour construction.
    Greedy,
    /// 2-opt local search from a random tour.
    TwoOpt,
    /// Simulated annealing with geometric cooling.
    SimulatedAnnealing,
    /// Mutation only genetic algorithm.
    Genetic,
    /// Greedy-stochastic ant colony without pheromones.
    AntColony,
}

impl Algorithm {
    /// Returns all algorithms in benchmark order.
    pub fn all() -> Vec<Algorithm> {
        vec![Self::Greedy, Self::TwoOpt, Self::SimulatedAnnealing, Self::Genetic, Self::AntColony]
    }

    /// Returns a human readable name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "Greedy (Multi-Start)",
            Self::TwoOpt => "2-Opt (Random-Start)",
            Self::SimulatedAnnealing => "Simulated Annealing",
            Self::Genetic => "Genetic Algorithm",
            Self::AntColony => "Ant Colony Opt.",
        }
    }

    /// Returns a short key used to select the algorithm from command line or configuration.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::TwoOpt => "two-opt",
            Self::SimulatedAnnealing => "annealing",
            Self::Genetic => "genetic",
            Self::AntColony => "ant-colony",
        }
    }

    /// Creates a solver configured with given parameters.
    pub fn create_solver(&self, config: &SolverConfig) -> Box<dyn Solver> {
        match self {
            Self::Greedy => Box::new(NearestNeighbour),
            Self::TwoOpt => Box::new(config.two_opt.clone()),
            Self::SimulatedAnnealing => Box::new(config.annealing.clone()),
            Self::Genetic => Box::new(config.genetic.clone()),
            Self::AntColony => Box::new(config.ant_colony.clone()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algorithm| algorithm.key() == value.trim())
            .ok_or_else(|| format!("unknown algorithm: '{value}'"))
    }
}
