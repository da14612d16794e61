#[cfg(test)]
#[path = "../../tests/unit/solvers/genetic_test.rs"]
mod genetic_test;

use super::*;
use crate::utils::ensure;

/// A genetic algorithm without crossover: every generation is rebuilt from tournament selected
/// parents which are mutated by swap and segment reversal.
#[derive(Clone, Debug)]
pub struct GeneticAlgorithm {
    /// Amount of individuals in every generation.
    pub population_size: usize,
    /// Amount of generations.
    pub generations: usize,
    /// Amount of individuals drawn for a tournament.
    pub tournament_size: usize,
    /// Probability to swap two random points of a child.
    pub swap_rate: f64,
    /// Probability to reverse a random segment of a child.
    pub reversal_rate: f64,
}

impl Default for GeneticAlgorithm {
    fn default() -> Self {
        Self { population_size: 50, generations: 500, tournament_size: 4, swap_rate: 0.15, reversal_rate: 0.1 }
    }
}

impl GeneticAlgorithm {
    pub(crate) fn validate(&self) -> GenericResult<()> {
        ensure(self.population_size > 0, || "genetic population size should be positive".to_string())?;
        ensure(self.tournament_size > 0, || "genetic tournament size should be positive".to_string())?;
        ensure(is_probability(self.swap_rate) && is_probability(self.reversal_rate), || {
            format!("genetic mutation rates should be in [0, 1], got {} and {}", self.swap_rate, self.reversal_rate)
        })
    }

    fn mutate(&self, child: &mut Tour, random: &dyn Random) {
        if random.is_hit(self.swap_rate) {
            let a = random.index(child.len());
            let b = random.index(child.len());
            child.swap(a, b);
        }

        if random.is_hit(self.reversal_rate) {
            let start = random.index(child.len());
            let end = random.index(child.len());
            child.reverse(start.min(end), start.max(end));
        }
    }
}

impl Solver for GeneticAlgorithm {
    fn solve(&self, tour: &Tour, random: &dyn Random) -> GenericResult<Tour> {
        ensure(!tour.is_empty(), || "cannot run genetic algorithm on empty tour".to_string())?;
        self.validate()?;

        let mut population = (0..self.population_size)
            .map(|_| {
                let mut individual = tour.clone();
                individual.shuffle(random);
                individual
            })
            .collect::<Vec<_>>();

        let mut best = population[0].clone();

        for _ in 0..self.generations {
            let next_generation = (0..self.population_size)
                .map(|_| {
                    let parent_idx = tournament_select(population.as_slice(), self.tournament_size, random);
                    let mut child = population[parent_idx].clone();
                    self.mutate(&mut child, random);

                    if child.distance() < best.distance() {
                        best = child.clone();
                    }

                    child
                })
                .collect();

            population = next_generation;
        }

        Ok(best)
    }
}

/// Draws `size` random members (with repetition) and returns index of the shortest one.
/// The first drawn member wins on ties.
pub(crate) fn tournament_select(population: &[Tour], size: usize, random: &dyn Random) -> usize {
    let first = random.index(population.len());

    (1..size).fold(first, |best_idx, _| {
        let competitor_idx = random.index(population.len());
        if population[competitor_idx].distance() < population[best_idx].distance() { competitor_idx } else { best_idx }
    })
}

fn is_probability(value: f64) -> bool {
    (0. ..=1.).contains(&value)
}
