use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

#[test]
fn can_select_first_drawn_on_identical_distances() {
    let population = vec![Tour::new(create_square_points()); 5];
    let random = FakeRandom::new(vec![3, 0, 1, 4], vec![]);

    assert_eq!(tournament_select(population.as_slice(), 4, &random), 3);
}

#[test]
fn can_select_shortest_among_drawn() {
    let square = Tour::new(create_square_points());
    let mut crossed = square.clone();
    crossed.swap(1, 2);
    let population = vec![crossed.clone(), crossed.clone(), square, crossed];
    let random = FakeRandom::new(vec![1, 0, 2, 3], vec![]);

    assert_eq!(tournament_select(population.as_slice(), 4, &random), 2);
}

#[test]
fn can_find_optimum_on_square() {
    let tour = Tour::new(create_square_points());

    let result = GeneticAlgorithm::default().solve(&tour, &DefaultRandom::new_with_seed(1)).expect("cannot solve");

    assert_eq!(result.distance(), 40.);
}

#[test]
fn can_start_from_first_individual_of_initial_population() {
    let tour = create_random_tour(30, 1000., 5);
    let mut first = tour.clone();
    first.shuffle(&DefaultRandom::new_with_seed(5));
    let genetic = GeneticAlgorithm { generations: 0, ..GeneticAlgorithm::default() };

    let result = genetic.solve(&tour, &DefaultRandom::new_with_seed(5)).expect("cannot solve");

    assert_eq!(result.points(), first.points());
    assert_eq!(result.distance(), first.distance());
}

#[test]
fn can_return_permutation_of_input() {
    let tour = create_random_tour(30, 100., 4);
    let genetic = GeneticAlgorithm { generations: 50, ..GeneticAlgorithm::default() };

    let result = genetic.solve(&tour, &DefaultRandom::new_with_seed(4)).expect("cannot solve");

    assert!(result.is_permutation_of(&tour));
}

parameterized_test! {cannot_solve_with_invalid_parameters, genetic, {
    cannot_solve_with_invalid_parameters_impl(genetic);
}}

cannot_solve_with_invalid_parameters! {
    case_01_population: GeneticAlgorithm { population_size: 0, ..GeneticAlgorithm::default() },
    case_02_tournament: GeneticAlgorithm { tournament_size: 0, ..GeneticAlgorithm::default() },
    case_03_swap_rate: GeneticAlgorithm { swap_rate: 1.5, ..GeneticAlgorithm::default() },
    case_04_reversal_rate: GeneticAlgorithm { reversal_rate: -0.1, ..GeneticAlgorithm::default() },
}

fn cannot_solve_with_invalid_parameters_impl(genetic: GeneticAlgorithm) {
    let tour = Tour::new(create_square_points());

    assert!(genetic.solve(&tour, &DefaultRandom::new_with_seed(0)).is_err());
}
