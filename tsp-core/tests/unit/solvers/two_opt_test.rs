use super::*;
use crate::helpers::models::*;
use crate::models::Point;
use crate::utils::DefaultRandom;

fn permutations(items: Vec<Point>) -> Vec<Vec<Point>> {
    if items.len() <= 1 {
        return vec![items];
    }

    (0..items.len())
        .flat_map(|idx| {
            let mut rest = items.clone();
            let head = rest.remove(idx);

            permutations(rest).into_iter().map(move |mut tail| {
                tail.insert(0, head);
                tail
            })
        })
        .collect()
}

#[test]
fn can_reach_optimum_on_square_from_any_permutation() {
    let all = permutations(create_square_points());
    assert_eq!(all.len(), 24);

    all.into_iter().for_each(|points| {
        let mut tour = Tour::new(points);

        TwoOptSearch::default().optimize(&mut tour);

        assert_eq!(tour.distance(), 40.);
    });
}

#[test]
fn can_untangle_points_on_circle() {
    let tour = create_circle_tour(12, 50.);

    (0..5).for_each(|seed| {
        let result = TwoOptSearch::default().solve(&tour, &DefaultRandom::new_with_seed(seed)).expect("cannot solve");

        assert!(result.is_permutation_of(&tour));
        assert_distance!(result.distance(), get_perimeter(12, 50.));
    });
}

parameterized_test! {can_never_increase_distance, (size, seed), {
    can_never_increase_distance_impl(size, seed);
}}

can_never_increase_distance! {
    case_01: (5, 0),
    case_02: (30, 1),
    case_03: (60, 2),
}

fn can_never_increase_distance_impl(size: usize, seed: u64) {
    let mut tour = create_random_tour(size, 1000., seed);
    let before = tour.distance();

    TwoOptSearch::default().optimize(&mut tour);

    assert!(tour.distance() <= before + 1E-9);
}

#[test]
fn can_limit_amount_of_passes() {
    let mut tour = create_random_tour(50, 1000., 9);

    let passes = TwoOptSearch { max_passes: 1 }.optimize(&mut tour);

    assert_eq!(passes, 1);
}

#[test]
fn can_handle_tiny_tours() {
    let random = DefaultRandom::new_with_seed(0);

    let single = TwoOptSearch::default().solve(&create_tour(&[(1., 1.)]), &random).expect("cannot solve");
    let pair = TwoOptSearch::default().solve(&create_tour(&[(1., 1.), (2., 2.)]), &random).expect("cannot solve");

    assert_eq!(single.len(), 1);
    assert_eq!(pair.len(), 2);
    assert!(TwoOptSearch::default().solve(&Tour::default(), &random).is_err());
}

#[test]
fn cannot_solve_with_zero_passes() {
    let tour = Tour::new(create_square_points());

    assert!(TwoOptSearch { max_passes: 0 }.solve(&tour, &DefaultRandom::new_with_seed(0)).is_err());
}
