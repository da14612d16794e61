use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::create_test_environment_with_log;

fn run_sweep(points: Vec<Point>, config: &BenchmarkConfig) -> (GenericResult<Option<BestRoute>>, Vec<BenchmarkRecord>) {
    let (environment, _) = create_test_environment_with_log(42);
    let mut records = vec![];

    let result = run_dataset_sweep("test", points, config, &environment, &mut |record| records.push(record.clone()));

    (result, records)
}

fn create_fast_config(algorithms: Vec<Algorithm>, worker_counts: Vec<usize>) -> BenchmarkConfig {
    let mut solvers = SolverConfig::default();
    solvers.annealing.iterations = 1000;
    solvers.genetic.generations = 20;
    solvers.ant_colony.iterations = 2;

    BenchmarkConfig { trials: 4, worker_counts, algorithms, solvers }
}

#[test]
fn can_calculate_speedup_relative_to_single_worker() {
    let points = create_random_tour(30, 100., 0).points().to_vec();
    let config = BenchmarkConfig { trials: 16, ..create_fast_config(vec![Algorithm::Greedy], vec![1, 2, 4]) };

    let (result, records) = run_sweep(points, &config);

    assert!(result.expect("cannot run sweep").is_some());
    assert_eq!(records.iter().map(|record| record.workers).collect::<Vec<_>>(), vec![1, 2, 4]);
    assert_eq!(records[0].speedup, 1.);
    assert!(records.iter().all(|record| record.speedup >= 0.));
}

#[test]
fn can_emit_records_in_algorithm_then_worker_order() {
    let points = create_random_tour(15, 100., 1).points().to_vec();
    let config = create_fast_config(Algorithm::all(), vec![2, 4]);

    let (result, records) = run_sweep(points, &config);

    assert!(result.is_ok());
    let actual = records.iter().map(|record| (record.algorithm.as_str(), record.workers)).collect::<Vec<_>>();
    let expected = Algorithm::all()
        .iter()
        .flat_map(|algorithm| [1, 2, 4].into_iter().map(move |workers| (algorithm.name(), workers)))
        .collect::<Vec<_>>();
    assert_eq!(actual, expected);
    assert!(records.iter().all(|record| record.dataset == "test" && record.best_distance.is_some()));
}

#[test]
fn can_keep_global_best_not_worse_than_any_record() {
    let points = create_random_tour(20, 100., 2).points().to_vec();
    let config = create_fast_config(vec![Algorithm::Greedy, Algorithm::TwoOpt, Algorithm::AntColony], vec![1, 2]);

    let (result, records) = run_sweep(points.clone(), &config);

    let best = result.expect("cannot run sweep").expect("no best route");
    let best_distance = best.tour.distance();
    assert!(best.tour.is_permutation_of(&Tour::new(points)));
    assert!(records.iter().filter_map(|record| record.best_distance).all(|distance| best_distance <= distance));
    assert!(records.iter().any(|record| {
        record.algorithm == best.algorithm.name() && record.best_distance == Some(best_distance)
    }));
}

#[test]
fn cannot_run_sweep_without_points() {
    let (result, records) = run_sweep(vec![], &BenchmarkConfig::default());

    assert!(result.is_err());
    assert!(records.is_empty());
}

parameterized_test! {cannot_run_sweep_with_invalid_config, config, {
    cannot_run_sweep_with_invalid_config_impl(config);
}}

cannot_run_sweep_with_invalid_config! {
    case_01_no_trials: BenchmarkConfig { trials: 0, ..BenchmarkConfig::default() },
    case_02_no_algorithms: BenchmarkConfig { algorithms: vec![], ..BenchmarkConfig::default() },
    case_03_bad_solver: {
        let mut config = BenchmarkConfig::default();
        config.solvers.two_opt.max_passes = 0;
        config
    },
}

fn cannot_run_sweep_with_invalid_config_impl(config: BenchmarkConfig) {
    let (result, records) = run_sweep(create_square_points(), &config);

    assert!(result.is_err());
    assert!(records.is_empty());
}
