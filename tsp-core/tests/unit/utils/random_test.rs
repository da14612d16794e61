use super::*;

#[test]
fn can_produce_ints_within_closed_range() {
    let random = DefaultRandom::new_with_seed(42);
    let mut counter = [0_usize; 4];

    (0..1000).for_each(|_| {
        let value = random.uniform_int(2, 5);
        assert!((2..=5).contains(&value));
        counter[(value - 2) as usize] += 1;
    });

    assert!(counter.iter().all(|&count| count > 0));
}

#[test]
fn can_reproduce_values_with_same_seed() {
    let first = DefaultRandom::new_with_seed(7);
    let second = DefaultRandom::new_with_seed(7);

    let first = (0..10).map(|_| first.uniform_real(0., 1.)).collect::<Vec<_>>();
    let second = (0..10).map(|_| second.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

parameterized_test! {can_use_is_hit_boundaries, (probability, expected), {
    can_use_is_hit_boundaries_impl(probability, expected);
}}

can_use_is_hit_boundaries! {
    case_01_never: (0., false),
    case_02_always: (1., true),
    case_03_negative: (-1., false),
    case_04_above_one: (2., true),
}

fn can_use_is_hit_boundaries_impl(probability: f64, expected: bool) {
    let random = DefaultRandom::new_with_seed(0);

    assert!((0..100).all(|_| random.is_hit(probability) == expected));
}

#[test]
fn can_shuffle_keeping_all_items() {
    let random = DefaultRandom::new_with_seed(3);
    let original = (0..50).collect::<Vec<_>>();
    let mut items = original.clone();

    shuffle(items.as_mut_slice(), &random);

    assert_ne!(items, original);
    items.sort_unstable();
    assert_eq!(items, original);
}

#[test]
fn can_return_predefined_ints_and_reals_in_order() {
    let random = crate::helpers::utils::FakeRandom::new(vec![3, 1], vec![0.25, 0.75]);

    assert_eq!(random.uniform_int(0, 5), 3);
    assert_eq!(random.uniform_real(0., 1.), 0.25);
    assert_eq!(random.uniform_int(0, 5), 1);
    assert_eq!(random.uniform_real(0., 1.), 0.75);
}
