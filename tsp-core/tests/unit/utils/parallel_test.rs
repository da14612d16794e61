use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::sleep;
use std::time::Duration;

#[test]
fn can_collect_results_in_source_order() {
    let pool = ThreadPool::new(2).expect("cannot create pool");

    let results = pool.execute(|| parallel_into_collect((0..16).collect(), |item: usize| item * 2));

    assert_eq!(results, (0..16).map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_limit_amount_of_concurrent_operations() {
    let pool = ThreadPool::new(2).expect("cannot create pool");
    let running = AtomicUsize::new(0);
    let max_running = AtomicUsize::new(0);

    pool.execute(|| {
        parallel_into_collect((0..8).collect(), |_: usize| {
            let current = running.fetch_add(1, Ordering::SeqCst) + 1;
            max_running.fetch_max(current, Ordering::SeqCst);
            sleep(Duration::from_millis(10));
            running.fetch_sub(1, Ordering::SeqCst);
        })
    });

    assert_eq!(pool.size(), 2);
    assert!(max_running.load(Ordering::SeqCst) <= 2);
}

#[test]
fn cannot_create_pool_without_threads() {
    assert!(ThreadPool::new(0).is_err());
}
