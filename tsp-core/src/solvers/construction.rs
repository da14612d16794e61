use crate::models::{Point, Tour};
use crate::utils::{GenericResult, Random};

/// Returns index of the candidate nearest to given point. On ties, the first candidate wins.
pub(crate) fn nearest_index(from: &Point, candidates: &[Point]) -> usize {
    candidates
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best_idx, best_distance), (idx, candidate)| {
            let distance = from.distance_to(candidate);
            if distance < best_distance { (idx, distance) } else { (best_idx, best_distance) }
        })
        .0
}

/// Builds a tour starting from a random point and appending points chosen by `select_next` from
/// the list of not yet visited ones. The list keeps its original relative order.
pub(crate) fn construct_tour<F>(tour: &Tour, random: &dyn Random, mut select_next: F) -> GenericResult<Tour>
where
    F: FnMut(&Point, &[Point]) -> usize,
{
    if tour.is_empty() {
        return Err("cannot construct a tour from empty set of points".into());
    }

    let mut unvisited = tour.points().to_vec();
    let mut result = Tour::with_capacity(unvisited.len());

    let mut current = unvisited.remove(random.index(unvisited.len()));
    result.push(current);

    while !unvisited.is_empty() {
        let next_idx = select_next(&current, unvisited.as_slice());
        current = unvisited.remove(next_idx);
        result.push(current);
    }

    Ok(result)
}
