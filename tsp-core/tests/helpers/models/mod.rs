use crate::models::{Point, Tour};
use crate::utils::DefaultRandom;

pub fn create_square_points() -> Vec<Point> {
    vec![Point::new(0., 0.), Point::new(10., 0.), Point::new(10., 10.), Point::new(0., 10.)]
}

pub fn create_tour(coordinates: &[(f64, f64)]) -> Tour {
    coordinates.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Creates a tour with points placed on a circle, so its optimal tour is the polygon perimeter.
pub fn create_circle_tour(size: usize, radius: f64) -> Tour {
    (0..size)
        .map(|idx| {
            let angle = 2. * std::f64::consts::PI * idx as f64 / size as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Creates a tour with random points within [0, side) square.
pub fn create_random_tour(size: usize, side: f64, seed: u64) -> Tour {
    use crate::utils::Random;

    let random = DefaultRandom::new_with_seed(seed);

    (0..size).map(|_| Point::new(random.uniform_real(0., side), random.uniform_real(0., side))).collect()
}

pub fn get_perimeter(size: usize, radius: f64) -> f64 {
    let side = 2. * radius * (std::f64::consts::PI / size as f64).sin();

    side * size as f64
}
