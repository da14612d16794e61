//! A collection of models to represent a travelling salesman problem and its solutions.

/// Represents a distance between points or a length of the tour.
pub type Distance = f64;

mod point;
pub use self::point::Point;

mod tour;
pub use self::tour::Tour;
