//! Contains a parallel trial harness: it runs batches of independent randomized solver trials on a
//! bounded worker pool, aggregates their results and derives scaling metrics.

mod aggregation;
pub use self::aggregation::*;

mod batch;
pub use self::batch::*;

mod seed;
pub use self::seed::SeedSequence;

mod sweep;
pub use self::sweep::*;

mod trial;
pub use self::trial::*;
