//! A command line interface to benchmark heuristics for the *Travelling Salesman Problem*.
//!

mod commands;

use self::commands::bench::{get_bench_app, run_bench};
use std::process;

fn main() {
    let matches = get_bench_app()
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to benchmark heuristics for the Travelling Salesman Problem")
        .get_matches();

    if let Err(err) = run_bench(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}
