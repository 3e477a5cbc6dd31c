//! Compares the exact solver and DSATUR on random graphs

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

use std::process;

use clap::{App, load_yaml};
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dsatur_color::error::ColorError;
use dsatur_color::generator::random_graph;
use dsatur_color::search::brute_force::exact_chromatic_number;
use dsatur_color::search::greedy_dsatur::dsatur_coloring;
use dsatur_color::util::init_logger;


/// reads an optional argument, falls back to its default value
fn value_or<T:std::str::FromStr>(main_args:&clap::ArgMatches, name:&str, default:T) -> Result<T, ColorError> {
    match main_args.value_of(name) {
        None => Ok(default),
        Some(s) => s.parse::<T>().map_err(|_| ColorError::Parse(format!("unable to parse {} ({})", name, s))),
    }
}

fn run() -> Result<(), ColorError> {
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let size:usize = value_or(&main_args, "size", 5)?;
    let amount:usize = value_or(&main_args, "amount", 100)?;
    let p:f64 = value_or(&main_args, "edge_probability", 0.5)?;
    let mut rng = match main_args.value_of("seed") {
        None => StdRng::from_entropy(),
        Some(_) => StdRng::seed_from_u64(value_or(&main_args, "seed", 0)?),
    };
    for i in 0..amount {
        let graph = random_graph(&mut rng, size, p)?;
        println!("Adjacency matrix of graph {}:", i+1);
        print!("{}", graph.adj_matrix_string());
        println!("Chromatic number of graph {} (Brute Force): {}", i+1, exact_chromatic_number(&graph));
        println!("Chromatic number of graph {} (DSatur): {}", i+1, dsatur_coloring(&graph).1);
        println!("-----------------------");
    }
    Ok(())
}

/**
generates random graphs and prints, for each of them, its adjacency matrix and
the number of colors found by both solvers.
*/
pub fn main() {
    init_logger();
    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
