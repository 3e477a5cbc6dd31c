use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use log::error;
use serde_json::json;

use dsatur_color::color::coloring_to_partition;
use dsatur_color::error::ColorError;
use dsatur_color::search::brute_force::brute_force_coloring;
use dsatur_color::util::{init_logger, read_params, export_results};


fn run() -> Result<(), ColorError> {
    // parse arguments
    let yaml = load_yaml!("brute_force.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let budget:Option<u64> = match main_args.value_of("budget") {
        None => None,
        Some(b) => Some(b.parse::<u64>().map_err(|_|
            ColorError::Parse(format!("unable to parse the budget given ({})", b))
        )?),
    };
    let (
        inst_filename,
        instance,
        sol_file,
        perf_file
    ) = read_params(&main_args)?;

    // solve it
    let t_start = Instant::now();
    let res = brute_force_coloring(&instance, budget)?;
    let duration = t_start.elapsed().as_secs_f32();
    println!("brute force took {:.3} seconds ({} candidates). Chromatic number: {}",
        duration, res.tested, res.chromatic_number);
    let stats = json!({
        "primal_list": vec![res.chromatic_number],
        "time_searched": duration,
        "nb_candidates": res.tested,
        "inst_name": inst_filename
    });

    // export results
    let solution = coloring_to_partition(&res.coloring);
    export_results(&instance, &solution, &stats, perf_file, sol_file)
}

/** computes the chromatic number of a coloring instance by exhaustive search */
pub fn main() {
    init_logger();
    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
