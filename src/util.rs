use std::fs;

use clap::ArgMatches;
use log::{info, warn};
use serde_json::Value;

use crate::{
    color::{Graph, VertexId, checker, partition_to_coloring, CheckerResult},
    dimacs::{read_from_file, write_solution},
    error::ColorError,
};

/// initializes the logger (default level: info, override with RUST_LOG)
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("info");
    // ignore a second initialization
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}

/** reads command line input and returns the instance name, instance, solution_filename, perf_filename */
pub fn read_params(main_args:&ArgMatches) -> Result<(String, Graph, Option<String>, Option<String>), ColorError> {
    let inst_filename = main_args.value_of("instance")
        .ok_or_else(|| ColorError::Parse("missing instance file".to_string()))?;
    // read value of the solution filename
    let sol_file: Option<String> = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file: Option<String> = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    info!("reading instance: {}...", inst_filename);
    let instance = read_from_file(inst_filename)?;
    instance.display_statistics();
    Ok((inst_filename.to_string(), instance, sol_file, perf_file))
}

/// exports search results to files
pub fn export_results(
    instance:&Graph,
    solution:&[Vec<VertexId>],
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
) -> Result<(), ColorError> {
    // export statistics
    if let Some(filename) = perf_file {
        fs::write(filename.as_str(), serde_json::to_string(stats)?)?;
    }
    // export solution
    if let Some(filename) = sol_file {
        let coloring = partition_to_coloring(instance.nb_vertices(), solution)?;
        match checker(instance, &coloring) {
            CheckerResult::Ok(_) => {},
            checker_result => warn!("invalid solution (reason: {:?})", checker_result),
        }
        write_solution(filename.as_str(), solution)?;
    }
    Ok(())
}
