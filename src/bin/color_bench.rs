use std::fs;
use std::process;
use std::str::FromStr;

use clap::{App, ArgMatches, load_yaml};
use log::{error, info};

use dsatur_color::bench::{BenchConfig, run_benchmark, write_csv};
use dsatur_color::error::ColorError;
use dsatur_color::util::init_logger;


/// parses the value of an optional argument
fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>, ColorError> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_|
            ColorError::Parse(format!("unable to parse {} ({})", name, s))
        ),
    }
}

/// json configuration (if any) overridden by the command line
fn read_config(main_args:&ArgMatches) -> Result<BenchConfig, ColorError> {
    let mut config = match main_args.value_of("config") {
        None => BenchConfig::default(),
        Some(filename) => BenchConfig::from_file(filename)?,
    };
    if let Some(x) = parse_arg(main_args, "trials")? { config.trials = x; }
    if let Some(x) = parse_arg(main_args, "min_size")? { config.min_size = x; }
    if let Some(x) = parse_arg(main_args, "max_size")? { config.max_size = x; }
    if let Some(x) = parse_arg(main_args, "edge_probability")? { config.edge_probability = x; }
    if let Some(x) = parse_arg(main_args, "brute_max_size")? { config.brute_max_size = x; }
    if let Some(x) = parse_arg(main_args, "seed")? { config.seed = x; }
    if let Some(x) = main_args.value_of("output") { config.output = x.to_string(); }
    Ok(config)
}

fn run() -> Result<(), ColorError> {
    let yaml = load_yaml!("color_bench.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let config = read_config(&main_args)?;
    info!("{:?}", config);
    let rows = run_benchmark(&config)?;
    write_csv(&config.output, &rows)?;
    println!("wrote {} rows in {}", rows.len(), config.output);
    if let Some(filename) = main_args.value_of("perf") {
        fs::write(filename, serde_json::to_string(&rows)?)?;
    }
    Ok(())
}

/** benchmarks DSATUR and the exact solver on random graphs */
pub fn main() {
    init_logger();
    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
