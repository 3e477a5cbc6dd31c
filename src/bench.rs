use std::fs;
use std::time::Instant;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::generator::random_graph;
use crate::search::brute_force::exact_chromatic_number;
use crate::search::greedy_dsatur::dsatur_coloring;

/** parameters of a benchmark run */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// number of random graphs per size
    pub trials: usize,
    /// smallest graph size
    pub min_size: usize,
    /// largest graph size
    pub max_size: usize,
    /// probability of each edge
    pub edge_probability: f64,
    /// the exact solver only runs on sizes up to this one
    pub brute_max_size: usize,
    /// seed of the instance generator
    pub seed: u64,
    /// csv output file
    pub output: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            trials: 200,
            min_size: 5,
            max_size: 30,
            edge_probability: 0.5,
            brute_max_size: 9,
            seed: 0,
            output: "performance_data.csv".to_string(),
        }
    }
}

impl BenchConfig {
    /// reads a (possibly partial) configuration from a json file
    pub fn from_file(filename:&str) -> Result<Self, ColorError> {
        let content = fs::read_to_string(filename)?;
        let config:Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// rejects parameters for which no measure can be taken
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.trials == 0 {
            return Err(ColorError::InvalidConfig("trials must be at least 1".to_string()));
        }
        if self.max_size == 0 || self.min_size > self.max_size {
            return Err(ColorError::InvalidConfig(format!(
                "empty size range {}..={}", self.min_size, self.max_size
            )));
        }
        if !(0. ..=1.).contains(&self.edge_probability) {
            return Err(ColorError::InvalidConfig(format!(
                "edge probability {} not in [0,1]", self.edge_probability
            )));
        }
        Ok(())
    }
}

/** aggregated measures for one graph size */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRow {
    /// number of vertices
    pub size: usize,
    /// mean DSATUR time (seconds)
    pub dsatur_mean_time: f64,
    /// mean number of colors used by DSATUR
    pub dsatur_mean_colors: f64,
    /// mean exact solver time (seconds), None if skipped for this size
    pub brute_mean_time: Option<f64>,
    /// mean chromatic number, None if skipped for this size
    pub brute_mean_colors: Option<f64>,
}

fn mean(values:&[f64]) -> f64 {
    if values.is_empty() { return 0.; }
    values.iter().sum::<f64>() / values.len() as f64
}

/**
runs the benchmark: for every size, generates `trials` random graphs, times DSATUR
(and the exact solver for small sizes) on each of them.
*/
pub fn run_benchmark(config:&BenchConfig) -> Result<Vec<BenchRow>, ColorError> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut res = Vec::new();
    for size in config.min_size.max(1)..=config.max_size {
        let run_brute = size <= config.brute_max_size;
        let mut dsatur_times = Vec::with_capacity(config.trials);
        let mut dsatur_colors = Vec::with_capacity(config.trials);
        let mut brute_times = Vec::new();
        let mut brute_colors = Vec::new();
        for _ in 0..config.trials {
            let graph = random_graph(&mut rng, size, config.edge_probability)?;
            let t_start = Instant::now();
            let (coloring, nb_colors) = dsatur_coloring(&graph);
            dsatur_times.push(t_start.elapsed().as_secs_f64());
            dsatur_colors.push(nb_colors as f64);
            if !graph.is_valid_coloring(&coloring) {
                warn!("bench: invalid DSATUR coloring on a graph of size {}", size);
            }
            if run_brute {
                let t_start = Instant::now();
                let chromatic_number = exact_chromatic_number(&graph);
                brute_times.push(t_start.elapsed().as_secs_f64());
                brute_colors.push(chromatic_number as f64);
                if chromatic_number > nb_colors {
                    warn!("bench: DSATUR ({}) beat the exact solver ({})", nb_colors, chromatic_number);
                }
            }
        }
        let row = BenchRow {
            size,
            dsatur_mean_time: mean(&dsatur_times),
            dsatur_mean_colors: mean(&dsatur_colors),
            brute_mean_time: if run_brute { Some(mean(&brute_times)) } else { None },
            brute_mean_colors: if run_brute { Some(mean(&brute_colors)) } else { None },
        };
        info!("size {}: dsatur {:.6}s ({:.2} colors)", size, row.dsatur_mean_time, row.dsatur_mean_colors);
        res.push(row);
    }
    Ok(res)
}

/// formats an optional measure (empty when missing)
fn optional_cell(x:Option<f64>) -> String {
    x.map(|v| v.to_string()).unwrap_or_default()
}

/** csv rendering of the benchmark rows (with header) */
pub fn rows_to_csv(rows:&[BenchRow]) -> String {
    let mut res = String::from("InputSize,DSaturMeanTime,DSaturMeanColors,BruteMeanTime,BruteMeanColors\n");
    for r in rows {
        res += format!("{},{},{},{},{}\n",
            r.size,
            r.dsatur_mean_time,
            r.dsatur_mean_colors,
            optional_cell(r.brute_mean_time),
            optional_cell(r.brute_mean_colors),
        ).as_str();
    }
    res
}

/// writes the benchmark rows into a csv file
pub fn write_csv(filename:&str, rows:&[BenchRow]) -> Result<(), ColorError> {
    fs::write(filename, rows_to_csv(rows))?;
    Ok(())
}
