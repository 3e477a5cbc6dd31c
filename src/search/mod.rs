//! Solvers for the graph coloring problem.

/// base-k counter used by the exhaustive search
pub mod odometer;

/// exact chromatic number by exhaustive enumeration
pub mod brute_force;

/// greedy DSATUR algorithm
pub mod greedy_dsatur;
