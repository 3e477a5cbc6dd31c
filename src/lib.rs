//! Exact and DSATUR-based graph coloring, with a benchmarking harness

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph, colorings and checker
pub mod color;

/// error type shared by the crate
pub mod error;

/// read DIMACS instances & write solutions
pub mod dimacs;

/// random instances
pub mod generator;

/// timing harness comparing the solvers
pub mod bench;

/// helper and utility methods for executables
pub mod util;

/// exact and greedy solvers for the graph coloring problem
pub mod search;
