use std::convert::Infallible;

use log::{debug, trace};

use crate::color::{Coloring, Graph};
use crate::error::ColorError;
use crate::search::odometer::Odometer;

/** outcome of an exact search */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceResult {
    /// minimum number of colors
    pub chromatic_number: usize,
    /// first valid coloring found with chromatic_number colors
    pub coloring: Coloring,
    /// number of candidate colorings tested (over every budget k)
    pub tested: u64,
}

/**
enumerates colorings for k = 1, 2, ... and returns the first valid one.
`check_budget(tested)` runs before each candidate and can stop the search.
*/
fn search<E, F>(graph:&Graph, mut check_budget:F) -> Result<BruteForceResult, E>
where F: FnMut(u64) -> Result<(), E> {
    let n = graph.nb_vertices();
    let mut tested:u64 = 0;
    for k in 1..=n {
        trace!("brute force: trying {} colors", k);
        let mut odometer = Odometer::new(n, k);
        loop {
            check_budget(tested)?;
            tested += 1;
            if graph.is_valid_coloring(odometer.digits()) {
                debug!("brute force: chromatic number {} ({} candidates tested)", k, tested);
                return Ok(BruteForceResult {
                    chromatic_number: k,
                    coloring: odometer.digits().to_vec(),
                    tested,
                });
            }
            if !odometer.advance() { break; }
        }
    }
    // with n colors, vertices can all get distinct colors (graphs have no self-loops)
    Ok(BruteForceResult { chromatic_number: n, coloring: (0..n).collect(), tested })
}

/**
exact chromatic number by exhaustive enumeration.
    1. for k = 1, 2, ... enumerate the k^n colorings with an odometer
    2. return the first k for which a valid coloring exists

Every smaller k has been fully enumerated before k is tried, so the result is minimal.
The cost is the sum over k of k^n checks: only use this on small graphs.

parameters:
 - graph: graph to color
 - budget: if set, maximum number of candidates to test before giving up
*/
pub fn brute_force_coloring(graph:&Graph, budget:Option<u64>) -> Result<BruteForceResult, ColorError> {
    search(graph, |tested| match budget {
        Some(b) if tested >= b => Err(ColorError::SearchAborted { tested }),
        _ => Ok(()),
    })
}

/** returns the chromatic number of the graph (unbounded search) */
pub fn exact_chromatic_number(graph:&Graph) -> usize {
    match search(graph, |_| Ok::<(), Infallible>(())) {
        Ok(res) => res.chromatic_number,
        Err(never) => match never {},
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    fn complete(n:usize) -> Graph {
        let mut g = Graph::new(n).unwrap();
        for u in 0..n {
            for v in u+1..n {
                g.add_edge(u, v).unwrap();
            }
        }
        g
    }

    fn cycle(n:usize) -> Graph {
        let edges:Vec<(usize,usize)> = (0..n).map(|i| (i, (i+1)%n)).collect();
        Graph::from_edges(n, &edges).unwrap()
    }

    /// true iff some coloring with k colors is valid
    fn k_colorable(g:&Graph, k:usize) -> bool {
        let mut odo = Odometer::new(g.nb_vertices(), k);
        loop {
            if g.is_valid_coloring(odo.digits()) { return true; }
            if !odo.advance() { return false; }
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(exact_chromatic_number(&Graph::new(1).unwrap()), 1);
        assert_eq!(exact_chromatic_number(&Graph::new(6).unwrap()), 1);
        assert_eq!(exact_chromatic_number(&Graph::from_edges(2, &[(0,1)]).unwrap()), 2);
        assert_eq!(exact_chromatic_number(&cycle(3)), 3);
        assert_eq!(exact_chromatic_number(&cycle(4)), 2);
        assert_eq!(exact_chromatic_number(&cycle(5)), 3);
        assert_eq!(exact_chromatic_number(&complete(5)), 5);
    }

    #[test]
    fn test_triangle_with_tail() {
        let g = Graph::from_edges(5, &[(0,1),(0,2),(1,2),(1,3),(2,3),(3,4)]).unwrap();
        let res = brute_force_coloring(&g, None).unwrap();
        assert_eq!(res.chromatic_number, 3);
        assert!(g.is_valid_coloring(&res.coloring));
        assert_eq!(exact_chromatic_number(&g), 3);
        assert_eq!(exact_chromatic_number(&g), 3);
    }

    #[test]
    fn test_unbounded_search_matches_large_budget() {
        let g = cycle(5);
        let bounded = brute_force_coloring(&g, Some(u64::MAX)).unwrap();
        let unbounded = brute_force_coloring(&g, None).unwrap();
        assert_eq!(bounded, unbounded);
        assert_eq!(exact_chromatic_number(&g), unbounded.chromatic_number);
    }

    #[test]
    fn test_budget_aborts() {
        let g = complete(6);
        match brute_force_coloring(&g, Some(100)) {
            Err(ColorError::SearchAborted { tested }) => assert_eq!(tested, 100),
            other => panic!("expected an aborted search, got {:?}", other),
        }
        // an empty graph is solved by the first candidate
        let res = brute_force_coloring(&Graph::new(6).unwrap(), Some(1)).unwrap();
        assert_eq!(res.tested, 1);
    }

    #[test]
    fn test_minimality_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..30 {
            let n = rng.gen_range(1..=6);
            let mut g = Graph::new(n).unwrap();
            for u in 0..n {
                for v in u+1..n {
                    if rng.gen_bool(0.5) { g.add_edge(u, v).unwrap(); }
                }
            }
            let k = exact_chromatic_number(&g);
            assert!(k >= 1 && k <= n);
            assert!(k_colorable(&g, k));
            if k > 1 { assert!(!k_colorable(&g, k-1)); }
        }
    }
}
