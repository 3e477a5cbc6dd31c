use std::cmp::{Ordering, max};

use priority_queue::PriorityQueue;
use bit_set::BitSet;
use log::{debug, trace};

use crate::color::{Coloring, Graph, Solution, VertexId, coloring_to_partition};

/// priority of an uncolored vertex. The greatest one is colored first.
#[derive(Debug, PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    vertex: VertexId,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored vertex that sees the most colors
       (break ties by the largest degree, then by the largest index)
    2. give it the smallest color none of its colored neighbors use
    3. mark all its uncolored neighbors seeing this color
    4. repeat until every vertex is colored

The result is deterministic. Returns (coloring, nb colors). The number of colors is an upper
bound of the chromatic number.
*/
pub fn dsatur_coloring(graph:&Graph) -> (Coloring, usize) {
    let n:usize = graph.nb_vertices();
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for i in 0..n {
        remaining_vertices.push(i, DSatInfo { dsat:0, degree:graph.degree(i), vertex:i });
    }
    let mut colors:Vec<Option<usize>> = vec![None ; n]; // colors[v] -> color assigned to vertex v
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[v] -> colors v sees
    let mut forbidden:Vec<bool> = vec![false ; n]; // scratch, reset after each step
    let mut last_color:usize = 0;
    while let Some((current_vertex, info)) = remaining_vertices.pop() {
        // smallest color not used by a colored neighbor
        for neigh in graph.neighbors(current_vertex) {
            if let Some(c) = colors[*neigh] { forbidden[c] = true; }
        }
        let color = forbidden.iter().position(|b| !b).unwrap_or(n);
        for neigh in graph.neighbors(current_vertex) {
            if let Some(c) = colors[*neigh] { forbidden[c] = false; }
        }
        trace!("dsatur: vertex {} (dsat:{}, degree:{}) gets color {}",
            current_vertex, info.dsat, info.degree, color);
        colors[current_vertex] = Some(color);
        last_color = max(last_color, color);
        // update saturation degree information
        for conflict_vertex in graph.neighbors(current_vertex).iter()
        .filter(|conflict_vertex| colors[**conflict_vertex].is_none()) {
            if adj_colors[*conflict_vertex].insert(color) { // first time it sees this color
                remaining_vertices.change_priority_by(conflict_vertex, |p| { p.dsat += 1; });
            }
        }
    }
    let coloring:Coloring = colors.into_iter().map(|c| c.unwrap_or(0)).collect();
    debug!("dsatur: {} vertices colored with {} colors", n, last_color+1);
    (coloring, last_color+1)
}

/** runs DSATUR and returns the coloring as a partition (res[i]: vertices colored by i) */
pub fn greedy_dsatur(graph:&Graph) -> Solution {
    let (coloring, _) = dsatur_coloring(graph);
    coloring_to_partition(&coloring)
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    use crate::color::checker;
    use crate::color::CheckerResult;
    use crate::search::brute_force::exact_chromatic_number;

    fn complete(n:usize) -> Graph {
        let mut g = Graph::new(n).unwrap();
        for u in 0..n {
            for v in u+1..n {
                g.add_edge(u, v).unwrap();
            }
        }
        g
    }

    fn random_graph(rng:&mut StdRng, n:usize, p:f64) -> Graph {
        let mut g = Graph::new(n).unwrap();
        for u in 0..n {
            for v in u+1..n {
                if rng.gen_bool(p) { g.add_edge(u, v).unwrap(); }
            }
        }
        g
    }

    #[test]
    fn test_known_values() {
        assert_eq!(dsatur_coloring(&Graph::new(4).unwrap()).1, 1);
        assert_eq!(dsatur_coloring(&Graph::from_edges(2, &[(0,1)]).unwrap()).1, 2);
        assert_eq!(dsatur_coloring(&Graph::from_edges(3, &[(0,1),(1,2),(2,0)]).unwrap()).1, 3);
        assert_eq!(dsatur_coloring(&Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]).unwrap()).1, 2);
        for n in 1..10 {
            let (coloring, k) = dsatur_coloring(&complete(n));
            assert_eq!(k, n);
            assert_eq!(checker(&complete(n), &coloring), CheckerResult::Ok(n));
        }
    }

    #[test]
    fn test_triangle_with_tail() {
        let g = Graph::from_edges(5, &[(0,1),(0,2),(1,2),(1,3),(2,3),(3,4)]).unwrap();
        let (coloring, k) = dsatur_coloring(&g);
        // 3 first (degree 3, largest index), then 2, 1, 0 and the pendant 4
        assert_eq!(coloring, vec![0,2,1,0,1]);
        assert_eq!(k, 3);
    }

    #[test]
    fn test_tie_break_on_largest_index() {
        // path 0-1-2: vertex 1 first (degree 2), then 2 before 0
        let g = Graph::from_edges(3, &[(0,1),(1,2)]).unwrap();
        assert_eq!(dsatur_coloring(&g), (vec![1,0,1], 2));
    }

    #[test]
    fn test_saturation_counts_distinct_colors() {
        // 2 sees color 0 twice (from 5 then 3) and keeps saturation 1,
        // so 1 (colors {0,1}) is colored before it
        let g = Graph::from_edges(6, &[(0,1),(0,2),(0,5),(1,3),(1,4),(2,3),(2,5),(3,4),(4,5)]).unwrap();
        let (coloring, k) = dsatur_coloring(&g);
        assert_eq!(coloring, vec![1,2,2,0,1,0]);
        assert_eq!(k, 3);
        assert!(g.is_valid_coloring(&coloring));
    }

    #[test]
    fn test_partition_output() {
        let g = Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]).unwrap();
        let sol = greedy_dsatur(&g);
        assert_eq!(sol.len(), 2);
        assert_eq!(sol.iter().map(|c| c.len()).sum::<usize>(), 4);
    }

    #[test]
    fn test_random_graphs_valid_bounded_and_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let n = rng.gen_range(1..=7);
            let g = random_graph(&mut rng, n, 0.5);
            let (coloring, k) = dsatur_coloring(&g);
            assert!(g.is_valid_coloring(&coloring));
            assert!(k <= n);
            assert!(k >= exact_chromatic_number(&g));
            assert_eq!(dsatur_coloring(&g), (coloring, k));
        }
    }

    #[test]
    fn test_large_sparse_graph() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = random_graph(&mut rng, 300, 0.05);
        let (coloring, k) = dsatur_coloring(&g);
        assert!(g.is_valid_coloring(&coloring));
        let max_degree = (0..300).map(|u| g.degree(u)).max().unwrap();
        assert!(k <= max_degree + 1);
    }
}
