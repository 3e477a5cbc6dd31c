use rand::Rng;

use crate::color::Graph;
use crate::error::ColorError;

/** random symmetric adjacency matrix: each pair (i,j), i<j, is an edge with probability p */
pub fn random_adj_matrix<R:Rng>(rng:&mut R, size:usize, edge_probability:f64) -> Vec<Vec<u8>> {
    let p = edge_probability.max(0.).min(1.);
    let mut matrix = vec![vec![0 ; size] ; size];
    for i in 0..size {
        for j in i+1..size {
            if rng.gen_bool(p) {
                matrix[i][j] = 1;
                matrix[j][i] = 1;
            }
        }
    }
    matrix
}

/** builds a graph from an adjacency matrix (non-zero entries off the diagonal are edges) */
pub fn adj_matrix_to_graph(matrix:&[Vec<u8>]) -> Result<Graph, ColorError> {
    let mut graph = Graph::new(matrix.len())?;
    for (i,row) in matrix.iter().enumerate() {
        for (j,x) in row.iter().enumerate() {
            if *x != 0 && i != j {
                graph.add_edge(i, j)?;
            }
        }
    }
    Ok(graph)
}

/** random G(n,p) graph */
pub fn random_graph<R:Rng>(rng:&mut R, size:usize, edge_probability:f64) -> Result<Graph, ColorError> {
    adj_matrix_to_graph(&random_adj_matrix(rng, size, edge_probability))
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_matrix_is_symmetric_without_loops() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = random_adj_matrix(&mut rng, 12, 0.5);
        for i in 0..12 {
            assert_eq!(m[i][i], 0);
            for j in 0..12 { assert_eq!(m[i][j], m[j][i]); }
        }
    }

    #[test]
    fn test_extreme_probabilities() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random_graph(&mut rng, 6, 0.).unwrap().nb_edges(), 0);
        assert_eq!(random_graph(&mut rng, 6, 1.).unwrap().nb_edges(), 15);
    }

    #[test]
    fn test_matrix_round_trip() {
        let mut rng = StdRng::seed_from_u64(5);
        let g = random_graph(&mut rng, 7, 0.4).unwrap();
        let rendered:Vec<Vec<u8>> = g.adj_matrix_string().lines()
            .map(|l| l.split(' ').map(|x| if x == "1" { 1 } else { 0 }).collect())
            .collect();
        let g2 = adj_matrix_to_graph(&rendered).unwrap();
        assert_eq!(g.edges(), g2.edges());
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = random_graph(&mut StdRng::seed_from_u64(9), 10, 0.5).unwrap();
        let b = random_graph(&mut StdRng::seed_from_u64(9), 10, 0.5).unwrap();
        assert_eq!(a.edges(), b.edges());
    }
}
