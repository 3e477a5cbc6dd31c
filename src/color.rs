use std::cmp::max;

use bit_set::BitSet;
use log::info;

use crate::error::ColorError;

/** Vertex Id */
pub type VertexId = usize;

/** Coloring (coloring[v]: color of vertex v) */
pub type Coloring = Vec<usize>;

/** Solution of a graph coloring problem
(represented as a partition).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** models an undirected simple graph to be colored */
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}

impl Graph {

    /** creates a graph with n vertices and no edges */
    pub fn new(n:usize) -> Result<Self, ColorError> {
        if n == 0 { return Err(ColorError::EmptyGraph); }
        Ok(Self {
            n,
            m: 0,
            adj_list: vec![Vec::new() ; n],
            adj_matrix: vec![BitSet::default() ; n],
        })
    }

    /** creates a graph with n vertices from an edge list */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, ColorError> {
        let mut res = Self::new(n)?;
        for (u,v) in edges {
            res.add_edge(*u, *v)?;
        }
        Ok(res)
    }

    /// fails if u is not a vertex of the graph
    fn check_vertex(&self, u:VertexId) -> Result<(), ColorError> {
        if u >= self.n {
            return Err(ColorError::VertexOutOfRange { vertex: u, n: self.n });
        }
        Ok(())
    }

    /** inserts the undirected edge (u,v). Inserting an existing edge again does nothing. */
    pub fn add_edge(&mut self, u:VertexId, v:VertexId) -> Result<(), ColorError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v { return Err(ColorError::SelfLoop(u)); }
        if self.adj_matrix[u].contains(v) { return Ok(()); }
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.adj_matrix[u].insert(v);
        self.adj_matrix[v].insert(u);
        self.m += 1;
        Ok(())
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// list of vertices adjacent to vertex u
    pub fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// number of distinct neighbors of u
    pub fn degree(&self, u:VertexId) -> usize { self.adj_list[u].len() }

    /// O(1) adjacency test
    ///
    /// # Panics
    ///  - if u or v is not a vertex of the graph
    pub fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        assert!(u < self.n && v < self.n, "are_adjacent: ({},{}) out of range (n={})", u, v, self.n);
        self.adj_matrix[u].contains(v)
    }

    /// builds the edge list (each edge once, as (u,v) with u < v)
    pub fn edges(&self) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::with_capacity(self.m);
        for (i,l) in self.adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** returns true iff the coloring covers every vertex and no edge is monochromatic */
    pub fn is_valid_coloring(&self, coloring:&[usize]) -> bool {
        matches!(checker(self, coloring), CheckerResult::Ok(_))
    }

    /** adjacency matrix, one row per line, entries separated by spaces */
    pub fn adj_matrix_string(&self) -> String {
        let mut res = String::default();
        for row in &self.adj_matrix {
            let line:Vec<&str> = (0..self.n)
                .map(|j| if row.contains(j) { "1" } else { "0" })
                .collect();
            res += line.join(" ").as_str();
            res += "\n";
        }
        res
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        let degrees = (0..self.n).map(|u| self.degree(u));
        info!("\t{} \t min degree", degrees.clone().min().unwrap_or(0));
        info!("\t{} \t max degree", degrees.max().unwrap_or(0));
    }
}


/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is valid and uses this number of colors
    Ok(usize),
    /// the coloring does not assign exactly one color per vertex
    WrongLength {
        /// number of vertices
        expected: usize,
        /// length of the coloring
        found: usize,
    },
    /// both endpoints of this edge share a color
    Conflict(VertexId, VertexId),
}

/**
checks a coloring against the graph. O(n+m)
*/
pub fn checker(graph:&Graph, coloring:&[usize]) -> CheckerResult {
    if coloring.len() != graph.nb_vertices() {
        return CheckerResult::WrongLength { expected: graph.nb_vertices(), found: coloring.len() };
    }
    for u in 0..graph.nb_vertices() {
        for v in graph.neighbors(u) {
            if coloring[u] == coloring[*v] { return CheckerResult::Conflict(u, *v); }
        }
    }
    CheckerResult::Ok(nb_colors(coloring))
}

/** number of colors of a coloring drawn from 0..k (1 + largest color) */
pub fn nb_colors(coloring:&[usize]) -> usize {
    coloring.iter().fold(0, |acc, c| max(acc, c+1))
}

/** res[c]: vertices colored by c */
pub fn coloring_to_partition(coloring:&[usize]) -> Solution {
    let mut res = vec![vec![] ; nb_colors(coloring)];
    for (v,c) in coloring.iter().enumerate() {
        res[*c].push(v);
    }
    res
}

/** res[v]: index of the class containing v. Vertices missing from the partition are reported. */
pub fn partition_to_coloring(n:usize, solution:&[Vec<VertexId>]) -> Result<Coloring, ColorError> {
    let mut res:Vec<Option<usize>> = vec![None ; n];
    for (c,class) in solution.iter().enumerate() {
        for v in class {
            match res.get_mut(*v) {
                None => return Err(ColorError::VertexOutOfRange { vertex: *v, n }),
                Some(slot) => *slot = Some(c),
            }
        }
    }
    res.iter().enumerate()
        .map(|(v,c)| c.ok_or_else(|| ColorError::Parse(format!("vertex {} is not colored", v))))
        .collect()
}
