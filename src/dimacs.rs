use std::fs;

use log::debug;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{map_res, eof};
use nom::sequence::{preceded, pair, terminated};

use crate::color::{Graph, VertexId};
use crate::error::ColorError;


/// largest number of vertices accepted in a header (vertices are allocated before reading edges)
pub const MAX_VERTICES:usize = 1 << 22;

/// reads an unsigned integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces (and nothing else until the end of line)
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        pair(preceded(space1, read_integer), preceded(space1, read_integer)),
        pair(space0, eof)
    )(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge"), tag("p col"))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e"), read_two_integers)(s)
}

/// true for blank lines and comment lines
fn is_comment(line:&str) -> bool {
    line.is_empty() || line.starts_with('c')
}

/**
parses a DIMACS instance: comment lines ("c ..."), one header ("p edge n m" or "p col n m")
and edge lines ("e u v", 1-indexed).
Returns the graph and the number of edges announced by the header.
*/
pub fn parse_dimacs(content:&str) -> Result<(Graph, usize), ColorError> {
    let mut graph:Option<Graph> = None;
    let mut announced_m = 0;
    let mut nb_edge_lines = 0;
    for (i,raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if is_comment(line) { continue; }
        match graph {
            None => {
                let (_,(n,m)) = read_header(line).map_err(|_|
                    ColorError::Parse(format!("line {}: expected a 'p edge n m' header, got '{}'", i+1, line))
                )?;
                if n > MAX_VERTICES {
                    return Err(ColorError::Parse(format!(
                        "line {}: {} vertices announced, at most {} supported", i+1, n, MAX_VERTICES
                    )));
                }
                graph = Some(Graph::new(n)?);
                announced_m = m;
            }
            Some(ref mut g) => {
                let (_,(a,b)) = read_edge(line).map_err(|_|
                    ColorError::Parse(format!("line {}: expected an 'e u v' edge, got '{}'", i+1, line))
                )?;
                if a == 0 || b == 0 {
                    return Err(ColorError::Parse(format!("line {}: vertices are numbered from 1", i+1)));
                }
                g.add_edge(a-1, b-1)?;
                nb_edge_lines += 1;
            }
        }
    }
    let graph = graph.ok_or_else(|| ColorError::Parse("missing 'p edge n m' header".to_string()))?;
    // some generators list each edge in both directions
    if nb_edge_lines != announced_m && 2*nb_edge_lines != announced_m {
        debug!("dimacs: header announces {} edges, {} edge lines read", announced_m, nb_edge_lines);
    }
    Ok((graph, announced_m))
}

/// reads an instance from a DIMACS file
pub fn read_from_file(filename:&str) -> Result<Graph, ColorError> {
    let content = fs::read_to_string(filename)?;
    let (graph, _) = parse_dimacs(&content)?;
    debug!("dimacs: read {} ({} vertices, {} edges)", filename, graph.nb_vertices(), graph.nb_edges());
    Ok(graph)
}

/** writes a string encoding the solution. each line corresponds to a color. */
pub fn solution_to_string(solution:&[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for e in solution {
        for v in e {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}

/** writes a solution into a file. each line corresponds to a color. */
pub fn write_solution(filename:&str, solution:&[Vec<VertexId>]) -> Result<(), ColorError> {
    fs::write(filename, solution_to_string(solution))?;
    Ok(())
}
