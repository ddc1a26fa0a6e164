//! Graph input formats.
//!
//! Two line-oriented text formats are accepted:
//!
//! * DIMACS: `c` comment lines, one `p <format> <V> <E>` header, then
//!   1-based `e <u> <v>` edge lines. Bare `<u> <v>` lines after the
//!   header are taken as edges too, as some PACE-style writers emit them
//!   without the `e` tag.
//! * Plain edge list: `#` or `%` comment lines, a `<V> <E>` header, then
//!   0-based `<u> <v>` or `<u> <v> <w>` lines with an optional weight.
//!
//! Unweighted edges get weight 1. Parallel edges and loops are kept as
//! written; the cover solvers handle both. A declared edge count that
//! disagrees with the lines actually present is only worth a warning,
//! plenty of published instance files get it wrong.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use log::warn;

use crate::bucket::BucketGraph;
use crate::error::{ParseError, Result};

/// A parsed instance: vertex count plus the edge list with weights.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphInput {
    pub vertices: usize,
    /// Edges as `(left, right, weight)`, 0-based, in file order.
    pub edges: Vec<(usize, usize, f64)>,
}

impl GraphInput {
    /// Builds the bucket graph for this instance. Each call builds a
    /// fresh graph, so one parsed input can feed several solver runs.
    pub fn build(&self) -> Result<BucketGraph<f64>> {
        let mut graph = BucketGraph::with_capacity(self.vertices, self.edges.len());
        for &(left, right, weight) in &self.edges {
            graph.add_edge(left, right, weight)?;
        }
        Ok(graph)
    }

    /// The edge list without weights, for [`Cover::verify`].
    ///
    /// [`Cover::verify`]: crate::cover::Cover::verify
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().map(|&(left, right, _)| (left, right))
    }
}

/// Reads an instance from `path`, guessing the format from the first
/// content line: `c` or `p` means DIMACS, anything else the plain edge
/// list.
pub fn load(path: impl AsRef<Path>) -> Result<GraphInput, ParseError> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses an instance from text, guessing the format as [`load`] does.
pub fn parse_str(content: &str) -> Result<GraphInput, ParseError> {
    let dimacs = content
        .lines()
        .find_map(|line| line.split_whitespace().next())
        .is_some_and(|first| first == "c" || first == "p");
    if dimacs {
        parse_dimacs(content.as_bytes())
    } else {
        parse_edge_list(content.as_bytes())
    }
}

/// Parses the DIMACS format with 1-based vertex ids.
pub fn parse_dimacs(reader: impl BufRead) -> Result<GraphInput, ParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut edges = Vec::new();
    let mut line_no = 0;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            None | Some(&"c") => continue,
            Some(&"p") => {
                if header.is_some() {
                    return Err(ParseError::malformed(line_no, "second `p` header"));
                }
                if tokens.len() < 4 {
                    return Err(ParseError::malformed(
                        line_no,
                        "header needs `p <format> <vertices> <edges>`",
                    ));
                }
                let vertices = parse_count(tokens[2], line_no)?;
                let declared = parse_count(tokens[3], line_no)?;
                header = Some((vertices, declared));
                edges.reserve(declared);
            }
            Some(&"e") => {
                let (vertices, _) =
                    header.ok_or(ParseError::MissingHeader { line: line_no })?;
                if tokens.len() != 3 {
                    return Err(ParseError::malformed(line_no, "expected `e <u> <v>`"));
                }
                edges.push(one_based_edge(tokens[1], tokens[2], vertices, line_no)?);
            }
            Some(first) if first.chars().all(|c| c.is_ascii_digit()) => {
                // Headerless edge lines, as in PACE `.gr` files.
                let (vertices, _) =
                    header.ok_or(ParseError::MissingHeader { line: line_no })?;
                if tokens.len() != 2 {
                    return Err(ParseError::malformed(line_no, "expected `<u> <v>`"));
                }
                edges.push(one_based_edge(tokens[0], tokens[1], vertices, line_no)?);
            }
            Some(other) => {
                return Err(ParseError::malformed(
                    line_no,
                    format!("unrecognized line type `{other}`"),
                ));
            }
        }
    }

    let (vertices, declared) = header
        .ok_or_else(|| ParseError::malformed(line_no, "no `p` header found"))?;
    if declared != edges.len() {
        warn!(
            "header declared {declared} edges but file contains {}",
            edges.len()
        );
    }
    Ok(GraphInput { vertices, edges })
}

/// Parses the plain edge list format with 0-based vertex ids.
pub fn parse_edge_list(reader: impl BufRead) -> Result<GraphInput, ParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut edges = Vec::new();
    let mut line_no = 0;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();

        let Some((vertices, _)) = header else {
            if tokens.len() != 2 {
                return Err(ParseError::malformed(
                    line_no,
                    "header needs `<vertices> <edges>`",
                ));
            }
            let vertices = parse_count(tokens[0], line_no)?;
            let declared = parse_count(tokens[1], line_no)?;
            header = Some((vertices, declared));
            edges.reserve(declared);
            continue;
        };

        if tokens.len() != 2 && tokens.len() != 3 {
            return Err(ParseError::malformed(
                line_no,
                "expected `<u> <v>` or `<u> <v> <w>`",
            ));
        }
        let left = parse_endpoint(tokens[0], vertices, line_no)?;
        let right = parse_endpoint(tokens[1], vertices, line_no)?;
        let weight = match tokens.get(2) {
            Some(raw) => raw.parse::<f64>().map_err(|_| {
                ParseError::malformed(line_no, format!("bad edge weight `{raw}`"))
            })?,
            None => 1.0,
        };
        edges.push((left, right, weight));
    }

    let (vertices, declared) =
        header.ok_or_else(|| ParseError::malformed(line_no, "no header found"))?;
    if declared != edges.len() {
        warn!(
            "header declared {declared} edges but file contains {}",
            edges.len()
        );
    }
    Ok(GraphInput { vertices, edges })
}

fn parse_count(raw: &str, line: usize) -> Result<usize, ParseError> {
    raw.parse::<usize>()
        .map_err(|_| ParseError::malformed(line, format!("bad count `{raw}`")))
}

fn parse_endpoint(raw: &str, vertices: usize, line: usize) -> Result<usize, ParseError> {
    let vertex = raw
        .parse::<usize>()
        .map_err(|_| ParseError::malformed(line, format!("bad vertex id `{raw}`")))?;
    if vertex >= vertices {
        return Err(ParseError::EndpointOutOfRange {
            line,
            vertex,
            vertices,
        });
    }
    Ok(vertex)
}

/// Converts a 1-based `u v` pair, rejecting 0 and ids beyond the count.
fn one_based_edge(
    raw_u: &str,
    raw_v: &str,
    vertices: usize,
    line: usize,
) -> Result<(usize, usize, f64), ParseError> {
    let endpoint = |raw: &str| -> Result<usize, ParseError> {
        let vertex = raw
            .parse::<usize>()
            .map_err(|_| ParseError::malformed(line, format!("bad vertex id `{raw}`")))?;
        if vertex == 0 || vertex > vertices {
            return Err(ParseError::EndpointOutOfRange {
                line,
                vertex,
                vertices,
            });
        }
        Ok(vertex - 1)
    };
    Ok((endpoint(raw_u)?, endpoint(raw_v)?, 1.0))
}
