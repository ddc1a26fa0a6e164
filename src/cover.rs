//! Greedy vertex cover heuristics and their run records.
//!
//! All three solvers consume the graph destructively: covered edges are
//! removed as vertices are picked until the live edge count reaches
//! zero. Callers that need the graph afterwards should
//! clone it first; the parsed input keeps the edge list anyway, which is
//! what [`Cover::verify`] checks against.
//!
//! # Examples
//!
//! ```
//! use vc_buckets::bucket::BucketGraph;
//! use vc_buckets::cover;
//!
//! let mut graph = BucketGraph::new(4);
//! for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
//!     graph.add_edge(u, v, ()).unwrap();
//! }
//! let cover = cover::max_degree::solve(&mut graph).unwrap();
//! assert_eq!(cover.size(), 2);
//! ```

pub mod max_degree;
pub mod min_degree;
pub mod two_approx;


use std::fmt;
use std::time::Duration;

use bitvec::prelude::*;

use crate::bucket::{BucketDeque, BucketGraph, Entry};
use crate::error::Result;

/// Which solver produced a [`Cover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    MaxDegree,
    MinDegree,
    TwoApprox,
}

impl Heuristic {
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::MaxDegree => "max-degree",
            Heuristic::MinDegree => "min-degree",
            Heuristic::TwoApprox => "two-approx",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The outcome of one solver run: the chosen vertices in selection order,
/// plus how much work it took.
#[derive(Debug, Clone)]
pub struct Cover {
    pub heuristic: Heuristic,
    /// Cover vertices in the order the solver picked them.
    pub vertices: Vec<usize>,
    /// Main loop iterations. For the degree solvers this counts popped
    /// vertices including skipped isolated ones, for the 2-approximation
    /// it counts chosen edges.
    pub iterations: usize,
    pub elapsed: Duration,
}

impl Cover {
    /// Number of vertices in the cover.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Checks the cover against an edge list: every edge must have at
    /// least one endpoint in the cover. Endpoints outside `0..vertices`
    /// make the check fail rather than panic.
    pub fn verify(&self, vertices: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> bool {
        let mut chosen = bitvec![0; vertices];
        for &v in &self.vertices {
            if v < vertices {
                chosen.set(v, true);
            }
        }
        edges
            .into_iter()
            .all(|(u, v)| u < vertices && v < vertices && (chosen[u] || chosen[v]))
    }

    /// One line per cover vertex after the summary, for small instances.
    pub fn report_full(&self) -> String {
        let mut out = format!("{self}\n");
        for &v in &self.vertices {
            out.push_str(&format!("  {v}\n"));
        }
        out
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: cover size {} in {} iterations ({:?})",
            self.heuristic,
            self.size(),
            self.iterations,
            self.elapsed
        )
    }
}

/// Builds the degree-indexed deque the greedy solvers pop from.
///
/// One pass finds the maximum degree to size the key range, a second
/// inserts every vertex at its degree. The returned vector maps each
/// vertex to its deque handle; solvers clear a slot when they pop the
/// vertex and replace it on every adapt.
pub fn degree_deque<E>(
    graph: &BucketGraph<E>,
) -> Result<(BucketDeque<usize>, Vec<Option<Entry>>)> {
    let vertices = graph.vertex_count();
    let mut max_degree = 0;
    for vertex in 0..vertices {
        max_degree = max_degree.max(graph.degree(vertex)?);
    }
    let mut deque = BucketDeque::new(0, max_degree + 1);
    let mut handles = Vec::with_capacity(vertices);
    for vertex in 0..vertices {
        handles.push(Some(deque.insert(graph.degree(vertex)?, vertex)?));
    }
    Ok((deque, handles))
}
