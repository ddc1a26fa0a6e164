//! Greedy min-degree vertex cover.
//!
//! The deliberately bad twin of [`max_degree`](crate::cover::max_degree):
//! identical machinery, but vertices are popped from the bottom of the
//! degree deque. Covering low-degree vertices first retires few edges per
//! pick, so covers come out larger, which makes this a useful baseline
//! when comparing heuristics. Unlike the max end, the bottom of the deque
//! can hold isolated vertices; those are popped and skipped, never added
//! to the cover.

use std::time::Instant;

use log::{debug, trace};

use crate::bucket::BucketGraph;
use crate::cover::max_degree::cover_vertex;
use crate::cover::{degree_deque, Cover, Heuristic};
use crate::error::Result;

/// Runs the min-degree greedy heuristic, consuming every edge of `graph`.
///
/// Isolated vertices, whether isolated from the start or stranded by
/// earlier picks, are skipped; they still count toward `iterations`.
///
/// # Complexity
///
/// O(V + E) amortized.
pub fn solve<E>(graph: &mut BucketGraph<E>) -> Result<Cover> {
    let start = Instant::now();
    let (mut deque, mut handles) = degree_deque(graph)?;
    let mut vertices = Vec::new();
    let mut iterations = 0;

    while graph.edge_count() > 0 {
        let vertex = deque.pop_bottom()?;
        handles[vertex] = None;
        iterations += 1;
        let degree = graph.degree(vertex)?;
        if degree == 0 {
            trace!("skipped isolated vertex {vertex}");
            continue;
        }
        trace!(
            "picked vertex {vertex} at degree {degree}, {} edges left",
            graph.edge_count()
        );
        vertices.push(vertex);
        cover_vertex(graph, &mut deque, &mut handles, vertex)?;
    }

    let elapsed = start.elapsed();
    debug!(
        "min-degree covered {} vertices in {iterations} iterations ({elapsed:?})",
        vertices.len()
    );
    Ok(Cover {
        heuristic: Heuristic::MinDegree,
        vertices,
        iterations,
        elapsed,
    })
}
