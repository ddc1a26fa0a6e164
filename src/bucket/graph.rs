//! Undirected multigraph stored in a bucket range.
//!
//! Each vertex owns one bucket; an edge is a pair of twin entries, one in
//! each endpoint's bucket, both holding the same [`EdgeId`]. The id points
//! into an edge arena whose record stores the two entry handles, so the
//! twins can always find each other: removing an edge unlinks both entries
//! in O(1), and a vertex's degree is just its bucket length. This is the
//! substrate the greedy cover heuristics run on, where "pick a vertex and
//! delete it" must cost no more than the number of incident edges.
//!
//! Loops are allowed and contribute two entries to the same bucket, so a
//! loop adds 2 to its vertex's degree.

use crate::bucket::range::{BucketRange, Entry};
use crate::bucket::slots::Slots;
use crate::error::{BucketError, Result};

/// Stable id of one edge of a [`BucketGraph`].
///
/// Valid until the edge is removed. Ids of removed edges may be reissued
/// for later insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(usize);

#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    value: E,
    left: Entry,
    right: Entry,
}

/// Undirected multigraph over the fixed vertex set `0..vertices`, with an
/// arbitrary value attached to each edge.
#[derive(Debug, Clone)]
pub struct BucketGraph<E> {
    adjacency: BucketRange<EdgeId>,
    edges: Slots<EdgeRecord<E>>,
}

impl<E> BucketGraph<E> {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        BucketGraph {
            adjacency: BucketRange::new(0, vertices),
            edges: Slots::new(),
        }
    }

    /// Creates a graph with `vertices` vertices and the edge arena sized
    /// for `edges` insertions up front. Useful when the edge count is
    /// known, as it is after parsing an input file.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        BucketGraph {
            adjacency: BucketRange::new(0, vertices),
            edges: Slots::with_capacity(edges),
        }
    }

    /// Number of vertices, fixed at construction.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.buckets()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no live edges. Vertices always remain.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Degree of `vertex`, counting a loop twice.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `vertex` is not a vertex of
    /// this graph.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.adjacency.bucket(vertex)?.len())
    }

    /// Inserts an edge between `left` and `right` carrying `value` and
    /// returns its id. Parallel edges and loops are permitted.
    ///
    /// Both endpoints are validated before anything is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if either endpoint is not a
    /// vertex of this graph.
    pub fn add_edge(&mut self, left: usize, right: usize, value: E) -> Result<EdgeId> {
        self.adjacency.bucket(left)?;
        self.adjacency.bucket(right)?;
        // The record must hold both entry handles and each entry must hold
        // the edge id, so the id is reserved before the record exists.
        let id = EdgeId(self.edges.vacant_id());
        let left_entry = self.adjacency.add(left, id)?;
        let right_entry = self.adjacency.add(right, id)?;
        let stored = self.edges.insert(EdgeRecord {
            value,
            left: left_entry,
            right: right_entry,
        });
        debug_assert_eq!(stored, id.0);
        Ok(id)
    }

    /// Removes the edge `id`, unlinking both twin entries, and returns the
    /// edge value.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if the edge was already
    /// removed.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<E> {
        let record = self.edges.remove(id.0).ok_or(BucketError::InvalidHandle)?;
        self.adjacency.remove(record.left)?;
        self.adjacency.remove(record.right)?;
        Ok(record.value)
    }

    /// Removes every edge incident to `vertex` and returns how many were
    /// removed. Afterwards `degree(vertex)` is zero; the vertex itself
    /// remains, the vertex set never shrinks.
    ///
    /// Runs in O(degree), each incident edge costs two O(1) unlinks.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `vertex` is not a vertex of
    /// this graph.
    pub fn remove_vertex(&mut self, vertex: usize) -> Result<usize> {
        let mut removed = 0;
        while let Some(id) = self.first_edge(vertex)? {
            self.remove_edge(id)?;
            removed += 1;
        }
        Ok(removed)
    }

    /// The two endpoints of edge `id`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if the edge was removed.
    pub fn endpoints(&self, id: EdgeId) -> Result<(usize, usize)> {
        let record = self.edges.get(id.0).ok_or(BucketError::InvalidHandle)?;
        Ok((record.left.bucket(), record.right.bucket()))
    }

    /// The endpoint of edge `id` other than `vertex`. For a loop at
    /// `vertex` this is `vertex` itself.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if the edge was removed or
    /// `vertex` is not one of its endpoints.
    pub fn opposite(&self, id: EdgeId, vertex: usize) -> Result<usize> {
        let (left, right) = self.endpoints(id)?;
        if left == vertex {
            Ok(right)
        } else if right == vertex {
            Ok(left)
        } else {
            Err(BucketError::InvalidHandle)
        }
    }

    /// Borrows the value carried by edge `id`.
    pub fn value(&self, id: EdgeId) -> Result<&E> {
        self.edges
            .get(id.0)
            .map(|record| &record.value)
            .ok_or(BucketError::InvalidHandle)
    }

    /// Mutably borrows the value carried by edge `id`.
    pub fn value_mut(&mut self, id: EdgeId) -> Result<&mut E> {
        self.edges
            .get_mut(id.0)
            .map(|record| &mut record.value)
            .ok_or(BucketError::InvalidHandle)
    }

    /// Whether edge `id` is still live.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id.0)
    }

    /// The oldest live edge incident to `vertex`, or `None` if the vertex
    /// is isolated. Repeatedly taking and removing the first edge visits
    /// the remaining incidence list in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `vertex` is not a vertex of
    /// this graph.
    pub fn first_edge(&self, vertex: usize) -> Result<Option<EdgeId>> {
        Ok(self.adjacency.bucket(vertex)?.front().copied())
    }

    /// Iterates over the edges incident to `vertex` in insertion order.
    /// A loop at `vertex` is yielded twice.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `vertex` is not a vertex of
    /// this graph.
    pub fn incident(&self, vertex: usize) -> Result<impl Iterator<Item = EdgeId> + '_> {
        Ok(self.adjacency.bucket(vertex)?.iter().copied())
    }

    /// Any live edge, or `None` if the graph has no edges. Scans vertices
    /// from 0 for the first non-empty bucket, so it is O(vertices) in the
    /// worst case.
    pub fn any_edge(&self) -> Option<EdgeId> {
        if self.edges.is_empty() {
            return None;
        }
        (0..self.vertex_count()).find_map(|vertex| {
            self.adjacency
                .bucket(vertex)
                .ok()
                .and_then(|bucket| bucket.front().copied())
        })
    }
}
