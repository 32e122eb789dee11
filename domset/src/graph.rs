// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the undirected graph whose minimum dominating set is
//! being searched for.

/// An undirected simple graph over the vertices `0..nb_vertices`, stored as
/// adjacency lists.
///
/// The adjacency is kept symmetric at all times: whenever `b` is a neighbor
/// of `a`, `a` is a neighbor of `b`. There are never duplicate entries nor
/// self loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nb_vertices: usize,
    neighbors  : Vec<Vec<usize>>,
}
impl Graph {
    /// Creates a graph having `nb_vertices` vertices and no edge
    pub fn new(nb_vertices: usize) -> Self {
        Graph { nb_vertices, neighbors: vec![vec![]; nb_vertices] }
    }
    /// Creates a graph having `nb_vertices` vertices and the given edges
    ///
    /// # Panics
    /// Whenever one of the edges references a vertex >= `nb_vertices`
    pub fn from_edges(nb_vertices: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::new(nb_vertices);
        for (a, b) in edges.iter().copied() {
            g.add_edge(a, b);
        }
        g
    }
    /// The number of vertices in the graph
    pub fn nb_vertices(&self) -> usize {
        self.nb_vertices
    }
    /// The number of (undirected) edges in the graph
    pub fn nb_edges(&self) -> usize {
        self.neighbors.iter().map(|n| n.len()).sum::<usize>() / 2
    }
    /// The neighbors of vertex `v` (empty when `v` is isolated)
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }
    /// The number of neighbors of `v`
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }
    /// Returns true iff `v` has no neighbor at all
    pub fn is_isolated(&self, v: usize) -> bool {
        self.neighbors[v].is_empty()
    }
    /// Returns true iff `a` and `b` are adjacent
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors[a].contains(&b)
    }
    /// Adds the undirected edge `a -- b`. Adding an edge which is already
    /// present has no effect; so does adding a self loop (`a == b`).
    ///
    /// # Panics
    /// Whenever `a` or `b` is not a vertex of the graph. This check is
    /// enforced in every build profile.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        assert!(a < self.nb_vertices, "vertex {} is out of range (graph has {} vertices)", a, self.nb_vertices);
        assert!(b < self.nb_vertices, "vertex {} is out of range (graph has {} vertices)", b, self.nb_vertices);
        if a == b || self.neighbors[a].contains(&b) {
            return;
        }
        self.neighbors[a].push(b);
        self.neighbors[b].push(a);
    }
}
