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

//! This module provides the feasibility test of the search: it tells whether
//! a (partial or complete) decision already dominates the whole graph.

use crate::{Graph, SearchNode};

/// Returns true iff vertex `v` is dominated by the included vertices of
/// `node`: either it is included itself or one of its neighbors is.
#[inline]
pub fn is_dominated(graph: &Graph, node: &SearchNode, v: usize) -> bool {
    node.is_included(v) || graph.neighbors(v).iter().any(|u| node.is_included(*u))
}

/// Returns true iff the vertices included in `node` dominate every vertex of
/// the graph.
///
/// This check is meaningful at any level of the search: when the vertices
/// included so far already cover everything, the remaining (undecided)
/// vertices can simply be left out of the set.
pub fn is_dominating(graph: &Graph, node: &SearchNode) -> bool {
    (0..graph.nb_vertices()).all(|v| is_dominated(graph, node, v))
}

/// Counts the vertices which are not dominated by the included vertices of
/// `node`.
pub fn count_undominated(graph: &Graph, node: &SearchNode) -> usize {
    (0..graph.nb_vertices()).filter(|v| !is_dominated(graph, node, *v)).count()
}
