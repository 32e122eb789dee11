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

//! This module provides the implementation of the lower bound estimator used
//! by default to prune the search.

use crate::{count_undominated, Graph, LowerBound, SearchNode};

/// The coverage bound estimates the number of vertices which still need to
/// be added to a partial decision by assuming that every added vertex covers
/// as many undominated vertices as it possibly could, without any overlap.
///
/// Concretely, it proceeds as follows:
/// 1. it counts the vertices which have already been included (`base`);
/// 2. it computes the coverage potential of each vertex `v`. That is zero
///    when `v` is included, and otherwise one (for `v` itself) plus the
///    number of neighbors of `v` which are not included;
/// 3. it counts the vertices that are not dominated yet;
/// 4. it sums the largest potentials until that sum reaches the number of
///    undominated vertices. The number of summed terms is how many vertices
///    need at least to be added.
///
/// The estimate is `base` plus the number of terms of step 4. Because the
/// largest potentials are assumed to be fully useful, this never overestimates
/// the size of the best dominating set extending the node.
///
/// # Example
/// ```
/// # use domset::*;
/// // a star centered on vertex 0
/// let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
/// let root  = SearchNode::root(5);
/// assert_eq!(1, CoverageBound.estimate(&graph, &root));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct CoverageBound;
impl CoverageBound {
    /// The number of vertices which could be newly dominated if `v` were
    /// added to the set.
    #[inline]
    pub fn coverage_potential(graph: &Graph, node: &SearchNode, v: usize) -> usize {
        if node.is_included(v) {
            0
        } else {
            1 + graph.neighbors(v).iter().filter(|u| !node.is_included(**u)).count()
        }
    }
}
impl LowerBound for CoverageBound {
    fn estimate(&self, graph: &Graph, node: &SearchNode) -> usize {
        let base = node.included()[..node.level()].iter().filter(|x| **x).count();

        let not_covered = count_undominated(graph, node);
        if not_covered == 0 {
            return base;
        }

        let mut potential = (0..graph.nb_vertices())
            .map(|v| Self::coverage_potential(graph, node, v))
            .collect::<Vec<_>>();
        potential.sort_unstable_by(|a, b| b.cmp(a));

        let mut sum   = 0;
        let mut extra = 0;
        for p in potential {
            if sum >= not_covered {
                break;
            }
            sum   += p;
            extra += 1;
        }
        base + extra
    }
}
