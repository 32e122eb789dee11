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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::fmt;

// ----------------------------------------------------------------------------
// --- SEARCH NODE ------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A search node is a partial branching decision. The vertices of the graph
/// are decided in increasing index order: vertex `i` is decided exactly when
/// `i < level`.
///
/// # Note:
/// For the vertices which are not decided yet (`i >= level`), the `included`
/// flag is always false. This value is a placeholder which must not be read
/// as a final decision. The bound estimation however relies on that exact
/// interpretation (undecided vertices are optimistically considered as
/// excludable).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchNode {
    /// The number of vertices whose membership has been decided
    level: usize,
    /// The inclusion flag of each vertex of the graph
    included: Vec<bool>,
}
impl SearchNode {
    /// Creates the root node of a search over a graph having `nb_vertices`
    /// vertices: nothing is decided and nothing is included.
    pub fn root(nb_vertices: usize) -> Self {
        SearchNode { level: 0, included: vec![false; nb_vertices] }
    }
    /// The number of decided vertices
    pub fn level(&self) -> usize {
        self.level
    }
    /// The inclusion flags of all vertices
    pub fn included(&self) -> &[bool] {
        &self.included
    }
    /// Returns true iff vertex `v` has been decided and included
    #[inline]
    pub fn is_included(&self, v: usize) -> bool {
        self.included[v]
    }
    /// The number of vertices the search node covers
    pub fn nb_vertices(&self) -> usize {
        self.included.len()
    }
    /// Returns true iff the membership of every vertex has been decided
    pub fn is_complete(&self) -> bool {
        self.level == self.included.len()
    }
    /// The number of vertices which have been included in the candidate set
    pub fn size(&self) -> usize {
        self.included.iter().filter(|x| **x).count()
    }
    /// Yields the child node where the next vertex is left out of the set.
    ///
    /// # Panics
    /// When the node is complete (there is no vertex left to decide).
    pub fn exclude_child(&self) -> SearchNode {
        assert!(!self.is_complete(), "cannot branch on a complete node");
        SearchNode { level: self.level + 1, included: self.included.clone() }
    }
    /// Yields the child node where the next vertex is added to the set.
    ///
    /// # Panics
    /// When the node is complete (there is no vertex left to decide).
    pub fn include_child(&self) -> SearchNode {
        assert!(!self.is_complete(), "cannot branch on a complete node");
        let mut included = self.included.clone();
        included[self.level] = true;
        SearchNode { level: self.level + 1, included }
    }
}
impl From<Solution> for SearchNode {
    /// A solution is a search node where every vertex has been decided.
    fn from(solution: Solution) -> Self {
        SearchNode { level: solution.included.len(), included: solution.included }
    }
}
impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node at level {}: ", self.level)?;
        for x in self.included.iter() {
            write!(f, "{} ", u8::from(*x))?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// --- PENDING NODE -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// A pending node is a search node waiting on the fringe to be explored,
/// along with the lower bound that was computed when it got enqueued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    /// The partial decision to be explored
    pub node: SearchNode,
    /// A lower bound on the size of any dominating set extending `node`
    pub bound: usize,
    /// The insertion rank of this node in the fringe (0 for the first node
    /// ever pushed, 1 for the second, ...)
    pub seq: usize,
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A solution is a membership vector telling for each vertex of the graph
/// whether or not it belongs to the (candidate) dominating set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    pub included: Vec<bool>,
}
impl Solution {
    /// The trivial solution where every vertex belongs to the set
    pub fn all(nb_vertices: usize) -> Self {
        Solution { included: vec![true; nb_vertices] }
    }
    /// The number of vertices in the set
    pub fn size(&self) -> usize {
        self.included.iter().filter(|x| **x).count()
    }
    /// The indices of the vertices belonging to the set (in increasing order)
    pub fn members(&self) -> Vec<usize> {
        self.included.iter().enumerate()
            .filter(|(_, x)| **x)
            .map(|(i, _)| i)
            .collect()
    }
}
impl From<&SearchNode> for Solution {
    /// The undecided vertices of the node are left out of the solution.
    fn from(node: &SearchNode) -> Self {
        Solution { included: node.included().to_vec() }
    }
}
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for x in self.included.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", u8::from(*x))?;
            first = false;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a minimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The size of the smallest dominating set (proved optimal)
    pub best_value: usize,
    /// The number of nodes that have been popped off the fringe and processed
    /// (checked for feasibility and possibly branched on)
    pub explored: usize,
    /// The number of nodes that were discarded because their bound could not
    /// beat the incumbent
    pub pruned: usize,
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
