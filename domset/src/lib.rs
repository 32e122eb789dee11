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

//! # DOMSET
//! DOMSET is an exact solver for the minimum dominating set problem. Given an
//! undirected graph, it finds a smallest set of vertices S such that every
//! vertex which is not in S has at least one neighbor in S.
//!
//! The problem is NP-hard: there is no guarantee of polynomial running time.
//! What the solver does guarantee is that the answer it returns is optimal.
//!
//! ## How it works
//! The solver performs a best-first branch-and-bound search. The vertices are
//! decided one after the other (in increasing index order) to be either in or
//! out of the set. Each partial decision (`SearchNode`) is given a lower bound
//! on the size of any dominating set extending it (see `CoverageBound`), and
//! the fringe always yields the node having the lowest bound first. Whenever
//! a node's bound is no better than the best known solution (the incumbent),
//! that node is discarded along with its whole subtree.
//!
//! A partial decision can already dominate the whole graph: in that case the
//! remaining vertices are simply left out of the set.
//!
//! ## Quick Example
//! ```
//! # use domset::*;
//! #
//! // 1. Create the graph (here, a cycle of six vertices)
//! let edges = (0..6).map(|i| (i, (i + 1) % 6)).collect::<Vec<_>>();
//! let graph = Graph::from_edges(6, &edges);
//!
//! // 2. Pick the heuristics: the lower bound, the order of the fringe and
//! //    a monitor to be notified of the incumbent improvements.
//! let bound       = CoverageBound;
//! let mut monitor = NoMonitor;
//! let mut fringe  = SimpleFringe::new(MinBound);
//!
//! // 3. Create a solver and minimize
//! let mut solver  = DefaultSolver::new(&graph, &bound, &mut monitor, &mut fringe);
//! let outcome     = solver.minimize();
//!
//! // 4. Do whatever you like with the optimal solution.
//! assert_eq!(2, outcome.best_value);
//! let solution = solver.best_solution();
//! assert_eq!(2, solution.members().len());
//! ```
//!
//! ## Going further
//! Each ingredient of the search is defined as a trait in the `abstraction`
//! module (`LowerBound`, `NodeRanking`, `Fringe`, `Monitor`, `Solver`) and
//! implemented in the `implementation` module. The `io_utils` module parses
//! graph instances from text files.

mod common;
mod graph;
mod abstraction;
mod implementation;

pub mod io_utils;

pub use common::*;
pub use graph::*;
pub use abstraction::*;
pub use implementation::*;
