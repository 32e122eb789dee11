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

//! This module defines the `Solver` trait.

use crate::{Completion, Solution};

/// This is the solver abstraction. It is implemented by a structure that
/// searches for the smallest dominating set of a given graph.
pub trait Solver {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the minimization. Because there is no cutoff, the returned
    /// `best_value` is always proved optimal.
    fn minimize(&mut self) -> Completion;
    /// This method returns the size of the best dominating set that has been
    /// found so far. Before any search took place, this is the size of the
    /// trivial solution (all vertices) unless a better primal was provided.
    fn best_value(&self) -> usize;
    /// This method returns the best dominating set found so far.
    fn best_solution(&self) -> Solution;
    /// Sets a primal (known dominating set) of the problem. The solution is
    /// only retained if it actually dominates the graph and is strictly
    /// smaller than the current incumbent. Returns true iff it was retained.
    fn set_primal(&mut self, solution: Solution) -> bool;
}
