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

//! This module defines the `LowerBound` trait.

use crate::{Graph, SearchNode};

/// A lower bound estimator computes, for a given partial decision, a number
/// of vertices that no dominating set extending that decision can go below.
///
/// # Note:
/// The solver relies on the assumption that the estimate is *admissible*: it
/// must never exceed the size of the smallest dominating set which extends
/// the fixed decisions of `node`. An estimator which overestimates makes the
/// solver discard the optimum and return a wrong answer.
pub trait LowerBound {
    /// Returns an admissible lower bound on the size of any dominating set
    /// of `graph` which extends the decisions of `node`.
    fn estimate(&self, graph: &Graph, node: &SearchNode) -> usize;
}
