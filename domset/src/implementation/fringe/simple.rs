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

//! This module provides the implementation of a simple solver fringe (priority queue)

use binary_heap_plus::BinaryHeap;

use crate::*;


/// The simplest fringe implementation you can think of: is basically consists
/// of a binary heap that pushes and pops fringe nodes. It stamps every node
/// with its insertion rank so that rankings can break ties deterministically.
///
/// # Note
/// This is the default type of fringe for the solver. The growth of the heap
/// is not capped in any way.
///
pub struct SimpleFringe<O: NodeRanking> {
    heap: BinaryHeap<Pending, CompareNode<O>>,
    next: usize,
}
impl <O> SimpleFringe<O> where O: NodeRanking {
    /// This creates a new simple fringe which uses a custom fringe order.
    pub fn new(o: O) -> Self {
        Self{ heap: BinaryHeap::from_vec_cmp(vec![], CompareNode::new(o)), next: 0 }
    }
}
impl <O> Fringe for SimpleFringe<O> where O: NodeRanking {
    fn push(&mut self, node: SearchNode, bound: usize) {
        let seq = self.next;
        self.next += 1;
        self.heap.push(Pending { node, bound, seq })
    }

    fn pop(&mut self) -> Option<Pending> {
        self.heap.pop()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next = 0;
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
