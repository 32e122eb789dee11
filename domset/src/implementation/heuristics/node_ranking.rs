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

//! This module provides the implementation of node rankings that are used to
//! set the ordering of the solver fringe.

use std::cmp::Ordering;

use crate::{NodeRanking, Pending};

/// The MinBound (minimum lower bound) strategy is one that always selects the
/// node having the lowest bound in the fringe. In case of equalities, the ties
/// are broken by insertion order: the node which was pushed first is popped
/// first. This is the default ranking.
///
/// # Example
/// ```
/// # use domset::*;
/// let mut fringe = SimpleFringe::new(MinBound);
/// fringe.push(SearchNode::root(3), 2); // a
/// fringe.push(SearchNode::root(3), 1); // b
/// fringe.push(SearchNode::root(3), 2); // c
///
/// assert_eq!(1, fringe.pop().unwrap().seq); // b, because it has the lowest bound
/// assert_eq!(0, fringe.pop().unwrap().seq); // a, because it was pushed before c
/// assert_eq!(2, fringe.pop().unwrap().seq); // c
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MinBound;
impl NodeRanking for MinBound {
    fn compare(&self, l: &Pending, r: &Pending) -> Ordering {
        r.bound.cmp(&l.bound)
            .then_with(|| r.seq.cmp(&l.seq))
    }
}

/// The MinBoundDeepest strategy also selects the node having the lowest bound
/// first. But it breaks ties in favor of the deepest nodes (those having the
/// highest number of decided vertices), and then in favor of the most recently
/// pushed nodes. This tends to reach complete decisions (hence, incumbents)
/// sooner.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinBoundDeepest;
impl NodeRanking for MinBoundDeepest {
    fn compare(&self, l: &Pending, r: &Pending) -> Ordering {
        r.bound.cmp(&l.bound)
            .then_with(|| l.node.level().cmp(&r.node.level()))
            .then_with(|| l.seq.cmp(&r.seq))
    }
}

#[cfg(test)]
mod test_min_bound {
    use std::cmp::Ordering;

    use crate::*;

    fn pending(level: usize, bound: usize, seq: usize) -> Pending {
        let mut node = SearchNode::root(4);
        for _ in 0..level {
            node = node.exclude_child();
        }
        Pending { node, bound, seq }
    }

    #[test]
    fn gt_because_bound() {
        let a = pending(0, 1, 5);
        let b = pending(0, 2, 0);
        assert_eq!(Ordering::Greater, MinBound.compare(&a, &b));
        assert_eq!(Ordering::Less,    MinBound.compare(&b, &a));
    }
    #[test]
    fn gt_because_seq() {
        let a = pending(0, 1, 0);
        let b = pending(3, 1, 1);
        assert_eq!(Ordering::Greater, MinBound.compare(&a, &b));
        assert_eq!(Ordering::Less,    MinBound.compare(&b, &a));
    }
    #[test]
    fn eq_self() {
        let a = pending(2, 1, 0);
        assert_eq!(Ordering::Equal, MinBound.compare(&a, &a));
    }
}

#[cfg(test)]
mod test_min_bound_deepest {
    use std::cmp::Ordering;

    use crate::*;

    fn pending(level: usize, bound: usize, seq: usize) -> Pending {
        let mut node = SearchNode::root(4);
        for _ in 0..level {
            node = node.exclude_child();
        }
        Pending { node, bound, seq }
    }

    #[test]
    fn gt_because_bound() {
        let a = pending(0, 1, 0);
        let b = pending(4, 2, 1);
        assert_eq!(Ordering::Greater, MinBoundDeepest.compare(&a, &b));
    }
    #[test]
    fn gt_because_level() {
        let a = pending(3, 1, 0);
        let b = pending(1, 1, 1);
        assert_eq!(Ordering::Greater, MinBoundDeepest.compare(&a, &b));
        assert_eq!(Ordering::Less,    MinBoundDeepest.compare(&b, &a));
    }
    #[test]
    fn gt_because_seq() {
        let a = pending(2, 1, 7);
        let b = pending(2, 1, 3);
        assert_eq!(Ordering::Greater, MinBoundDeepest.compare(&a, &b));
    }
}
