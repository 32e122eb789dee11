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

//! This module provides the default (silent) monitor.

use crate::{Monitor, SearchNode};

/// _This is the default monitor._ It simply ignores every event.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoMonitor;
impl Monitor for NoMonitor {
    fn on_improvement(&mut self, _: &SearchNode, _: usize, _: usize) {}
}

/// A monitor which records every improvement it is notified of. This is
/// mostly useful to inspect how the search progressed.
#[derive(Debug, Default, Clone)]
pub struct RecordingMonitor {
    /// The (node, bound, best_value) triples in the order they were notified
    pub improvements: Vec<(SearchNode, usize, usize)>,
}
impl Monitor for RecordingMonitor {
    fn on_improvement(&mut self, node: &SearchNode, bound: usize, best_value: usize) {
        self.improvements.push((node.clone(), bound, best_value));
    }
}
