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

//! This module provides the implementation of a sequential branch-and-bound
//! solver. That is a solver that will solve the problem using one single
//! thread of execution.
//!
//! The search is a best-first exploration of the binary tree of decisions
//! (vertex `i` in or out of the set, in increasing index order) guided by a
//! lower bound: the most promising node is always expanded first, and any
//! node whose bound cannot beat the incumbent is discarded.
use tracing::{debug, info, trace};

use crate::{is_dominating, Completion, Fringe, Graph, LowerBound, Monitor, Pending, SearchNode, Solution, Solver};

pub struct SequentialSolver<'a> {
    /// A reference to the graph whose minimum dominating set is searched for
    graph: &'a Graph,
    /// The (admissible) lower bound estimator used to prune the search
    bound: &'a (dyn LowerBound),
    /// The listener which is notified each time the incumbent improves
    monitor: &'a mut (dyn Monitor),

    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    ///
    /// # Note:
    /// This fringe orders the nodes by ascending lower bound (so the lowest
    /// bound is going to pop first).
    fringe: &'a mut (dyn Fringe),
    /// This is a counter that tracks the number of nodes that have effectively
    /// been explored. That is, the number of nodes that have been popped from
    /// the fringe and were not pruned.
    explored: usize,
    /// This counter tracks the number of nodes that were discarded because
    /// their bound could not beat the incumbent.
    pruned: usize,
    /// This is the size of the incumbent (the best known dominating set).
    best_value: usize,
    /// This is the incumbent itself.
    best_sol: Solution,
}

impl<'a> SequentialSolver<'a> {
    pub fn new(
        graph: &'a Graph,
        bound: &'a (dyn LowerBound),
        monitor: &'a mut (dyn Monitor),
        fringe: &'a mut (dyn Fringe),
    ) -> Self {
        let n = graph.nb_vertices();
        SequentialSolver {
            graph,
            bound,
            monitor,
            fringe,
            //
            explored: 0,
            pruned: 0,
            best_value: n,
            best_sol: Solution::all(n),
        }
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method posts the root node onto the fringe so that the processing can
    /// be bootstrapped.
    fn initialize(&mut self) {
        self.fringe.clear();
        self.explored = 0;
        self.pruned = 0;

        let root = SearchNode::root(self.graph.nb_vertices());
        let bound = self.bound.estimate(self.graph, &root);
        self.fringe.push(root, bound);
    }

    /// This method processes the given `pending` node. If its bound still
    /// makes it worth exploring, it checks whether the node dominates the
    /// graph (and possibly improves the incumbent). Then it branches on the
    /// next undecided vertex.
    fn process_one_node(&mut self, pending: Pending) {
        let Pending { node, bound, .. } = pending;
        trace!(level = node.level(), bound, "pop");

        if bound >= self.best_value {
            self.pruned += 1;
            trace!(level = node.level(), bound, best = self.best_value, "pruned");
            return;
        }
        self.explored += 1;

        self.maybe_update_best(&node, bound);

        if node.is_complete() {
            return;
        }

        self.enqueue(node.exclude_child());
        self.enqueue(node.include_child());
    }

    /// This private method replaces the incumbent with the given `node` if
    /// that one dominates the graph with strictly fewer vertices. Ties never
    /// replace the incumbent.
    fn maybe_update_best(&mut self, node: &SearchNode, bound: usize) {
        let size = node.size();
        if size < self.best_value && is_dominating(self.graph, node) {
            self.best_value = size;
            self.best_sol = Solution::from(node);
            debug!(level = node.level(), bound, best = size, "new incumbent");
            self.monitor.on_improvement(node, bound, size);
        }
    }

    /// Computes the bound of `child` and pushes it onto the fringe unless
    /// that bound shows it cannot improve on the incumbent.
    fn enqueue(&mut self, child: SearchNode) {
        let bound = self.bound.estimate(self.graph, &child);
        if bound < self.best_value {
            self.fringe.push(child, bound);
        } else {
            self.pruned += 1;
        }
    }
}

impl Solver for SequentialSolver<'_> {
    /// Applies the best-first branch and bound algorithm to find the smallest
    /// dominating set of the graph. It keeps popping nodes off the fringe
    /// until it is exhausted, at which point the incumbent is optimal.
    fn minimize(&mut self) -> Completion {
        info!(
            vertices = self.graph.nb_vertices(),
            edges = self.graph.nb_edges(),
            incumbent = self.best_value,
            "starting search"
        );
        self.initialize();

        while let Some(pending) = self.fringe.pop() {
            self.process_one_node(pending);
        }

        info!(
            best = self.best_value,
            explored = self.explored,
            pruned = self.pruned,
            "search complete"
        );
        Completion { best_value: self.best_value, explored: self.explored, pruned: self.pruned }
    }

    /// Returns the size of the best solution that has been identified for
    /// this problem.
    fn best_value(&self) -> usize {
        self.best_value
    }
    /// Returns the best solution that has been identified for this problem.
    fn best_solution(&self) -> Solution {
        self.best_sol.clone()
    }
    /// Sets a primal (known dominating set) of the problem.
    ///
    /// # Panics
    /// When the solution does not have one flag per vertex of the graph.
    fn set_primal(&mut self, solution: Solution) -> bool {
        assert_eq!(self.graph.nb_vertices(), solution.included.len(), "the primal must cover every vertex");

        let size = solution.size();
        if size >= self.best_value {
            return false;
        }
        let node = SearchNode::from(solution);
        if !is_dominating(self.graph, &node) {
            return false;
        }
        self.best_value = size;
        self.best_sol = Solution::from(&node);
        true
    }
}

#[cfg(test)]
mod test_sequential_solver {
    use crate::*;

    fn solve(graph: &Graph) -> (Completion, Solution) {
        let mut monitor = NoMonitor;
        let mut fringe  = SimpleFringe::new(MinBound);
        let mut solver  = SequentialSolver::new(graph, &CoverageBound, &mut monitor, &mut fringe);
        let completion  = solver.minimize();
        (completion, solver.best_solution())
    }

    #[test]
    fn before_search_the_incumbent_is_the_trivial_solution() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        let mut monitor = NoMonitor;
        let mut fringe  = SimpleFringe::new(MinBound);
        let solver = SequentialSolver::new(&graph, &CoverageBound, &mut monitor, &mut fringe);
        assert_eq!(3, solver.best_value());
        assert_eq!(Solution::all(3), solver.best_solution());
    }
    #[test]
    fn the_empty_graph_is_solved_without_exploring_anything() {
        let (completion, solution) = solve(&Graph::new(0));
        assert_eq!(0, completion.best_value);
        assert_eq!(0, completion.explored);
        assert!(solution.included.is_empty());
    }
    #[test]
    fn the_path_of_three_vertices_is_dominated_by_its_middle() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        let (completion, solution) = solve(&graph);
        assert_eq!(1, completion.best_value);
        assert_eq!(vec![1], solution.members());
    }
    #[test]
    fn a_graph_without_edges_needs_every_vertex() {
        let (completion, solution) = solve(&Graph::new(3));
        assert_eq!(3, completion.best_value);
        assert_eq!(Solution::all(3), solution);
    }
    #[test]
    fn the_monitor_sees_every_improvement() {
        let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let mut monitor = RecordingMonitor::default();
        let mut fringe  = SimpleFringe::new(MinBound);
        let mut solver  = SequentialSolver::new(&graph, &CoverageBound, &mut monitor, &mut fringe);
        let completion  = solver.minimize();
        drop(solver);

        assert_eq!(1, completion.best_value);
        let last = monitor.improvements.last().unwrap();
        assert_eq!(1, last.2);
        assert!(last.0.is_included(0));
        // improvements are strictly decreasing
        assert!(monitor.improvements.windows(2).all(|w| w[0].2 > w[1].2));
    }
    #[test]
    fn minimizing_twice_yields_the_same_value() {
        let graph = Graph::from_edges(4, &[(0, 1), (2, 3)]);
        let mut monitor = NoMonitor;
        let mut fringe  = SimpleFringe::new(MinBound);
        let mut solver  = SequentialSolver::new(&graph, &CoverageBound, &mut monitor, &mut fringe);
        let first  = solver.minimize();
        let sol    = solver.best_solution();
        let second = solver.minimize();
        assert_eq!(2, first.best_value);
        assert_eq!(2, second.best_value);
        assert_eq!(sol, solver.best_solution());
    }
    #[test]
    fn set_primal_rejects_non_dominating_sets() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        let mut monitor = NoMonitor;
        let mut fringe  = SimpleFringe::new(MinBound);
        let mut solver  = SequentialSolver::new(&graph, &CoverageBound, &mut monitor, &mut fringe);
        assert!(!solver.set_primal(Solution { included: vec![true, false, false] }));
        assert_eq!(3, solver.best_value());
    }
    #[test]
    fn set_primal_rejects_sets_which_are_not_strictly_better() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        let mut monitor = NoMonitor;
        let mut fringe  = SimpleFringe::new(MinBound);
        let mut solver  = SequentialSolver::new(&graph, &CoverageBound, &mut monitor, &mut fringe);
        assert!(solver.set_primal(Solution { included: vec![true, false, true] }));
        assert!(!solver.set_primal(Solution { included: vec![false, true, true] }));
        assert_eq!(vec![0, 2], solver.best_solution().members());
    }
    #[test]
    fn an_optimal_primal_is_kept_by_the_search() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        let mut monitor = RecordingMonitor::default();
        let mut fringe  = SimpleFringe::new(MinBound);
        let mut solver  = SequentialSolver::new(&graph, &CoverageBound, &mut monitor, &mut fringe);
        assert!(solver.set_primal(Solution { included: vec![false, true, false] }));
        let completion = solver.minimize();
        drop(solver);

        assert_eq!(1, completion.best_value);
        assert_eq!(1, completion.pruned);
        assert!(monitor.improvements.is_empty());
    }
}
