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

//! This module checks the solver against an exhaustive enumeration of all
//! vertex subsets on randomly generated small graphs.

use rand::{rngs::StdRng, Rng, SeedableRng};

use domset::*;

/// Generates a random graph with `n` vertices where each edge is present
/// with probability `p`.
fn random_graph(rng: &mut StdRng, n: usize, p: f64) -> Graph {
    let mut g = Graph::new(n);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                g.add_edge(a, b);
            }
        }
    }
    g
}

/// The closed neighborhood of each vertex, as a bit mask
fn closed_neighborhoods(graph: &Graph) -> Vec<u32> {
    (0..graph.nb_vertices())
        .map(|v| graph.neighbors(v).iter().fold(1 << v, |m, u| m | (1 << u)))
        .collect()
}

/// The size of the smallest dominating set whose members agree with the
/// first `level` decisions of `fixed`, found by trying every subset.
fn brute_force(graph: &Graph, fixed: &[bool], level: usize) -> usize {
    let n      = graph.nb_vertices();
    let closed = closed_neighborhoods(graph);
    let prefix = (0..level).filter(|i| fixed[*i]).fold(0u32, |m, i| m | (1 << i));
    let decided= (1u32 << level) - 1;

    let mut best = usize::MAX;
    for mask in 0u32..(1 << n) {
        if mask & decided != prefix {
            continue;
        }
        if closed.iter().all(|nv| nv & mask != 0) {
            best = best.min(mask.count_ones() as usize);
        }
    }
    best
}

fn solve(graph: &Graph) -> (Completion, Solution) {
    let bound       = CoverageBound;
    let mut monitor = NoMonitor;
    let mut fringe  = SimpleFringe::new(MinBound);
    let mut solver  = DefaultSolver::new(graph, &bound, &mut monitor, &mut fringe);
    let completion  = solver.minimize();
    (completion, solver.best_solution())
}

/// Builds the node at `level` whose decided flags are those of `flags`
fn node_at(flags: &[bool], level: usize) -> SearchNode {
    let mut node = SearchNode::root(flags.len());
    for flag in flags.iter().take(level) {
        node = if *flag { node.include_child() } else { node.exclude_child() };
    }
    node
}

#[test]
fn the_solution_is_optimal_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0xD0_5E7);
    for _ in 0..150 {
        let n = rng.gen_range(0..=15);
        let p = rng.gen_range(0.05..0.6);
        let g = random_graph(&mut rng, n, p);

        let (completion, solution) = solve(&g);
        assert_eq!(brute_force(&g, &[], 0), completion.best_value);
        assert_eq!(completion.best_value, solution.size());
        assert!(is_dominating(&g, &SearchNode::from(solution)));
    }
}

#[test]
fn isolated_vertices_always_belong_to_the_solution() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(1..=12);
        let g = random_graph(&mut rng, n, 0.15);
        let (_, solution) = solve(&g);
        for v in 0..n {
            if g.is_isolated(v) {
                assert!(solution.included[v]);
            }
        }
    }
}

#[test]
fn two_runs_yield_the_same_result() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..20 {
        let n = rng.gen_range(5..=14);
        let g = random_graph(&mut rng, n, 0.3);
        let (c1, s1) = solve(&g);
        let (c2, s2) = solve(&g);
        assert_eq!(c1, c2);
        assert_eq!(s1, s2);
    }
}

#[test]
fn the_bound_never_overestimates_on_random_nodes() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..300 {
        let n     = rng.gen_range(1..=10);
        let p     = rng.gen_range(0.1..0.7);
        let g     = random_graph(&mut rng, n, p);
        let level = rng.gen_range(0..=n);
        let flags = (0..n).map(|_| rng.gen_bool(0.3)).collect::<Vec<_>>();
        let node  = node_at(&flags, level);

        let bound = CoverageBound.estimate(&g, &node);
        assert!(bound <= brute_force(&g, node.included(), level));
    }
}

#[test]
fn the_bound_never_overestimates_on_any_node_of_small_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let n = rng.gen_range(1..=6);
        let g = random_graph(&mut rng, n, 0.4);
        for level in 0..=n {
            for prefix in 0u32..(1 << level) {
                let flags = (0..n).map(|i| i < level && prefix & (1 << i) != 0).collect::<Vec<_>>();
                let node  = node_at(&flags, level);

                let bound = CoverageBound.estimate(&g, &node);
                assert!(bound <= brute_force(&g, &flags, level));
            }
        }
    }
}

#[test]
fn both_rankings_agree_on_the_optimum() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..40 {
        let n = rng.gen_range(0..=13);
        let g = random_graph(&mut rng, n, 0.25);

        let bound       = CoverageBound;
        let mut monitor = NoMonitor;
        let mut fringe  = SimpleFringe::new(MinBoundDeepest);
        let mut solver  = DefaultSolver::new(&g, &bound, &mut monitor, &mut fringe);
        let deepest     = solver.minimize();

        assert_eq!(solve(&g).0.best_value, deepest.best_value);
    }
}

#[test]
fn the_incumbent_improves_strictly() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let n = rng.gen_range(4..=14);
        let g = random_graph(&mut rng, n, 0.2);

        let bound       = CoverageBound;
        let mut monitor = RecordingMonitor::default();
        let mut fringe  = SimpleFringe::new(MinBound);
        let mut solver  = DefaultSolver::new(&g, &bound, &mut monitor, &mut fringe);
        let completion  = solver.minimize();
        drop(solver);

        let values = monitor.improvements.iter().map(|x| x.2).collect::<Vec<_>>();
        assert!(values.windows(2).all(|w| w[0] > w[1]));
        assert!(values.iter().all(|v| *v < n));
        if let Some(last) = values.last() {
            assert_eq!(completion.best_value, *last);
        } else {
            assert_eq!(n, completion.best_value);
        }
        for (node, bound, value) in monitor.improvements.iter() {
            assert!(is_dominating(&g, node));
            // a dominating node leaves nothing to cover: its bound is its size
            assert_eq!(*bound, *value);
        }
    }
}
