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

//! This is the command line front end of the solver. It reads a graph instance,
//! searches for a minimum dominating set and prints it on the console.

use std::{path::PathBuf, process, time::Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use domset::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// An easy way to find a minimum dominating set of an undirected graph with
/// best-first branch and bound
struct Args {
    /// The path to the instance file
    fname: PathBuf,
    /// The order in which the pending nodes are explored
    #[clap(short, long, value_enum, default_value_t = Ranking::MinBound)]
    ranking: Ranking,
    /// Do not report the intermediate solutions
    #[clap(short, long)]
    quiet: bool,
    /// Increases the log verbosity when RUST_LOG is not set (-v: info, -vv: debug, -vvv: trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Ranking {
    /// Lowest bound first, ties broken by insertion order
    MinBound,
    /// Lowest bound first, ties broken in favor of the deepest nodes
    Deepest,
}

/// Prints every improvement of the incumbent on the console
struct ConsoleMonitor;
impl Monitor for ConsoleMonitor {
    fn on_improvement(&mut self, node: &SearchNode, bound: usize, best_value: usize) {
        println!("Taken {} with bound = {}", node, bound);
        println!("It is a new solution with {} vertices.", best_value);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn solve<O: NodeRanking>(graph: &Graph, ranking: O, monitor: &mut dyn Monitor) -> (Completion, Solution) {
    let bound      = CoverageBound;
    let mut fringe = SimpleFringe::new(ranking);
    let mut solver = DefaultSolver::new(graph, &bound, monitor, &mut fringe);

    let completion = solver.minimize();
    (completion, solver.best_solution())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let graph = match io_utils::read_instance(&args.fname) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{}: {}", args.fname.display(), e);
            process::exit(1);
        }
    };

    let mut console = ConsoleMonitor;
    let mut silent  = NoMonitor;
    let monitor: &mut dyn Monitor = if args.quiet { &mut silent } else { &mut console };

    let start = Instant::now();
    let (completion, solution) = match args.ranking {
        Ranking::MinBound => solve(&graph, MinBound, monitor),
        Ranking::Deepest  => solve(&graph, MinBoundDeepest, monitor),
    };
    info!(
        seconds = start.elapsed().as_secs_f64(),
        explored = completion.explored,
        pruned = completion.pruned,
        "done"
    );

    println!("Vertices taken into the result are");
    println!("{}", solution);
    println!("Minimum dominating set has {} vertices.", completion.best_value);
}
