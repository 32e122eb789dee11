//! Developer tasks for the workspace. Run them with `cargo xtask <task>`.

use clap::Parser;
use xtaskops::tasks;

#[derive(Debug, clap::Parser)]
enum Args {
    /// Runs the test suite under coverage instrumentation
    Coverage{
        /// Generate html report
        #[clap(short, long)]
        dev_mode: bool
    },
    /// Runs the checks of the continuous integration (fmt, clippy, tests)
    Ci,
    /// Generates and opens the documentation of the solver crate
    Docs,
}

fn main() -> Result<(), anyhow::Error> {
    match Args::parse() {
        Args::Coverage{dev_mode} => tasks::coverage(dev_mode),
        Args::Ci                 => tasks::ci(),
        Args::Docs               => tasks::docs(),
    }
}
