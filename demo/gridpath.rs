//! Interactive A* pathfinder in the terminal.
//!
//! Run: cargo run --bin gridpath -- --walls 0.25
//!
//! Logging goes to stderr; redirect it when enabling `RUST_LOG`, e.g.
//! `RUST_LOG=debug cargo run --bin gridpath 2> gridpath.log`.

use clap::Parser;
use gridpath_demo::{Args, run};

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
