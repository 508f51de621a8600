#![allow(dead_code)]

// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate tracing;

extern crate rand;
extern crate serde;
extern crate serde_json;
extern crate tracing_subscriber;

#[cfg(test)]
extern crate proptest;

#[cfg(test)]
#[macro_use]
mod test_utils;

mod errors;
mod graph;
mod grid;
mod params;
mod random;
mod xorshift;

use grid::Grid;
use params::DemoParameters;
use xorshift::XorShift128Plus;

use tracing_subscriber::EnvFilter;

use std::env;
use std::path::Path;

// This only gives access within this module. Make this `pub use errors::*;`
// instead if the types must be accessible from other modules (e.g., within
// a `links` section).
use errors::*;

/// The environment variable holding the tracing filter, in `EnvFilter` syntax.
const LOG_ENV: &str = "GRIDWALK_LOG";

fn main() {
    init_logging();

    if let Err(ref e) = run() {
        use ::std::io::Write;
        let stderr = &mut ::std::io::stderr();
        let errmsg = "Error writing to stderr";

        writeln!(stderr, "error: {}", e).expect(errmsg);

        for e in e.iter().skip(1) {
            writeln!(stderr, "caused by: {}", e).expect(errmsg);
        }

        // The backtrace is not always generated. Try to run this example
        // with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            writeln!(stderr, "backtrace: {:?}", backtrace).expect(errmsg);
        }

        ::std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(::std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let params = match env::args_os().nth(1) {
        Some(path) => DemoParameters::load(Path::new(&path))?,
        None => DemoParameters::default()
    };
    debug!(?params, "demo parameters");

    let grid = match params.seed {
        Some(seed) => Grid::new(params.rows, params.cols, &mut XorShift128Plus::from_u64(seed)),
        None => Grid::new(params.rows, params.cols, &mut rand::thread_rng())
    }.chain_err(|| "unable to generate grid")?;

    println!("Grid:\n{}", grid);
    println!("DFS: {:?}", grid.dfs(params.start).chain_err(|| "grid depth-first search failed")?);
    println!("BFS: {:?}", grid.bfs(params.start).chain_err(|| "grid breadth-first search failed")?);

    let graph = params.build_graph()
        .chain_err(|| "unable to build graph")?;

    println!();
    println!("Graph:\n{}", graph);
    println!("BFS: {:?}", graph.bfs(params.graph_start).chain_err(|| "graph breadth-first search failed")?);
    println!("DFS: {:?}", graph.dfs(params.graph_start).chain_err(|| "graph depth-first search failed")?);

    Ok(())
}
