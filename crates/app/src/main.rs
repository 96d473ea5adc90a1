use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use component_gen::prelude::*;
use env_logger::Env;
use log::error;

mod generate;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = generate::generate(CliOpts::new()) {
        error!("{e}");
        let _ = report(&e, io::stderr().lock());
        std::process::exit(1);
    }
}

// Written to stderr regardless of the log filter.
fn report<W: Write>(error: &Error, mut out: W) -> io::Result<()> {
    writeln!(out, "error: {error}")
}

#[derive(Debug, Parser)]
#[command(version, about = "Generates graphs made of path, tree, bipartite and cycle components")]
pub(crate) struct CliOpts {
    /// Maximum number of nodes.
    #[arg(short = 'n', long, default_value_t = 100_000)]
    pub(crate) max_num_nodes: usize,

    /// Maximum number of edges.
    #[arg(short = 'm', long, default_value_t = 1_000_000)]
    pub(crate) max_num_edges: usize,

    /// Maximum size of each ship.
    #[arg(short = 'l', long)]
    pub(crate) max_ship_size: usize,

    /// Seed of the pseudo-random number generator.
    #[arg(short, long, default_value_t = 0)]
    pub(crate) seed: u64,

    /// File where output will be written.
    #[arg(short, long)]
    pub(crate) output_file: PathBuf,

    /// How the node mapping after the edge list is built.
    #[arg(long, value_enum, default_value_t = MappingKind::Permutation)]
    pub(crate) mapping: MappingKind,

    /// Stop adding components once this fraction of a budget is used.
    #[arg(long, default_value_t = 1.0)]
    pub(crate) budget_fraction: f64,

    /// Use 32 bit node ids.
    #[arg(long)]
    pub(crate) use_32_bit: bool,
}

impl CliOpts {
    fn new() -> Self {
        Self::parse()
    }
}
