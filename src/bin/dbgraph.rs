extern crate dbgraph;

// target/release/dbgraph assemble -k 21 -i kmers.txt -o contigs.fa
//
// target/release/dbgraph stats -k 31 -i reads.fa.gz

use anyhow::Result;
use clap::{Parser, Subcommand};
use dbgraph::assemble;
use tracing_subscriber::EnvFilter;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk the graph from a start k-mer and write the contigs
    Assemble(assemble::AssembleCmd),

    /// Print table and degree statistics of the graph
    Stats(assemble::StatsCmd),
}

/// Build a De Bruijn graph from k-mers and assemble contigs
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Dbgraph {
    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let dbgraph = Dbgraph::parse();

    let level = match dbgraph.debug {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    match dbgraph.command {
        Some(Commands::Assemble(cmd)) => assemble::assemble(cmd),
        Some(Commands::Stats(cmd)) => assemble::stats(cmd),
        None => Ok(()),
    }
}
