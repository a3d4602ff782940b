//! Subcommands, one per algorithm.

mod btree;
mod graph;
mod order;

use crate::error::Result;
use std::io::Write;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Insert keys into a B-tree and print them in ascending order
    Btree(btree::BtreeArgs),
    /// Shortest distances from one vertex with Bellman-Ford
    BellmanFord(graph::BellmanFordArgs),
    /// Minimum spanning tree with Kruskal's algorithm
    Kruskal(graph::KruskalArgs),
    /// Sort values with randomized quicksort
    Quicksort(order::QuicksortArgs),
    /// Find the k-th smallest value with randomized select
    Select(order::SelectArgs),
}

impl Command {
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        match self {
            Command::Btree(args) => btree::run(args, out),
            Command::BellmanFord(args) => graph::run_bellman_ford(args, out),
            Command::Kruskal(args) => graph::run_kruskal(args, out),
            Command::Quicksort(args) => order::run_quicksort(args, out),
            Command::Select(args) => order::run_select(args, out),
        }
    }
}

/// Writes `label` followed by the space-separated values and a newline.
fn write_values<T: std::fmt::Display>(
    out: &mut dyn Write,
    label: &str,
    values: impl IntoIterator<Item = T>,
) -> Result<()> {
    write!(out, "{}", label)?;
    for value in values {
        write!(out, " {}", value)?;
    }
    writeln!(out)?;
    Ok(())
}
