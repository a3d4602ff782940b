use crate::error::Result;
use crate::input::{read_source, EdgeList, Tokens};
use classics_core::Error;
use classics_graph::{bellman_ford, minimum_spanning_tree, Edge};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct BellmanFordArgs {
    /// Read `V E`, then E lines of `src dest weight`, then an optional source
    /// vertex from FILE (`-` for stdin); without it a built-in graph is used
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Source vertex, overriding one given in the input [default: 0]
    #[structopt(short, long)]
    source: Option<usize>,
}

#[derive(Debug, StructOpt)]
pub struct KruskalArgs {
    /// Read `V E`, then E lines of `u v weight` from FILE (`-` for stdin);
    /// without it a built-in graph is used
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,
}

/// Directed graph with negative edges and no negative cycle.
fn sample_shortest_path_graph() -> EdgeList {
    let edges = [
        (0, 1, -1),
        (0, 2, 4),
        (1, 2, 3),
        (1, 3, 2),
        (1, 4, 2),
        (3, 2, 5),
        (3, 1, 1),
        (4, 3, -3),
    ];
    EdgeList {
        vertex_count: 5,
        edges: edges.iter().copied().map(Edge::from).collect(),
    }
}

/// Undirected graph with a minimum spanning tree of weight 14.
fn sample_spanning_tree_graph() -> EdgeList {
    let edges = [(0, 1, 10), (0, 2, 5), (2, 3, 9), (0, 3, 3), (1, 2, 6)];
    EdgeList {
        vertex_count: 4,
        edges: edges.iter().copied().map(Edge::from).collect(),
    }
}

pub fn run_bellman_ford(args: &BellmanFordArgs, out: &mut dyn Write) -> Result<()> {
    let (graph, input_source) = match &args.input {
        Some(path) => {
            let text = read_source(path)?;
            let mut tokens = Tokens::new(&text);
            let graph = EdgeList::parse(&mut tokens)?;
            let source = tokens.take_opt("source vertex")?;
            (graph, source)
        }
        None => (sample_shortest_path_graph(), None),
    };
    let source = args.source.or(input_source).unwrap_or(0);
    info!(
        "bellman-ford over {} vertices and {} edges from {}",
        graph.vertex_count,
        graph.edges.len(),
        source
    );
    write_shortest_paths(&graph, source, out)
}

fn write_shortest_paths(graph: &EdgeList, source: usize, out: &mut dyn Write) -> Result<()> {
    let paths = match bellman_ford(graph.vertex_count, &graph.edges, source) {
        Ok(paths) => paths,
        Err(Error::NegativeCycle) => {
            writeln!(out, "Graph contains negative weight cycle")?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    writeln!(out, "Vertex\tDistance from Source {}", source)?;
    for (vertex, distance) in paths.iter() {
        match distance {
            Some(distance) => writeln!(out, "{}\t{}", vertex, distance)?,
            None => writeln!(out, "{}\tINF", vertex)?,
        }
    }
    Ok(())
}

pub fn run_kruskal(args: &KruskalArgs, out: &mut dyn Write) -> Result<()> {
    let graph = match &args.input {
        Some(path) => EdgeList::parse(&mut Tokens::new(&read_source(path)?))?,
        None => sample_spanning_tree_graph(),
    };
    info!(
        "kruskal over {} vertices and {} edges",
        graph.vertex_count,
        graph.edges.len()
    );
    write_spanning_tree(&graph, out)
}

fn write_spanning_tree(graph: &EdgeList, out: &mut dyn Write) -> Result<()> {
    let mst = minimum_spanning_tree(graph.vertex_count, &graph.edges)?;

    writeln!(out, "Edges in the MST:")?;
    for edge in mst.edges() {
        writeln!(out, "{}-{}  Weight: {}", edge.from, edge.to, edge.weight)?;
    }
    writeln!(out, "Total weight: {}", mst.total_weight())?;
    if !mst.is_spanning() {
        writeln!(
            out,
            "Graph is disconnected: spanning forest of {} components",
            mst.component_count()
        )?;
    }
    Ok(())
}
