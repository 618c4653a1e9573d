//! Builds a graph from the command line, runs one algorithm and prints its
//! event trace, one line per event.
//!
//! Usage:
//!   cargo run --example replay -- --vertices 5 \
//!       --edge 0,1,4 --edge 0,2,1 --edge 2,1,2 --edge 1,3,1 --edge 2,3,5 --edge 3,4,3 \
//!       --algorithm dijkstra --start 0

use std::process;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use graphtrace::{prelude::*, tracing_support::init_tracing};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
}

/// A `from,to,weight` triple.
#[derive(Debug, Clone, Copy)]
struct EdgeArg {
    from: i32,
    to: i32,
    weight: i32,
}

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [from, to, weight] = parts[..] else {
            return Err(format!("expected from,to,weight but got '{s}'"));
        };
        let parse = |field: &str| {
            field
                .parse::<i32>()
                .map_err(|err| format!("bad number '{field}' in '{s}': {err}"))
        };
        Ok(EdgeArg {
            from: parse(from)?,
            to: parse(to)?,
            weight: parse(weight)?,
        })
    }
}

/// Run a traced graph algorithm and print every recorded event.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices
    #[arg(long)]
    vertices: i32,

    /// Directed edge as from,to,weight (repeatable)
    #[arg(long = "edge")]
    edges: Vec<EdgeArg>,

    /// Store every edge in both directions
    #[arg(long)]
    undirected: bool,

    #[arg(long, value_enum, default_value_t = Algorithm::Bfs)]
    algorithm: Algorithm,

    /// Start vertex
    #[arg(long, default_value_t = 0)]
    start: i32,

    /// Also print the status changes of each step
    #[arg(long)]
    verbose: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let mut engine = Engine::new();
    let init = engine.initialize(args.vertices);
    exit_on_error(&init);
    for edge in &args.edges {
        engine.add_edge(edge.from, edge.to, edge.weight);
        if args.undirected {
            engine.add_edge(edge.to, edge.from, edge.weight);
        }
    }

    let response = match args.algorithm {
        Algorithm::Bfs => engine.run_bfs(args.start),
        Algorithm::Dfs => engine.run_dfs(args.start),
        Algorithm::Dijkstra => engine.run_dijkstra(args.start),
        Algorithm::Prim => engine.run_prim(args.start),
    };
    exit_on_error(&response);

    println!(
        "{} from {} over {} edges",
        response.operation,
        response.value,
        response.edges.len()
    );
    for (i, event) in response.events.iter().enumerate() {
        println!("{i:>4}  {event}");
        if !args.verbose {
            continue;
        }
        if let Some(step) = event.as_step() {
            for node in &step.nodes {
                println!("        vertex {} -> {}", node.vertex, node.status.code());
            }
        }
    }
}

fn exit_on_error(response: &Response) {
    if let Some(err) = response.error() {
        eprintln!("{}: {err}", response.operation);
        process::exit(1);
    }
}
