use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use weighted_graph::{algorithm, Graph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Mst,
    Paths,
    Components,
    All,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mst" => Ok(Algorithm::Mst),
            "paths" => Ok(Algorithm::Paths),
            "components" => Ok(Algorithm::Components),
            "all" => Ok(Algorithm::All),
            _ => Err(format!(
                "unknown algorithm '{}', expected one of mst, paths, components, all",
                s
            )),
        }
    }
}

#[derive(StructOpt, Debug)]
#[structopt(
    name = "weighted-graph",
    about = "Minimum spanning tree, shortest paths and connected components of a GFA graph"
)]
struct Opt {
    /// GFA file with integer segment names; link overlaps are used
    /// as edge weights
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Start vertex for the spanning tree and shortest paths,
    /// defaults to the first vertex in the file
    #[structopt(short, long)]
    start: Option<VertexId>,

    /// One of mst, paths, components, all
    #[structopt(short, long, default_value = "all")]
    algorithm: Algorithm,

    /// Log progress to stderr, unless overridden by RUST_LOG
    #[structopt(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        "weighted_graph=debug"
    } else {
        "weighted_graph=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_mst(graph: &Graph, start: VertexId) -> weighted_graph::Result<()> {
    let tree = algorithm::minimum_spanning_tree(graph, start)?;

    println!("# minimum spanning tree from {}", start);
    for edge in tree.edges() {
        println!("{}\t{}\t{}", edge.v1, edge.v2, edge.weight);
    }
    println!("# total weight: {}", tree.total_weight());

    Ok(())
}

fn print_paths(graph: &Graph, start: VertexId) -> weighted_graph::Result<()> {
    let paths = algorithm::shortest_paths(graph, start)?;

    println!("# shortest paths from {}", start);
    println!("# vertex\tdistance\tpredecessor");
    for (ix, v) in paths.vertices.iter().enumerate() {
        let dist = paths.dist[ix].map_or("inf".to_string(), |d| d.to_string());
        let prev = paths.prev[ix].map_or("-".to_string(), |p| p.to_string());
        println!("{}\t{}\t{}", v, dist, prev);
    }

    Ok(())
}

fn print_components(graph: &Graph) {
    let components = algorithm::connected_components(graph);

    println!("# of components: {}", components.count());
    for id in 1..=components.count() {
        print!("component {}:", id);
        for v in components.members(id) {
            print!(" {}", v);
        }
        println!();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Opt::from_args();

    init_logging(opt.verbose);

    let graph = Graph::from_gfa_path(&opt.input)?;

    println!("# vertices: {}", graph.vertex_count());
    println!("# edges: {}", graph.edge_count());

    let start = opt
        .start
        .or_else(|| graph.vertices().first().copied())
        .unwrap_or_default();

    if matches!(opt.algorithm, Algorithm::Mst | Algorithm::All) {
        print_mst(&graph, start)?;
    }

    if matches!(opt.algorithm, Algorithm::Paths | Algorithm::All) {
        print_paths(&graph, start)?;
    }

    if matches!(opt.algorithm, Algorithm::Components | Algorithm::All) {
        print_components(&graph);
    }

    Ok(())
}
