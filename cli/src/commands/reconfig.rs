use anyhow::{Context, Result};
use flipspace::{Enumerator, PartitionCollection, ReconfigurationGraph, Strategy};
use serde::Serialize;
use tracing::info;

use crate::{cli::{Cli, ReconfigArgs}, commands::load_graph, io::write_json};

#[derive(Serialize)]
struct Report<'a> {
    nodes: usize,
    edges: usize,
    parts: usize,
    strategy: Strategy,
    partitions: &'a PartitionCollection,
    reconfiguration: &'a ReconfigurationGraph,
    max_degree: usize,
    connected: bool,
}

pub fn run(_cli: &Cli, args: &ReconfigArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    let strategy = Strategy::from(args.strategy);
    info!(nodes = graph.node_count(), edges = graph.edge_count(), parts = args.parts, "loaded base graph");

    let partitions = Enumerator::new(&graph, args.parts)
        .with_limits(args.limits.limits())
        .run()
        .context("enumerate partitions")?;

    let reconfig = ReconfigurationGraph::build_with(&graph, &partitions, strategy);
    let max_degree = reconfig.max_degree();
    let connected = reconfig.is_connected();

    println!("Number of vertices: {}", reconfig.node_count());
    println!("Number of edges: {}", reconfig.edge_count());
    println!("Maximum degree: {max_degree}");
    println!("Connected: {connected}");

    if let Some(path) = &args.output.output {
        let report = Report {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            parts: args.parts,
            strategy,
            partitions: &partitions,
            reconfiguration: &reconfig,
            max_degree,
            connected,
        };
        write_json(path, args.output.force, &report)?;
        info!(path = %path.display(), "wrote report");
    }

    Ok(())
}
