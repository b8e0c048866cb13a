use anyhow::{Context, Result};
use flipspace::{Enumerator, PartitionCollection};
use serde::Serialize;
use tracing::info;

use crate::{cli::{Cli, EnumerateArgs}, commands::load_graph, io::write_json};

#[derive(Serialize)]
struct Report<'a> {
    nodes: usize,
    edges: usize,
    parts: usize,
    partitions: &'a PartitionCollection,
}

pub fn run(_cli: &Cli, args: &EnumerateArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    info!(nodes = graph.node_count(), edges = graph.edge_count(), parts = args.parts, "loaded base graph");

    let partitions = Enumerator::new(&graph, args.parts)
        .with_limits(args.limits.limits())
        .run()
        .context("enumerate partitions")?;

    println!("Number of partitions: {}", partitions.len());

    if let Some(path) = &args.output.output {
        let report = Report {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            parts: args.parts,
            partitions: &partitions,
        };
        write_json(path, args.output.force, &report)?;
        info!(path = %path.display(), "wrote report");
    }

    Ok(())
}
