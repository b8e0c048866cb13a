pub mod enumerate;
pub mod reconfig;

use anyhow::{Context, Result};
use flipspace::Graph;

use crate::{cli::GraphArgs, io::read_edge_list};

/// Build the base graph named on the command line.
pub fn load_graph(args: &GraphArgs) -> Result<Graph> {
    match (&args.grid, &args.edges) {
        (Some((rows, cols)), _) => Graph::grid(*rows, *cols, args.adjacency())
            .with_context(|| format!("build {rows}x{cols} grid")),
        (None, Some(path)) => read_edge_list(path),
        (None, None) => anyhow::bail!("either --grid or --edges is required"),
    }
}
