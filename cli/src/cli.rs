use std::path::PathBuf;

use flipspace::{Adjacency, Limits, Strategy};

/// Connected graph partitions and the flip graph between them
#[derive(clap::Parser, Debug)]
#[command(name = "flipspace", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Enumerate every partition of a graph into k connected parts
    Enumerate(EnumerateArgs),

    /// Build the single-vertex flip graph over those partitions
    Reconfig(ReconfigArgs),
}

/// Where the base graph comes from.
#[derive(clap::Args, Debug)]
pub struct GraphArgs {
    /// Grid graph with R rows and C columns, e.g. 3x4
    #[arg(long, value_name = "RxC", value_parser = parse_grid,
          required_unless_present = "edges", conflicts_with = "edges")]
    pub grid: Option<(usize, usize)>,

    /// Connect grid cells diagonally as well
    #[arg(long, requires = "grid")]
    pub queen: bool,

    /// JSON edge list: {"nodes": N, "edges": [[u, v], ...]}
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub edges: Option<PathBuf>,
}

impl GraphArgs {
    pub fn adjacency(&self) -> Adjacency {
        if self.queen { Adjacency::Queen } else { Adjacency::Rook }
    }
}

#[derive(clap::Args, Debug)]
pub struct LimitArgs {
    /// Abort once more candidate edge subsets than this are retained
    #[arg(long, value_name = "N")]
    pub max_candidates: Option<usize>,

    /// Abort once more partitions than this are found
    #[arg(long, value_name = "N")]
    pub max_partitions: Option<usize>,
}

impl LimitArgs {
    pub fn limits(&self) -> Limits {
        Limits { max_candidates: self.max_candidates, max_partitions: self.max_partitions }
    }
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Write a JSON report to this file (stdout is not supported)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct EnumerateArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Number of parts
    #[arg(short = 'k', long = "parts")]
    pub parts: usize,

    #[command(flatten)]
    pub limits: LimitArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct ReconfigArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Number of parts
    #[arg(short = 'k', long = "parts")]
    pub parts: usize,

    /// How flip-adjacent partitions are found
    #[arg(long, value_enum, default_value_t = StrategyArg::Pairwise)]
    pub strategy: StrategyArg,

    #[command(flatten)]
    pub limits: LimitArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    /// Compare every pair of partitions
    Pairwise,
    /// Apply every legal single-vertex move
    Moves,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Pairwise => Strategy::Pairwise,
            StrategyArg::Moves => Strategy::Moves,
        }
    }
}

/// Parse `RxC` (also `R,C`) into grid dimensions.
fn parse_grid(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s.split_once(['x', 'X', ','])
        .ok_or_else(|| format!("expected RxC, got {s:?}"))?;
    let parse = |v: &str| v.trim().parse::<usize>().map_err(|e| format!("{v:?}: {e}"));
    Ok((parse(rows)?, parse(cols)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_grid_sizes() {
        assert_eq!(parse_grid("3x4"), Ok((3, 4)));
        assert_eq!(parse_grid("2,5"), Ok((2, 5)));
        assert!(parse_grid("3").is_err());
        assert!(parse_grid("ax2").is_err());
    }

    #[test]
    fn parses_reconfig_command() {
        let cli = Cli::try_parse_from([
            "flipspace", "-vv", "reconfig", "--grid", "2x3", "--queen", "-k", "3", "--strategy", "moves",
        ]).unwrap();
        assert_eq!(cli.verbose, 2);

        let Commands::Reconfig(args) = cli.command else { panic!("expected reconfig") };
        assert_eq!(args.graph.grid, Some((2, 3)));
        assert_eq!(args.graph.adjacency(), Adjacency::Queen);
        assert_eq!(args.parts, 3);
        assert_eq!(Strategy::from(args.strategy), Strategy::Moves);
        assert!(args.output.output.is_none());
    }

    #[test]
    fn requires_exactly_one_graph_source() {
        assert!(Cli::try_parse_from(["flipspace", "enumerate", "-k", "2"]).is_err());
        assert!(Cli::try_parse_from([
            "flipspace", "enumerate", "--grid", "2x2", "--edges", "g.json", "-k", "2",
        ]).is_err());
    }

    #[test]
    fn limits_come_from_flags() {
        let cli = Cli::try_parse_from([
            "flipspace", "enumerate", "--edges", "g.json", "-k", "2", "--max-partitions", "10",
        ]).unwrap();
        let Commands::Enumerate(args) = cli.command else { panic!("expected enumerate") };
        assert_eq!(args.limits.limits(), Limits::unlimited().max_partitions(10));
    }
}
