use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use flipspace::Graph;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

pub fn assert_not_stdout(path: &Path) -> Result<()> {
    if path == Path::new("-") {
        bail!("stdout is not supported; provide a real file path.");
    }
    Ok(())
}

/// On-disk edge list: `{"nodes": N, "edges": [[u, v], ...]}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeListFile {
    nodes: usize,
    edges: Vec<(usize, usize)>,
}

/// Load a base graph from a JSON edge-list file.
pub fn read_edge_list(path: &Path) -> Result<Graph> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let parsed: EdgeListFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse edge list {}", path.display()))?;

    Graph::from_edges(parsed.nodes, &parsed.edges)
        .with_context(|| format!("build graph from {}", path.display()))
}

/// Write-then-rename wrapper so a failed run never leaves a partial report.
pub struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

impl PendingWrite {
    pub fn open(target: &Path, force: bool) -> Result<Self> {
        assert_not_stdout(target)?;
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        if !force && target.exists() {
            bail!("Refusing to overwrite existing file: {} (use --force)", target.display());
        }

        let dir = target.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let tmp = NamedTempFile::new_in(dir).context("create temp file")?;
        Ok(Self { target: target.to_path_buf(), tmp })
    }

    /// Flush to disk and move the temp file over the target.
    pub fn finish(self) -> Result<()> {
        self.tmp.as_file().sync_all().ok(); // best-effort fsync
        self.tmp.persist(&self.target)
            .with_context(|| format!("rename to {}", self.target.display()))?;
        Ok(())
    }
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.tmp.write(buf) }
    fn flush(&mut self) -> std::io::Result<()> { self.tmp.flush() }
}

/// Serialize `value` as pretty JSON to `target`, atomically.
pub fn write_json<T: Serialize>(target: &Path, force: bool, value: &T) -> Result<()> {
    let mut pending = PendingWrite::open(target, force)?;
    {
        let mut writer = BufWriter::new(&mut pending);
        serde_json::to_writer_pretty(&mut writer, value)
            .with_context(|| format!("write {}", target.display()))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    pending.finish()
}
