//! Sidecar describing how a polygon table was produced.
//!
//! `polys.csv` gets `polys.provenance.json` next to it, holding the code revision,
//! the sequence parameters and the row count, so a table can be regenerated.

use anyhow::{Context, Result};
use polyseq::PolygonSequence;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Sequence parameters and output recorded for one exported table.
#[derive(Debug, Serialize)]
pub struct TableProvenance {
    pub code_rev: String,
    pub polyseq_version: &'static str,
    pub max_sides: u32,
    pub circumradius: f64,
    pub rows: usize,
    pub table: String,
}

impl TableProvenance {
    pub fn new(seq: &PolygonSequence, table: &Path, rows: usize) -> Self {
        Self {
            code_rev: code_rev(),
            polyseq_version: polyseq::VERSION,
            max_sides: seq.max_sides(),
            circumradius: seq.circumradius(),
            rows,
            table: table.to_string_lossy().into_owned(),
        }
    }

    /// Write next to the table as `<stem>.provenance.json`; returns the sidecar path.
    pub fn write(&self, table: &Path) -> Result<PathBuf> {
        let path = sidecar_path(table);
        let body = serde_json::to_vec_pretty(self)?;
        std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(table: &Path) -> PathBuf {
    let stem = table
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());
    table.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` baked in at build time, else from the environment, else `git rev-parse HEAD`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = std::process::Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_table() {
        assert_eq!(
            sidecar_path(Path::new("/data/runs/polys.csv")),
            Path::new("/data/runs/polys.provenance.json")
        );
    }

    #[test]
    fn records_sequence_parameters() {
        let dir = tempdir().unwrap();
        let table = dir.path().join("polys.csv");
        let seq = PolygonSequence::new(10, 4).unwrap();
        let path = TableProvenance::new(&seq, &table, seq.len())
            .write(&table)
            .unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["max_sides"], 10);
        assert_eq!(parsed["circumradius"], 4.0);
        assert_eq!(parsed["rows"], 8);
        assert_eq!(parsed["table"], table.to_string_lossy().as_ref());
    }
}
