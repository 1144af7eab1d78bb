//! Best-effort captures registry.
//!
//! Format: <output_dir>/captures.json
//! {
//!   "entries": [
//!     {"id":"Main_snapshot_20250101_120000","label":"Main","file":"...txt","ts_secs":1735732800},
//!     ...
//!   ]
//! }
//!
//! Notes:
//! - All operations are best-effort: errors propagate and the caller may
//!   ignore them (a broken registry must never fail a capture).
//! - Writes are atomic via tmp+rename.

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::consts::REGISTRY_FILE;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Registry {
    entries: Vec<CaptureEntry>,
}

/// One capture artifact on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureEntry {
    /// Artifact file stem, unique per capture.
    pub id: String,
    /// Capture label (usually the active scene name).
    pub label: String,
    /// Artifact file name inside the output directory.
    pub file: String,
    /// Unix seconds at delivery time.
    pub ts_secs: u64,
}

fn registry_path(dir: &Path) -> PathBuf {
    dir.join(REGISTRY_FILE)
}

fn registry_load(dir: &Path) -> Result<Registry> {
    let p = registry_path(dir);
    if !p.exists() {
        return Ok(Registry::default());
    }
    let bytes = fs::read(&p).with_context(|| format!("read {}", p.display()))?;
    let reg: Registry = serde_json::from_slice(&bytes).context("parse captures.json")?;
    Ok(reg)
}

fn registry_save(dir: &Path, reg: &Registry) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = registry_path(dir);
    let tmp = dir.join(format!("{}.tmp", REGISTRY_FILE));

    let mut f = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp)
        .with_context(|| format!("open {}", tmp.display()))?;

    let data = serde_json::to_vec_pretty(reg).context("serialize captures.json")?;
    f.write_all(&data)?;
    let _ = f.sync_all();

    fs::rename(&tmp, &path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

/// Append one capture entry (best-effort).
pub fn registry_add(dir: &Path, entry: CaptureEntry) -> Result<()> {
    let mut reg = registry_load(dir)?;
    reg.entries.push(entry);
    registry_save(dir, &reg)
}

/// List entries, oldest first.
pub fn registry_list(dir: &Path) -> Result<Vec<CaptureEntry>> {
    let mut reg = registry_load(dir)?;
    reg.entries.sort_by_key(|e| e.ts_secs);
    Ok(reg.entries)
}

/// Find one entry by id.
pub fn registry_find(dir: &Path, id: &str) -> Result<Option<CaptureEntry>> {
    Ok(registry_load(dir)?.entries.into_iter().find(|e| e.id == id))
}

/// Drop the oldest entries beyond `keep`, deleting their artifacts.
/// Returns the number of removed entries.
pub fn registry_prune(dir: &Path, keep: usize) -> Result<usize> {
    let mut entries = registry_list(dir)?;
    if entries.len() <= keep {
        return Ok(0);
    }

    let removed: Vec<CaptureEntry> = entries.drain(..entries.len() - keep).collect();
    for e in &removed {
        let path = dir.join(&e.file);
        if let Err(err) = fs::remove_file(&path) {
            // Registry consistency matters more than a stray artifact.
            warn!("prune: cannot remove {}: {}", path.display(), err);
        }
    }

    registry_save(dir, &Registry { entries })?;
    Ok(removed.len())
}
