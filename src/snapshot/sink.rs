//! Output sinks for finished snapshot documents.
//!
//! The core is indifferent to where a document lands; the reference sink
//! writes one timestamped UTF-8 text artifact per capture into a fixed
//! directory (created on demand) and keeps a best-effort captures.json
//! registry next to the artifacts. BufferSink collects documents in memory
//! for tests and embedding.

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SnapConfig;
use crate::consts::{SNAPSHOT_FILE_EXT, SNAPSHOT_FILE_TAG};
use crate::snapshot::document::SnapshotDocument;
use crate::snapshot::registry::{registry_add, CaptureEntry};
use crate::util::{file_timestamp, now_secs, sanitize_label};

/// Receives one finished document per capture. Either the whole document is
/// delivered or the failure is reported once — never a partial retry.
pub trait OutputSink {
    fn deliver(&mut self, label: &str, doc: &SnapshotDocument) -> Result<()>;
}

/// Writes `<label>_snapshot_<yyyymmdd_HHMMSS>.txt` per capture.
pub struct DirectorySink {
    dir: PathBuf,
    registry: bool,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            registry: true,
        }
    }

    pub fn from_config(cfg: &SnapConfig) -> Self {
        Self {
            dir: PathBuf::from(&cfg.output_dir),
            registry: cfg.registry,
        }
    }

    pub fn with_registry(mut self, on: bool) -> Self {
        self.registry = on;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OutputSink for DirectorySink {
    fn deliver(&mut self, label: &str, doc: &SnapshotDocument) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir {}", self.dir.display()))?;

        let base = format!(
            "{}_{}_{}",
            sanitize_label(label),
            SNAPSHOT_FILE_TAG,
            file_timestamp()
        );
        // Several captures can land within one second; never overwrite.
        let mut stem = base.clone();
        let mut n = 1;
        while self.dir.join(format!("{}.{}", stem, SNAPSHOT_FILE_EXT)).exists() {
            n += 1;
            stem = format!("{}_{}", base, n);
        }
        let file = format!("{}.{}", stem, SNAPSHOT_FILE_EXT);
        let path = self.dir.join(&file);

        fs::write(&path, doc.as_str()).with_context(|| format!("write {}", path.display()))?;
        info!("snapshot written to {}", path.display());

        if self.registry {
            let entry = CaptureEntry {
                id: stem,
                label: label.to_string(),
                file,
                ts_secs: now_secs(),
            };
            if let Err(e) = registry_add(&self.dir, entry) {
                // The artifact is already on disk; a registry failure must not
                // fail the capture.
                warn!("captures registry update failed: {:#}", e);
            }
        }

        Ok(())
    }
}

/// In-memory sink: collects (label, text) pairs.
#[derive(Default)]
pub struct BufferSink {
    pub captures: Vec<(String, String)>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.captures.last().map(|(_, text)| text.as_str())
    }
}

impl OutputSink for BufferSink {
    fn deliver(&mut self, label: &str, doc: &SnapshotDocument) -> Result<()> {
        self.captures
            .push((label.to_string(), doc.as_str().to_string()));
        Ok(())
    }
}
