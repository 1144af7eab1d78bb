//! Centralized configuration and builder for SceneSnap.
//!
//! Goals:
//! - Single place to collect capture tunables instead of scattering env lookups.
//! - SnapConfig::from_env() reads the same SNAP_* env vars the host can set.
//! - Provide a simple CaptureBuilder that returns a SnapConfig, which the
//!   coordinator and walkers consume.
//!
//! Defaults match the recommended capture bounds:
//! - max_depth = 3 (recursion budget for the pointer-target detail walk)
//! - max_elements = 5 (per-collection element cap)
//! - indent_width = 4 (spaces per tree level, consistent through one document)
//! - include_inactive = true (inactive entities print with their flag)
//!   All of the above can be overridden via ENV or builder.

use std::fmt;

use crate::consts::{
    DEFAULT_INDENT_WIDTH, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ELEMENTS, DEFAULT_OUTPUT_DIR,
};

/// Top-level configuration for one capture pipeline.
#[derive(Clone, Debug)]
pub struct SnapConfig {
    /// Recursion budget for the detail walk.
    /// Env: SNAP_MAX_DEPTH (default 3)
    pub max_depth: u32,

    /// Per-collection element cap; more elements render a truncation marker.
    /// Env: SNAP_MAX_ELEMENTS (default 5)
    pub max_elements: usize,

    /// Spaces per indent level in the output document.
    /// Env: SNAP_INDENT_WIDTH (default 4)
    pub indent_width: usize,

    /// Whether the hierarchy walk prints inactive entities (with their flag)
    /// or skips them entirely.
    /// Env: SNAP_INCLUDE_INACTIVE (default true; "1|true|on|yes" => true)
    pub include_inactive: bool,

    /// Output directory for the DirectorySink.
    /// Env: SNAP_OUTPUT_DIR (default "scene-snapshots")
    pub output_dir: String,

    /// Keep a best-effort captures.json registry next to the artifacts.
    /// Env: SNAP_REGISTRY (default true)
    pub registry: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_elements: DEFAULT_MAX_ELEMENTS,
            indent_width: DEFAULT_INDENT_WIDTH,
            include_inactive: true,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            registry: true,
        }
    }
}

#[inline]
fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(v) => {
            let s = v.trim().to_ascii_lowercase();
            s == "1" || s == "true" || s == "on" || s == "yes"
        }
        Err(_) => default,
    }
}

impl SnapConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("SNAP_MAX_DEPTH") {
            if let Ok(n) = v.trim().parse::<u32>() {
                cfg.max_depth = n;
            }
        }

        if let Ok(v) = std::env::var("SNAP_MAX_ELEMENTS") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.max_elements = n;
            }
        }

        if let Ok(v) = std::env::var("SNAP_INDENT_WIDTH") {
            if let Ok(n) = v.trim().parse::<usize>() {
                // 0-width indent would collapse the tree; clamp to 1.
                cfg.indent_width = n.max(1);
            }
        }

        cfg.include_inactive = env_bool("SNAP_INCLUDE_INACTIVE", cfg.include_inactive);

        if let Ok(v) = std::env::var("SNAP_OUTPUT_DIR") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.output_dir = s.to_string();
            }
        }

        cfg.registry = env_bool("SNAP_REGISTRY", cfg.registry);

        cfg
    }

    /// Fluent setters (builder-style) to override specific fields.

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_elements(mut self, cap: usize) -> Self {
        self.max_elements = cap;
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.max(1);
        self
    }

    pub fn with_include_inactive(mut self, on: bool) -> Self {
        self.include_inactive = on;
        self
    }

    pub fn with_output_dir<S: Into<String>>(mut self, dir: S) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_registry(mut self, on: bool) -> Self {
        self.registry = on;
        self
    }
}

impl fmt::Display for SnapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SnapConfig {{ \
             max_depth: {}, \
             max_elements: {}, \
             indent_width: {}, \
             include_inactive: {}, \
             output_dir: {}, \
             registry: {} \
             }}",
            self.max_depth,
            self.max_elements,
            self.indent_width,
            self.include_inactive,
            self.output_dir,
            self.registry,
        )
    }
}

/// Lightweight builder that produces a SnapConfig.
#[derive(Clone, Debug)]
pub struct CaptureBuilder {
    cfg: SnapConfig,
}

impl Default for CaptureBuilder {
    fn default() -> Self {
        // Start from env to preserve host-side overrides, then allow explicit ones.
        Self {
            cfg: SnapConfig::from_env(),
        }
    }
}

impl CaptureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: SnapConfig::default(),
        }
    }

    pub fn max_depth(mut self, depth: u32) -> Self {
        self.cfg.max_depth = depth;
        self
    }

    pub fn max_elements(mut self, cap: usize) -> Self {
        self.cfg.max_elements = cap;
        self
    }

    pub fn indent_width(mut self, width: usize) -> Self {
        self.cfg.indent_width = width.max(1);
        self
    }

    pub fn include_inactive(mut self, on: bool) -> Self {
        self.cfg.include_inactive = on;
        self
    }

    pub fn output_dir<S: Into<String>>(mut self, dir: S) -> Self {
        self.cfg.output_dir = dir.into();
        self
    }

    pub fn registry(mut self, on: bool) -> Self {
        self.cfg.registry = on;
        self
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> SnapConfig {
        self.cfg
    }
}
