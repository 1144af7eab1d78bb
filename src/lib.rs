#![allow(non_snake_case)]

// Core building blocks
pub mod consts;
pub mod config;
pub mod metrics;

// Value model and capability descriptors
pub mod model;  // src/model/mod.rs
pub mod scene;  // src/scene/mod.rs

// Walkers
pub mod walk;      // src/walk/{mod,visited,value_fmt,graph,hierarchy}.rs
pub mod snapshot;  // src/snapshot/{mod,document,hover,trigger,sink,registry,coordinator}.rs

// Shared small helpers (now_secs, trunc2, ...)
pub mod util;  // src/util/mod.rs

// CLI (used by the default binary)
pub mod cli;

// Convenient re-exports
pub use config::{CaptureBuilder, SnapConfig};
pub use model::{Compact, Inspect, InspectRef, Member, ReadError, Value};
pub use scene::{Entity, EntityRef, HierarchyProvider, SceneRoots};
pub use snapshot::{
    BufferSink, DirectorySink, EdgeTrigger, HitTestProvider, OutputSink, SnapshotCoordinator,
    SnapshotDocument,
};
pub use walk::{GraphWalker, HierarchyWalker, VisitedSet};
