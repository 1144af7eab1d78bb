//! Capture orchestration split into submodules:
//! - document.rs: SnapshotDocument (append-only indented text).
//! - hover.rs: HitTestProvider + the UI-vs-scene precedence rule.
//! - trigger.rs: EdgeTrigger (one capture per discrete hotkey press).
//! - sink.rs: OutputSink, DirectorySink (timestamped artifacts), BufferSink.
//! - registry.rs: best-effort captures.json registry next to the artifacts.
//! - coordinator.rs: SnapshotCoordinator (one capture end to end).

mod coordinator;
mod document;
mod hover;
pub mod registry;
mod sink;
mod trigger;

pub use coordinator::SnapshotCoordinator;
pub use document::SnapshotDocument;
pub use hover::{HitTestProvider, Hover, Pointer, SceneHit, UiHit};
pub use registry::CaptureEntry;
pub use sink::{BufferSink, DirectorySink, OutputSink};
pub use trigger::EdgeTrigger;
