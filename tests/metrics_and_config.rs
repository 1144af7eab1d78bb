use std::rc::Rc;

use SceneSnap::config::{CaptureBuilder, SnapConfig};
use SceneSnap::model::{Inspect, InspectRef, Member, Value};
use SceneSnap::snapshot::{SnapshotCoordinator, SnapshotDocument};
use SceneSnap::walk::GraphWalker;

struct Obj {
    members: Vec<Member>,
}

impl Inspect for Obj {
    fn type_name(&self) -> String {
        "Obj".to_string()
    }
    fn members(&self) -> Vec<Member> {
        self.members.clone()
    }
}

// Metrics are process-global, so everything that touches them lives in this
// one test to avoid cross-test races.
#[test]
fn counters_track_walk_events_and_captures() {
    SceneSnap::metrics::reset();

    let innermost: InspectRef = Rc::new(Obj { members: Vec::new() });
    let inner: InspectRef = Rc::new(Obj {
        members: vec![Member::ok("x", Value::object(innermost))],
    });
    let obj: InspectRef = Rc::new(Obj {
        members: vec![
            Member::ok("list", Value::Seq((0..9).map(Value::Int).collect())),
            Member::unreadable("Broken", "getter threw"),
            Member::ok("deep", Value::object(inner)),
        ],
    });

    // Depth 2: the 9-element list truncates at 5, and the innermost object
    // hits the depth limit.
    let walker = GraphWalker::with_bounds(2, 5);
    let mut doc = SnapshotDocument::new(4);
    walker.walk_value(&mut doc, 0, "root", &Value::object(obj));

    // One placeholder-only capture on top.
    let coordinator = SnapshotCoordinator::new(SnapConfig::default());
    let _ = coordinator.capture(None);

    let m = SceneSnap::metrics::snapshot();
    assert_eq!(m.captures_total, 1);
    // root + seq + 5 elements + deep + x
    assert_eq!(m.nodes_visited, 9, "nodes_visited={}", m.nodes_visited);
    assert_eq!(m.unreadable_members, 1);
    assert_eq!(m.collections_truncated, 1);
    assert_eq!(m.depth_limited, 1);
    assert_eq!(m.cycles_detected, 0);
    assert_eq!(m.sink_write_failures, 0);
    assert!(m.avg_nodes_per_capture() > 0.0);
}

#[test]
fn builder_overrides_and_clamps() {
    let cfg = CaptureBuilder::from_default()
        .max_depth(7)
        .max_elements(2)
        .indent_width(0)
        .include_inactive(false)
        .output_dir("captures-here")
        .registry(false)
        .build();

    assert_eq!(cfg.max_depth, 7);
    assert_eq!(cfg.max_elements, 2);
    assert_eq!(cfg.indent_width, 1, "zero indent width must clamp to 1");
    assert!(!cfg.include_inactive);
    assert_eq!(cfg.output_dir, "captures-here");
    assert!(!cfg.registry);

    // Display stays a single line with every field in it.
    let shown = cfg.to_string();
    assert!(shown.contains("max_depth: 7"));
    assert!(shown.contains("output_dir: captures-here"));
}

#[test]
fn env_overrides_are_picked_up() {
    std::env::set_var("SNAP_MAX_DEPTH", "9");
    std::env::set_var("SNAP_MAX_ELEMENTS", "11");
    std::env::set_var("SNAP_INCLUDE_INACTIVE", "off");
    std::env::set_var("SNAP_OUTPUT_DIR", "  ");

    let cfg = SnapConfig::from_env();
    assert_eq!(cfg.max_depth, 9);
    assert_eq!(cfg.max_elements, 11);
    assert!(!cfg.include_inactive);
    // Blank dir keeps the default.
    assert_eq!(cfg.output_dir, "scene-snapshots");

    std::env::remove_var("SNAP_MAX_DEPTH");
    std::env::remove_var("SNAP_MAX_ELEMENTS");
    std::env::remove_var("SNAP_INCLUDE_INACTIVE");
    std::env::remove_var("SNAP_OUTPUT_DIR");
}
