use std::rc::{Rc, Weak};

use SceneSnap::model::{Inspect, InspectRef, Member, Value};
use SceneSnap::snapshot::SnapshotDocument;
use SceneSnap::walk::GraphWalker;

// ---------- fixtures ----------

struct Obj {
    type_name: String,
    members: Vec<Member>,
}

impl Inspect for Obj {
    fn type_name(&self) -> String {
        self.type_name.clone()
    }
    fn members(&self) -> Vec<Member> {
        self.members.clone()
    }
}

fn obj(type_name: &str, members: Vec<Member>) -> InspectRef {
    Rc::new(Obj {
        type_name: type_name.to_string(),
        members,
    })
}

struct CycleObj {
    me: Weak<CycleObj>,
}

impl Inspect for CycleObj {
    fn type_name(&self) -> String {
        "CycleObj".to_string()
    }
    fn members(&self) -> Vec<Member> {
        let mut members = vec![Member::ok("id", Value::Int(1))];
        if let Some(me) = self.me.upgrade() {
            members.push(Member::ok("me", Value::object(me)));
        }
        members
    }
}

fn cyclic() -> InspectRef {
    Rc::new_cyclic(|weak: &Weak<CycleObj>| CycleObj { me: weak.clone() })
}

fn walk_to_string(walker: &GraphWalker, label: &str, value: &Value) -> String {
    let mut doc = SnapshotDocument::new(4);
    walker.walk_value(&mut doc, 0, label, value);
    doc.into_string()
}

// ---------- cycle correctness ----------

#[test]
fn self_reference_marks_exactly_one_cycle() {
    let walker = GraphWalker::with_bounds(5, 5);
    let text = walk_to_string(&walker, "root", &Value::object(cyclic()));

    assert_eq!(text.matches("<cycle: CycleObj>").count(), 1);
    assert!(text.contains("root: CycleObj"));
    assert!(text.contains("id: 1"));
    assert!(text.contains("me: <cycle: CycleObj>"));
}

#[test]
fn shared_object_prints_fully_on_unrelated_branches() {
    let d = obj("D", vec![Member::ok("x", Value::Int(9))]);
    let root = obj(
        "Root",
        vec![
            Member::ok("b", Value::object(obj("B", vec![Member::ok("d", Value::object(d.clone()))]))),
            Member::ok("c", Value::object(obj("C", vec![Member::ok("d", Value::object(d.clone()))]))),
        ],
    );

    let walker = GraphWalker::with_bounds(5, 5);
    let text = walk_to_string(&walker, "root", &Value::object(root));

    // No cycle exists: D must expand independently at both occurrences.
    assert_eq!(text.matches("d: D").count(), 2);
    assert_eq!(text.matches("x: 9").count(), 2);
    assert_eq!(text.matches("<cycle:").count(), 0);
}

// ---------- depth boundary ----------

#[test]
fn depth_zero_composite_is_a_single_marker() {
    let walker = GraphWalker::with_bounds(0, 5);
    let root = obj("Widget", vec![Member::ok("x", Value::Int(1))]);
    let text = walk_to_string(&walker, "root", &Value::object(root));

    assert_eq!(text, "root: <depth limit: Widget>\n");
}

#[test]
fn depth_budget_cuts_the_chain_after_n_levels() {
    // Chain of 4 nested composites walked with budget 3: the outer 3 expand,
    // the 4th renders as a depth marker.
    let l3 = obj("L3", vec![Member::ok("v", Value::Int(3))]);
    let l2 = obj("L2", vec![Member::ok("child", Value::object(l3))]);
    let l1 = obj("L1", vec![Member::ok("child", Value::object(l2))]);
    let l0 = obj("L0", vec![Member::ok("child", Value::object(l1))]);

    let walker = GraphWalker::with_bounds(3, 5);
    let text = walk_to_string(&walker, "root", &Value::object(l0));

    assert!(text.contains("root: L0"));
    assert!(text.contains("child: L1"));
    assert!(text.contains("child: L2"));
    assert!(text.contains("child: <depth limit: L3>"));
    assert!(!text.contains("v: 3"), "L3 must not expand:\n{}", text);
}

#[test]
fn leaves_render_even_at_zero_budget() {
    let walker = GraphWalker::with_bounds(0, 5);
    assert_eq!(walk_to_string(&walker, "n", &Value::Int(7)), "n: 7\n");
    assert_eq!(walk_to_string(&walker, "s", &Value::str("x")), "s: \"x\"\n");
}

#[test]
fn depth_marker_for_collections_keeps_the_count() {
    let walker = GraphWalker::with_bounds(0, 5);
    let seq = Value::Seq(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(
        walk_to_string(&walker, "items", &seq),
        "items: <depth limit: 3 element(s)>\n"
    );

    let map = Value::Map(vec![(Value::str("k"), Value::Int(1))]);
    assert_eq!(
        walk_to_string(&walker, "table", &map),
        "table: <depth limit: 1 entry(s)>\n"
    );
}

// ---------- collection truncation ----------

#[test]
fn sequence_of_12_with_cap_5_renders_5_plus_omitted_marker() {
    let items: Vec<Value> = (0..12).map(Value::Int).collect();
    let walker = GraphWalker::with_bounds(3, 5);
    let text = walk_to_string(&walker, "items", &Value::Seq(items));

    assert!(text.contains("items: [12 element(s)]"));
    for i in 0..5 {
        assert!(text.contains(&format!("[{}]: {}", i, i)), "missing element {}", i);
    }
    assert!(!text.contains("[5]:"));
    assert!(text.contains("... (7 omitted)"));
}

#[test]
fn map_truncation_counts_entries() {
    let entries: Vec<(Value, Value)> = (0..8)
        .map(|i| (Value::str(format!("k{}", i)), Value::Int(i)))
        .collect();
    let walker = GraphWalker::with_bounds(3, 5);
    let text = walk_to_string(&walker, "table", &Value::Map(entries));

    assert!(text.contains("table: {8 entry(s)}"));
    assert!(text.contains("{\"k0\"}: 0"));
    assert!(text.contains("{\"k4\"}: 4"));
    assert!(!text.contains("k5"));
    assert!(text.contains("... (3 omitted)"));
}

// ---------- map keys ----------

#[test]
fn composite_map_keys_expand_as_key_value_pairs() {
    let key = obj("KeyType", vec![Member::ok("a", Value::Int(1))]);
    let map = Value::Map(vec![(Value::object(key), Value::Int(2))]);

    let walker = GraphWalker::with_bounds(4, 5);
    let text = walk_to_string(&walker, "table", &map);

    assert!(text.contains("[0]:"));
    assert!(text.contains("key: KeyType"));
    assert!(text.contains("a: 1"));
    assert!(text.contains("value: 2"));
}

// ---------- graceful degradation ----------

#[test]
fn unreadable_member_degrades_locally() {
    let root = obj(
        "Panel",
        vec![
            Member::ok("count", Value::Int(7)),
            Member::unreadable("Broken", "getter threw"),
            Member::ok("name", Value::str("ok")),
        ],
    );

    let walker = GraphWalker::with_bounds(3, 5);
    let text = walk_to_string(&walker, "root", &Value::object(root));

    assert!(text.contains("count: 7"));
    assert!(text.contains("Broken: <unreadable: getter threw>"));
    assert!(text.contains("name: \"ok\""));
}

#[test]
fn single_member_walk_renders_diagnostics_in_place() {
    let walker = GraphWalker::with_bounds(3, 5);
    let mut doc = SnapshotDocument::new(2);
    walker.walk_member(&mut doc, 0, &Member::unreadable("Broken", "no getter"));
    walker.walk_member(&mut doc, 0, &Member::ok("count", Value::Int(7)));
    assert_eq!(
        doc.into_string(),
        "Broken: <unreadable: no getter>\ncount: 7\n"
    );
}

// ---------- determinism ----------

#[test]
fn repeated_walks_are_byte_identical() {
    let root = obj(
        "Root",
        vec![
            Member::ok("list", Value::Seq((0..9).map(Value::Int).collect())),
            Member::ok("inner", Value::object(cyclic())),
            Member::ok("nil", Value::Null),
        ],
    );

    let walker = GraphWalker::with_bounds(3, 5);
    let a = walk_to_string(&walker, "root", &Value::object(root.clone()));
    let b = walk_to_string(&walker, "root", &Value::object(root));
    assert_eq!(a, b);
}

// ---------- component entry point ----------

#[test]
fn component_walk_emits_header_and_members() {
    let comp = obj(
        "UiButton",
        vec![
            Member::ok("count", Value::Int(7)),
            Member::unreadable("Broken", "disposed"),
        ],
    );

    let walker = GraphWalker::with_bounds(3, 5);
    let mut doc = SnapshotDocument::new(4);
    walker.walk_component(&mut doc, 0, &comp);
    let text = doc.into_string();

    assert_eq!(
        text,
        "- UiButton\n    count: 7\n    Broken: <unreadable: disposed>\n"
    );
}

#[test]
fn component_walk_at_zero_budget_is_a_marker() {
    let comp = obj("UiButton", vec![Member::ok("count", Value::Int(7))]);
    let walker = GraphWalker::with_bounds(0, 5);
    let mut doc = SnapshotDocument::new(4);
    walker.walk_component(&mut doc, 0, &comp);
    assert_eq!(doc.into_string(), "- <depth limit: UiButton>\n");
}

#[test]
fn component_back_reference_is_a_cycle() {
    // A component member that points back at the component itself.
    struct SelfComp {
        me: Weak<SelfComp>,
    }
    impl Inspect for SelfComp {
        fn type_name(&self) -> String {
            "SelfComp".to_string()
        }
        fn members(&self) -> Vec<Member> {
            match self.me.upgrade() {
                Some(me) => vec![Member::ok("owner", Value::object(me))],
                None => Vec::new(),
            }
        }
    }
    let comp: InspectRef = Rc::new_cyclic(|weak: &Weak<SelfComp>| SelfComp { me: weak.clone() });

    let walker = GraphWalker::with_bounds(4, 5);
    let mut doc = SnapshotDocument::new(4);
    walker.walk_component(&mut doc, 0, &comp);
    let text = doc.into_string();

    assert_eq!(text.matches("<cycle: SelfComp>").count(), 1);
}
