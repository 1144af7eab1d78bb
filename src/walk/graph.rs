//! GraphWalker — budgeted, cycle-safe recursive descent into composite
//! objects and collections.
//!
//! Per-node state machine:
//! 1. leaf categories (null included) hand off to the inline formatter;
//! 2. depth check — at budget 0 a category-aware depth marker is emitted
//!    instead of recursing;
//! 3. cycle check (objects only — the only nodes with stable identity):
//!    an identity already on the ancestor path emits a cycle marker and stops
//!    that branch;
//! 4. expansion — members in declared order, collection elements up to the
//!    per-collection cap, each child with budget - 1;
//! 5. exit — the identity leaves the path so sibling branches may legitimately
//!    revisit the object.
//!
//! The depth budget and element cap are the only termination guarantees over
//! an otherwise-untrusted graph; the budget is an explicit decrementing value
//! carried through every recursive call, never the call-stack limit.
//!
//! Failure semantics: a member read error renders as `<unreadable: reason>` at
//! that node and aborts nothing else.

use crate::config::SnapConfig;
use crate::metrics::{
    record_collection_truncated, record_cycle_detected, record_depth_limited,
    record_node_visited, record_unreadable_member,
};
use crate::model::{identity, InspectRef, Member, Value};
use crate::snapshot::SnapshotDocument;
use crate::walk::value_fmt::{
    cycle_marker, depth_marker_map, depth_marker_object, depth_marker_seq, format_inline,
    unreadable_marker,
};
use crate::walk::visited::VisitedSet;

/// The traversal engine. Read-only: it never mutates an inspected object.
pub struct GraphWalker {
    max_depth: u32,
    max_elements: usize,
}

impl GraphWalker {
    pub fn new(cfg: &SnapConfig) -> Self {
        Self {
            max_depth: cfg.max_depth,
            max_elements: cfg.max_elements,
        }
    }

    pub fn with_bounds(max_depth: u32, max_elements: usize) -> Self {
        Self {
            max_depth,
            max_elements,
        }
    }

    /// Format one labeled value at `level`, bounded by the full depth budget.
    pub fn walk_value(&self, doc: &mut SnapshotDocument, level: usize, label: &str, value: &Value) {
        let mut visited = VisitedSet::new();
        self.emit(doc, level, label, value, self.max_depth, &mut visited);
    }

    /// Format one member, rendering a failed read as its diagnostic line.
    pub fn walk_member(&self, doc: &mut SnapshotDocument, level: usize, member: &Member) {
        let mut visited = VisitedSet::new();
        self.emit_member(doc, level, member, self.max_depth, &mut visited);
    }

    /// Format one attached component: a `- TypeName` header line followed by
    /// its members. This is the entry point for the pointer-target detail
    /// section.
    pub fn walk_component(&self, doc: &mut SnapshotDocument, level: usize, obj: &InspectRef) {
        record_node_visited();
        let type_name = obj.type_name();
        if self.max_depth == 0 {
            record_depth_limited();
            doc.line(level, &format!("- {}", depth_marker_object(&type_name)));
            return;
        }
        doc.line(level, &format!("- {}", type_name));

        let mut visited = VisitedSet::new();
        let id = identity(obj);
        visited.enter(id);
        for m in obj.members() {
            self.emit_member(doc, level + 1, &m, self.max_depth - 1, &mut visited);
        }
        visited.leave(id);
    }

    fn emit_member(
        &self,
        doc: &mut SnapshotDocument,
        level: usize,
        member: &Member,
        depth: u32,
        visited: &mut VisitedSet,
    ) {
        match &member.value {
            Ok(v) => self.emit(doc, level, &member.name, v, depth, visited),
            Err(e) => {
                record_unreadable_member();
                doc.line(
                    level,
                    &format!("{}: {}", member.name, unreadable_marker(&e.reason)),
                );
            }
        }
    }

    fn emit(
        &self,
        doc: &mut SnapshotDocument,
        level: usize,
        label: &str,
        value: &Value,
        depth: u32,
        visited: &mut VisitedSet,
    ) {
        record_node_visited();

        // Leaf categories terminate here regardless of the remaining budget.
        if let Some(inline) = format_inline(value) {
            doc.line(level, &format!("{}: {}", label, inline));
            return;
        }

        match value {
            Value::Object(obj) => self.emit_object(doc, level, label, obj, depth, visited),
            Value::Seq(items) => self.emit_seq(doc, level, label, items, depth, visited),
            Value::Map(entries) => self.emit_map(doc, level, label, entries, depth, visited),
            // format_inline covered everything else.
            _ => unreachable!("leaf categories are formatted inline"),
        }
    }

    fn emit_object(
        &self,
        doc: &mut SnapshotDocument,
        level: usize,
        label: &str,
        obj: &InspectRef,
        depth: u32,
        visited: &mut VisitedSet,
    ) {
        let type_name = obj.type_name();
        if depth == 0 {
            record_depth_limited();
            doc.line(level, &format!("{}: {}", label, depth_marker_object(&type_name)));
            return;
        }

        let id = identity(obj);
        if !visited.enter(id) {
            record_cycle_detected();
            doc.line(level, &format!("{}: {}", label, cycle_marker(&type_name)));
            return;
        }

        doc.line(level, &format!("{}: {}", label, type_name));
        for m in obj.members() {
            self.emit_member(doc, level + 1, &m, depth - 1, visited);
        }

        visited.leave(id);
    }

    fn emit_seq(
        &self,
        doc: &mut SnapshotDocument,
        level: usize,
        label: &str,
        items: &[Value],
        depth: u32,
        visited: &mut VisitedSet,
    ) {
        if depth == 0 {
            record_depth_limited();
            doc.line(level, &format!("{}: {}", label, depth_marker_seq(items.len())));
            return;
        }

        doc.line(level, &format!("{}: [{} element(s)]", label, items.len()));
        for (i, item) in items.iter().take(self.max_elements).enumerate() {
            self.emit(doc, level + 1, &format!("[{}]", i), item, depth - 1, visited);
        }
        if items.len() > self.max_elements {
            record_collection_truncated();
            doc.line(
                level + 1,
                &format!("... ({} omitted)", items.len() - self.max_elements),
            );
        }
    }

    fn emit_map(
        &self,
        doc: &mut SnapshotDocument,
        level: usize,
        label: &str,
        entries: &[(Value, Value)],
        depth: u32,
        visited: &mut VisitedSet,
    ) {
        if depth == 0 {
            record_depth_limited();
            doc.line(level, &format!("{}: {}", label, depth_marker_map(entries.len())));
            return;
        }

        doc.line(level, &format!("{}: {{{} entry(s)}}", label, entries.len()));
        for (i, (key, val)) in entries.iter().take(self.max_elements).enumerate() {
            match format_inline(key) {
                // Inline keys label the entry directly: `{key}: value`.
                Some(k) => {
                    self.emit(doc, level + 1, &format!("{{{}}}", k), val, depth - 1, visited)
                }
                // A composite/collection key still gets full recursion.
                None => {
                    doc.line(level + 1, &format!("[{}]:", i));
                    self.emit(doc, level + 2, "key", key, depth - 1, visited);
                    self.emit(doc, level + 2, "value", val, depth - 1, visited);
                }
            }
        }
        if entries.len() > self.max_elements {
            record_collection_truncated();
            doc.line(
                level + 1,
                &format!("... ({} omitted)", entries.len() - self.max_elements),
            );
        }
    }
}
