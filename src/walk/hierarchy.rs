//! HierarchyWalker — shallow structural tree of the live entity hierarchy.
//!
//! Walks parent→child structural links (not arbitrary object fields) and
//! intentionally does no value introspection: entity name, activation flags
//! and component type names only. The hierarchy relation is a tree by
//! construction, so no cycle tracking is needed — but entities the host
//! reports as dead are treated as absent rather than erroring.
//!
//! Line formats:
//! - entity:    `[Name] (active_self: true, active_in_hierarchy: true)`
//!   (the focused entity additionally gets ` tag='…' layer='…'`)
//! - component: `- TypeName`, one level below its entity
//! - children one level below their parent; indentation proportional to depth.

use crate::config::SnapConfig;
use crate::scene::{entity_identity, EntityRef, HierarchyProvider};
use crate::snapshot::SnapshotDocument;

pub struct HierarchyWalker {
    include_inactive: bool,
    focused: Option<usize>,
}

impl HierarchyWalker {
    pub fn new(cfg: &SnapConfig) -> Self {
        Self {
            include_inactive: cfg.include_inactive,
            focused: None,
        }
    }

    /// Mark one entity as focused: its line carries tag and layer labels.
    pub fn with_focus(mut self, entity: &EntityRef) -> Self {
        self.focused = Some(entity_identity(entity));
        self
    }

    /// Emit the tree for `roots` (in caller-supplied order) at `level`.
    pub fn walk(
        &self,
        doc: &mut SnapshotDocument,
        level: usize,
        roots: &[EntityRef],
        provider: &dyn HierarchyProvider,
    ) {
        for root in roots {
            self.emit_entity(doc, level, root, provider);
        }
    }

    fn emit_entity(
        &self,
        doc: &mut SnapshotDocument,
        level: usize,
        entity: &EntityRef,
        provider: &dyn HierarchyProvider,
    ) {
        // Destroyed or host-filtered entities are absent, not errors.
        if !provider.is_entity_alive(entity) {
            return;
        }
        if !self.include_inactive && !entity.is_active() {
            return;
        }

        let mut line = format!(
            "[{}] (active_self: {}, active_in_hierarchy: {})",
            entity.name(),
            entity.is_active(),
            entity.is_active_in_hierarchy()
        );
        if self.focused == Some(entity_identity(entity)) {
            line.push_str(&format!(" tag='{}' layer='{}'", entity.tag(), entity.layer()));
        }
        doc.line(level, &line);

        for comp in entity.components() {
            doc.line(level + 1, &format!("- {}", comp.type_name()));
        }

        for child in entity.children() {
            self.emit_entity(doc, level + 1, &child, provider);
        }
    }
}
