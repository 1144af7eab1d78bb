//! Scene/entity hierarchy surface: the structural links the hierarchy walk
//! traverses (parent→children, entity→attached components), plus the external
//! hierarchy provider the coordinator consumes.
//!
//! The hierarchy relation is a tree by construction (an entity has exactly one
//! parent), so the hierarchy walk needs no cycle tracking — but destroyed or
//! host-filtered entities must be treated as absent, which is what
//! [`HierarchyProvider::is_entity_alive`] is for.

use std::rc::Rc;

use crate::model::InspectRef;

/// Shared handle to one hierarchy entity.
pub type EntityRef = Rc<dyn Entity>;

/// One node of the host's scene hierarchy.
pub trait Entity {
    fn name(&self) -> String;

    /// The entity's own activation flag.
    fn is_active(&self) -> bool;

    /// Effective activation considering ancestors.
    fn is_active_in_hierarchy(&self) -> bool;

    /// Tag/category label; printed only for the focused entity.
    fn tag(&self) -> String {
        String::new()
    }

    /// Layer/group label; printed only for the focused entity.
    fn layer(&self) -> String {
        String::new()
    }

    /// Full hierarchy path `Parent/Child/Leaf`. Defaults to the bare name;
    /// adapters that know their parents should override.
    fn path(&self) -> String {
        self.name()
    }

    fn children(&self) -> Vec<EntityRef>;

    /// Attached components, each exposed through its capability descriptor.
    fn components(&self) -> Vec<InspectRef>;
}

/// Pointer identity of an entity (data address of the `Rc`).
#[inline]
pub fn entity_identity(entity: &EntityRef) -> usize {
    Rc::as_ptr(entity) as *const () as usize
}

/// Root entities of one loaded scene, in host order.
#[derive(Clone)]
pub struct SceneRoots {
    pub name: String,
    /// Whether this is the host's active scene.
    pub is_active: bool,
    pub roots: Vec<EntityRef>,
}

/// External collaborator: resolves the loaded hierarchy.
pub trait HierarchyProvider {
    /// Ordered loaded scenes. Must include roots that persist across scene
    /// transitions — hosts surface those as an extra pseudo-scene entry.
    fn list_loaded_scenes(&self) -> Vec<SceneRoots>;

    /// False for entities the host has destroyed or filtered out; the walk
    /// treats them as absent rather than erroring.
    fn is_entity_alive(&self, entity: &EntityRef) -> bool {
        let _ = entity;
        true
    }
}
