//! Pointer hit-testing collaborator and the UI-vs-scene precedence rule.
//!
//! Precedence (fixed, documented): a UI raycast hit wins over the 3-D scene
//! hit only when the element is both rendered and interactive. Invisible or
//! non-interactive UI hits never mask scene geometry; with no usable hit at
//! all the resolver returns None.

use crate::scene::EntityRef;

/// Pointer position in host screen coordinates.
pub type Pointer = (f32, f32);

/// One UI raycast hit, in raycast order (topmost first).
pub struct UiHit {
    pub entity: EntityRef,
    /// Whether the element currently accepts interaction.
    pub interactive: bool,
    /// Whether the element is visually rendered.
    pub rendered: bool,
}

/// The closest 3-D scene raycast hit.
pub struct SceneHit {
    pub entity: EntityRef,
    pub distance: f32,
}

/// A resolved hover target.
pub struct Hover {
    pub entity: EntityRef,
    /// True when the target came from the UI raycast.
    pub via_ui: bool,
}

/// External collaborator: raw raycast surface. `resolve_hovered` applies the
/// precedence rule so every host adapter inherits the same behavior.
pub trait HitTestProvider {
    /// UI raycast results at `pointer`, topmost first. Empty when none.
    fn ui_hits(&self, pointer: Pointer) -> Vec<UiHit>;

    /// Closest 3-D scene hit at `pointer`, if any.
    fn scene_hit(&self, pointer: Pointer) -> Option<SceneHit>;

    /// Resolve the single hovered entity at `pointer`.
    fn resolve_hovered(&self, pointer: Pointer) -> Option<Hover> {
        for hit in self.ui_hits(pointer) {
            if hit.interactive && hit.rendered {
                return Some(Hover {
                    entity: hit.entity,
                    via_ui: true,
                });
            }
        }
        self.scene_hit(pointer).map(|h| Hover {
            entity: h.entity,
            via_ui: false,
        })
    }
}
