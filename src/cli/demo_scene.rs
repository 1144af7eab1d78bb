//! Built-in demo scene: a small fixture world exercising every value
//! category the walkers know (compact structs, collections, resource
//! handles, an unreadable member, a reference cycle), wired up as both
//! hierarchy and hit-test provider for the `demo` subcommand.

use std::rc::{Rc, Weak};

use crate::model::{Compact, Inspect, InspectRef, Member, Value};
use crate::scene::{Entity, EntityRef, HierarchyProvider, SceneRoots};
use crate::snapshot::{HitTestProvider, Pointer, SceneHit, UiHit};

pub struct DemoWorld {
    main_roots: Vec<EntityRef>,
    persistent_roots: Vec<EntityRef>,
    hovered: EntityRef,
}

impl HierarchyProvider for DemoWorld {
    fn list_loaded_scenes(&self) -> Vec<SceneRoots> {
        vec![
            SceneRoots {
                name: "DemoMain".to_string(),
                is_active: true,
                roots: self.main_roots.clone(),
            },
            // Roots that persist across scene transitions surface as a
            // pseudo-scene, like the host keeps them.
            SceneRoots {
                name: "DontDestroyOnLoad".to_string(),
                is_active: false,
                roots: self.persistent_roots.clone(),
            },
        ]
    }
}

impl HitTestProvider for DemoWorld {
    fn ui_hits(&self, _pointer: Pointer) -> Vec<UiHit> {
        vec![UiHit {
            entity: self.hovered.clone(),
            interactive: true,
            rendered: true,
        }]
    }

    fn scene_hit(&self, _pointer: Pointer) -> Option<SceneHit> {
        None
    }
}

// ---------- entities ----------

struct DemoEntity {
    name: String,
    path: String,
    active: bool,
    active_in_hierarchy: bool,
    tag: String,
    layer: String,
    children: Vec<EntityRef>,
    components: Vec<InspectRef>,
}

impl Entity for DemoEntity {
    fn name(&self) -> String {
        self.name.clone()
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn is_active_in_hierarchy(&self) -> bool {
        self.active_in_hierarchy
    }
    fn tag(&self) -> String {
        self.tag.clone()
    }
    fn layer(&self) -> String {
        self.layer.clone()
    }
    fn path(&self) -> String {
        self.path.clone()
    }
    fn children(&self) -> Vec<EntityRef> {
        self.children.clone()
    }
    fn components(&self) -> Vec<InspectRef> {
        self.components.clone()
    }
}

// ---------- components ----------

struct Transform {
    position: (f32, f32, f32),
    rotation: (f32, f32, f32, f32),
    euler: (f32, f32, f32),
    scale: (f32, f32, f32),
}

impl Inspect for Transform {
    fn type_name(&self) -> String {
        "Transform".to_string()
    }

    fn members(&self) -> Vec<Member> {
        vec![
            Member::ok(
                "position",
                Value::Compact(Compact::Vec3 {
                    x: self.position.0,
                    y: self.position.1,
                    z: self.position.2,
                }),
            ),
            Member::ok(
                "rotation",
                Value::Compact(Compact::Quat {
                    x: self.rotation.0,
                    y: self.rotation.1,
                    z: self.rotation.2,
                    w: self.rotation.3,
                    euler: self.euler,
                }),
            ),
            Member::ok(
                "scale",
                Value::Compact(Compact::Vec3 {
                    x: self.scale.0,
                    y: self.scale.1,
                    z: self.scale.2,
                }),
            ),
        ]
    }
}

struct UiButton {
    label: String,
    count: i64,
    enabled: bool,
    tint: Compact,
    hotkeys: Vec<String>,
    // Back-reference to itself: demonstrates the cycle marker.
    back: Weak<UiButton>,
}

impl UiButton {
    fn new_rc() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            label: "Start".to_string(),
            count: 7,
            enabled: true,
            tint: Compact::Color {
                r: 1.0,
                g: 0.5,
                b: 0.25,
                a: 1.0,
            },
            hotkeys: vec![
                "Enter".to_string(),
                "Space".to_string(),
                "A".to_string(),
                "B".to_string(),
                "X".to_string(),
                "Y".to_string(),
                "Start".to_string(),
            ],
            back: weak.clone(),
        })
    }
}

impl Inspect for UiButton {
    fn type_name(&self) -> String {
        "UiButton".to_string()
    }

    fn members(&self) -> Vec<Member> {
        let mut members = vec![
            Member::ok("label", Value::str(self.label.clone())),
            Member::ok("count", Value::Int(self.count)),
            Member::ok("enabled", Value::Bool(self.enabled)),
            Member::ok("state", Value::enum_name("Highlighted")),
            Member::ok("tint", Value::Compact(self.tint)),
            Member::ok("icon", Value::resource("Sprite", "btn_icon")),
            Member::ok("target", Value::entity_ref("Transform", "MenuRoot")),
            Member::ok(
                "hotkeys",
                Value::Seq(self.hotkeys.iter().map(|h| Value::str(h.clone())).collect()),
            ),
            Member::ok(
                "repeat_delays",
                Value::Map(vec![
                    (Value::str("initial"), Value::Float(0.5)),
                    (Value::str("repeat"), Value::Float(0.1)),
                ]),
            ),
            Member::unreadable("native_widget", "native handle disposed"),
        ];
        if let Some(me) = self.back.upgrade() {
            members.push(Member::ok("self_button", Value::object(me)));
        }
        members
    }
}

struct AudioSource {
    clip: String,
    volume: f64,
    looped: bool,
}

impl Inspect for AudioSource {
    fn type_name(&self) -> String {
        "AudioSource".to_string()
    }

    fn members(&self) -> Vec<Member> {
        vec![
            Member::ok("clip", Value::resource("AudioClip", self.clip.clone())),
            Member::ok("volume", Value::Float(self.volume)),
            Member::ok("looped", Value::Bool(self.looped)),
        ]
    }
}

// ---------- world assembly ----------

pub fn build() -> DemoWorld {
    let transform = |x: f32| -> InspectRef {
        Rc::new(Transform {
            position: (x, 0.0, 0.0),
            rotation: (0.0, 0.0, 0.0, 1.0),
            euler: (0.0, 0.0, 0.0),
            scale: (1.0, 1.0, 1.0),
        })
    };

    let button: InspectRef = UiButton::new_rc();

    let start_button: EntityRef = Rc::new(DemoEntity {
        name: "StartButton".to_string(),
        path: "MenuRoot/Canvas/StartButton".to_string(),
        active: true,
        active_in_hierarchy: true,
        tag: "UI".to_string(),
        layer: "Overlay".to_string(),
        children: Vec::new(),
        components: vec![transform(10.0), button],
    });

    let canvas: EntityRef = Rc::new(DemoEntity {
        name: "Canvas".to_string(),
        path: "MenuRoot/Canvas".to_string(),
        active: true,
        active_in_hierarchy: true,
        tag: "UI".to_string(),
        layer: "Overlay".to_string(),
        children: vec![start_button.clone()],
        components: vec![transform(0.0)],
    });

    let hidden: EntityRef = Rc::new(DemoEntity {
        name: "LoadingOverlay".to_string(),
        path: "MenuRoot/LoadingOverlay".to_string(),
        active: false,
        active_in_hierarchy: false,
        tag: "UI".to_string(),
        layer: "Overlay".to_string(),
        children: Vec::new(),
        components: vec![transform(0.0)],
    });

    let menu_root: EntityRef = Rc::new(DemoEntity {
        name: "MenuRoot".to_string(),
        path: "MenuRoot".to_string(),
        active: true,
        active_in_hierarchy: true,
        tag: "Untagged".to_string(),
        layer: "Default".to_string(),
        children: vec![canvas, hidden],
        components: vec![transform(0.0)],
    });

    let music: EntityRef = Rc::new(DemoEntity {
        name: "MusicPlayer".to_string(),
        path: "MusicPlayer".to_string(),
        active: true,
        active_in_hierarchy: true,
        tag: "Audio".to_string(),
        layer: "Default".to_string(),
        children: Vec::new(),
        components: vec![Rc::new(AudioSource {
            clip: "menu_theme".to_string(),
            volume: 0.8,
            looped: true,
        })],
    });

    DemoWorld {
        main_roots: vec![menu_root],
        persistent_roots: vec![music],
        hovered: start_button,
    }
}
