//! Shared constants: capture bounds, marker strings, artifact naming.

// -------- Capture bounds --------
pub const DEFAULT_MAX_DEPTH: u32 = 3;
pub const DEFAULT_MAX_ELEMENTS: usize = 5;
pub const DEFAULT_INDENT_WIDTH: usize = 4;

// -------- Inline markers --------
// Assembled forms: `<cycle: TypeName>`, `<depth limit: ...>`, `<unreadable: reason>`.
pub const MARKER_NULL: &str = "null";
pub const MARKER_CYCLE_PREFIX: &str = "<cycle: ";
pub const MARKER_DEPTH_PREFIX: &str = "<depth limit: ";
pub const MARKER_UNREADABLE_PREFIX: &str = "<unreadable: ";
pub const MARKER_SUFFIX: &str = ">";

// -------- Section placeholders --------
pub const PLACEHOLDER_NO_HIERARCHY: &str = "(hierarchy unavailable: no provider)";
pub const PLACEHOLDER_NO_ROOTS: &str = "(no loaded scenes)";
pub const PLACEHOLDER_EMPTY_SCENE: &str = "(scene has no root entities)";
pub const PLACEHOLDER_NO_HIT_TEST: &str = "(pointer target unavailable: no hit-test provider)";
pub const PLACEHOLDER_NOTHING_HOVERED: &str = "(nothing under pointer)";
pub const PLACEHOLDER_NO_COMPONENTS: &str = "(entity has no components)";

// -------- Document layout --------
pub const BANNER_RULER: &str = "=================================================";
pub const SECTION_HIERARCHY: &str = "--- Loaded scene hierarchy ---";
pub const SECTION_POINTER: &str = "--- Pointer target ---";

// -------- Output artifacts --------
pub const DEFAULT_OUTPUT_DIR: &str = "scene-snapshots";
pub const SNAPSHOT_FILE_TAG: &str = "snapshot";
pub const SNAPSHOT_FILE_EXT: &str = "txt";
pub const REGISTRY_FILE: &str = "captures.json";
