//! Leaf-category value formatting.
//!
//! Maps one value to one line of display text, dispatching purely on the
//! closed [`Value`] variant — never on identity or traversal history.
//! Collections and composites are not handled here: `format_inline` returns
//! None for them and the graph walker expands them member-by-member.
//!
//! Marker forms (fixed parts in `consts`):
//! - `null`
//! - `<unreadable: reason>`
//! - `<cycle: TypeName>`
//! - `<depth limit: TypeName>` / `<depth limit: N element(s)>` / `... entry(s)>`

use crate::consts::{
    MARKER_CYCLE_PREFIX, MARKER_DEPTH_PREFIX, MARKER_NULL, MARKER_SUFFIX,
    MARKER_UNREADABLE_PREFIX,
};
use crate::model::{Compact, Value};
use crate::util::trunc2;

/// Render a leaf-category value on one line. None for collections and
/// composite objects (those get the structured expansion).
pub fn format_inline(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(MARKER_NULL.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::UInt(u) => Some(u.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Str(s) => Some(format!("{:?}", s)),
        // Enumerated constants render by symbolic name, not by integer value.
        Value::Enum { name } => Some(name.clone()),
        Value::Compact(c) => Some(format_compact(c)),
        Value::Resource { type_name, label } => Some(format!("({}) {}", type_name, label)),
        Value::EntityRef {
            type_name,
            entity_name,
        } => Some(format!("{}:'{}'", type_name, entity_name)),
        Value::Seq(_) | Value::Map(_) | Value::Object(_) => None,
    }
}

/// Fixed-precision single-line rendering; never recurses into the struct.
fn format_compact(c: &Compact) -> String {
    match *c {
        Compact::Vec2 { x, y } => format!("({}, {})", trunc2(x), trunc2(y)),
        Compact::Vec3 { x, y, z } => {
            format!("({}, {}, {})", trunc2(x), trunc2(y), trunc2(z))
        }
        Compact::Color { r, g, b, a } => format!(
            "rgba({}, {}, {}, {})",
            trunc2(r),
            trunc2(g),
            trunc2(b),
            trunc2(a)
        ),
        Compact::Rect { x, y, w, h } => format!(
            "rect({}, {}, {}, {})",
            trunc2(x),
            trunc2(y),
            trunc2(w),
            trunc2(h)
        ),
        Compact::Quat { x, y, z, w, euler } => format!(
            "quat({}, {}, {}, {}) euler({}, {}, {})",
            trunc2(x),
            trunc2(y),
            trunc2(z),
            trunc2(w),
            trunc2(euler.0),
            trunc2(euler.1),
            trunc2(euler.2)
        ),
    }
}

pub fn unreadable_marker(reason: &str) -> String {
    format!("{}{}{}", MARKER_UNREADABLE_PREFIX, reason, MARKER_SUFFIX)
}

pub fn cycle_marker(type_name: &str) -> String {
    format!("{}{}{}", MARKER_CYCLE_PREFIX, type_name, MARKER_SUFFIX)
}

pub fn depth_marker_object(type_name: &str) -> String {
    format!("{}{}{}", MARKER_DEPTH_PREFIX, type_name, MARKER_SUFFIX)
}

/// Depth marker for sequences keeps the element count so truncation is still
/// informative.
pub fn depth_marker_seq(len: usize) -> String {
    format!("{}{} element(s){}", MARKER_DEPTH_PREFIX, len, MARKER_SUFFIX)
}

pub fn depth_marker_map(len: usize) -> String {
    format!("{}{} entry(s){}", MARKER_DEPTH_PREFIX, len, MARKER_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Compact, Value};

    #[test]
    fn leaves_render_inline() {
        assert_eq!(format_inline(&Value::Null).as_deref(), Some("null"));
        assert_eq!(format_inline(&Value::Bool(true)).as_deref(), Some("true"));
        assert_eq!(format_inline(&Value::Int(-3)).as_deref(), Some("-3"));
        assert_eq!(format_inline(&Value::Float(7.0)).as_deref(), Some("7"));
        assert_eq!(
            format_inline(&Value::str("hi")).as_deref(),
            Some("\"hi\"")
        );
        assert_eq!(
            format_inline(&Value::enum_name("Idle")).as_deref(),
            Some("Idle")
        );
    }

    #[test]
    fn handles_and_refs_render_labels() {
        assert_eq!(
            format_inline(&Value::resource("Texture2D", "ui_frame")).as_deref(),
            Some("(Texture2D) ui_frame")
        );
        assert_eq!(
            format_inline(&Value::entity_ref("Transform", "Root")).as_deref(),
            Some("Transform:'Root'")
        );
    }

    #[test]
    fn compact_structs_truncate_to_two_decimals() {
        let v = Value::Compact(Compact::Vec3 {
            x: 1.239,
            y: -2.5,
            z: 0.0,
        });
        assert_eq!(format_inline(&v).as_deref(), Some("(1.23, -2.50, 0.00)"));

        let q = Value::Compact(Compact::Quat {
            x: 0.0,
            y: 0.707,
            z: 0.0,
            w: 0.707,
            euler: (0.0, 90.0, 0.0),
        });
        assert_eq!(
            format_inline(&q).as_deref(),
            Some("quat(0.00, 0.70, 0.00, 0.70) euler(0.00, 90.00, 0.00)")
        );
    }

    #[test]
    fn containers_are_not_inline() {
        assert!(format_inline(&Value::Seq(vec![])).is_none());
        assert!(format_inline(&Value::Map(vec![])).is_none());
    }
}
