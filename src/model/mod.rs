//! Value model and capability descriptors for inspected objects.
//!
//! The engine never reflects over arbitrary Rust types. Every host-integrated
//! type opts in by implementing [`Inspect`]: a runtime type name plus named
//! members in declared order. Member values are carried by the closed
//! [`Value`] variant — the walkers dispatch on category only, never on
//! concrete types, so adding a new compact-struct formatter is a single
//! variant addition.
//!
//! Sharing model:
//! - Inspected objects are passed as `Rc<dyn Inspect>` handles. The walkers
//!   clone handles only for the duration of one walk and cache nothing across
//!   captures.
//! - Identity (cycle detection) is the `Rc` data-pointer address, never value
//!   equality.

use std::fmt;
use std::rc::Rc;

/// Shared handle to one inspectable object.
pub type InspectRef = Rc<dyn Inspect>;

/// Capability descriptor: what one host type exposes to the walkers.
pub trait Inspect {
    /// Short runtime type name, e.g. `"PlayerController"`.
    fn type_name(&self) -> String;

    /// Readable named members, in declared order. A member whose read fails
    /// carries the reason instead of a value; the walk renders it inline and
    /// keeps going.
    fn members(&self) -> Vec<Member>;
}

/// Pointer identity of an inspected object (data address of the `Rc`).
#[inline]
pub fn identity(obj: &InspectRef) -> usize {
    Rc::as_ptr(obj) as *const () as usize
}

/// One named member of a composite object.
#[derive(Clone)]
pub struct Member {
    pub name: String,
    pub value: Result<Value, ReadError>,
}

impl Member {
    pub fn ok<S: Into<String>>(name: S, value: Value) -> Self {
        Self {
            name: name.into(),
            value: Ok(value),
        }
    }

    pub fn unreadable<S: Into<String>, R: Into<String>>(name: S, reason: R) -> Self {
        Self {
            name: name.into(),
            value: Err(ReadError::new(reason)),
        }
    }
}

/// A member read that threw or is not currently readable.
/// Recovered locally: rendered as `<unreadable: reason>` at the node.
#[derive(Debug, Clone)]
pub struct ReadError {
    pub reason: String,
}

impl ReadError {
    pub fn new<R: Into<String>>(reason: R) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Closed value categories the walkers dispatch on.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    /// Enumerated constant; renders by symbolic name, never by integer value.
    Enum { name: String },
    /// Fixed-shape value struct with a dedicated one-line formatter.
    Compact(Compact),
    /// Handle into the host's asset/resource system; renders as a short label,
    /// never its internal bytes.
    Resource { type_name: String, label: String },
    /// Live scene entity or component reference; renders as a short label so a
    /// stray field never re-walks the whole scene.
    EntityRef {
        type_name: String,
        entity_name: String,
    },
    /// Ordered sequence (sets are presented here in the adapter's stable order).
    Seq(Vec<Value>),
    /// Associative entries in the adapter's stable order.
    Map(Vec<(Value, Value)>),
    /// Arbitrary composite object; expanded member-by-member by the walker.
    Object(InspectRef),
}

impl Value {
    pub fn str<S: Into<String>>(s: S) -> Self {
        Value::Str(s.into())
    }

    pub fn enum_name<S: Into<String>>(name: S) -> Self {
        Value::Enum { name: name.into() }
    }

    pub fn resource<T: Into<String>, L: Into<String>>(type_name: T, label: L) -> Self {
        Value::Resource {
            type_name: type_name.into(),
            label: label.into(),
        }
    }

    pub fn entity_ref<T: Into<String>, N: Into<String>>(type_name: T, entity_name: N) -> Self {
        Value::EntityRef {
            type_name: type_name.into(),
            entity_name: entity_name.into(),
        }
    }

    pub fn object(obj: InspectRef) -> Self {
        Value::Object(obj)
    }
}

/// Compact structs: bounded, well-known shapes that never recurse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Compact {
    Vec2 { x: f32, y: f32 },
    Vec3 { x: f32, y: f32, z: f32 },
    Color { r: f32, g: f32, b: f32, a: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
    /// Orientation quaternion with its Euler-angle companion (degrees).
    Quat {
        x: f32,
        y: f32,
        z: f32,
        w: f32,
        euler: (f32, f32, f32),
    },
}
