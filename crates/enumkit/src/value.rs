//! Value model: payloads, backing tags, scalar values and coercion input.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::compare;

// ============================================================================
// Backing
// ============================================================================

/// Backing shape of a whole host enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackingKind {
    /// Every case carries a unique string payload.
    String,
    /// Every case carries a unique integer payload.
    Int,
    /// Cases carry no payload; the case name stands in for it.
    Unbacked,
}

impl BackingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackingKind::String => "string",
            BackingKind::Int => "int",
            BackingKind::Unbacked => "unbacked",
        }
    }

    pub fn is_backed(&self) -> bool {
        !matches!(self, BackingKind::Unbacked)
    }
}

impl fmt::Display for BackingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload declared on a backed case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload {
    Str(&'static str),
    Int(i64),
}

impl Payload {
    pub fn value(self) -> Value<'static> {
        match self {
            Payload::Str(s) => Value::Str(s),
            Payload::Int(n) => Value::Int(n),
        }
    }

    pub fn kind(self) -> BackingKind {
        match self {
            Payload::Str(_) => BackingKind::String,
            Payload::Int(_) => BackingKind::Int,
        }
    }
}

/// Per-case backing: either a payload or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backing {
    Backed(Payload),
    Unbacked,
}

impl Backing {
    pub fn payload(self) -> Option<Payload> {
        match self {
            Backing::Backed(payload) => Some(payload),
            Backing::Unbacked => None,
        }
    }
}

// ============================================================================
// Value
// ============================================================================

/// A loosely-typed scalar.
///
/// Effective values of host enums are always `Str` or `Int`. `Float` only
/// appears in caller input, so that decoded numbers can be compared loosely.
///
/// Equality is type-exact. Floats compare by bit pattern so that `Value` can
/// key an [`OrderedMap`](crate::OrderedMap).
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Str(&'a str),
    Int(i64),
    Float(f64),
}

impl<'a> Value<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// True for integers, floats and strings holding a decimal number.
    pub fn is_numeric(&self) -> bool {
        compare::numeric(self).is_some()
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Value<'_> {}

impl Hash for Value<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Str(s) => s.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(x) => x.to_bits().hash(state),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

impl Serialize for Value<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Str(value.as_str())
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Payload> for Value<'static> {
    fn from(payload: Payload) -> Self {
        payload.value()
    }
}

// ============================================================================
// Coercion input
// ============================================================================

/// Input accepted by the coercion operations.
///
/// Host enums declared with `define_enum!` convert into `Input::Case`; raw
/// scalars convert into `Input::Value`; `None` converts into `Input::Absent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a, E> {
    Case(E),
    Value(Value<'a>),
    Absent,
}

impl<'a, E> From<Value<'a>> for Input<'a, E> {
    fn from(value: Value<'a>) -> Self {
        Input::Value(value)
    }
}

impl<'a, E> From<&'a str> for Input<'a, E> {
    fn from(value: &'a str) -> Self {
        Input::Value(Value::Str(value))
    }
}

impl<'a, E> From<&'a String> for Input<'a, E> {
    fn from(value: &'a String) -> Self {
        Input::Value(Value::Str(value.as_str()))
    }
}

impl<'a, E> From<i64> for Input<'a, E> {
    fn from(value: i64) -> Self {
        Input::Value(Value::Int(value))
    }
}

impl<'a, E> From<i32> for Input<'a, E> {
    fn from(value: i32) -> Self {
        Input::Value(Value::from(value))
    }
}

impl<'a, E> From<u32> for Input<'a, E> {
    fn from(value: u32) -> Self {
        Input::Value(Value::from(value))
    }
}

impl<'a, E> From<f64> for Input<'a, E> {
    fn from(value: f64) -> Self {
        Input::Value(Value::Float(value))
    }
}

impl<'a, E, T> From<Option<T>> for Input<'a, E>
where
    T: Into<Input<'a, E>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Input::Absent,
        }
    }
}
