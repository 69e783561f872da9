//! Attribute kinds, values, and records.
//!
//! This module defines the runtime representation of attribute values
//! and the records they travel in. Checkers never see concrete host
//! types; they read [`AttrValue`]s out of a [`Record`] through a
//! resolved handle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The kind of value an attribute slot holds.
///
/// This is the type system for attribute slots: a resolved handle is
/// bound to exactly one kind, and reads through it are kind-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrKind {
    /// 64-bit floating point scalar
    Float,

    /// 64-bit signed integer scalar
    Int,

    /// 2-component point (x, y)
    Point,

    /// Boolean flag (used for check verdicts)
    Bool,
}

impl AttrKind {
    pub fn name(&self) -> &'static str {
        match self {
            AttrKind::Float => "float",
            AttrKind::Int => "int",
            AttrKind::Point => "point",
            AttrKind::Bool => "bool",
        }
    }

    /// Whether a value of this kind may be read through a handle of
    /// kind `target`. Kinds match exactly, except that integers widen
    /// to float.
    pub fn coerces_to(&self, target: AttrKind) -> bool {
        *self == target || (*self == AttrKind::Int && target == AttrKind::Float)
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 2-component point value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Runtime representation of an attribute value.
///
/// Serialized untagged so JSON records read naturally:
/// `true`, `5`, `1.5`, `{"x": 1.0, "y": 2.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Point(Point),
}

impl AttrValue {
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Bool(_) => AttrKind::Bool,
            AttrValue::Int(_) => AttrKind::Int,
            AttrValue::Float(_) => AttrKind::Float,
            AttrValue::Point(_) => AttrKind::Point,
        }
    }

    /// Get the float value if this is a Float, widening Ints.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            AttrValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get the integer value if this is an Int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the point value if this is a Point.
    pub fn as_point(&self) -> Option<Point> {
        match self {
            AttrValue::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// Get the boolean value if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// One incoming attribute record: a named set of attribute values.
///
/// Records are what checkers evaluate. Keys are attribute names, kept
/// ordered so serialized records are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, AttrValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: AttrValue) {
        self.values.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
