//! Value types for tracked targets.
//!
//! Values are either scalars (Null, Bool, Int, Float, String) or composites
//! (List, Object). Only composites can be wrapped by a tracker; scalars are
//! what reads and writes ultimately report.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use crate::{Object, PropertyKey};

/// A value in a tracked object graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value. Also fills list holes.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Plain object.
    Object(Object),
}

/// Structural classification of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    List,
    Object,
}

impl ValueKind {
    /// Returns true for kinds that can be wrapped by a tracker.
    pub fn is_composite(self) -> bool {
        matches!(self, ValueKind::List | ValueKind::Object)
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static NULL: Value = Value::Null;

impl Value {
    /// Structural kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) | Value::Float(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns true if this is a list or an object.
    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float. Ints widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Look up an own member: an object property or a list element.
    ///
    /// Returns None for scalars and for absent members.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Option<&Value> {
        let key = key.into();
        match self {
            Value::Object(object) => object.get(&key.as_name()),
            Value::List(items) => key.as_index().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Value::get`].
    pub fn get_mut(&mut self, key: impl Into<PropertyKey>) -> Option<&mut Value> {
        let key = key.into();
        match self {
            Value::Object(object) => object.get_mut(&key.as_name()),
            Value::List(items) => key.as_index().and_then(move |i| items.get_mut(i)),
            _ => None,
        }
    }

    /// String conversion used by the default sort order.
    ///
    /// Follows the usual script-language rules: integral floats print
    /// without a fraction, lists join their elements with commas, objects
    /// all print the same.
    pub fn to_sort_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => float_to_string(*f),
            Value::String(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => other.to_sort_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Default sort comparison: string conversions in UTF-16 code-unit order.
    ///
    /// `[10, 9, 1]` sorts to `[1, 10, 9]` under this ordering.
    pub fn cmp_default_sort(&self, other: &Value) -> Ordering {
        let a = self.to_sort_string();
        let b = other.to_sort_string();
        a.encode_utf16().cmp(b.encode_utf16())
    }
}

fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if f == 0.0 {
        "0".to_string()
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        // Script number formatting signs positive exponents: 1e+21.
        let repr = format!("{f:e}");
        match repr.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => repr,
        }
    } else {
        f.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Missing members index to `Null`.
    fn index(&self, name: &str) -> &Value {
        self.get(name).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get(index).unwrap_or(&NULL)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Helper macro to build object values.
#[macro_export]
macro_rules! object {
    () => {
        $crate::Value::Object($crate::Object::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut object = $crate::Object::new();
            $(
                object.insert($key.to_string(), $crate::Value::from($value));
            )+
            $crate::Value::Object(object)
        }
    };
}
