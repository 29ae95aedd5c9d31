//! The schema-less payload tree.

use bytes::Bytes;
use indexmap::IndexMap;
use serde_json::Number;

use crate::{Blob, Key, Path};

/// An arbitrary client payload value.
///
/// Superset of JSON: on top of the usual primitives and containers it has
/// two binary leaf variants, a raw byte buffer and a typed [`Blob`]. Object
/// keys keep insertion order, which part extraction relies on.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    Str(String),
    Buffer(Bytes),
    Blob(Blob),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Runtime type name following JavaScript `typeof` semantics, which
    /// the part metadata format is defined against: `"string"`,
    /// `"number"`, `"boolean"`, and `"object"` for everything else —
    /// including null, deliberately.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            _ => "object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Resolve the value at `path`, if the path names an existing route.
    pub fn at(&self, path: &Path) -> Option<&Value> {
        let mut node = self;
        for key in path.keys() {
            node = node.get(key)?;
        }
        Some(node)
    }

    /// One step of [`Value::at`]: index into a container by key.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(key.as_index()?),
            Value::Object(map) => map.get(&key.to_string()),
            _ => None,
        }
    }

    /// Total conversion to plain JSON. Binary leaves have no JSON form and
    /// map to null.
    pub fn to_json_lossy(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Buffer(_) | Value::Blob(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json_lossy).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, val)| (key.clone(), val.to_json_lossy()))
                    .collect(),
            ),
        }
    }

    /// Compact JSON text of the value, via [`Value::to_json_lossy`].
    pub fn json_text(&self) -> String {
        self.to_json_lossy().to_string()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::Buffer(bytes)
    }
}

impl From<Blob> for Value {
    fn from(blob: Blob) -> Self {
        Value::Blob(blob)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, val)| (key, Value::from(val)))
                    .collect(),
            ),
        }
    }
}
