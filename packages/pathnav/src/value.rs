//! The Value type - a tree of containers and scalar leaves.
//!
//! Maps and sequences are the navigable nodes; every other variant is a
//! leaf that traversal cannot pass through.

use std::collections::BTreeMap;

use crate::accessor;
use crate::{Container, Error, IntoPath, Sequence};

/// A tree-shaped value addressed by [`Path`](crate::Path)s.
///
/// # Design Notes
///
/// - `Null` is a stored null. A missing value is `None` at the API
///   boundary, never a `Value`.
/// - Uses `BTreeMap` for deterministic ordering
/// - Uses `i64` for integers
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Opaque binary data.
    Bytes(Vec<u8>),
    /// Ordered sequence of slots, possibly with holes.
    Array(Sequence),
    /// Key-value map with string keys.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Sequence::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Whether a child can be looked up, assigned or removed by key.
    ///
    /// True for maps and arrays, empty ones included.
    pub fn is_navigable(&self) -> bool {
        self.as_container().is_some()
    }

    pub fn as_container(&self) -> Option<&dyn Container> {
        match self {
            Value::Map(map) => Some(map),
            Value::Array(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        match self {
            Value::Map(map) => Some(map),
            Value::Array(seq) => Some(seq),
            _ => None,
        }
    }

    /// See [`accessor::nav`].
    pub fn nav(&self, path: impl IntoPath) -> Option<&Value> {
        accessor::nav(self, path)
    }

    /// See [`accessor::nav_mut`].
    pub fn nav_mut(&mut self, path: impl IntoPath) -> Option<&mut Value> {
        accessor::nav_mut(self, path)
    }

    /// See [`accessor::set`].
    pub fn set(
        &mut self,
        path: impl IntoPath,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, Error> {
        accessor::set(self, path, value)
    }

    /// See [`accessor::del`].
    pub fn del(&mut self, path: impl IntoPath) -> Option<Value> {
        accessor::del(self, path)
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Value::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(Sequence::from(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn containers_are_navigable() {
        assert!(Value::map().is_navigable());
        assert!(Value::array().is_navigable());
        assert!(Value::from(vec!["a"]).is_navigable());
    }

    #[test]
    fn leaves_are_not_navigable() {
        assert!(!Value::Null.is_navigable());
        assert!(!Value::from(true).is_navigable());
        assert!(!Value::from(5i64).is_navigable());
        assert!(!Value::from(4.7).is_navigable());
        assert!(!Value::from("text").is_navigable());
        assert!(!Value::Bytes(vec![1, 2]).is_navigable());
    }

    #[test]
    fn option_converts_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn methods_delegate_to_accessor() {
        let mut value = Value::map();
        assert_eq!(value.set(path!["foo", "bar"], "hello").unwrap(), None);
        assert_eq!(value.nav(path!["foo", "bar"]), Some(&Value::from("hello")));

        *value.nav_mut(path!["foo", "bar"]).unwrap() = Value::from("bye");
        assert_eq!(value.del(path!["foo", "bar"]), Some(Value::from("bye")));
        assert!(value.nav("foo").unwrap().is_map());
    }
}
