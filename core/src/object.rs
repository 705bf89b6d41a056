//! Plain objects: string-keyed properties in insertion order.

use indexmap::IndexMap;

use crate::Value;

/// A plain object.
///
/// Properties keep the order in which they were first assigned. Removing a
/// property keeps the relative order of the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    properties: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of own properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns true if the object has a property with this name.
    pub fn contains_key(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Get a property value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Get a mutable reference to a property value.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.properties.get_mut(name)
    }

    /// Set a property, returning the previous value if there was one.
    ///
    /// Overwriting keeps the property's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(name.into(), value)
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }

    /// Property names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Properties in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}
