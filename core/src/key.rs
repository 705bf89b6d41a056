//! Property keys.
//!
//! A key is either a name or a list index. Lists accept names that spell a
//! canonical index (`"0"`, `"12"`), objects accept indexes through their
//! decimal form, so `PropertyKey::Index(2)` and `PropertyKey::from("2")`
//! address the same member on either kind of container.

use std::borrow::Cow;
use std::fmt;

/// A key addressing a member of an object or list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// Named property (`obj.name`, `obj["name"]`).
    Name(String),
    /// Numeric index (`list[0]`).
    Index(usize),
}

impl PropertyKey {
    /// Returns the list index this key addresses, if any.
    ///
    /// Names only count as indexes when they are in canonical decimal form,
    /// so `"01"` and `"+1"` stay ordinary names.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PropertyKey::Index(i) => Some(*i),
            PropertyKey::Name(name) => parse_canonical_index(name),
        }
    }

    /// Returns the property name this key addresses on an object.
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            PropertyKey::Name(name) => Cow::Borrowed(name.as_str()),
            PropertyKey::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    /// Returns true if this key is the given name.
    pub fn is_name(&self, name: &str) -> bool {
        matches!(self, PropertyKey::Name(n) if n == name)
    }
}

fn parse_canonical_index(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    name.parse().ok()
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Name(name) => write!(f, "{}", name),
            PropertyKey::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Name(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Name(name)
    }
}

impl From<usize> for PropertyKey {
    fn from(index: usize) -> Self {
        PropertyKey::Index(index)
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(key: &PropertyKey) -> Self {
        key.clone()
    }
}
