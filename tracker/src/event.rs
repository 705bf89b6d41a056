//! Callback payloads.

use std::rc::Rc;

use vigil_core::{PropertyKey, Value};

use crate::OpType;

/// The tracker callback.
///
/// One callback is shared by a root tracker and every nested tracker handed
/// out below it.
pub type TrackerFn = Rc<dyn Fn(&TrackEvent<'_>)>;

/// A single intercepted operation, borrowed from the tracked value.
///
/// | op       | `value`                         | `old_value`               |
/// |----------|---------------------------------|---------------------------|
/// | `Get`    | value read, `None` when absent  | `None`                    |
/// | `Set`    | value assigned / list after push| previous value / snapshot |
/// | `Delete` | `None`                          | `None`                    |
/// | `Sort`   | list after sorting              | snapshot before sorting   |
#[derive(Debug, Clone, Copy)]
pub struct TrackEvent<'a> {
    pub op: OpType,
    /// Key as supplied by the caller. List mutators report their method name.
    pub key: &'a PropertyKey,
    pub value: Option<&'a Value>,
    pub old_value: Option<&'a Value>,
    /// The container the operation applies to, as it is when the callback runs.
    pub target: &'a Value,
}

impl TrackEvent<'_> {
    /// Owned copy of the event, without the target.
    pub fn to_change(&self) -> Change {
        Change {
            op: self.op,
            key: self.key.clone(),
            value: self.value.cloned(),
            old_value: self.old_value.cloned(),
        }
    }
}

/// Owned record of a [`TrackEvent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub op: OpType,
    pub key: PropertyKey,
    pub value: Option<Value>,
    pub old_value: Option<Value>,
}

impl Change {
    pub fn get(key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        Self {
            op: OpType::Get,
            key: key.into(),
            value: Some(value.into()),
            old_value: None,
        }
    }

    pub fn set(
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
        old_value: impl Into<Value>,
    ) -> Self {
        Self {
            op: OpType::Set,
            key: key.into(),
            value: Some(value.into()),
            old_value: Some(old_value.into()),
        }
    }

    /// A Set of a member that did not exist before.
    pub fn insert(key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        Self {
            op: OpType::Set,
            key: key.into(),
            value: Some(value.into()),
            old_value: None,
        }
    }

    pub fn delete(key: impl Into<PropertyKey>) -> Self {
        Self {
            op: OpType::Delete,
            key: key.into(),
            value: None,
            old_value: None,
        }
    }

    pub fn sort(value: impl Into<Value>, old_value: impl Into<Value>) -> Self {
        Self {
            op: OpType::Sort,
            key: PropertyKey::from("sort"),
            value: Some(value.into()),
            old_value: Some(old_value.into()),
        }
    }
}
