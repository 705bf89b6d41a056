//! Result of reading a member through a tracker.

use vigil_core::Value;

use crate::method::BoundMethod;
use crate::tracker::Tracker;

/// What a read through a tracker produced.
#[derive(Debug)]
pub enum Access<'t> {
    /// The member is an object or list; operations on it are tracked too.
    Nested(Tracker<'t>),
    /// A primitive member, copied out. The read was reported.
    Value(Value),
    /// No such member. The read was reported with no value.
    Absent,
    /// A list method bound to the wrapped list.
    Method(BoundMethod<'t>),
}

impl<'t> Access<'t> {
    pub fn into_nested(self) -> Option<Tracker<'t>> {
        match self {
            Access::Nested(tracker) => Some(tracker),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Access::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_method(self) -> Option<BoundMethod<'t>> {
        match self {
            Access::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Access::Absent)
    }
}
