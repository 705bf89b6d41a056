//! Member reads.

use vigil_core::{PropertyKey, Value};

use crate::access::Access;
use crate::event::{TrackEvent, TrackerFn};
use crate::method::{ArrayMethod, BoundMethod};
use crate::op::OpType;
use crate::tracker::Tracker;

use super::notify;

/// Read `key` from `target`.
pub(crate) fn get(target: &mut Value, tracker_fn: TrackerFn, key: PropertyKey) -> Access<'_> {
    if let Some(len) = target.as_list().map(Vec::len) {
        let method = match &key {
            PropertyKey::Name(name) => ArrayMethod::from_name(name),
            PropertyKey::Index(_) => None,
        };
        if let Some(method) = method {
            return Access::Method(BoundMethod::new(target, tracker_fn, method, key));
        }
        if key.is_name("length") {
            let len = Value::Int(len as i64);
            notify(
                &tracker_fn,
                TrackEvent {
                    op: OpType::Get,
                    key: &key,
                    value: Some(&len),
                    old_value: None,
                    target: &*target,
                },
            );
            return Access::Value(len);
        }
    }

    let nested = target.get(&key).is_some_and(Value::is_composite);
    if nested {
        return match target.get_mut(&key) {
            Some(value) => Access::Nested(Tracker::nested(value, tracker_fn)),
            None => Access::Absent,
        };
    }

    let value = target.get(&key);
    notify(
        &tracker_fn,
        TrackEvent {
            op: OpType::Get,
            key: &key,
            value,
            old_value: None,
            target: &*target,
        },
    );
    match value {
        Some(value) => Access::Value(value.clone()),
        None => Access::Absent,
    }
}
