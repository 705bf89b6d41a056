//! Assignments.

use tracing::trace;
use vigil_core::{PropertyKey, Value};

use crate::event::{TrackEvent, TrackerFn};
use crate::op::OpType;

use super::{notify, reserve_len};

/// Report `(Set, key, value, old)` and then assign.
pub(crate) fn set(
    target: &mut Value,
    tracker_fn: &TrackerFn,
    key: PropertyKey,
    value: Value,
) -> bool {
    let length;
    let old_value = match &*target {
        Value::List(items) if key.is_name("length") => {
            length = Value::Int(items.len() as i64);
            Some(&length)
        }
        _ => target.get(&key),
    };
    notify(
        tracker_fn,
        TrackEvent {
            op: OpType::Set,
            key: &key,
            value: Some(&value),
            old_value,
            target: &*target,
        },
    );
    define(target, &key, value)
}

/// Assign without reporting.
pub(crate) fn define(target: &mut Value, key: &PropertyKey, value: Value) -> bool {
    let applied = match target {
        Value::Object(object) => {
            object.insert(key.as_name().into_owned(), value);
            true
        }
        Value::List(items) => assign_list(items, key, value),
        _ => false,
    };
    if !applied {
        trace!(%key, "assignment rejected");
    }
    applied
}

fn assign_list(items: &mut Vec<Value>, key: &PropertyKey, value: Value) -> bool {
    if let Some(index) = key.as_index() {
        if index < items.len() {
            items[index] = value;
        } else {
            let Some(new_len) = index.checked_add(1) else {
                return false;
            };
            if !reserve_len(items, new_len) {
                return false;
            }
            items.resize(index, Value::Null);
            items.push(value);
        }
        return true;
    }

    if key.is_name("length") {
        let Some(len) = value.as_int().and_then(|n| usize::try_from(n).ok()) else {
            return false;
        };
        if !reserve_len(items, len) {
            return false;
        }
        items.resize(len, Value::Null);
        return true;
    }

    false
}
