//! Deletions.

use vigil_core::{PropertyKey, Value};

use crate::event::{TrackEvent, TrackerFn};
use crate::op::OpType;

use super::notify;

/// Report `(Delete, key)` and then delete.
///
/// Deleting a list element leaves a `Null` hole; the length is unchanged.
/// Deleting an absent member succeeds. A list's `length` cannot be deleted.
pub(crate) fn delete(target: &mut Value, tracker_fn: &TrackerFn, key: PropertyKey) -> bool {
    notify(
        tracker_fn,
        TrackEvent {
            op: OpType::Delete,
            key: &key,
            value: None,
            old_value: None,
            target: &*target,
        },
    );

    match target {
        Value::Object(object) => {
            object.remove(&key.as_name());
            true
        }
        Value::List(items) => match key.as_index() {
            Some(index) => {
                if let Some(slot) = items.get_mut(index) {
                    *slot = Value::Null;
                }
                true
            }
            None => !key.is_name("length"),
        },
        _ => false,
    }
}
