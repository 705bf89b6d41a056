//! List methods.
//!
//! `push` and `sort` snapshot the list, mutate it in place, then report the
//! whole list as the new value and the snapshot as the old one. The other
//! methods mutate without reporting.

use std::cmp::Ordering;

use vigil_core::{PropertyKey, Value};

use crate::error::{TrackError, TrackResult};
use crate::event::{TrackEvent, TrackerFn};
use crate::op::OpType;

use super::{notify, reserve_len};

fn items_mut(target: &mut Value) -> TrackResult<&mut Vec<Value>> {
    let kind = target.kind();
    target
        .as_list_mut()
        .ok_or_else(|| TrackError::invalid_target_kind(kind))
}

fn report(tracker_fn: &TrackerFn, op: OpType, key: &PropertyKey, target: &Value, snapshot: &Value) {
    notify(
        tracker_fn,
        TrackEvent {
            op,
            key,
            value: Some(target),
            old_value: Some(snapshot),
            target,
        },
    );
}

/// Append `args`, report `(Set, key, list, snapshot)`, return the new length.
pub(crate) fn push(
    target: &mut Value,
    tracker_fn: &TrackerFn,
    key: &PropertyKey,
    args: Vec<Value>,
) -> TrackResult<Value> {
    let items = items_mut(target)?;
    let new_len = items.len().saturating_add(args.len());
    if !reserve_len(items, new_len) {
        return Err(TrackError::invalid_argument("push", "list length limit exceeded"));
    }
    let snapshot = Value::List(items.clone());
    items.extend(args);
    let len = items.len();

    report(tracker_fn, OpType::Set, key, target, &snapshot);
    Ok(Value::Int(len as i64))
}

/// `sort` takes no comparator argument; `sort_by` carries the ordering.
pub(crate) fn check_sort_args(args: &[Value]) -> TrackResult<()> {
    match args {
        [] | [Value::Null] => Ok(()),
        _ => Err(TrackError::invalid_argument(
            "sort",
            "comparators are passed through sort_by",
        )),
    }
}

/// Stable sort, report `(Sort, key, list, snapshot)`, return the sorted list.
pub(crate) fn sort<F>(
    target: &mut Value,
    tracker_fn: &TrackerFn,
    key: &PropertyKey,
    compare: F,
) -> TrackResult<Value>
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    let items = items_mut(target)?;
    let snapshot = Value::List(items.clone());
    items.sort_by(compare);

    report(tracker_fn, OpType::Sort, key, target, &snapshot);
    Ok(target.clone())
}

pub(crate) fn pop(target: &mut Value) -> TrackResult<Value> {
    Ok(items_mut(target)?.pop().unwrap_or(Value::Null))
}

pub(crate) fn shift(target: &mut Value) -> TrackResult<Value> {
    let items = items_mut(target)?;
    if items.is_empty() {
        return Ok(Value::Null);
    }
    Ok(items.remove(0))
}

pub(crate) fn unshift(target: &mut Value, args: Vec<Value>) -> TrackResult<Value> {
    let items = items_mut(target)?;
    let new_len = items.len().saturating_add(args.len());
    if !reserve_len(items, new_len) {
        return Err(TrackError::invalid_argument("unshift", "list length limit exceeded"));
    }
    items.splice(0..0, args);
    Ok(Value::Int(items.len() as i64))
}

pub(crate) fn reverse(target: &mut Value) -> TrackResult<Value> {
    items_mut(target)?.reverse();
    Ok(target.clone())
}

/// `splice(start, delete_count?, items...)`. Returns the removed elements.
///
/// A negative `start` counts from the end. Both bounds are clamped to the
/// list. Without a `delete_count` everything from `start` on is removed;
/// without any arguments nothing is.
pub(crate) fn splice(target: &mut Value, args: Vec<Value>) -> TrackResult<Value> {
    let items = items_mut(target)?;
    let len = items.len() as i64;
    let mut args = args.into_iter();

    let Some(start) = args.next() else {
        return Ok(Value::List(Vec::new()));
    };
    let start = integer_arg(&start, "start")?;
    let start = if start < 0 {
        (len + start).max(0)
    } else {
        start.min(len)
    };

    let delete_count = match args.next() {
        Some(count) => integer_arg(&count, "delete count")?.clamp(0, len - start),
        None => len - start,
    };

    let inserted: Vec<Value> = args.collect();
    let new_len = (items.len() - delete_count as usize).saturating_add(inserted.len());
    if !reserve_len(items, new_len) {
        return Err(TrackError::invalid_argument("splice", "list length limit exceeded"));
    }

    let start = start as usize;
    let removed = items
        .splice(start..start + delete_count as usize, inserted)
        .collect();
    Ok(Value::List(removed))
}

fn integer_arg(value: &Value, name: &str) -> TrackResult<i64> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
        other => Err(TrackError::invalid_argument(
            "splice",
            format!("{} must be a number, got {}", name, other.kind()),
        )),
    }
}
